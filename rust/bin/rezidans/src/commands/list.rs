//! Resident listing for the administrator.

use anyhow::Result;

use rezidans_core::{format_money, format_phone_display};
use rezidans_ledger::{ResidentWithDebt, join_debts, search};

use crate::config::ClientConfig;

/// List all residents with their balances, optionally filtered.
pub fn list(term: Option<&str>, json: bool, config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let service = super::ledger(&config)?;
    let outcome = super::load(&service);
    super::require_admin(&config, &outcome)?;

    let joined = join_debts(&outcome.residents, &outcome.debt_balances);
    let rows: Vec<ResidentWithDebt> = match term {
        Some(term) => search(&joined, term),
        None => joined,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No residents found.");
        return Ok(());
    }

    println!(
        "{:<14} {:<30} {:<16} {:>12} {:>12}",
        "CODE", "NAME", "PHONE", "DEBT", "CREDIT"
    );
    for row in &rows {
        println!(
            "{:<14} {:<30} {:<16} {:>12} {:>12}",
            row.resident.id,
            row.resident.name,
            format_phone_display(row.resident.phone.as_deref()),
            format_money(row.debt_balance),
            format_money(row.credit_balance),
        );
    }
    println!("{} residents.", rows.len());
    Ok(())
}
