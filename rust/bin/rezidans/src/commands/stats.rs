//! Ledger overview for the administrator.

use anyhow::Result;

use rezidans_core::format_money;
use rezidans_ledger::{join_debts, stats, top_debtors};

use crate::config::ClientConfig;

/// Print ledger totals and the biggest debtors.
pub fn overview(top: usize, config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let service = super::ledger(&config)?;
    let outcome = super::load(&service);
    super::require_admin(&config, &outcome)?;

    let joined = join_debts(&outcome.residents, &outcome.debt_balances);
    let totals = stats(&joined);

    println!("Residents:        {}", joined.len());
    println!(
        "Total debt:       {} TL ({} debtors)",
        format_money(totals.total_debt),
        totals.debtor_count
    );
    println!(
        "Total credit:     {} TL ({} in credit)",
        format_money(totals.total_credit),
        totals.creditor_count
    );
    println!("Net outstanding:  {} TL", format_money(totals.net()));

    let debtors = top_debtors(&joined, top);
    if !debtors.is_empty() {
        println!();
        println!("Top debtors:");
        for row in &debtors {
            println!(
                "  {:<14} {:<30} {:>12} TL",
                row.resident.id,
                row.resident.name,
                format_money(row.debt_balance)
            );
        }
    }
    Ok(())
}
