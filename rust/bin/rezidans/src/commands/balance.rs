//! The resident's own balance view.

use anyhow::Result;

use rezidans_auth::Session;
use rezidans_core::{format_money, format_phone_display};
use rezidans_ledger::{ResidentWithDebt, join_debts};

use crate::config::ClientConfig;

/// Show a balance card.
///
/// Residents see their own unit; the administrator passes an account
/// code to inspect any unit.
pub fn show(id: Option<&str>, config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let service = super::ledger(&config)?;
    let outcome = super::load(&service);

    let row: ResidentWithDebt = match (super::session(&config, &outcome), id) {
        (Some(Session::User(me)), None) => me,
        (Some(Session::User(_)), Some(_)) => {
            anyhow::bail!("Only the administrator can inspect other units.")
        }
        (Some(Session::Admin { .. }), Some(id)) => {
            let joined = join_debts(&outcome.residents, &outcome.debt_balances);
            joined
                .into_iter()
                .find(|r| r.resident.id == id)
                .ok_or_else(|| anyhow::anyhow!("Resident {} not found.", id))?
        }
        (Some(Session::Admin { .. }), None) => {
            anyhow::bail!("Pass an account code: `rezidans balance <code>`.")
        }
        (None, _) => anyhow::bail!("Not logged in. Run `rezidans login` first."),
    };

    println!("{} ({})", row.resident.name, row.resident.id);
    println!("Phone:           {}", format_phone_display(row.resident.phone.as_deref()));
    println!("Total debit:     {} TL", format_money(row.total_debit));
    println!("Total credit:    {} TL", format_money(row.total_credit));
    println!("Debt balance:    {} TL", format_money(row.debt_balance));
    println!("Credit balance:  {} TL", format_money(row.credit_balance));

    if row.debt_balance > 0.0 {
        println!();
        println!(
            "You have an outstanding balance of {} TL.",
            format_money(row.debt_balance)
        );
    } else {
        println!();
        println!("No outstanding debt.");
    }
    Ok(())
}
