//! WhatsApp payment reminders.

use anyhow::Result;

use rezidans_core::{ServiceError, format_money, format_phone_display, normalize_phone};
use rezidans_ledger::LedgerError;
use rezidans_ledger::notify::{reminder_message, whatsapp_link};
use rezidans_ledger::join_debts;

use crate::config::ClientConfig;

/// Build a reminder link for one resident.
///
/// With `--phone`, the number is saved to the resident first and the
/// link uses the fresh value — one step instead of edit-then-remind.
pub fn remind(id: &str, phone: Option<&str>, config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let service = super::ledger(&config)?;
    let outcome = super::load(&service);
    super::require_admin(&config, &outcome)?;

    let resident = match phone {
        // A failed save is a warning, not a dead end: the link is
        // still built from the number just entered.
        Some(raw) => match service.set_phone(id, raw) {
            Ok(resident) => resident,
            Err(LedgerError::Storage(e)) => {
                eprintln!("warning: could not persist phone number: {}", e);
                let mut resident = outcome
                    .residents
                    .iter()
                    .find(|r| r.id == id)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Resident {} not found.", id))?;
                resident.phone = Some(normalize_phone(raw));
                resident
            }
            Err(e) => return Err(ServiceError::from(e).into()),
        },
        None => outcome
            .residents
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Resident {} not found.", id))?,
    };

    let Some(number) = resident.phone.as_deref() else {
        anyhow::bail!(
            "No phone number on record for {}. Pass one with --phone.",
            resident.name
        );
    };

    let joined = join_debts(&outcome.residents, &outcome.debt_balances);
    let debt = joined
        .iter()
        .find(|r| r.resident.id == id)
        .map(|r| r.debt_balance)
        .unwrap_or(0.0);
    if debt <= 0.0 {
        println!(
            "{} has no outstanding debt ({} TL), no reminder needed.",
            resident.name,
            format_money(debt)
        );
        return Ok(());
    }

    let message = reminder_message(&resident.name, debt);
    println!("To:   {}", format_phone_display(Some(number)));
    println!("Link: {}", whatsapp_link(number, &message));
    Ok(())
}
