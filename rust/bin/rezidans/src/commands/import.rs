//! Bulk import of the accounting report.

use anyhow::Result;

use rezidans_core::{ServiceError, format_money};
use rezidans_ledger::parse_import;

use crate::config::ClientConfig;

/// Parse a pasted/saved report file and apply it to the ledger.
///
/// The parsed row count is shown for confirmation before anything is
/// written; `--yes` skips the prompt for scripted use.
pub fn import(file: &str, yes: bool, config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let service = super::ledger(&config)?;
    let outcome = super::load(&service);
    super::require_admin(&config, &outcome)?;

    let text = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file, e))?;
    let records = parse_import(&text)
        .map_err(|_| anyhow::anyhow!("No valid rows found. Check the report format."))?;

    println!("Parsed {} account rows:", records.len());
    for record in records.iter().take(5) {
        println!(
            "  {}  {}  {} TL",
            record.id,
            record.name,
            format_money(record.debt_balance)
        );
    }
    if records.len() > 5 {
        println!("  ... and {} more", records.len() - 5);
    }

    if !yes {
        eprint!("Apply import? [y/N]: ");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let summary = service.apply_import(&records).map_err(ServiceError::from)?;
    println!(
        "Imported {} rows: {} new residents, {} balances replaced.",
        summary.rows, summary.created_residents, summary.replaced_balances
    );
    Ok(())
}
