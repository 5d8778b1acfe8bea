//! Password and phone number maintenance.

use anyhow::Result;

use rezidans_auth::Session;
use rezidans_core::ServiceError;

use crate::config::ClientConfig;

/// Change a resident's password.
///
/// Residents change their own; the administrator passes an account
/// code to reset any unit's password.
pub fn passwd(id: Option<&str>, config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let service = super::ledger(&config)?;
    let outcome = super::load(&service);

    let target = match (super::session(&config, &outcome), id) {
        (Some(Session::User(me)), None) => me.resident.id,
        (Some(Session::User(_)), Some(_)) => {
            anyhow::bail!("Only the administrator can reset another unit's password.")
        }
        (Some(Session::Admin { .. }), Some(id)) => id.to_string(),
        (Some(Session::Admin { .. }), None) => {
            anyhow::bail!("Pass an account code: `rezidans passwd <code>`.")
        }
        (None, _) => anyhow::bail!("Not logged in. Run `rezidans login` first."),
    };

    let new = rpassword::prompt_password("New password: ")?;
    let confirm = rpassword::prompt_password("Confirm new password: ")?;
    if new != confirm {
        anyhow::bail!("Passwords do not match.");
    }
    if new.is_empty() {
        anyhow::bail!("Password cannot be empty.");
    }

    let resident = service.set_password(&target, &new).map_err(ServiceError::from)?;
    println!("Password updated for {} ({}).", resident.name, resident.id);
    Ok(())
}

/// Set a resident's phone number (administrator only).
pub fn set_phone(id: &str, phone: &str, config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let service = super::ledger(&config)?;
    let outcome = super::load(&service);
    super::require_admin(&config, &outcome)?;

    let resident = service.set_phone(id, phone).map_err(ServiceError::from)?;
    println!(
        "Phone updated for {} ({}): {}",
        resident.name,
        resident.id,
        resident.phone.as_deref().unwrap_or("-")
    );
    Ok(())
}
