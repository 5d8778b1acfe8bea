//! Login / logout / whoami commands.

use anyhow::Result;

use rezidans_auth::{AuthConfig, AuthService, Session};
use rezidans_core::{ServiceError, format_money};

use crate::config::ClientConfig;

/// Login as administrator or resident.
///
/// `admin` logs in against the static administrator credentials; any
/// other identifier is resolved as a unit's account code or short
/// code.
pub fn login(identifier: &str, password: &str, config_path: &std::path::Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    let auth = AuthService::new(AuthConfig::default());

    let token = if identifier == "admin" {
        let token = auth
            .login_admin(identifier, password)
            .map_err(ServiceError::from)?;
        println!("Logged in as administrator.");
        token
    } else {
        let service = super::ledger(&config)?;
        let outcome = super::load(&service);
        let (token, resident) = auth
            .login_resident(&outcome.residents, identifier, password)
            .map_err(ServiceError::from)?;
        println!("Logged in as {} ({}).", resident.name, resident.id);
        token
    };

    config.token = token;
    config.save(config_path)?;
    println!("Session saved (valid for 7 days).");
    Ok(())
}

/// Logout — clear the persisted token.
pub fn logout(config_path: &std::path::Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    if config.token.is_empty() {
        println!("Not logged in.");
        return Ok(());
    }
    config.token = String::new();
    config.save(config_path)?;
    println!("Logged out.");
    Ok(())
}

/// Show the current session.
pub fn whoami(config_path: &std::path::Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    if config.token.is_empty() {
        println!("Not logged in.");
        return Ok(());
    }

    let service = super::ledger(&config)?;
    let outcome = super::load(&service);
    match super::session(&config, &outcome) {
        Some(session) => {
            let role = session.role().as_str();
            match session {
                Session::Admin { username } => println!("{} [{}]", username, role),
                Session::User(me) => {
                    println!("{} ({}) [{}]", me.resident.name, me.resident.id, role);
                    println!("Outstanding debt: {} TL", format_money(me.debt_balance));
                }
            }
        }
        None => println!("Session expired or invalid. Run `rezidans login` again."),
    }
    Ok(())
}
