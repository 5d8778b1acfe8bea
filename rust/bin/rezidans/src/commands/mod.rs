//! Command implementations and shared helpers.

pub mod balance;
pub mod import;
pub mod list;
pub mod login;
pub mod notify;
pub mod passwd;
pub mod setup;
pub mod stats;

use std::sync::Arc;

use anyhow::Result;

use rezidans_auth::{AuthConfig, AuthService, Session};
use rezidans_ledger::{LedgerService, LoadOutcome};
use rezidans_store::{BlobStore, JsonBinStore};

use crate::config::ClientConfig;

/// Build the ledger service from the client configuration.
pub fn ledger(config: &ClientConfig) -> Result<LedgerService> {
    if config.store.bin_id.is_empty() {
        anyhow::bail!("No store configured. Run `rezidans setup --bin-id <id> ...` first.");
    }
    let store: Arc<dyn BlobStore> = Arc::new(JsonBinStore::new(config.store.to_jsonbin()));
    Ok(LedgerService::new(store))
}

/// Load both collections, surfacing the degraded-mode warning.
pub fn load(service: &LedgerService) -> LoadOutcome {
    let outcome = service.load_all();
    if outcome.degraded {
        eprintln!("warning: remote store unreachable or empty, showing built-in demo data");
    }
    outcome
}

/// Restore the persisted session, if any.
///
/// A missing, invalid or expired token means logged-out; that is never
/// an error here, callers decide whether a session is required.
pub fn session(config: &ClientConfig, outcome: &LoadOutcome) -> Option<Session> {
    if config.token.is_empty() {
        return None;
    }
    let auth = AuthService::new(AuthConfig::default());
    auth.restore(&config.token, &outcome.residents, &outcome.debt_balances)
        .ok()
}

/// Require a live administrator session.
pub fn require_admin(config: &ClientConfig, outcome: &LoadOutcome) -> Result<()> {
    match session(config, outcome) {
        Some(Session::Admin { .. }) => Ok(()),
        Some(Session::User(_)) => anyhow::bail!("This command requires an administrator login."),
        None => anyhow::bail!("Not logged in. Run `rezidans login` first."),
    }
}
