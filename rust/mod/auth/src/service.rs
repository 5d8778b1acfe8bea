//! Login and session restoration.

use thiserror::Error;

use rezidans_ledger::{DebtBalance, Resident, join_debts};

use crate::lookup::find_resident;
use crate::model::{Role, Session};
use crate::token;

/// Auth service error type.
///
/// "Unit not found" and "wrong password" are deliberately distinct:
/// the login form tells the user which one happened.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl From<AuthError> for rezidans_core::ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::NotFound(m) => rezidans_core::ServiceError::NotFound(m),
            AuthError::Unauthorized(m) => rezidans_core::ServiceError::Unauthorized(m),
        }
    }
}

/// Configuration for the auth service.
///
/// All credentials here are demo-grade by design: the admin login is a
/// static pair, resident passwords are plaintext, and the token secret
/// ships with the client. See [`crate::token`] for the trust model.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Administrator username.
    pub admin_username: String,
    /// Administrator password.
    pub admin_password: String,
    /// Shared password for residents whose record carries none.
    pub resident_password: String,
    /// Token signing secret.
    pub token_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            resident_password: "1234".to_string(),
            token_secret: "sengel-residence-secret-key-2024".to_string(),
        }
    }
}

/// The auth service. Stateless apart from its configuration; the
/// resident collection is passed in freshly loaded by the caller.
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Administrator login against the static demo credentials.
    /// Returns a persisted-session token.
    pub fn login_admin(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username != self.config.admin_username || password != self.config.admin_password {
            return Err(AuthError::Unauthorized("invalid admin credentials".into()));
        }
        Ok(token::issue(
            &self.config.token_secret,
            &self.config.admin_username,
            Role::Admin,
            username,
        ))
    }

    /// Resident login by account code or short code.
    ///
    /// Lookup happens first; only a found resident gets a password
    /// check, against its own stored password or the shared demo
    /// password when the record carries none.
    pub fn login_resident<'a>(
        &self,
        residents: &'a [Resident],
        identifier: &str,
        password: &str,
    ) -> Result<(String, &'a Resident), AuthError> {
        let resident = find_resident(residents, identifier).ok_or_else(|| {
            AuthError::NotFound("unit not found, check the unit number".into())
        })?;

        let expected = if resident.password.is_empty() {
            &self.config.resident_password
        } else {
            &resident.password
        };
        if password != expected {
            return Err(AuthError::Unauthorized("wrong password".into()));
        }

        let username = if resident.username.is_empty() {
            identifier.trim()
        } else {
            &resident.username
        };
        let token = token::issue(&self.config.token_secret, &resident.id, Role::User, username);
        Ok((token, resident))
    }

    /// Restore a session from a persisted token.
    ///
    /// The token only names the subject; a user session's balance is
    /// re-joined from the freshly loaded collections so displays never
    /// go stale relative to the latest import. A valid token whose
    /// subject no longer exists restores nothing.
    pub fn restore(
        &self,
        persisted_token: &str,
        residents: &[Resident],
        balances: &[DebtBalance],
    ) -> Result<Session, AuthError> {
        let payload = token::verify(&self.config.token_secret, persisted_token)
            .ok_or_else(|| AuthError::Unauthorized("invalid or expired session".into()))?;

        match payload.role {
            Role::Admin => Ok(Session::Admin {
                username: payload.username,
            }),
            Role::User => {
                let joined = join_debts(residents, balances);
                let me = joined
                    .into_iter()
                    .find(|r| r.resident.id == payload.user_id)
                    .ok_or_else(|| {
                        AuthError::NotFound(format!("unit {} no longer exists", payload.user_id))
                    })?;
                Ok(Session::User(me))
            }
        }
    }
}
