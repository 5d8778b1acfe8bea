use serde::{Deserialize, Serialize};

use rezidans_ledger::ResidentWithDebt;

/// Who the session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Token claims payload. Wire names match the persisted token format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject: the account code, or `admin`.
    #[serde(rename = "userId")]
    pub user_id: String,

    pub role: Role,

    /// Login name shown in greetings.
    pub username: String,

    /// Issued at (unix seconds).
    pub iat: i64,

    /// Expiration (unix seconds).
    pub exp: i64,
}

/// A restored, validated session.
///
/// A user session carries the freshly joined resident record — the
/// balance always comes from the latest loaded collections, never
/// from the token or any cached copy.
#[derive(Debug, Clone)]
pub enum Session {
    Admin { username: String },
    User(ResidentWithDebt),
}

impl Session {
    pub fn role(&self) -> Role {
        match self {
            Session::Admin { .. } => Role::Admin,
            Session::User(_) => Role::User,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::User.as_str(), "user");
    }
}
