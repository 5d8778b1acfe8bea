use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers match on these —
// never on the human-readable message string.

/// Stable error code constants.
///
/// Codes never change; messages may be reworded.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const STORE_ERROR: &str = "STORE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type used across all modules.
///
/// Each variant maps to a stable error code (see [`error_code`]).
/// Module-local error enums (`StoreError`, `LedgerError`, `AuthError`)
/// convert into this at the boundary the CLI reports from.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Resource does not exist (unknown unit, unknown account code).
    #[error("{0}")]
    NotFound(String),

    /// Input data is invalid (empty paste, malformed rows).
    #[error("{0}")]
    Validation(String),

    /// Missing or invalid credentials, expired or tampered token.
    #[error("{0}")]
    Unauthorized(String),

    /// Remote document store failure. Non-fatal for the session;
    /// callers degrade to seed data or keep optimistic local state.
    #[error("{0}")]
    Store(String),

    /// Unexpected internal error.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::Unauthorized(_) => error_code::UNAUTHENTICATED,
            ServiceError::Store(_) => error_code::STORE_ERROR,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }
}
