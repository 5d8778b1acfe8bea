//! The session token codec.
//!
//! Tokens look like a JWT (`header.payload.signature`, base64 parts)
//! but are NOT one: the "signature" is just the base64 of the shared
//! secret concatenated with the encoded payload. Anyone who can read
//! the client configuration can forge a token. This is deliberate —
//! there is no server to hold a real secret, and the codec only
//! guards against casual or accidental tampering of the persisted
//! session. Do not mistake it for access control.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use rezidans_core::now_unix;

use crate::model::{Role, TokenPayload};

/// Token lifetime: 7 days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Fixed header, kept for wire-format parity with the JWT shape.
const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Issue a token for a subject.
pub fn issue(secret: &str, user_id: &str, role: Role, username: &str) -> String {
    let now = now_unix();
    let payload = TokenPayload {
        user_id: user_id.to_string(),
        role,
        username: username.to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };
    encode(secret, &payload)
}

/// Encode an explicit payload. Split out so tests can build expired
/// or otherwise crafted tokens.
pub fn encode(secret: &str, payload: &TokenPayload) -> String {
    let header = STANDARD.encode(HEADER);
    // TokenPayload serialization cannot fail: no maps, no non-string keys.
    let payload_json = serde_json::to_string(payload).unwrap_or_default();
    let payload_b64 = STANDARD.encode(payload_json);
    let signature = STANDARD.encode(format!("{}{}", secret, payload_b64));
    format!("{}.{}.{}", header, payload_b64, signature)
}

/// Verify and decode a token.
///
/// Returns `None` for any failure — wrong part count, signature
/// mismatch, undecodable payload, or expiry. Callers treat all of
/// these identically: the session is silently demoted to logged-out.
pub fn verify(secret: &str, token: &str) -> Option<TokenPayload> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload_b64 = parts[1];
    let signature = parts[2];

    let expected = STANDARD.encode(format!("{}{}", secret, payload_b64));
    if signature != expected {
        return None;
    }

    let payload_json = STANDARD.decode(payload_b64).ok()?;
    let payload: TokenPayload = serde_json::from_slice(&payload_json).ok()?;

    if payload.exp < now_unix() {
        return None;
    }

    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issue_and_verify_roundtrip() {
        let token = issue(SECRET, "131.001.035", Role::User, "35");
        let payload = verify(SECRET, &token).unwrap();
        assert_eq!(payload.user_id, "131.001.035");
        assert_eq!(payload.role, Role::User);
        assert_eq!(payload.username, "35");
        assert_eq!(payload.exp - payload.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn wrong_part_count_is_invalid() {
        assert!(verify(SECRET, "only.two").is_none());
        assert!(verify(SECRET, "a.b.c.d").is_none());
        assert!(verify(SECRET, "").is_none());
    }

    #[test]
    fn tampered_payload_is_invalid() {
        let token = issue(SECRET, "131.001.035", Role::User, "35");
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();

        let forged = TokenPayload {
            user_id: "131.001.035".into(),
            role: Role::Admin,
            username: "35".into(),
            iat: now_unix(),
            exp: now_unix() + 100,
        };
        parts[1] = STANDARD.encode(serde_json::to_string(&forged).unwrap());

        let tampered = parts.join(".");
        assert!(verify(SECRET, &tampered).is_none());
    }

    #[test]
    fn foreign_secret_is_invalid() {
        let token = issue("other-secret", "131.001.035", Role::User, "35");
        assert!(verify(SECRET, &token).is_none());
    }

    #[test]
    fn expired_one_second_ago_is_invalid() {
        let now = now_unix();
        let payload = TokenPayload {
            user_id: "admin".into(),
            role: Role::Admin,
            username: "admin".into(),
            iat: now - TOKEN_TTL_SECS,
            exp: now - 1,
        };
        // Signature is correct; only the expiry fails.
        let token = encode(SECRET, &payload);
        assert!(verify(SECRET, &token).is_none());
    }

    #[test]
    fn garbage_payload_is_invalid() {
        let header = STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload_b64 = STANDARD.encode("not json at all");
        let signature = STANDARD.encode(format!("{}{}", SECRET, payload_b64));
        let token = format!("{}.{}.{}", header, payload_b64, signature);
        assert!(verify(SECRET, &token).is_none());
    }
}
