//! Phone-number canonicalization for Turkish mobile numbers.
//!
//! Stored form is digits only, international prefix, no `+`:
//! `"0532 111 22 33"` → `"905321112233"`. The same canonical form
//! feeds the WhatsApp deep link.

/// Canonicalize a user-entered phone number.
///
/// Strips every non-digit, drops a single leading `0`, and prepends
/// the `90` country prefix when a bare 10-digit local number remains.
/// Already-canonical input passes through unchanged (idempotent).
pub fn normalize_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with('0') {
        digits.remove(0);
    }

    if !digits.starts_with("90") && digits.len() == 10 {
        digits.insert_str(0, "90");
    }

    digits
}

/// Format a canonical number for human display: `0XXX XXX XX XX`.
///
/// `None` or empty input renders as `"-"`. Input that does not match
/// the canonical 12-digit `90…` pattern is returned unchanged —
/// callers must tolerate a non-canonical display string.
pub fn format_phone_display(phone: Option<&str>) -> String {
    let Some(raw) = phone else {
        return "-".to_string();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return "-".to_string();
    }

    if raw.len() == 12 && raw.starts_with("90") && raw.chars().all(|c| c.is_ascii_digit()) {
        let local = &raw[2..];
        return format!(
            "0{} {} {} {}",
            &local[..3],
            &local[3..6],
            &local[6..8],
            &local[8..10]
        );
    }

    raw.to_string()
}
