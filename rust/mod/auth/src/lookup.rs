//! Login identifier resolution.
//!
//! Residents log in with either their full dot-segmented account code
//! (`131.001.035`) or just the unit's short code — the trailing
//! numeric segment, with leading zeros irrelevant (`35` and `035`
//! both match `…​.035`).

use rezidans_ledger::Resident;

/// Resolve a user-entered identifier to a resident.
///
/// An exact account-code match always wins. Otherwise each resident's
/// short code (the segment after the last `.`) is compared to the
/// input as integers; ids without a `.` never short-code match.
///
/// Two units in different blocks can share a numeric suffix; the first
/// match in collection order wins. Known ambiguity, preserved as-is.
pub fn find_resident<'a>(residents: &'a [Resident], input: &str) -> Option<&'a Resident> {
    let input = input.trim();

    if let Some(exact) = residents.iter().find(|r| r.id == input) {
        return Some(exact);
    }

    let input_code: i64 = input.parse().ok()?;
    residents.iter().find(|r| {
        r.short_code()
            .and_then(|s| s.parse::<i64>().ok())
            .is_some_and(|code| code == input_code)
    })
}
