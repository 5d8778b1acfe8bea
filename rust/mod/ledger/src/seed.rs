//! Built-in fallback dataset.
//!
//! Used when the remote document store is unreachable or has never
//! been written: the application still starts, in degraded mode, with
//! this small known-good set instead of failing the whole load.

use crate::model::{DebtBalance, LedgerDocument, Resident};

/// Seed resident list.
pub fn seed_residents() -> Vec<Resident> {
    [
        ("131.001.001", "NAMIK KETHÜDA"),
        ("131.001.002", "AYŞE YILMAZ"),
        ("131.001.035", "MEHMET DEMİR"),
        ("131.002.010", "FATMA KAYA"),
    ]
    .into_iter()
    .map(|(id, name)| Resident::from_import(id, name))
    .collect()
}

/// Seed balances matching [`seed_residents`].
pub fn seed_balances() -> Vec<DebtBalance> {
    vec![
        DebtBalance {
            id: "131.001.001".into(),
            total_debit: 38922.78,
            total_credit: 40374.64,
            debt_balance: 0.0,
            credit_balance: 1451.86,
        },
        DebtBalance {
            id: "131.001.002".into(),
            total_debit: 12500.0,
            total_credit: 11000.0,
            debt_balance: 1500.0,
            credit_balance: 0.0,
        },
        DebtBalance {
            id: "131.001.035".into(),
            total_debit: 9800.0,
            total_credit: 9800.0,
            debt_balance: 0.0,
            credit_balance: 0.0,
        },
    ]
}

/// The complete fallback document.
pub fn seed_document() -> LedgerDocument {
    LedgerDocument {
        residents: seed_residents(),
        debt_balances: seed_balances(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_balances_reference_seed_residents() {
        let residents = seed_residents();
        for balance in seed_balances() {
            assert!(residents.iter().any(|r| r.id == balance.id));
        }
    }
}
