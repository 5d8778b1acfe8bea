//! Dashboard aggregates over the joined collections.

use crate::model::ResidentWithDebt;

/// The administrator's stat-card numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerStats {
    /// Sum of all current-period debts.
    pub total_debt: f64,
    /// Sum of all current-period credit balances.
    pub total_credit: f64,
    /// Units with a positive debt balance.
    pub debtor_count: usize,
    /// Units with a positive credit balance.
    pub creditor_count: usize,
}

impl LedgerStats {
    /// Estimated cash position: credit minus debt.
    pub fn net(&self) -> f64 {
        self.total_credit - self.total_debt
    }
}

/// Compute the stat-card aggregates.
pub fn stats(joined: &[ResidentWithDebt]) -> LedgerStats {
    LedgerStats {
        total_debt: joined.iter().map(|r| r.debt_balance).sum(),
        total_credit: joined.iter().map(|r| r.credit_balance).sum(),
        debtor_count: joined.iter().filter(|r| r.debt_balance > 0.0).count(),
        creditor_count: joined.iter().filter(|r| r.credit_balance > 0.0).count(),
    }
}

/// The `n` units with the highest outstanding debt, descending.
pub fn top_debtors(joined: &[ResidentWithDebt], n: usize) -> Vec<ResidentWithDebt> {
    let mut sorted: Vec<ResidentWithDebt> = joined.to_vec();
    sorted.sort_by(|a, b| {
        b.debt_balance
            .partial_cmp(&a.debt_balance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Filter by case-insensitive name substring or id substring.
pub fn search(joined: &[ResidentWithDebt], term: &str) -> Vec<ResidentWithDebt> {
    let needle = term.to_lowercase();
    joined
        .iter()
        .filter(|r| {
            r.resident.name.to_lowercase().contains(&needle) || r.resident.id.contains(term)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DebtBalance, Resident, join_debts};

    fn joined() -> Vec<ResidentWithDebt> {
        let residents = vec![
            Resident::from_import("131.001.001", "NAMIK KETHÜDA"),
            Resident::from_import("131.001.002", "AYŞE YILMAZ"),
            Resident::from_import("131.001.003", "MEHMET DEMİR"),
        ];
        let balances = vec![
            DebtBalance {
                id: "131.001.001".into(),
                total_debit: 100.0,
                total_credit: 160.0,
                debt_balance: 0.0,
                credit_balance: 60.0,
            },
            DebtBalance {
                id: "131.001.002".into(),
                total_debit: 100.0,
                total_credit: 10.0,
                debt_balance: 90.0,
                credit_balance: 0.0,
            },
            DebtBalance {
                id: "131.001.003".into(),
                total_debit: 100.0,
                total_credit: 70.0,
                debt_balance: 30.0,
                credit_balance: 0.0,
            },
        ];
        join_debts(&residents, &balances)
    }

    #[test]
    fn stat_cards() {
        let s = stats(&joined());
        assert_eq!(s.total_debt, 120.0);
        assert_eq!(s.total_credit, 60.0);
        assert_eq!(s.debtor_count, 2);
        assert_eq!(s.creditor_count, 1);
        assert_eq!(s.net(), -60.0);
    }

    #[test]
    fn top_debtors_descending() {
        let top = top_debtors(&joined(), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].resident.id, "131.001.002");
        assert_eq!(top[1].resident.id, "131.001.003");
    }

    #[test]
    fn search_by_name_case_insensitive() {
        let hits = search(&joined(), "ayşe");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].resident.id, "131.001.002");
    }

    #[test]
    fn search_by_id_substring() {
        let hits = search(&joined(), "001.003");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].resident.name, "MEHMET DEMİR");
    }

    #[test]
    fn search_no_hits() {
        assert!(search(&joined(), "yok böyle biri").is_empty());
    }
}
