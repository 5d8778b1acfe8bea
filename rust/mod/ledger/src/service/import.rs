//! Import commit — merging a parsed batch into the stored ledger.

use tracing::info;

use crate::import::ImportRecord;
use crate::model::Resident;
use crate::service::{LedgerError, LedgerService};

/// What an applied import did, for the operator's summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records in the batch (after in-paste dedup).
    pub rows: usize,
    /// Residents created for previously unknown account codes.
    pub created_residents: usize,
    /// Balance rows replaced for already-known account codes.
    pub replaced_balances: usize,
}

impl LedgerService {
    /// Merge a parsed import batch into the stored ledger and commit
    /// both collections with a single PUT.
    ///
    /// Balance rows whose id appears in the batch are replaced
    /// wholesale; rows absent from the batch stay untouched; new ids
    /// are appended. Resident records are created for unknown ids and
    /// renamed for known ones — contact details, ownership info and
    /// passwords survive re-imports.
    ///
    /// Callers present the row count and require explicit operator
    /// confirmation before invoking this.
    pub fn apply_import(&self, batch: &[ImportRecord]) -> Result<ImportSummary, LedgerError> {
        if batch.is_empty() {
            return Err(LedgerError::Validation("import batch is empty".into()));
        }

        let mut doc = self.current_document()?;
        let mut created = 0;
        let mut replaced = 0;

        for record in batch {
            match doc.residents.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => {
                    existing.name = record.name.clone();
                }
                None => {
                    doc.residents.push(Resident::from_import(&record.id, &record.name));
                    created += 1;
                }
            }

            let balance = record.balance();
            match doc.debt_balances.iter_mut().find(|b| b.id == record.id) {
                Some(existing) => {
                    *existing = balance;
                    replaced += 1;
                }
                None => {
                    doc.debt_balances.push(balance);
                }
            }
        }

        self.put(&doc)?;
        info!(
            rows = batch.len(),
            created, replaced, "import batch committed"
        );

        Ok(ImportSummary {
            rows: batch.len(),
            created_residents: created,
            replaced_balances: replaced,
        })
    }
}
