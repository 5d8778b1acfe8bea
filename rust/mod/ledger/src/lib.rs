pub mod import;
pub mod model;
pub mod notify;
pub mod seed;
pub mod service;

pub use import::{ImportError, ImportRecord, parse_import};
pub use model::{DebtBalance, LedgerDocument, Resident, ResidentWithDebt, join_debts};
pub use service::import::ImportSummary;
pub use service::stats::{LedgerStats, search, stats, top_debtors};
pub use service::{LedgerError, LedgerService, LoadOutcome};
