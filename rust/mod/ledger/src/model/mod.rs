use serde::{Deserialize, Serialize};

/// A residence unit's identity record, keyed by its accounting code.
///
/// The account code is dot-segmented (`131.001.035`), unique, and
/// never changes after creation. Residents are created by the bulk
/// import or by the administrator; the described flows never delete
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    /// Account code (e.g. `131.001.035`).
    pub id: String,

    /// Account holder name as printed on the report.
    pub name: String,

    /// Canonical phone number: international digits, no `+`, no
    /// leading zero (`905321112233`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Whether the unit is occupied by its owner (vs. a tenant).
    #[serde(default)]
    pub is_owner: bool,

    /// Lease holder's name, meaningful only when `is_owner` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,

    /// Lease holder's phone, meaningful only when `is_owner` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_phone: Option<String>,

    /// Login name shown in the session (defaults to the short code).
    #[serde(default)]
    pub username: String,

    /// Plaintext password. A known weakness of this demo-grade design;
    /// an empty value means the configured shared demo password
    /// applies.
    #[serde(default)]
    pub password: String,
}

impl Resident {
    /// A bare record as created by the bulk import: identity only,
    /// contact and credentials filled in later.
    pub fn from_import(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phone: None,
            is_owner: true,
            owner_name: None,
            owner_phone: None,
            username: String::new(),
            password: String::new(),
        }
    }

    /// The trailing numeric segment of the account code, used as the
    /// convenience login identifier (`131.001.035` → `035`).
    pub fn short_code(&self) -> Option<&str> {
        if self.id.contains('.') {
            self.id.rsplit('.').next()
        } else {
            None
        }
    }
}

/// A unit's financial snapshot, keyed by the same id as its Resident.
///
/// The two collections are persisted independently and joined at read
/// time; an id with no balance row is treated as all-zero. Each import
/// replaces matching rows wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtBalance {
    /// Matches the Resident id.
    pub id: String,

    /// Cumulative accrued debt.
    #[serde(default)]
    pub total_debit: f64,

    /// Cumulative amount paid.
    #[serde(default)]
    pub total_credit: f64,

    /// Current-period amount owed.
    #[serde(default)]
    pub debt_balance: f64,

    /// Current-period surplus / prepaid amount.
    ///
    /// The model does not enforce that at most one of `debt_balance`
    /// and `credit_balance` is positive; both-positive rows are
    /// accepted as imported.
    #[serde(default)]
    pub credit_balance: f64,
}

impl DebtBalance {
    /// All-zero balance for a unit with no imported row.
    pub fn zero(id: &str) -> Self {
        Self {
            id: id.to_string(),
            total_debit: 0.0,
            total_credit: 0.0,
            debt_balance: 0.0,
            credit_balance: 0.0,
        }
    }
}

/// Read-only join of a Resident with its DebtBalance. Not persisted;
/// recomputed whenever either source collection changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentWithDebt {
    #[serde(flatten)]
    pub resident: Resident,
    pub total_debit: f64,
    pub total_credit: f64,
    pub debt_balance: f64,
    pub credit_balance: f64,
}

/// Join the two collections by id. Residents with no balance row get
/// all-zero monetary fields.
pub fn join_debts(residents: &[Resident], balances: &[DebtBalance]) -> Vec<ResidentWithDebt> {
    residents
        .iter()
        .map(|r| {
            let balance = balances
                .iter()
                .find(|b| b.id == r.id)
                .cloned()
                .unwrap_or_else(|| DebtBalance::zero(&r.id));
            ResidentWithDebt {
                resident: r.clone(),
                total_debit: balance.total_debit,
                total_credit: balance.total_credit,
                debt_balance: balance.debt_balance,
                credit_balance: balance.credit_balance,
            }
        })
        .collect()
}

/// The shape of the single remote document: both collections, nothing
/// else. Read and written wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDocument {
    #[serde(default)]
    pub residents: Vec<Resident>,

    #[serde(default)]
    pub debt_balances: Vec<DebtBalance>,
}

impl LedgerDocument {
    /// Decode a remote document, tolerating absent fields.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}
