//! Spreadsheet-paste import parser.
//!
//! The administrator copies the balance table out of an accounting
//! report and pastes it as text. Each non-blank line is one row.
//! Columns are tab-separated; pastes that lose literal tabs fall back
//! to runs of two or more spaces. Known report header lines are
//! skipped by keyword. Expected column order:
//!
//! ```text
//! Hesap Kodu | Hesap Adı | Borç | Alacak | Borç Bakiyesi | Alacak Bakiyesi
//! ```

use thiserror::Error;

use rezidans_core::parse_money;

use crate::model::DebtBalance;

/// One parsed import row: unit identity plus its replacement balance.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    pub id: String,
    pub name: String,
    pub total_debit: f64,
    pub total_credit: f64,
    pub debt_balance: f64,
    pub credit_balance: f64,
}

impl ImportRecord {
    pub fn balance(&self) -> DebtBalance {
        DebtBalance {
            id: self.id.clone(),
            total_debit: self.total_debit,
            total_credit: self.total_credit,
            debt_balance: self.debt_balance,
            credit_balance: self.credit_balance,
        }
    }
}

#[derive(Error, Debug)]
pub enum ImportError {
    /// No line produced a valid record. Nothing is applied
    /// (fail-closed — a paste in the wrong format must not wipe the
    /// ledger).
    #[error("no valid data rows found in pasted text")]
    Empty,
}

/// Substrings that mark report header / period noise lines. Matched
/// case-sensitively against the first column.
const HEADER_MARKERS: [&str; 2] = ["HESAP", "Dönem"];

/// Parse pasted tabular text into a batch of import records.
///
/// Malformed rows (fewer than 6 columns, empty id or name) are
/// silently dropped; only a fully empty result is an error. Duplicate
/// ids within one paste resolve last-line-wins, and first-seen input
/// order is preserved in the output.
pub fn parse_import(text: &str) -> Result<Vec<ImportRecord>, ImportError> {
    let mut records: Vec<ImportRecord> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < 2 {
            columns = split_on_space_runs(line);
        }

        let first = columns[0];
        if HEADER_MARKERS.iter().any(|m| first.contains(m)) {
            continue;
        }

        if columns.len() < 6 {
            continue;
        }

        let id = columns[0].trim();
        let name = columns[1].trim();
        if id.is_empty() || name.is_empty() {
            continue;
        }

        let record = ImportRecord {
            id: id.to_string(),
            name: name.to_string(),
            total_debit: parse_money(columns[2]),
            total_credit: parse_money(columns[3]),
            debt_balance: parse_money(columns[4]),
            credit_balance: parse_money(columns[5]),
        };

        // Last line wins for a repeated id; keep the first-seen slot.
        if let Some(existing) = records.iter_mut().find(|r| r.id == record.id) {
            *existing = record;
        } else {
            records.push(record);
        }
    }

    if records.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(records)
}

/// Split on runs of two or more spaces. Single spaces stay inside a
/// column (names contain them).
fn split_on_space_runs(line: &str) -> Vec<&str> {
    let mut columns = Vec::new();
    let bytes = line.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b' ' {
            let run_start = i;
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            if i - run_start >= 2 {
                if run_start > start {
                    columns.push(&line[start..run_start]);
                }
                start = i;
            }
        } else {
            i += 1;
        }
    }
    if start < line.len() {
        columns.push(&line[start..]);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LINE: &str = "131.001.001\tNAMIK KETHÜDA\t38.922,78\t40.374,64\t0\t1.451,86";

    #[test]
    fn parses_tab_separated_row() {
        let records = parse_import(VALID_LINE).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, "131.001.001");
        assert_eq!(r.name, "NAMIK KETHÜDA");
        assert_eq!(r.total_debit, 38922.78);
        assert_eq!(r.total_credit, 40374.64);
        assert_eq!(r.debt_balance, 0.0);
        assert_eq!(r.credit_balance, 1451.86);
    }

    #[test]
    fn falls_back_to_space_runs() {
        let line = "131.001.002  AYŞE YILMAZ  1.200,00  800,00  400,00  0";
        let records = parse_import(line).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "AYŞE YILMAZ");
        assert_eq!(records[0].debt_balance, 400.0);
    }

    #[test]
    fn skips_header_lines() {
        let text = format!(
            "HESAP KODU\tHESAP ADI\tBORÇ\tALACAK\tBORÇ BAKİYESİ\tALACAK BAKİYESİ\n{}",
            VALID_LINE
        );
        let records = parse_import(&text).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn skips_period_lines() {
        let text = format!("Dönem: 2024/11\t-\t-\t-\t-\t-\n{}", VALID_LINE);
        let records = parse_import(&text).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn duplicate_id_last_line_wins() {
        let text = "131.001.001\tA\t1,00\t0\t1,00\t0\n\
                    131.001.001\tA\t2,00\t0\t2,00\t0";
        let records = parse_import(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].debt_balance, 2.0);
    }

    #[test]
    fn drops_short_rows_silently() {
        let text = format!("131.001.003\tINCOMPLETE\t5,00\n{}", VALID_LINE);
        let records = parse_import(&text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "131.001.001");
    }

    #[test]
    fn drops_rows_missing_id_or_name() {
        let text = "\tNO ID\t1\t1\t1\t1\n131.001.004\t\t1\t1\t1\t1";
        assert!(matches!(parse_import(text), Err(ImportError::Empty)));
    }

    #[test]
    fn empty_input_fails_closed() {
        assert!(matches!(parse_import(""), Err(ImportError::Empty)));
        assert!(matches!(parse_import("\n  \n"), Err(ImportError::Empty)));
        assert!(matches!(
            parse_import("HESAP KODU\tHESAP ADI\tA\tB\tC\tD"),
            Err(ImportError::Empty)
        ));
    }

    #[test]
    fn blank_lines_between_rows_ignored() {
        let text = format!("\n{}\n\n131.001.005\tBETÜL ÖZ\t10,00\t0\t10,00\t0\n", VALID_LINE);
        let records = parse_import(&text).unwrap();
        assert_eq!(records.len(), 2);
        // Input order preserved.
        assert_eq!(records[0].id, "131.001.001");
        assert_eq!(records[1].id, "131.001.005");
    }
}
