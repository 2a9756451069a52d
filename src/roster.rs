//! Attendee roster loading and selection.
//!
//! Stages 1 and 2 of the pipeline. Reads the first worksheet of an `.xlsx`
//! file into [`Attendee`] records, then filters to the rows flagged for
//! inclusion.
//!
//! ## Expected Columns
//!
//! The header row (row 1) must contain these columns, matched
//! case-insensitively; extra columns are ignored:
//!
//! | Column | Meaning |
//! |--------|---------|
//! | `selected` | Include this row in the deck |
//! | `fname` | First name |
//! | `lname` | Last name |
//! | `tel` | Phone number |
//! | `email` | Email address |
//!
//! A `selected` cell counts as true for boolean TRUE, any nonzero number, or
//! the strings `true`/`yes`/`y`/`1` (case-insensitive). Everything else —
//! including an empty cell — is false.

use calamine::{Data, Reader, Xlsx, open_workbook};
use log::debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Failed to read spreadsheet: {0}")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("Spreadsheet has no worksheets: {0}")]
    NoWorksheet(PathBuf),
    #[error("Spreadsheet has no header row: {0}")]
    Empty(PathBuf),
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// One attendee row, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub selected: bool,
}

impl Attendee {
    /// Full display name: first and last, space-joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

const COLUMNS: [&str; 5] = ["selected", "fname", "lname", "tel", "email"];

/// Load all attendee rows from the first worksheet of `path`.
///
/// Row order is preserved. Rows with every data cell empty are skipped, so a
/// sheet with trailing formatted-but-blank rows does not produce ghost
/// attendees.
pub fn load(path: &Path) -> Result<Vec<Attendee>, RosterError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RosterError::NoWorksheet(path.to_path_buf()))??;

    let mut rows = range.rows();
    let header = rows.next().ok_or_else(|| RosterError::Empty(path.to_path_buf()))?;

    let [selected_col, fname_col, lname_col, tel_col, email_col] =
        locate_columns(header)?;

    let mut attendees = Vec::new();
    for row in rows {
        let first_name = cell_text(row.get(fname_col));
        let last_name = cell_text(row.get(lname_col));
        let phone = cell_text(row.get(tel_col));
        let email = cell_text(row.get(email_col));

        if first_name.is_empty() && last_name.is_empty() && phone.is_empty() && email.is_empty() {
            continue;
        }

        attendees.push(Attendee {
            first_name,
            last_name,
            phone,
            email,
            selected: cell_flag(row.get(selected_col)),
        });
    }

    debug!("loaded {} attendee rows from {}", attendees.len(), path.display());
    Ok(attendees)
}

/// Keep only the rows flagged for inclusion, preserving order.
///
/// An empty result is valid — it produces an empty deck.
pub fn select(attendees: Vec<Attendee>) -> Vec<Attendee> {
    attendees.into_iter().filter(|a| a.selected).collect()
}

/// Find the index of each required column in the header row.
fn locate_columns(header: &[Data]) -> Result<[usize; 5], RosterError> {
    let mut indices = [0usize; 5];
    for (slot, name) in indices.iter_mut().zip(COLUMNS) {
        *slot = header
            .iter()
            .position(|cell| cell_text(Some(cell)).eq_ignore_ascii_case(name))
            .ok_or(RosterError::MissingColumn(name))?;
    }
    Ok(indices)
}

/// Render a cell as text.
///
/// Numeric phone numbers come back from Excel as floats; an integral float is
/// formatted without the trailing `.0` so `0881234455.0` reads as a number,
/// not a decimal.
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) if f.fract() == 0.0 => format!("{}", *f as i64),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(Data::DateTimeIso(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Interpret a `selected` cell as a flag.
fn cell_flag(cell: Option<&Data>) -> bool {
    match cell {
        Some(Data::Bool(b)) => *b,
        Some(Data::Float(f)) => *f != 0.0,
        Some(Data::Int(i)) => *i != 0,
        Some(Data::String(s)) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "y" | "1")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{RosterRow, write_roster_xlsx};
    use tempfile::TempDir;

    fn row(selected: bool, fname: &str, lname: &str) -> RosterRow {
        RosterRow {
            selected,
            fname: fname.to_string(),
            lname: lname.to_string(),
            tel: "088-123-4455".to_string(),
            email: format!("{}@example.com", fname.to_ascii_lowercase()),
        }
    }

    #[test]
    fn loads_all_rows_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("directory.xlsx");
        write_roster_xlsx(&path, &[row(true, "Peter", "Parker"), row(false, "Tony", "Stark")]);

        let attendees = load(&path).unwrap();
        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].first_name, "Peter");
        assert_eq!(attendees[0].full_name(), "Peter Parker");
        assert!(attendees[0].selected);
        assert!(!attendees[1].selected);
    }

    #[test]
    fn select_preserves_order_of_flagged_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("directory.xlsx");
        write_roster_xlsx(
            &path,
            &[
                row(true, "Peter", "Parker"),
                row(false, "Tony", "Stark"),
                row(true, "Carol", "Danvers"),
            ],
        );

        let selected = select(load(&path).unwrap());
        let names: Vec<String> = selected.iter().map(|a| a.full_name()).collect();
        assert_eq!(names, vec!["Peter Parker", "Carol Danvers"]);
    }

    #[test]
    fn select_with_no_flagged_rows_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("directory.xlsx");
        write_roster_xlsx(&path, &[row(false, "Tony", "Stark")]);

        assert!(select(load(&path).unwrap()).is_empty());
    }

    #[test]
    fn missing_file_is_error() {
        let result = load(Path::new("/nonexistent/directory.xlsx"));
        assert!(matches!(result, Err(RosterError::Xlsx(_))));
    }

    #[test]
    fn missing_column_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("directory.xlsx");
        crate::test_helpers::write_xlsx_with_headers(
            &path,
            &["selected", "fname", "lname", "tel"], // no email column
        );

        let result = load(&path);
        assert!(matches!(result, Err(RosterError::MissingColumn("email"))));
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("directory.xlsx");
        crate::test_helpers::write_xlsx_with_headers(
            &path,
            &["Selected", "FNAME", "Lname", "Tel", "Email"],
        );

        // Header-only sheet: zero attendees, but the columns resolve.
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn cell_flag_accepts_common_truthy_forms() {
        assert!(cell_flag(Some(&Data::Bool(true))));
        assert!(cell_flag(Some(&Data::Float(1.0))));
        assert!(cell_flag(Some(&Data::String("Y".to_string()))));
        assert!(cell_flag(Some(&Data::String("yes".to_string()))));
        assert!(!cell_flag(Some(&Data::Bool(false))));
        assert!(!cell_flag(Some(&Data::Float(0.0))));
        assert!(!cell_flag(Some(&Data::String("n".to_string()))));
        assert!(!cell_flag(Some(&Data::Empty)));
        assert!(!cell_flag(None));
    }

    #[test]
    fn numeric_phone_formats_without_decimal_point() {
        assert_eq!(cell_text(Some(&Data::Float(881234455.0))), "881234455");
        assert_eq!(cell_text(Some(&Data::String(" 088-123 ".to_string()))), "088-123");
    }
}
