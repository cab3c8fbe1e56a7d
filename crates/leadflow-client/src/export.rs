//! CSV download of the local cache.

use chrono::NaiveDate;

/// A rendered export ready to hand to the visitor's browser or disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested download name, e.g. `aura-fx-leads-2026-10-18.csv`.
    pub file_name: String,
    pub content: String,
    /// Number of data rows.
    pub count: usize,
}

/// Download name for an export taken on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("aura-fx-leads-{}.csv", date.format("%Y-%m-%d"))
}
