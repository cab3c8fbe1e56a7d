//! CSV export of cached leads.
//!
//! Columns are fixed: name, email, phone, country, timestamp, consent. Rows
//! keep cache order; nothing is filtered, sorted or deduplicated.

use chrono::SecondsFormat;

use crate::error::ExportError;
use crate::lead::Lead;

/// Header row of every export.
pub const CSV_HEADERS: [&str; 6] = ["Full Name", "Email", "Phone", "Country", "Timestamp", "Consent"];

/// Renders leads as a CSV table, header first, rows joined by `\n`.
///
/// There is no trailing newline. Fields are quoted only where CSV escaping
/// requires it, so names containing commas or quotes survive a round trip
/// through a spreadsheet.
pub fn leads_to_csv(leads: &[Lead]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for lead in leads {
        let timestamp = lead
            .timestamp
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default();
        let consent = if lead.consent { "Yes" } else { "No" };
        writer.write_record([
            lead.full_name.as_str(),
            lead.email.as_str(),
            lead.phone.as_str(),
            lead.country.as_str(),
            timestamp.as_str(),
            consent,
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    let mut out = String::from_utf8(bytes)?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn lead(name: &str, consent: bool) -> Lead {
        Lead {
            full_name: name.into(),
            email: "a@b.com".into(),
            phone: "+1 (555) 123-4567".into(),
            country: "US".into(),
            timestamp: Some(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()),
            consent,
        }
    }

    #[test]
    fn renders_fixed_columns() {
        let csv = leads_to_csv(&[lead("A B", true), lead("Smith, Jo \"JJ\"", false)]).unwrap();
        insta::assert_snapshot!(csv, @r#"
        Full Name,Email,Phone,Country,Timestamp,Consent
        A B,a@b.com,+1 (555) 123-4567,US,2026-01-02T03:04:05.000Z,Yes
        "Smith, Jo ""JJ""",a@b.com,+1 (555) 123-4567,US,2026-01-02T03:04:05.000Z,No
        "#);
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let rows = [lead("Z", true), lead("A", true), lead("Z", true)];
        let csv = leads_to_csv(&rows).unwrap();
        let names: Vec<&str> = csv
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(names, ["Z", "A", "Z"]);
    }

    #[test]
    fn missing_timestamp_is_blank() {
        let mut row = lead("A B", false);
        row.timestamp = None;
        let csv = leads_to_csv(&[row]).unwrap();
        assert_eq!(csv.lines().nth(1), Some("A B,a@b.com,+1 (555) 123-4567,US,,No"));
    }
}
