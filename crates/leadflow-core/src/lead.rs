//! Lead submission and stored record types.
//!
//! A [`Lead`] is what the visitor submits. The intake service wraps it in a
//! [`LeadRecord`] by adding an identifier and a receipt timestamp. Both
//! serialize in camelCase so the JSON on disk and on the wire reads
//! `fullName`, `receivedAt`, and so on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::id::LeadId;
use crate::validate::sanitize_phone;

/// Contact details submitted by a visitor.
///
/// String fields that are absent or `null` in incoming JSON deserialize to
/// the empty string, so a sparse body surfaces as a missing-field
/// validation failure instead of a decoding error. `consent` accepts any
/// JSON value and keeps its truthiness, so a checkbox posted as `"on"` counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    /// When the visitor pressed submit, stamped by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "truthy")]
    pub consent: bool,
}

impl Lead {
    /// Returns the same lead stamped with the given submission time.
    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }
}

/// A lead as persisted by the intake service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    #[serde(flatten)]
    pub lead: Lead,
    pub id: LeadId,
    pub received_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn new(lead: Lead, id: LeadId, received_at: DateTime<Utc>) -> Self {
        LeadRecord {
            lead,
            id,
            received_at,
        }
    }
}

/// Raw values read from the form controls, before any cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLeadForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub consent: bool,
}

impl RawLeadForm {
    /// Cleans the raw input into a [`Lead`] without a timestamp.
    ///
    /// Name, email and phone are trimmed; the phone additionally loses every
    /// character outside the allowed set (see [`sanitize_phone`]). Country
    /// comes from a fixed list and is taken verbatim.
    pub fn normalize(&self) -> Lead {
        Lead {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: sanitize_phone(&self.phone).trim().to_string(),
            country: self.country.clone(),
            timestamp: None,
            consent: self.consent,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
