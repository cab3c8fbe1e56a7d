//! Lead identifier newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a lead by the intake service.
///
/// Only the service mints these. Clients treat the inner string as opaque
/// and never parse it; the service happens to use time-ordered values, so
/// identifiers sort by arrival in practice but nothing relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeadId(pub String);

impl LeadId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LeadId {
    fn from(s: String) -> Self {
        LeadId(s)
    }
}
