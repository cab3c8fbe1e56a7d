//! JSON envelopes shared by the intake service and its clients.
//!
//! Every response carries a boolean `success` flag and, where relevant, a
//! human-readable `message`. There are no machine-readable error codes.

use serde::{Deserialize, Serialize};

use crate::id::LeadId;
use crate::lead::LeadRecord;

/// Reply to `POST /api/leads`.
///
/// Also the shape of the failure envelope (`success: false`, no `leadId`),
/// so a client can decode any intake reply with this one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<LeadId>,
}

impl IntakeResponse {
    pub fn saved(message: impl Into<String>, lead_id: LeadId) -> Self {
        IntakeResponse {
            success: true,
            message: message.into(),
            lead_id: Some(lead_id),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        IntakeResponse {
            success: false,
            message: message.into(),
            lead_id: None,
        }
    }
}

/// Reply to `GET /api/leads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadListResponse {
    pub success: bool,
    pub leads: Vec<LeadRecord>,
}
