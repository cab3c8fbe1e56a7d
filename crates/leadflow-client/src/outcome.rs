//! User-visible outcome of a submission and the delivery path behind it.
//!
//! The visitor sees one of two success messages whatever happened to the
//! remote write. [`Delivery`] keeps the real story for callers and tests.

use leadflow_core::{LeadId, ValidationError};

use crate::error::ClientError;
use crate::scheduling::SchedulingStep;

/// Shown when the submission went through, or failed in a way the visitor
/// cannot act on.
pub const SUBMITTED_MESSAGE: &str =
    "Thank you! Your information has been submitted successfully. Please schedule your call below.";
/// Shown when the intake service answered but declined the lead.
pub const SAVED_LOCALLY_MESSAGE: &str =
    "Your information has been saved. Please schedule your call below.";

/// Why the remote write did not happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No intake endpoint is configured.
    NotConfigured,
    /// The request never produced a response.
    Transport(String),
    /// Non-2xx status code.
    Status(u16),
    /// 2xx with `success: false` and the service's message.
    Declined(String),
    /// 2xx whose body was not an intake envelope.
    InvalidResponse(String),
}

impl From<ClientError> for FallbackReason {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status(code) => FallbackReason::Status(code),
            ClientError::Declined(message) => FallbackReason::Declined(message),
            ClientError::InvalidResponse(err) => FallbackReason::InvalidResponse(err.to_string()),
            other => FallbackReason::Transport(other.to_string()),
        }
    }
}

/// Where an accepted lead actually ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The intake service stored it. `cached` is false if the local backup
    /// write failed.
    Remote { lead_id: Option<LeadId>, cached: bool },
    /// Only the local cache holds it.
    LocalOnly { reason: FallbackReason },
    /// Neither write succeeded; the lead is lost.
    Failed {
        cache_error: String,
        reason: FallbackReason,
    },
}

impl Delivery {
    pub fn user_message(&self) -> &'static str {
        match self {
            Delivery::LocalOnly {
                reason: FallbackReason::Declined(_),
            }
            | Delivery::Failed {
                reason: FallbackReason::Declined(_),
                ..
            } => SAVED_LOCALLY_MESSAGE,
            _ => SUBMITTED_MESSAGE,
        }
    }

    pub fn lead_id(&self) -> Option<&LeadId> {
        match self {
            Delivery::Remote { lead_id, .. } => lead_id.as_ref(),
            _ => None,
        }
    }
}

/// Result of one press of the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserOutcome {
    /// Validation failed; nothing was stored or sent.
    Rejected { error: ValidationError },
    /// The visitor is thanked and moved on to scheduling.
    Accepted {
        message: String,
        delivery: Delivery,
        scheduling: SchedulingStep,
    },
}

impl UserOutcome {
    /// The text shown in the form's message area.
    pub fn message(&self) -> String {
        match self {
            UserOutcome::Rejected { error } => error.to_string(),
            UserOutcome::Accepted { message, .. } => message.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UserOutcome::Accepted { .. })
    }

    pub fn delivery(&self) -> Option<&Delivery> {
        match self {
            UserOutcome::Accepted { delivery, .. } => Some(delivery),
            UserOutcome::Rejected { .. } => None,
        }
    }

    pub fn scheduling(&self) -> Option<&SchedulingStep> {
        match self {
            UserOutcome::Accepted { scheduling, .. } => Some(scheduling),
            UserOutcome::Rejected { .. } => None,
        }
    }
}
