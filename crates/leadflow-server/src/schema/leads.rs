//! Lead intake and listing request/response types.
//!
//! The intake request body is a bare [`Lead`]; any identifier or receipt
//! time the caller sends is ignored and replaced by the service.

pub use leadflow_core::{IntakeResponse, Lead, LeadListResponse};

/// Message returned with a successful intake.
pub const LEAD_SAVED: &str = "Lead saved successfully";
/// Message returned when the body is not a JSON lead.
pub const INVALID_BODY: &str = "Invalid request body";
/// Message returned when a required field is empty.
pub const MISSING_FIELDS: &str = "Missing required fields";
/// Message returned when the store cannot be written.
pub const SAVE_FAILED: &str = "Error saving lead";
