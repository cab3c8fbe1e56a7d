//! Core data model for the leadflow lead-capture pipeline.
//!
//! Shared by the intake server and the submission client:
//! - [`lead`]: the [`Lead`] submission, the stored [`LeadRecord`] and raw form input
//! - [`id`]: the opaque [`LeadId`] assigned by the intake service
//! - [`validate`]: phone normalization and the ordered validation rules
//! - [`export`]: CSV rendering of cached leads
//! - [`api`]: JSON envelopes exchanged between client and server
//! - [`error`]: validation and export errors

pub mod api;
pub mod error;
pub mod export;
pub mod id;
pub mod lead;
pub mod validate;

// Re-export commonly used types
pub use api::{IntakeResponse, LeadListResponse};
pub use error::{ExportError, ValidationError};
pub use export::{leads_to_csv, CSV_HEADERS};
pub use id::LeadId;
pub use lead::{Lead, LeadRecord, RawLeadForm};
pub use validate::{
    check_required, is_valid_email, phone_digit_count, sanitize_phone, validate_submission,
    MIN_PHONE_DIGITS,
};
