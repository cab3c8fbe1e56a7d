//! Core error types for leadflow-core.
//!
//! [`ValidationError`] doubles as the user-facing message: its `Display`
//! output is exactly what the form shows next to the submit button.

use thiserror::Error;

/// A form submission that failed one of the ordered validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One of full name, email, phone or country is empty.
    #[error("Please fill in all required fields.")]
    MissingFields,

    /// The email does not have a `local@domain.tld` shape.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// The phone number has fewer than ten digits.
    #[error("Please enter a valid phone number with country code.")]
    InvalidPhone,
}

/// Errors produced while rendering leads as CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export is not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
