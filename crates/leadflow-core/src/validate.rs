//! Input normalization and the ordered validation rules.
//!
//! The client runs [`validate_submission`], which short-circuits on the first
//! failing rule: required fields, then email shape, then phone length. The
//! intake service only runs [`check_required`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::lead::Lead;

/// Fewest digits a phone number may have, country code included.
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Drops every character that cannot appear in a typed phone number.
///
/// Digits, whitespace and `+ - ( )` survive; everything else is removed.
/// Applied on each keystroke, so it must be idempotent.
pub fn sanitize_phone(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'))
        .collect()
}

/// Number of ASCII digits in a phone string.
pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Whether `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Fails when any of full name, email, phone or country is empty.
pub fn check_required(lead: &Lead) -> Result<(), ValidationError> {
    let missing = [&lead.full_name, &lead.email, &lead.phone, &lead.country]
        .iter()
        .any(|field| field.is_empty());
    if missing {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Runs the full client-side rule set in order.
pub fn validate_submission(lead: &Lead) -> Result<(), ValidationError> {
    check_required(lead)?;
    if !is_valid_email(&lead.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if phone_digit_count(&lead.phone) < MIN_PHONE_DIGITS {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}
