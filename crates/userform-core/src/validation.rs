//! Client-side field validation.
//!
//! Rules run in a fixed order and the first failure wins:
//!
//! 1. name present (after trimming)
//! 2. name is letters with single spaces between words
//! 3. age present
//! 4. age is two digits in `10..=99`
//! 5. email present and shaped like `local@domain.tld`
//!
//! A [`SubmissionPayload`] can only be obtained by passing all of them.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::types::{FormInput, SubmissionPayload};

const NAME_PATTERN: &str = r"^[a-zA-Z]+(\s[a-zA-Z]+)*$";
const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,4}(\.[A-Za-z]{2,4})?$";

/// Lowest accepted age.
pub const MIN_AGE: u8 = 10;

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(NAME_PATTERN)
            .unwrap_or_else(|error| panic!("name regex failed to compile: {error}"))
    })
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(EMAIL_PATTERN)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validate the form and build the request payload.
pub fn validate(input: &FormInput) -> Result<SubmissionPayload, ValidationError> {
    let name = validate_name(&input.name)?;
    let age = validate_age(&input.age)?;
    let email = validate_email(&input.email)?;
    Ok(SubmissionPayload::new(name, age, email))
}

/// Returns the trimmed name.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    if !name_regex().is_match(trimmed) {
        return Err(ValidationError::NameInvalid);
    }
    Ok(trimmed.to_string())
}

pub fn validate_age(age: &str) -> Result<u8, ValidationError> {
    if age.is_empty() {
        return Err(ValidationError::AgeMissing);
    }
    if !age.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::AgeNotNumeric);
    }
    if age.len() != 2 {
        return Err(ValidationError::AgeLength);
    }
    // Two ASCII digits always fit in a u8.
    let value: u8 = age.parse().map_err(|_| ValidationError::AgeNotNumeric)?;
    if value < MIN_AGE {
        return Err(ValidationError::AgeOutOfRange);
    }
    Ok(value)
}

/// The email is checked as typed; surrounding whitespace fails the pattern.
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    if !email_regex().is_match(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(email.to_string())
}
