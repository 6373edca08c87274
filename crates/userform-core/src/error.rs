//! Error types for the user form

use thiserror::Error;

/// Validation failure shown to the user as a blocking alert.
///
/// The `Display` text is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace only
    #[error("Please enter your name.")]
    NameMissing,

    /// Name contains something other than letters and single spaces between words
    #[error("Name may only contain letters, with single spaces between words.")]
    NameInvalid,

    /// Age is empty
    #[error("Please enter your age.")]
    AgeMissing,

    /// Age contains a non-digit character
    #[error("Age must contain digits only.")]
    AgeNotNumeric,

    /// Age is not exactly two digits long
    #[error("Age must be exactly two digits.")]
    AgeLength,

    /// Age is two digits but below 10
    #[error("Age must be between 10 and 99.")]
    AgeOutOfRange,

    /// Email is empty
    #[error("Please enter your email.")]
    EmailMissing,

    /// Email does not look like local@domain.tld
    #[error("Please enter a valid email address.")]
    EmailInvalid,
}

/// Failure of the submission request.
///
/// Every variant falls through to the same modal on screen; the detail only
/// reaches the diagnostic log.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The request could not be sent or no response arrived
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-success status, even if the body is a full user record
    #[error("server returned {status}{}", status_suffix(.message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The response body is not a user record
    #[error("response decode error: {0}")]
    Decode(String),
}

/// Invalid client configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint is not a parseable URL
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Endpoint uses a scheme other than http or https
    #[error("Unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),
}

fn status_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

/// Result type alias using SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;
