//! Data model for the user form.
//!
//! - [`FormInput`]: raw text the user typed, held only in UI state
//! - [`SubmissionPayload`]: the typed body sent to the server, built only by
//!   [`crate::validation::validate`]
//! - [`ApiResult`]: the record the server echoes back, shown verbatim

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of characters the age field accepts.
pub const AGE_MAX_CHARS: usize = 2;

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub age: String,
    pub email: String,
}

impl FormInput {
    /// Build a form from borrowed field values.
    ///
    /// The age is truncated like typed input.
    pub fn new(name: impl Into<String>, age: impl Into<String>, email: impl Into<String>) -> Self {
        let mut input = Self {
            name: name.into(),
            age: String::new(),
            email: email.into(),
        };
        input.set_age(age);
        input
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the age, keeping at most [`AGE_MAX_CHARS`] characters.
    pub fn set_age(&mut self, age: impl Into<String>) {
        self.age = age.into().chars().take(AGE_MAX_CHARS).collect();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Reset all three fields to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.age.clear();
        self.email.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.age.is_empty() && self.email.is_empty()
    }
}

/// JSON body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub age: u8,
    pub email: String,
}

impl SubmissionPayload {
    /// Only the validator constructs payloads.
    pub(crate) fn new(name: String, age: u8, email: String) -> Self {
        Self { name, age, email }
    }
}

/// User record returned by the server.
///
/// Fields keep whatever JSON the server sent; missing fields are a decode
/// error, unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    pub id: Value,
    pub name: Value,
    pub age: Value,
    pub email: Value,
}

impl ApiResult {
    /// Rows shown in the result modal, in display order.
    pub fn rows(&self) -> Vec<ResultRow> {
        vec![
            ResultRow::new("ID", &self.id),
            ResultRow::new("Name", &self.name),
            ResultRow::new("Age", &self.age),
            ResultRow::new("Email", &self.email),
        ]
    }
}

/// One labelled line of the result modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: &'static str,
    pub value: String,
}

impl ResultRow {
    fn new(label: &'static str, value: &Value) -> Self {
        Self {
            label,
            value: display_value(value),
        }
    }
}

/// Render a JSON value for display: strings bare, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
