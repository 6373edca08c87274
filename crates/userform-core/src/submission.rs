//! Submission flow for the user form.
//!
//! ```text
//! Idle ──begin()──▶ Submitting ──finish(Ok)──▶ Succeeded ──dismiss_modal()──▶ Idle
//!   ▲                   │
//!   │                   └──finish(Err)──▶ Failed ──dismiss_modal()──┘
//!   └── begin() rejected by validation: alert only, no transition
//! ```
//!
//! [`SubmissionFlow`] is plain state so the UI can keep it in a single signal.
//! The async half ([`submit_with_floor`], [`Submitter`]) never touches that
//! state; the caller feeds its outcome back through [`SubmissionFlow::finish`].
//!
//! A failed request still opens the result modal, just without rows. The
//! error only reaches the log.

use std::sync::Arc;
use std::time::Duration;

use crate::client::UserGateway;
use crate::config::ClientConfig;
use crate::error::{SubmitResult, ValidationError};
use crate::types::{ApiResult, FormInput, ResultRow, SubmissionPayload};
use crate::validation;

/// Text shown under the loading indicator while a request is in flight.
pub const LOADING_TEXT: &str = "Adding New Data...";

/// Where the screen is in the submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// UI state of the form screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionFlow {
    input: FormInput,
    phase: SubmissionPhase,
    loading: bool,
    loading_text: String,
    modal_visible: bool,
    result: Option<ApiResult>,
    alert: Option<ValidationError>,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.input.set_name(name);
    }

    pub fn set_age(&mut self, age: impl Into<String>) {
        self.input.set_age(age);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.input.set_email(email);
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_text(&self) -> &str {
        &self.loading_text
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn result(&self) -> Option<&ApiResult> {
        self.result.as_ref()
    }

    /// Validation message waiting to be acknowledged.
    pub fn alert(&self) -> Option<ValidationError> {
        self.alert
    }

    /// Rows for the result modal; empty when there is no result.
    pub fn modal_rows(&self) -> Vec<ResultRow> {
        self.result.as_ref().map(ApiResult::rows).unwrap_or_default()
    }

    /// Validate the form and, if it passes, enter `Submitting`.
    ///
    /// A validation failure is stored as the pending alert and leaves every
    /// other piece of state untouched.
    pub fn begin(&mut self) -> Result<SubmissionPayload, ValidationError> {
        let payload = match validation::validate(&self.input) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(error = %err, "Form rejected by validation");
                self.alert = Some(err);
                return Err(err);
            }
        };

        self.phase = SubmissionPhase::Submitting;
        self.loading = true;
        self.modal_visible = false;
        self.loading_text = LOADING_TEXT.to_string();
        Ok(payload)
    }

    /// Apply the outcome of a request started by [`begin`](Self::begin).
    pub fn finish(&mut self, outcome: SubmitResult<ApiResult>) {
        match outcome {
            Ok(result) => {
                tracing::info!(id = %result.id, "User created");
                self.result = Some(result);
                self.phase = SubmissionPhase::Succeeded;
            }
            Err(e) => {
                tracing::error!(error = %e, "Error calling API");
                self.result = None;
                self.phase = SubmissionPhase::Failed;
            }
        }

        // Cleanup runs on both paths.
        self.loading = false;
        self.modal_visible = true;
        self.loading_text.clear();
        self.input.clear();
    }

    pub fn dismiss_modal(&mut self) {
        self.modal_visible = false;
        self.phase = SubmissionPhase::Idle;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

/// Run the request and a `min_duration` timer together.
///
/// Returns once both are done, so callers observe at least `min_duration`
/// of loading even when the server answers immediately.
pub async fn submit_with_floor(
    gateway: &dyn UserGateway,
    payload: &SubmissionPayload,
    min_duration: Duration,
) -> SubmitResult<ApiResult> {
    let started = tokio::time::Instant::now();
    let (outcome, ()) = tokio::join!(
        gateway.create_user(payload),
        tokio::time::sleep(min_duration)
    );
    tracing::debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        ok = outcome.is_ok(),
        "Submission settled"
    );
    outcome
}

/// A gateway paired with the configured loading floor.
#[derive(Clone)]
pub struct Submitter {
    gateway: Arc<dyn UserGateway>,
    min_loading: Duration,
}

impl Submitter {
    pub fn new(gateway: Arc<dyn UserGateway>, config: &ClientConfig) -> Self {
        Self {
            gateway,
            min_loading: config.min_loading,
        }
    }

    pub async fn submit(&self, payload: &SubmissionPayload) -> SubmitResult<ApiResult> {
        submit_with_floor(self.gateway.as_ref(), payload, self.min_loading).await
    }
}

impl std::fmt::Debug for Submitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submitter")
            .field("min_loading", &self.min_loading)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SubmitError;
    use serde_json::json;

    fn filled_flow() -> SubmissionFlow {
        let mut flow = SubmissionFlow::new();
        flow.set_name("Jane Doe");
        flow.set_age("30");
        flow.set_email("jane@example.com");
        flow
    }

    fn sample_result() -> ApiResult {
        serde_json::from_value(json!({
            "id": 1,
            "name": "Jane Doe",
            "age": 30,
            "email": "jane@example.com"
        }))
        .unwrap()
    }

    #[test]
    fn begin_enters_submitting() {
        let mut flow = filled_flow();
        let payload = flow.begin().unwrap();

        assert_eq!(payload.age, 30);
        assert_eq!(flow.phase(), SubmissionPhase::Submitting);
        assert!(flow.is_loading());
        assert_eq!(flow.loading_text(), LOADING_TEXT);
        assert!(!flow.modal_visible());
    }

    #[test]
    fn begin_hides_an_open_modal() {
        let mut flow = filled_flow();
        flow.begin().unwrap();
        flow.finish(Ok(sample_result()));
        assert!(flow.modal_visible());

        flow.set_name("John");
        flow.set_age("41");
        flow.set_email("john@example.com");
        flow.begin().unwrap();
        assert!(!flow.modal_visible());
    }

    #[test]
    fn rejected_begin_only_sets_alert() {
        let mut flow = filled_flow();
        flow.set_age("5");
        let before_input = flow.input().clone();

        let err = flow.begin().unwrap_err();
        assert_eq!(err, ValidationError::AgeLength);
        assert_eq!(flow.alert(), Some(ValidationError::AgeLength));
        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert!(!flow.is_loading());
        assert_eq!(flow.input(), &before_input);

        flow.dismiss_alert();
        assert_eq!(flow.alert(), None);
    }

    #[test]
    fn success_shows_rows_and_clears_fields() {
        let mut flow = filled_flow();
        flow.begin().unwrap();
        flow.finish(Ok(sample_result()));

        assert_eq!(flow.phase(), SubmissionPhase::Succeeded);
        assert!(flow.modal_visible());
        assert!(!flow.is_loading());
        assert!(flow.loading_text().is_empty());
        assert!(flow.input().is_empty());
        assert_eq!(flow.modal_rows().len(), 4);
    }

    #[test]
    fn failure_shows_empty_modal_and_clears_fields() {
        let mut flow = filled_flow();
        flow.begin().unwrap();
        flow.finish(Err(SubmitError::Decode("bad".to_string())));

        assert_eq!(flow.phase(), SubmissionPhase::Failed);
        assert!(flow.modal_visible());
        assert!(flow.result().is_none());
        assert!(flow.modal_rows().is_empty());
        assert!(flow.input().is_empty());
        assert!(!flow.is_loading());
    }

    #[test]
    fn failure_drops_previous_result() {
        let mut flow = filled_flow();
        flow.begin().unwrap();
        flow.finish(Ok(sample_result()));
        flow.dismiss_modal();

        let mut retry = flow.clone();
        retry.set_name("John");
        retry.set_age("41");
        retry.set_email("john@example.com");
        retry.begin().unwrap();
        retry.finish(Err(SubmitError::Status {
            status: 503,
            message: None,
        }));
        assert!(retry.modal_rows().is_empty());
    }

    #[test]
    fn dismiss_modal_returns_to_idle() {
        let mut flow = filled_flow();
        flow.begin().unwrap();
        flow.finish(Ok(sample_result()));
        flow.dismiss_modal();

        assert_eq!(flow.phase(), SubmissionPhase::Idle);
        assert!(!flow.modal_visible());
        // The last result is kept until the next outcome replaces it.
        assert!(flow.result().is_some());
    }
}
