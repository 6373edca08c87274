//! Context providers for the form screen.
//!
//! The App component provides the [`Submitter`] and the
//! [`SubmissionFlow`] signal; components read them with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let mut flow = use_submission_flow();
//! let submitter = use_submitter();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use userform_core::{ClientConfig, HttpUserGateway, SubmissionFlow, Submitter};

/// Get the client configuration chosen on the command line.
pub fn get_client_config() -> ClientConfig {
    crate::get_client_config()
}

/// Build the submitter used by the running app.
pub fn build_submitter(config: &ClientConfig) -> Submitter {
    let gateway = Arc::new(HttpUserGateway::new(config.endpoint.clone()));
    Submitter::new(gateway, config)
}

/// Hook to access the submitter from context.
pub fn use_submitter() -> Submitter {
    use_context::<Submitter>()
}

/// Hook to access the screen state.
///
/// All submission state lives in this one signal.
pub fn use_submission_flow() -> Signal<SubmissionFlow> {
    use_context::<Signal<SubmissionFlow>>()
}
