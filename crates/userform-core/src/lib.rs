//! User Form Core Library
//!
//! Everything behind the "Post API Call" screen that does not depend on a UI
//! framework: the field validator, the submission state machine, the HTTP
//! client for `POST /users` and the diagnostic log channel.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use userform_core::{ClientConfig, HttpUserGateway, SubmissionFlow, Submitter};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::default();
//!     let submitter = Submitter::new(
//!         Arc::new(HttpUserGateway::new(config.endpoint.clone())),
//!         &config,
//!     );
//!
//!     let mut flow = SubmissionFlow::new();
//!     flow.set_name("Jane Doe");
//!     flow.set_age("30");
//!     flow.set_email("jane@example.com");
//!
//!     if let Ok(payload) = flow.begin() {
//!         let outcome = submitter.submit(&payload).await;
//!         flow.finish(outcome);
//!     }
//!
//!     for row in flow.modal_rows() {
//!         println!("{}: {}", row.label, row.value);
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod submission;
pub mod types;
pub mod validation;

// Re-exports
pub use client::{HttpUserGateway, UserGateway};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MIN_LOADING_MS};
pub use error::{ConfigError, SubmitError, SubmitResult, ValidationError};
pub use submission::{submit_with_floor, SubmissionFlow, SubmissionPhase, Submitter, LOADING_TEXT};
pub use types::*;
pub use validation::validate;
