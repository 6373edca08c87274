//! Diagnostic log channel.
//!
//! Submission failures never reach the screen as distinct errors, so the log
//! is the only place they surface. Besides the console, events can be appended
//! to a JSONL file, one self-contained object per line:
//!
//! ```text
//! logs/
//! └── 2026-10-16_userform.jsonl
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use userform_core::logging::DiagnosticLayer;
//! use tracing_subscriber::prelude::*;
//!
//! let layer = DiagnosticLayer::new("./logs", "userform")?;
//! tracing_subscriber::registry()
//!     .with(layer)
//!     .with(tracing_subscriber::fmt::layer())
//!     .init();
//! ```
//!
//! Failed submissions can then be pulled out with `jq`:
//!
//! ```bash
//! jq 'select(.level == "error")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::DiagnosticEntry;
pub use layer::DiagnosticLayer;
pub use writer::{read_entries, DiagnosticWriter};
