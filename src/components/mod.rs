//! Components of the form screen.

mod form_fields;
mod loading_indicator;
mod result_modal;
mod validation_alert;

pub use form_fields::FormFields;
pub use loading_indicator::LoadingIndicator;
pub use result_modal::ResultModal;
pub use validation_alert::ValidationAlert;
