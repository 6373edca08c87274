use dioxus::prelude::*;
use userform_core::SubmissionFlow;

use crate::context::{build_submitter, get_client_config};
use crate::pages::PostForm;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the submitter and the screen state.
#[component]
pub fn App() -> Element {
    let config = get_client_config();
    use_context_provider(|| build_submitter(&config));
    use_context_provider(|| Signal::new(SubmissionFlow::new()));

    rsx! {
        style { {GLOBAL_STYLES} }
        PostForm {}
    }
}
