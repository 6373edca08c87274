//! Loading Indicator Component
//!
//! Green spinner with the in-flight message underneath.

use dioxus::prelude::*;
use userform_ui::Spinner;

#[component]
pub fn LoadingIndicator(
    /// Message under the spinner; nothing is rendered for it when empty
    text: String,
) -> Element {
    rsx! {
        div { class: "loading-indicator",
            Spinner {}
            if !text.is_empty() {
                p { class: "loading-text", "{text}" }
            }
        }
    }
}
