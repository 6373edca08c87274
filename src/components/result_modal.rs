//! Result Modal Component
//!
//! Shown after every submission attempt. Rows are empty when the request
//! failed, leaving only the title and the OK button.

use dioxus::prelude::*;
use userform_core::ResultRow;
use userform_ui::{Button, ButtonVariant};

/// Result Modal
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ResultModal {
///         visible: flow.read().modal_visible(),
///         rows: flow.read().modal_rows(),
///         on_close: move |_| flow.write().dismiss_modal(),
///     }
/// }
/// ```
#[component]
pub fn ResultModal(
    /// Whether to show the modal
    visible: bool,
    /// Result rows to list (ID, Name, Age, Email)
    rows: Vec<ResultRow>,
    /// Called on OK or Escape
    on_close: EventHandler<()>,
) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            onmounted: move |e: MountedEvent| async move {
                // Escape only reaches a focused element.
                let _ = e.set_focus(true).await;
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div { class: "modal-content",
                h2 { class: "modal-title", "New Data Added!" }

                if !rows.is_empty() {
                    div { class: "result-container",
                        for row in rows.iter() {
                            p { key: "{row.label}", class: "result-text", "{row.label}: {row.value}" }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Confirm,
                    onclick: move |_| on_close.call(()),
                    span { class: "button-text", "OK" }
                }
            }
        }
    }
}
