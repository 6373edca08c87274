//! Blocking alert for validation messages.

use dioxus::prelude::*;
use userform_ui::{Button, ButtonVariant};

#[component]
pub fn ValidationAlert(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay alert-overlay",
            div { class: "alert-content", role: "alertdialog",
                h2 { class: "alert-title", "Invalid input" }
                p { class: "alert-message", "{message}" }
                Button {
                    variant: ButtonVariant::Confirm,
                    onclick: move |_| on_dismiss.call(()),
                    span { class: "button-text", "OK" }
                }
            }
        }
    }
}
