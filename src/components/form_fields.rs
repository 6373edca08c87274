//! The three form inputs, bound to the submission flow.

use dioxus::prelude::*;
use userform_core::AGE_MAX_CHARS;
use userform_ui::{Input, InputMode};

use crate::context::use_submission_flow;

#[component]
pub fn FormFields() -> Element {
    let mut flow = use_submission_flow();
    let input = flow.read().input().clone();

    rsx! {
        div { class: "form-container",
            Input {
                value: input.name,
                oninput: move |s: String| flow.write().set_name(s),
                placeholder: "Name".to_string(),
            }
            Input {
                value: input.age,
                oninput: move |s: String| flow.write().set_age(s),
                placeholder: "Age".to_string(),
                mode: InputMode::Numeric,
                max_length: AGE_MAX_CHARS as u32,
            }
            Input {
                value: input.email,
                oninput: move |s: String| flow.write().set_email(s),
                placeholder: "Email".to_string(),
                mode: InputMode::Email,
            }
        }
    }
}
