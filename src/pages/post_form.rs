//! Post API Call - the form screen.
//!
//! Name, age and email go through the validator, then a single POST with a
//! loading floor. The result modal opens whether the request worked or not.

use dioxus::prelude::*;
use userform_ui::Button;

use crate::components::{FormFields, LoadingIndicator, ResultModal, ValidationAlert};
use crate::context::{use_submission_flow, use_submitter};

#[component]
pub fn PostForm() -> Element {
    let mut flow = use_submission_flow();
    let submitter = use_submitter();

    // No in-flight guard: fields stay filled until finish(), so a press during
    // a request sends a duplicate POST.
    let save_data = move |_| {
        let payload = match flow.write().begin() {
            Ok(payload) => payload,
            Err(_) => return,
        };

        let submitter = submitter.clone();
        spawn(async move {
            let outcome = submitter.submit(&payload).await;
            flow.write().finish(outcome);
        });
    };

    let state = flow.read();
    let alert = state.alert();
    let loading = state.is_loading();
    let loading_text = state.loading_text().to_string();
    let modal_visible = state.modal_visible();
    let rows = state.modal_rows();
    drop(state);

    rsx! {
        main { class: "screen",
            h1 { class: "screen-title", "Post API Call" }

            FormFields {}

            Button {
                onclick: save_data,
                span { class: "button-text", "Save Data" }
            }

            if loading {
                LoadingIndicator { text: loading_text }
            }

            ResultModal {
                visible: modal_visible,
                rows: rows,
                on_close: move |_| flow.write().dismiss_modal(),
            }

            if let Some(err) = alert {
                ValidationAlert {
                    message: err.to_string(),
                    on_dismiss: move |_| flow.write().dismiss_alert(),
                }
            }
        }
    }
}
