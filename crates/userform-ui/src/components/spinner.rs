//! Activity spinner, sized like a platform "large" indicator.

use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "progressbar" }
    }
}
