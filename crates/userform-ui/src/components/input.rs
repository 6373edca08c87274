//! Text Input Component
//!
//! Single-line input with a blue border on a white background.

use dioxus::prelude::*;

/// Keyboard hint for mobile platforms (`inputmode` attribute)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputMode {
    #[default]
    Text,
    Numeric,
    Email,
}

impl InputMode {
    pub fn attr(&self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::Numeric => "numeric",
            InputMode::Email => "email",
        }
    }

    /// The `type` attribute that pairs with this mode
    pub fn input_type(&self) -> &'static str {
        match self {
            InputMode::Text | InputMode::Numeric => "text",
            InputMode::Email => "email",
        }
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called with the new text on every keystroke
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub mode: InputMode,
    /// Maximum number of characters (`maxlength`)
    #[props(default)]
    pub max_length: Option<u32>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut age = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: age(),
///         oninput: move |s| age.set(s),
///         placeholder: "Age".to_string(),
///         mode: InputMode::Numeric,
///         max_length: 2,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let placeholder = props.placeholder.clone().unwrap_or_default();
    let id = format!("input-{}", placeholder.to_lowercase());

    rsx! {
        input {
            id: "{id}",
            class: "form-input",
            r#type: props.mode.input_type(),
            inputmode: props.mode.attr(),
            maxlength: props.max_length.map(|n| n.to_string()),
            value: "{props.value}",
            placeholder: "{placeholder}",
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_mode_attributes() {
        assert_eq!(InputMode::Text.attr(), "text");
        assert_eq!(InputMode::Numeric.attr(), "numeric");
        assert_eq!(InputMode::Email.attr(), "email");
    }

    #[test]
    fn email_mode_uses_email_type() {
        assert_eq!(InputMode::Email.input_type(), "email");
        assert_eq!(InputMode::Numeric.input_type(), "text");
        assert_eq!(InputMode::default(), InputMode::Text);
    }
}
