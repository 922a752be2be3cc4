//! Input Field Components
//!
//! Labelled text inputs for the sign-in panel.

use dioxus::prelude::*;

use super::button::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used to associate the label
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "login-email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = class_list("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
