//! Sign-in Side Panel
//!
//! Slides in from the right when a signed-out visitor clicks the landing
//! call to action. Credentials are handed to the caller; checking them is
//! the session service's job.

use dioxus::prelude::*;
use jazz_ui::{Button, ButtonVariant, CloseButton, Input};

#[derive(Props, Clone, PartialEq)]
pub struct LoginPanelProps {
    /// Close button or backdrop click
    pub on_close: EventHandler<()>,
    /// Submitted with the entered user name
    pub on_sign_in: EventHandler<String>,
}

#[component]
pub fn LoginPanel(props: LoginPanelProps) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<&'static str>> = use_signal(|| None);

    let submit = move |_: ()| {
        let user = email().trim().to_string();
        if user.is_empty() || password().is_empty() {
            error.set(Some("Enter your email and password"));
            return;
        }
        error.set(None);
        props.on_sign_in.call(user);
    };

    rsx! {
        div {
            class: "login-backdrop",
            onclick: move |_| props.on_close.call(()),
        }
        aside { class: "login-panel",
            div { class: "login-panel__header",
                h2 { "Sign in" }
                CloseButton { onclick: move |_| props.on_close.call(()) }
            }

            Input {
                id: "login-email".to_string(),
                value: email(),
                oninput: move |value| email.set(value),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                required: true,
            }
            Input {
                id: "login-password".to_string(),
                value: password(),
                oninput: move |value| password.set(value),
                label: "Password".to_string(),
                input_type: "password".to_string(),
                required: true,
            }

            if let Some(message) = error() {
                p { class: "login-panel__error", "{message}" }
            }

            Button {
                variant: ButtonVariant::Primary,
                onclick: submit,
                "Sign in"
            }
        }
    }
}
