//! Button Components
//!
//! Button styles used across the portal:
//! - Primary: standard actions
//! - Hero: the landing page call to action
//! - Arrow: carousel paging controls
//! - Ghost: secondary, low-emphasis actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action button
    #[default]
    Primary,
    /// Large landing page call to action
    Hero,
    /// Round carousel paging arrow
    Arrow,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Hero => "btn-hero",
            ButtonVariant::Arrow => "btn-arrow",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extra classes.
pub(crate) fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Hero,
///         onclick: move |_| landing.write().get_started_now(&navigator),
///         "GET STARTED NOW"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Paging direction of an arrow button
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    Left,
    Right,
}

impl ArrowDirection {
    pub fn glyph(&self) -> &'static str {
        match self {
            ArrowDirection::Left => "\u{2039}",
            ArrowDirection::Right => "\u{203A}",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            ArrowDirection::Left => "Previous cards",
            ArrowDirection::Right => "Next cards",
        }
    }
}

/// Carousel paging arrow, hidden visually (but kept in layout) when disabled
#[component]
pub fn ArrowButton(direction: ArrowDirection, disabled: bool, onclick: EventHandler<()>) -> Element {
    let state = if disabled { "btn-arrow--disabled" } else { "" };
    let full_class = class_list(ButtonVariant::Arrow.class(), Some(state));

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": direction.aria_label(),
            disabled,
            onclick: move |_| onclick.call(()),
            "{direction.glyph()}"
        }
    }
}

/// Icon button for compact actions (close, expand, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
