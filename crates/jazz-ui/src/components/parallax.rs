//! Parallax Background Component
//!
//! Two stacked decorative layers behind the landing hero. The back layer
//! is static; the front layer (`parallax-2`) picks its image from its id
//! (`bg1`, `bg2`, ...) and crossfades when the id changes, so rotating the
//! background is just a matter of passing a new `layer_id`.

use dioxus::prelude::*;

/// Properties for the ParallaxBackground component
#[derive(Clone, PartialEq, Props)]
pub struct ParallaxBackgroundProps {
    /// Id of the front layer; `None` renders it with the first frame
    #[props(default)]
    pub layer_id: Option<String>,
    /// Called once the front layer is mounted
    #[props(default)]
    pub onmounted: Option<EventHandler<()>>,
    /// Content drawn above the layers
    pub children: Element,
}

/// Id used before the first rotation
pub const INITIAL_LAYER_ID: &str = "bg1";

/// Stacked background layers with the page content on top
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ParallaxBackground { layer_id: layer(),
///         header { class: "landing-hero", "..." }
///     }
/// }
/// ```
#[component]
pub fn ParallaxBackground(props: ParallaxBackgroundProps) -> Element {
    let id = props
        .layer_id
        .clone()
        .unwrap_or_else(|| INITIAL_LAYER_ID.to_string());
    let onmounted = props.onmounted;

    rsx! {
        div { class: "parallax-wrapper",
            div { class: "parallax-1", "aria-hidden": "true" }
            div {
                class: "parallax-2",
                id: "{id}",
                "aria-hidden": "true",
                onmounted: move |_| {
                    if let Some(handler) = &onmounted {
                        handler.call(());
                    }
                },
            }
            div { class: "parallax-content",
                {props.children}
            }
        }
    }
}
