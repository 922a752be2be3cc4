//! Feature Card Component
//!
//! A single card in the landing page services carousel.

use dioxus::prelude::*;
use jazz_core::FeatureCard;

/// Properties for the FeatureCardView component
#[derive(Clone, PartialEq, Props)]
pub struct FeatureCardViewProps {
    pub card: FeatureCard,
    /// DOM id; the carousel measures the card with the reference id
    #[props(default)]
    pub id: Option<String>,
    /// Highlighted style
    #[props(default = true)]
    pub active: bool,
    /// Receives the mounted element so the host can measure it
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

#[component]
pub fn FeatureCardView(props: FeatureCardViewProps) -> Element {
    let card = props.card;
    let class = if props.active {
        "feature-card feature-card--active"
    } else {
        "feature-card"
    };
    let onmounted = props.onmounted;

    rsx! {
        article {
            class: "{class}",
            id: props.id.clone(),
            onmounted: move |event| {
                if let Some(handler) = &onmounted {
                    handler.call(event);
                }
            },
            div { class: "feature-card__icon", "{card.icon}" }
            h3 { class: "feature-card__title", "{card.title}" }
            p { class: "feature-card__description", "{card.description}" }
        }
    }
}
