//! Card Carousel Component
//!
//! A row of feature cards translated horizontally by the controller's
//! offset, with previous/next arrows that disable at the boundaries.

use dioxus::prelude::*;
use jazz_core::{CarouselState, FeatureCard};
use jazz_ui::{ArrowButton, ArrowDirection, FeatureCardView};

#[derive(Props, Clone, PartialEq)]
pub struct CardCarouselProps {
    pub cards: Vec<FeatureCard>,
    /// Id of the element holding the cards
    pub track_id: String,
    /// Id given to the first card, which is measured for the item width
    pub reference_card_id: String,
    pub state: CarouselState,
    #[props(default = true)]
    pub card_active: bool,
    /// Reveal earlier cards (pages the row right)
    pub on_previous: EventHandler<()>,
    /// Reveal later cards (pages the row left)
    pub on_next: EventHandler<()>,
    pub on_track_mounted: EventHandler<MountedEvent>,
    pub on_card_mounted: EventHandler<MountedEvent>,
}

#[component]
pub fn CardCarousel(props: CardCarouselProps) -> Element {
    let offset = props.state.offset;
    let on_card_mounted = props.on_card_mounted;
    let on_track_mounted = props.on_track_mounted;

    rsx! {
        div { class: "carousel",
            ArrowButton {
                direction: ArrowDirection::Left,
                disabled: props.state.at_start,
                onclick: move |_| props.on_previous.call(()),
            }

            div { id: "scrollable-cards", class: "carousel__window",
                div {
                    id: "{props.track_id}",
                    class: "carousel__track",
                    style: "transform: translateX({offset}px);",
                    onmounted: move |event| on_track_mounted.call(event),

                    for (index, card) in props.cards.iter().enumerate() {
                        FeatureCardView {
                            key: "{card.title}",
                            card: *card,
                            active: props.card_active,
                            id: (index == 0).then(|| props.reference_card_id.clone()),
                            onmounted: move |event| {
                                if index == 0 {
                                    on_card_mounted.call(event);
                                }
                            },
                        }
                    }
                }
            }

            ArrowButton {
                direction: ArrowDirection::Right,
                disabled: props.state.at_end,
                onclick: move |_| props.on_next.call(()),
            }
        }
    }
}
