//! Services page - where signed-in users land.

use dioxus::prelude::*;
use jazz_core::{AuthenticationService, FEATURE_CARDS};
use jazz_ui::{Button, ButtonVariant, FeatureCardView};

use crate::app::Route;
use crate::context::use_portal;

#[component]
pub fn Services() -> Element {
    let portal = use_portal();
    let navigator = use_navigator();

    let user = portal.session.user();
    let signed_in = portal.session.is_logged_in();

    let sign_out = {
        let session = portal.session.clone();
        move |_: ()| {
            session.sign_out();
            navigator.push(Route::Landing {});
        }
    };

    rsx! {
        main { class: "services-page",
            header { class: "services-header",
                h1 { class: "page-title", "Your API Services" }
                if let Some(user) = user {
                    p { class: "services-user", "Signed in as {user}" }
                }
                if signed_in {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: sign_out,
                        "Sign out"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| { navigator.push(Route::Landing {}); },
                        "Back to start"
                    }
                }
            }

            div { class: "services-grid",
                for card in FEATURE_CARDS.iter() {
                    FeatureCardView { key: "{card.title}", card: *card }
                }
            }
        }
    }
}
