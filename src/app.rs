use dioxus::prelude::*;

use crate::pages::{Landing, Services};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the feature carousel
/// - `/services` - Services area for signed-in users
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/services")]
    Services {},
}

/// Root application component.
///
/// Provides global styles, portal context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(crate::startup_context);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
