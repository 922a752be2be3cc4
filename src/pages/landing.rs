//! Landing page - Entry point to the Jazz Portal.
//!
//! "Create. Manage. Self-Service." - greets signed-out visitors with the
//! feature carousel and a sign-in panel. Signed-in users arriving on `/`
//! are sent straight to the services area.
//!
//! All view state lives in a [`LandingController`]; this component wires
//! it to the router, the webview (through [`DesktopDocument`]) and a
//! timer loop.

use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use jazz_core::{
    LandingController, Navigator as PortalNavigator, SystemClock, FEATURE_CARDS, LANDING_COPY,
    SERVICES_ROUTE,
};
use jazz_ui::{Button, ButtonVariant, ParallaxBackground};

use crate::app::Route;
use crate::components::{CardCarousel, LoginPanel};
use crate::context::use_portal;
use crate::host::{DesktopDocument, MAIN_ID};

/// Upper bound on the timer loop's sleep
const MAX_TIMER_SLEEP: Duration = Duration::from_millis(100);

/// Polling interval while waiting for init targets to mount
const MOUNT_POLL: Duration = Duration::from_millis(10);

/// Give up waiting for init targets after this long (e.g. a stale section id)
const MOUNT_TIMEOUT: Duration = Duration::from_secs(2);

/// Section holding the carousel, a common scroll-to target
const OVERVIEW_SECTION_ID: &str = "services-overview";

/// Router adapter for the landing controller.
#[derive(Clone)]
pub struct RouterNavigator {
    navigator: Navigator,
    current: String,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator, current: &Route) -> Self {
        Self {
            navigator,
            current: current.to_string(),
        }
    }
}

impl PortalNavigator for RouterNavigator {
    fn current_url(&self) -> String {
        self.current.clone()
    }

    fn navigate_by_url(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                tracing::info!("Navigating to {}", path);
                self.navigator.push(route);
            }
            Err(_) => tracing::warn!("No route matches {}", path),
        }
    }
}

/// Wait until the page container and `targets` have reported their mounts.
///
/// `onmounted` events arrive from the webview after the first render, so
/// measuring right away would find nothing.
async fn wait_for_mounts(document: &DesktopDocument, targets: Vec<String>) {
    let start = tokio::time::Instant::now();
    loop {
        let pending: Vec<&str> = std::iter::once(MAIN_ID)
            .chain(targets.iter().map(String::as_str))
            .filter(|id| !document.is_registered(id))
            .collect();
        if pending.is_empty() {
            return;
        }
        if start.elapsed() >= MOUNT_TIMEOUT {
            tracing::warn!("Initializing before {:?} mounted", pending);
            return;
        }
        tokio::time::sleep(MOUNT_POLL).await;
    }
}

/// Landing page component.
///
/// Auto-redirects to Services if the visitor is already signed in.
#[component]
pub fn Landing() -> Element {
    let portal = use_portal();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let config = portal.config.clone();

    let mut document = use_hook(DesktopDocument::new);
    let mut landing = use_signal({
        let portal = portal.clone();
        move || {
            LandingController::new(
                portal.config.clone(),
                portal.landing_services(),
                Arc::new(SystemClock::new()),
            )
        }
    });

    let track_id = config.track_id.clone();
    use_hook(move || document.set_child_count(&track_id, FEATURE_CARDS.len()));

    // Init once mounted, then drive the controller's timers
    let current_route = route.clone();
    use_effect(move || {
        let current_route = current_route.clone();
        spawn(async move {
            let targets = landing.peek().init_targets();
            wait_for_mounts(&document, targets).await;
            document.refresh().await;
            let router = RouterNavigator::new(navigator, &current_route);
            landing.write().init(&router, &mut document);

            loop {
                let Some(wait) = landing.read().time_until_next() else {
                    break;
                };
                tokio::time::sleep(wait.min(MAX_TIMER_SLEEP)).await;
                landing.write().run_due(&mut document);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut controller) = landing.try_write() {
            controller.teardown();
        }
    });

    let (carousel, panel, button_text, card_active) = {
        let controller = landing.read();
        (
            controller.carousel(),
            controller.login_panel(),
            controller.button_text(),
            controller.card_active(),
        )
    };
    let header_id = config.header_id.clone();
    let header_class = document.class_attr(&header_id, "landing-hero");
    let parallax_class = config.parallax_class.clone();

    let call_to_action = {
        let route = route.clone();
        move |_: ()| {
            let router = RouterNavigator::new(navigator, &route);
            landing.write().get_started_now(&router);
        }
    };

    let on_sign_in = {
        let session = portal.session.clone();
        move |user: String| {
            session.sign_in(user);
            landing.write().close_sidebar();
            RouterNavigator::new(navigator, &Route::Landing {}).navigate_by_url(SERVICES_ROUTE);
        }
    };

    let on_previous = move |_: ()| {
        spawn(async move {
            document.refresh().await;
            let result = landing.write().page_right(&document);
            if let Err(e) = result {
                tracing::warn!("Carousel paging failed: {}", e);
            }
        });
    };

    let on_next = move |_: ()| {
        spawn(async move {
            document.refresh().await;
            let result = landing.write().page_left(&document);
            if let Err(e) = result {
                tracing::warn!("Carousel paging failed: {}", e);
            }
        });
    };

    rsx! {
        main {
            id: MAIN_ID,
            class: "landing",
            onmounted: move |event| document.register(MAIN_ID, event),

            ParallaxBackground {
                layer_id: document.layer_id(),
                onmounted: move |_| document.mount_layer(&parallax_class),

                header {
                    id: "{header_id}",
                    class: "{header_class}",
                    onmounted: {
                        let header_id = header_id.clone();
                        move |event| document.register(&header_id, event)
                    },
                    h1 { class: "landing-title", "{LANDING_COPY.title}" }
                    p { class: "landing-subtitle", "{LANDING_COPY.subtitle}" }

                    Button {
                        variant: ButtonVariant::Hero,
                        onclick: call_to_action,
                        "{button_text}"
                    }
                }
            }

            section {
                id: OVERVIEW_SECTION_ID,
                class: "landing-section",
                onmounted: move |event| document.register(OVERVIEW_SECTION_ID, event),

                h2 { class: "section-header", "Everything your APIs need" }
                CardCarousel {
                    cards: FEATURE_CARDS.to_vec(),
                    track_id: config.track_id.clone(),
                    reference_card_id: config.reference_card_id.clone(),
                    state: carousel,
                    card_active,
                    on_previous,
                    on_next,
                    on_track_mounted: {
                        let track_id = config.track_id.clone();
                        move |event| document.register(&track_id, event)
                    },
                    on_card_mounted: {
                        let card_id = config.reference_card_id.clone();
                        move |event| document.register(&card_id, event)
                    },
                }
            }

            if panel.is_open() {
                LoginPanel {
                    on_close: move |_| landing.write().close_sidebar(),
                    on_sign_in,
                }
            }
        }
    }
}
