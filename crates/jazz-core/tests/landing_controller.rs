//! Landing controller scenarios driven by a manual clock and an
//! in-memory document.

use std::sync::Arc;
use std::time::Duration;

use jazz_core::{
    DataCache, ElementMetrics, GeometryProvider, LandingConfig, LandingController,
    LandingServices, LogToaster, ManualClock, MemoryCache, MemoryDocument, MemoryNavigator,
    Navigator, ScrollSurface, SessionAuth, SCROLL_FLAG_KEY, SCROLL_ID_KEY,
};
use serde_json::{json, Value};

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    clock: ManualClock,
    auth: SessionAuth,
    cache: MemoryCache,
    landing: LandingController,
    document: MemoryDocument,
}

impl Harness {
    fn new() -> Self {
        let _ = tracing_subscriber::fmt::try_init();
        let clock = ManualClock::new();
        let auth = SessionAuth::new();
        let cache = MemoryCache::new();
        let services = LandingServices {
            auth: Arc::new(auth.clone()),
            cache: Arc::new(cache.clone()),
            toaster: Arc::new(LogToaster),
        };
        let landing =
            LandingController::new(LandingConfig::default(), services, Arc::new(clock.clone()));
        let mut document =
            MemoryDocument::new(1280).with_carousel("scroll-me", "first-card", 7, 240);
        document.insert_element("head-text", ElementMetrics::default());
        document.mount_layer("parallax-2");

        Self {
            clock,
            auth,
            cache,
            landing,
            document,
        }
    }

    fn init(&mut self, navigator: &MemoryNavigator) {
        self.landing.init(navigator, &mut self.document);
    }

    /// Step the clock in 10ms increments, running due timers each step.
    fn run_for(&mut self, total: Duration) {
        let step = Duration::from_millis(10);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            self.clock.advance(step);
            self.landing.run_due(&mut self.document);
            elapsed += step;
        }
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

// ============================================================================
// Call to action and redirect
// ============================================================================

#[test]
fn logged_out_visitor_sees_get_started_and_opens_login() {
    let mut h = Harness::new();
    let nav = MemoryNavigator::at("/");
    h.init(&nav);

    assert_eq!(h.landing.button_text(), "GET STARTED NOW");

    h.landing.get_started_now(&nav);
    let panel = h.landing.login_panel();
    assert!(panel.go_to_login);
    assert!(!panel.closed);
    assert!(nav.navigations().is_empty());
}

#[test]
fn logged_in_visitor_on_root_is_redirected_during_init() {
    let mut h = Harness::new();
    h.auth.sign_in("ada");
    let nav = MemoryNavigator::at("/");
    h.init(&nav);

    assert_eq!(nav.navigations(), vec!["/services"]);
    assert_eq!(h.landing.button_text(), "GO TO SERVICES");
}

#[test]
fn logged_in_visitor_elsewhere_is_not_redirected() {
    let mut h = Harness::new();
    h.auth.sign_in("ada");
    let nav = MemoryNavigator::at("/landing");
    h.init(&nav);

    assert!(nav.navigations().is_empty());
    assert_eq!(h.landing.button_text(), "GO TO SERVICES");

    h.landing.get_started_now(&nav);
    assert_eq!(nav.current_url(), "/services");
    assert!(!h.landing.login_panel().go_to_login);
}

#[test]
fn close_sidebar_hides_login_panel() {
    let mut h = Harness::new();
    let nav = MemoryNavigator::at("/");
    h.init(&nav);

    h.landing.get_started_now(&nav);
    assert!(h.landing.login_panel().is_open());

    h.landing.close_sidebar();
    let panel = h.landing.login_panel();
    assert!(!panel.go_to_login);
    assert!(panel.closed);
}

#[test]
fn presentation_flags_default_on() {
    let h = Harness::new();
    assert!(h.landing.card_active());
    assert!(h.landing.slack_disabled());
    assert_eq!(h.landing.config().idle_timeout(), Duration::from_secs(600));
}

// ============================================================================
// Cached scroll request
// ============================================================================

#[test]
fn cached_scroll_request_lands_on_section() {
    let mut h = Harness::new();
    h.document.insert_element(
        "pricing",
        ElementMetrics {
            offset_top: 1000,
            ..ElementMetrics::default()
        },
    );
    h.cache.request_scroll_to("pricing");
    h.init(&MemoryNavigator::at("/"));
    assert!(h.landing.is_scrolling());

    h.run_for(ms(700));
    assert!(!h.landing.is_scrolling());
    assert_eq!(h.document.scroll_top(), 1000.0);

    let writes = h.document.scroll_writes().len();
    h.run_for(ms(500));
    assert_eq!(h.document.scroll_writes().len(), writes);
}

#[test]
fn init_targets_name_the_cached_section() {
    let h = Harness::new();
    assert!(h.landing.init_targets().is_empty());

    h.cache.request_scroll_to("pricing");
    assert_eq!(h.landing.init_targets(), vec!["pricing".to_string()]);

    h.cache.set(SCROLL_ID_KEY, json!(42));
    assert!(h.landing.init_targets().is_empty());
}

#[test]
fn waiting_for_init_targets_lets_late_section_scroll() {
    let mut h = Harness::new();
    h.cache.request_scroll_to("pricing");

    // Host mounts elements after first render; init waits for them.
    let pending: Vec<String> = h
        .landing
        .init_targets()
        .into_iter()
        .filter(|id| h.document.element_metrics(id).is_err())
        .collect();
    assert_eq!(pending, vec!["pricing".to_string()]);

    h.document.insert_element(
        "pricing",
        ElementMetrics {
            offset_top: 800,
            ..ElementMetrics::default()
        },
    );
    assert!(h
        .landing
        .init_targets()
        .iter()
        .all(|id| h.document.element_metrics(id).is_ok()));

    h.init(&MemoryNavigator::at("/"));
    assert!(h.landing.is_scrolling());
    h.run_for(ms(700));
    assert_eq!(h.document.scroll_top(), 800.0);
}

#[test]
fn scroll_request_at_current_position_never_ticks() {
    let mut h = Harness::new();
    h.document.insert_element(
        "pricing",
        ElementMetrics {
            offset_top: 500,
            ..ElementMetrics::default()
        },
    );
    h.document.scroll_externally(500.0);
    h.cache.request_scroll_to("pricing");
    h.init(&MemoryNavigator::at("/"));

    assert!(!h.landing.is_scrolling());
    h.run_for(ms(1000));
    assert!(h.document.scroll_writes().is_empty());
}

#[test]
fn scroll_flag_false_is_ignored() {
    let mut h = Harness::new();
    h.document.insert_element(
        "pricing",
        ElementMetrics {
            offset_top: 1000,
            ..ElementMetrics::default()
        },
    );
    h.cache.set(SCROLL_FLAG_KEY, Value::Bool(false));
    h.cache.set(SCROLL_ID_KEY, json!("pricing"));
    h.init(&MemoryNavigator::at("/"));

    assert!(!h.landing.is_scrolling());
}

#[test]
fn missing_scroll_target_does_not_abort_init() {
    let mut h = Harness::new();
    h.cache.request_scroll_to("no-such-section");
    h.init(&MemoryNavigator::at("/"));

    assert!(!h.landing.is_scrolling());
    h.run_for(ms(4000));
    assert_eq!(h.document.classes_of("head-text"), ["no-padding".to_string()]);
    assert_eq!(h.document.layer_id("parallax-2"), Some("bg2"));
}

#[test]
fn malformed_scroll_id_does_not_abort_init() {
    let mut h = Harness::new();
    h.cache.set(SCROLL_FLAG_KEY, Value::Bool(true));
    h.cache.set(SCROLL_ID_KEY, json!(42));
    h.init(&MemoryNavigator::at("/"));

    assert!(!h.landing.is_scrolling());
    assert!(h.landing.has_pending_timers());
}

#[test]
fn manual_scroll_replaces_cached_one() {
    let mut h = Harness::new();
    h.document.insert_element(
        "pricing",
        ElementMetrics {
            offset_top: 2000,
            ..ElementMetrics::default()
        },
    );
    h.cache.request_scroll_to("pricing");
    h.init(&MemoryNavigator::at("/"));
    h.run_for(ms(100));

    assert!(h.landing.animate_scroll_to(&h.document, 0.0, ms(200)));
    h.run_for(ms(400));
    assert_eq!(h.document.scroll_top(), 0.0);
    assert!(!h.landing.is_scrolling());
}

// ============================================================================
// Deferred header class
// ============================================================================

#[test]
fn header_is_compacted_after_delay() {
    let mut h = Harness::new();
    h.init(&MemoryNavigator::at("/"));

    h.run_for(ms(690));
    assert!(h.document.classes_of("head-text").is_empty());

    h.run_for(ms(10));
    assert_eq!(h.document.classes_of("head-text"), ["no-padding".to_string()]);

    h.run_for(ms(5000));
    assert_eq!(h.document.classes_of("head-text").len(), 1);
}

#[test]
fn missing_header_is_tolerated() {
    let mut h = Harness::new();
    h.document.remove_element("head-text");
    h.init(&MemoryNavigator::at("/"));

    h.run_for(ms(800));
    assert!(h.document.classes_of("head-text").is_empty());
}

// ============================================================================
// Background rotation and teardown
// ============================================================================

#[test]
fn background_cycles_every_interval() {
    let mut h = Harness::new();
    h.init(&MemoryNavigator::at("/"));

    let mut seen = Vec::new();
    for _ in 0..6 {
        h.run_for(ms(4000));
        seen.push(h.document.layer_id("parallax-2").map(str::to_string));
    }
    let seen: Vec<&str> = seen.iter().map(|id| id.as_deref().unwrap()).collect();
    assert_eq!(seen, vec!["bg2", "bg3", "bg1", "bg2", "bg3", "bg1"]);
}

#[test]
fn teardown_cancels_all_timers() {
    let mut h = Harness::new();
    h.document.insert_element(
        "pricing",
        ElementMetrics {
            offset_top: 1000,
            ..ElementMetrics::default()
        },
    );
    h.cache.request_scroll_to("pricing");
    h.init(&MemoryNavigator::at("/"));
    h.run_for(ms(50));

    h.landing.teardown();
    assert!(!h.landing.has_pending_timers());
    assert!(!h.landing.is_scrolling());
    assert_eq!(h.landing.time_until_next(), None);

    let writes = h.document.scroll_writes().len();
    h.run_for(ms(10_000));
    assert_eq!(h.document.scroll_writes().len(), writes);
    assert_eq!(h.document.layer_id("parallax-2"), None);
    assert!(h.document.classes_of("head-text").is_empty());
}

// ============================================================================
// Carousel through the controller
// ============================================================================

#[test]
fn carousel_pages_through_controller() {
    let mut h = Harness::new();
    h.init(&MemoryNavigator::at("/"));

    let step = 243;
    assert_eq!(h.landing.page_left(&h.document).unwrap().offset, -step);
    assert_eq!(h.landing.page_right(&h.document).unwrap().offset, 0);
    assert!(h.landing.carousel().at_start);
}
