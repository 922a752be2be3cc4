//! Landing page view controller.
//!
//! Owns all landing view state and the timers that mutate it. The host
//! (desktop shell or test) supplies the [`Document`] and [`Navigator`] on
//! each call and drives the timers by calling [`LandingController::run_due`]
//! whenever the clock may have passed a deadline.
//!
//! ## Lifecycle
//!
//! 1. `init()` picks the call-to-action label, redirects signed-in users
//!    sitting on `/`, starts a cached scroll-to-section request, schedules
//!    the header class append and starts the background rotator.
//! 2. `run_due()` dispatches timer jobs (scroll ticks, rotator swaps,
//!    header append) in deadline order.
//! 3. `teardown()` cancels every timer.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::carousel::{Carousel, CarouselLayout, CarouselState};
use crate::config::LandingConfig;
use crate::document::{Document, GeometryProvider};
use crate::error::{LandingError, LandingResult};
use crate::rotator::BackgroundRotator;
use crate::scheduler::{Clock, Scheduler, TimerId};
use crate::scroll::{ScrollAnimator, ScrollTick};
use crate::services::{
    AuthenticationService, DataCache, Navigator, Toaster, ROOT_ROUTE, SCROLL_FLAG_KEY,
    SCROLL_ID_KEY, SERVICES_ROUTE,
};

/// Label of the hero call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallToAction {
    #[default]
    GetStartedNow,
    GoToServices,
}

impl CallToAction {
    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::GetStartedNow => "GET STARTED NOW",
            CallToAction::GoToServices => "GO TO SERVICES",
        }
    }
}

/// Sign-in side panel visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPanelState {
    pub go_to_login: bool,
    pub closed: bool,
}

impl Default for LoginPanelState {
    fn default() -> Self {
        Self {
            go_to_login: false,
            closed: true,
        }
    }
}

impl LoginPanelState {
    pub fn is_open(&self) -> bool {
        self.go_to_login && !self.closed
    }
}

/// Timer jobs owned by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingJob {
    ScrollTick,
    RotateBackground,
    CompactHeader,
}

/// Services the controller holds for its lifetime.
#[derive(Clone)]
pub struct LandingServices {
    pub auth: Arc<dyn AuthenticationService>,
    pub cache: Arc<dyn DataCache>,
    pub toaster: Arc<dyn Toaster>,
}

/// View state and timers for the landing page.
pub struct LandingController {
    config: LandingConfig,
    services: LandingServices,
    scheduler: Scheduler<LandingJob>,
    carousel: Carousel,
    scroll: ScrollAnimator,
    rotator: BackgroundRotator,
    rotator_timer: Option<TimerId>,
    call_to_action: CallToAction,
    login: LoginPanelState,
    card_active: bool,
    slack_disabled: bool,
}

impl LandingController {
    pub fn new(config: LandingConfig, services: LandingServices, clock: Arc<dyn Clock>) -> Self {
        let carousel = Carousel::new(CarouselLayout {
            track_id: config.track_id.clone(),
            reference_card_id: config.reference_card_id.clone(),
            gap: config.card_gap,
            wide_breakpoint: config.wide_breakpoint,
        });
        let rotator = BackgroundRotator::new(config.parallax_class.clone(), config.background_frames);
        Self {
            config,
            services,
            scheduler: Scheduler::new(clock),
            carousel,
            scroll: ScrollAnimator::new(),
            rotator,
            rotator_timer: None,
            call_to_action: CallToAction::default(),
            login: LoginPanelState::default(),
            card_active: true,
            slack_disabled: true,
        }
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn call_to_action(&self) -> CallToAction {
        self.call_to_action
    }

    pub fn button_text(&self) -> &'static str {
        self.call_to_action.label()
    }

    pub fn login_panel(&self) -> LoginPanelState {
        self.login
    }

    pub fn carousel(&self) -> CarouselState {
        self.carousel.state()
    }

    pub fn card_active(&self) -> bool {
        self.card_active
    }

    pub fn slack_disabled(&self) -> bool {
        self.slack_disabled
    }

    pub fn toaster(&self) -> &Arc<dyn Toaster> {
        &self.services.toaster
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_running()
    }

    pub fn has_pending_timers(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Time until the next timer deadline, for the host's sleep loop.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.scheduler.time_until_next()
    }

    /// Element ids `init()` will measure. A host that mounts elements
    /// asynchronously should wait for these before calling `init()`.
    pub fn init_targets(&self) -> Vec<String> {
        match self.cached_scroll_target() {
            Ok(Some(section_id)) => vec![section_id],
            _ => Vec::new(),
        }
    }

    /// Set up the page. Geometry failures are logged and skipped so one
    /// missing element never prevents the remaining steps.
    pub fn init(&mut self, navigator: &dyn Navigator, document: &mut dyn Document) {
        let logged_in = self.services.auth.is_logged_in();
        self.call_to_action = if logged_in {
            CallToAction::GoToServices
        } else {
            CallToAction::GetStartedNow
        };

        if logged_in && navigator.current_url() == ROOT_ROUTE {
            tracing::info!("Signed-in visitor on landing page, redirecting to {}", SERVICES_ROUTE);
            navigator.navigate_by_url(SERVICES_ROUTE);
        }

        match self.cached_scroll_target() {
            Ok(Some(section_id)) => {
                if let Err(e) = self.scroll_to_section(&section_id, document) {
                    tracing::warn!("Skipping scroll to cached section: {}", e);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring cached scroll request: {}", e),
        }

        self.scheduler
            .after(self.config.header_delay(), LandingJob::CompactHeader);
        self.start_rotator();
    }

    /// Call-to-action click: signed-in users go to services, everyone
    /// else gets the sign-in panel.
    pub fn get_started_now(&mut self, navigator: &dyn Navigator) {
        if self.services.auth.is_logged_in() {
            navigator.navigate_by_url(SERVICES_ROUTE);
        } else {
            self.on_login_clicked(true);
        }
    }

    pub fn on_login_clicked(&mut self, go_to_login: bool) {
        self.login.go_to_login = go_to_login;
        self.login.closed = false;
    }

    pub fn close_sidebar(&mut self) {
        self.login.go_to_login = false;
        self.login.closed = true;
    }

    pub fn page_left(&mut self, geometry: &dyn GeometryProvider) -> LandingResult<CarouselState> {
        self.carousel.page_left(geometry)
    }

    pub fn page_right(&mut self, geometry: &dyn GeometryProvider) -> LandingResult<CarouselState> {
        self.carousel.page_right(geometry)
    }

    /// Smooth-scroll the page to `target`, replacing any running scroll.
    pub fn animate_scroll_to<D: Document + ?Sized>(
        &mut self,
        document: &D,
        target: f64,
        duration: Duration,
    ) -> bool {
        self.scroll.animate_scroll_to(
            &mut self.scheduler,
            LandingJob::ScrollTick,
            document,
            target,
            duration,
            self.config.scroll_tick(),
        )
    }

    /// Dispatch every job whose deadline has passed. Returns how many ran.
    pub fn run_due(&mut self, document: &mut dyn Document) -> usize {
        let mut ran = 0;
        while let Some(fired) = self.scheduler.pop_due() {
            ran += 1;
            match fired.job {
                LandingJob::ScrollTick => {
                    if let Some(ScrollTick::Snapped(to)) =
                        self.scroll.on_tick(&mut self.scheduler, document)
                    {
                        tracing::debug!("Scroll easing reversed, snapped to {}", to);
                    }
                }
                LandingJob::RotateBackground => {
                    if let Some(id) = self.rotator.tick(document) {
                        tracing::trace!("Background layer is now {}", id);
                    }
                }
                LandingJob::CompactHeader => {
                    if let Err(e) =
                        document.append_class(&self.config.header_id, &self.config.header_class)
                    {
                        tracing::warn!("Could not compact header: {}", e);
                    }
                }
            }
        }
        ran
    }

    /// Cancel every timer. The controller can be re-initialized afterwards.
    pub fn teardown(&mut self) {
        self.scroll.stop(&mut self.scheduler);
        self.scheduler.cancel_all();
        self.rotator_timer = None;
        tracing::debug!("Landing timers cancelled");
    }

    fn start_rotator(&mut self) {
        if let Some(timer) = self.rotator_timer.take() {
            self.scheduler.cancel(timer);
        }
        self.rotator_timer = Some(
            self.scheduler
                .every(self.config.rotator_interval(), LandingJob::RotateBackground),
        );
    }

    /// The section id to scroll to, when the cache asks for one.
    fn cached_scroll_target(&self) -> LandingResult<Option<String>> {
        let cache = &self.services.cache;
        if cache.get(SCROLL_FLAG_KEY) != Some(Value::Bool(true)) {
            return Ok(None);
        }
        match cache.get(SCROLL_ID_KEY) {
            Some(Value::String(id)) => Ok(Some(id)),
            Some(other) => Err(LandingError::CacheValue {
                key: SCROLL_ID_KEY.to_string(),
                found: other.to_string(),
            }),
            None => Err(LandingError::CacheValue {
                key: SCROLL_ID_KEY.to_string(),
                found: "nothing".to_string(),
            }),
        }
    }

    fn scroll_to_section(&mut self, section_id: &str, document: &dyn Document) -> LandingResult<()> {
        let top = document.element_metrics(section_id)?.offset_top;
        let duration = Duration::from_millis(self.config.scroll_duration_ms);
        self.animate_scroll_to(document, f64::from(top), duration);
        Ok(())
    }
}
