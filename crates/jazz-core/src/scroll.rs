//! Eased smooth scrolling of the page container.
//!
//! Position at tick `n` follows `start + diff * (0.5 - 0.5 * cos(n * step))`
//! with `step = π / ticks`. The curve is only monotonic on `[0, π]`; past
//! that it turns back. Instead of clamping `n`, each tick compares the
//! sign of the eased delta with the direction fixed at start, and a
//! reversal snaps the position to the target and ends the animation.

use std::f64::consts::PI;
use std::time::Duration;

use crate::document::ScrollSurface;
use crate::scheduler::{Scheduler, TimerId};

/// What a single animation tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTick {
    /// Position written, animation continues
    Moved(f64),
    /// Easing reversed; position snapped to the target, animation over
    Snapped(f64),
    /// Position already at the target, nothing written, animation over
    Arrived,
}

impl ScrollTick {
    pub fn is_finished(&self) -> bool {
        !matches!(self, ScrollTick::Moved(_))
    }
}

/// One in-flight scroll, from `start` to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start: f64,
    target: f64,
    step: f64,
    count: u32,
    forward: bool,
}

impl ScrollAnimation {
    /// Plan an animation. Returns `None` when `start` already equals
    /// `target`, in which case nothing should be scheduled.
    pub fn new(start: f64, target: f64, duration: Duration, tick: Duration) -> Option<Self> {
        if start == target {
            return None;
        }
        let ticks = (duration.as_nanos() as f64 / tick.as_nanos().max(1) as f64).max(1.0);
        Some(Self {
            start,
            target,
            step: PI / ticks,
            count: 0,
            forward: target > start,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    fn eased(&self, count: u32) -> f64 {
        (self.target - self.start) * (0.5 - 0.5 * (f64::from(count) * self.step).cos())
    }

    /// Advance one sample and write the new position to `surface`.
    pub fn tick<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S) -> ScrollTick {
        if surface.scroll_top() == self.target {
            return ScrollTick::Arrived;
        }

        let previous = self.eased(self.count);
        self.count += 1;
        let current = self.eased(self.count);
        let velocity = current - previous;

        if (self.forward && velocity < 0.0) || (!self.forward && velocity > 0.0) {
            surface.set_scroll_top(self.target);
            return ScrollTick::Snapped(self.target);
        }

        let position = self.start + current;
        surface.set_scroll_top(position);
        ScrollTick::Moved(position)
    }
}

/// Single-slot owner of the current scroll animation and its timer.
///
/// Starting a new animation cancels whatever was running.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    current: Option<(ScrollAnimation, TimerId)>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn timer(&self) -> Option<TimerId> {
        self.current.as_ref().map(|(_, id)| *id)
    }

    /// Start scrolling `surface` to `target`, sampling every `tick`.
    ///
    /// Returns `false` if the surface is already at the target; in that
    /// case no timer is scheduled and any running animation is stopped.
    pub fn animate_scroll_to<J: Clone, S: ScrollSurface + ?Sized>(
        &mut self,
        scheduler: &mut Scheduler<J>,
        job: J,
        surface: &S,
        target: f64,
        duration: Duration,
        tick: Duration,
    ) -> bool {
        self.stop(scheduler);
        let Some(animation) = ScrollAnimation::new(surface.scroll_top(), target, duration, tick)
        else {
            return false;
        };
        tracing::debug!(
            from = surface.scroll_top(),
            to = target,
            "Starting smooth scroll"
        );
        let timer = scheduler.every(tick, job);
        self.current = Some((animation, timer));
        true
    }

    /// Run one tick of the current animation, if any. Cancels the timer
    /// once the animation finishes.
    pub fn on_tick<J: Clone, S: ScrollSurface + ?Sized>(
        &mut self,
        scheduler: &mut Scheduler<J>,
        surface: &mut S,
    ) -> Option<ScrollTick> {
        let (animation, _) = self.current.as_mut()?;
        let outcome = animation.tick(surface);
        if outcome.is_finished() {
            self.stop(scheduler);
        }
        Some(outcome)
    }

    /// Cancel the running animation, leaving the position where it is.
    pub fn stop<J: Clone>(&mut self, scheduler: &mut Scheduler<J>) {
        if let Some((_, timer)) = self.current.take() {
            scheduler.cancel(timer);
        }
    }
}
