//! Property-based tests for carousel paging and smooth scrolling
//!
//! Uses proptest to verify the boundary invariants hold for any viewport,
//! card count, card width and click sequence.

use std::time::Duration;

use jazz_core::{
    Carousel, CarouselLayout, MemoryDocument, ScrollAnimation, ScrollSurface,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn layout() -> CarouselLayout {
    CarouselLayout {
        track_id: "scroll-me".to_string(),
        reference_card_id: "first-card".to_string(),
        gap: 3,
        wide_breakpoint: 840,
    }
}

fn document(viewport: i32, count: usize, card_width: i32) -> MemoryDocument {
    MemoryDocument::new(viewport).with_carousel("scroll-me", "first-card", count, card_width)
}

/// Paging clicks: true = left, false = right
fn clicks_strategy(max: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..max)
}

fn narrow_viewport() -> impl Strategy<Value = i32> {
    320..=840i32
}

fn wide_viewport() -> impl Strategy<Value = i32> {
    841..=2560i32
}

// ============================================================================
// Carousel Properties
// ============================================================================

proptest! {
    /// Narrow viewports never page past the last card, and report the end
    /// exactly when they get there.
    #[test]
    fn narrow_never_passes_last_card(
        viewport in narrow_viewport(),
        count in 1usize..20,
        card_width in 50..400i32,
        lefts in 0usize..40,
    ) {
        let doc = document(viewport, count, card_width);
        let step = card_width + 3;
        let boundary = -(count as i32 - 1) * step;
        let mut carousel = Carousel::new(layout());

        for _ in 0..lefts {
            let state = carousel.page_left(&doc).unwrap();
            prop_assert!(state.offset >= boundary);
            prop_assert_eq!(state.at_end, state.offset == boundary);
        }
    }

    /// Wide viewports with more than four cards move while the offset is
    /// at or above -(n-5)*w, and so come to rest at -(n-4)*w.
    #[test]
    fn wide_respects_four_card_window(
        viewport in wide_viewport(),
        count in 5usize..20,
        card_width in 50..400i32,
    ) {
        let doc = document(viewport, count, card_width);
        let step = card_width + 3;
        let check = -(count as i32 - 5) * step;
        let mut carousel = Carousel::new(layout());

        for _ in 0..count + 5 {
            let before = carousel.state().offset;
            let state = carousel.page_left(&doc).unwrap();
            if before >= check {
                prop_assert_eq!(state.offset, before - step);
            } else {
                prop_assert_eq!(state.offset, before);
            }
        }
        prop_assert_eq!(carousel.state().offset, -(count as i32 - 4) * step);
        prop_assert!(carousel.state().at_end);
    }

    /// Any click sequence keeps the offset non-positive, card aligned, and keeps
    /// at_start in sync with the offset.
    #[test]
    fn offsets_stay_in_range(
        viewport in 320..2560i32,
        count in 0usize..15,
        card_width in 50..400i32,
        clicks in clicks_strategy(60),
    ) {
        let doc = document(viewport, count, card_width);
        let mut carousel = Carousel::new(layout());

        for left in clicks {
            let state = if left {
                carousel.page_left(&doc).unwrap()
            } else {
                carousel.page_right(&doc).unwrap()
            };
            prop_assert!(state.offset <= 0);
            prop_assert_eq!(state.at_start, state.offset == 0);
            prop_assert_eq!(state.offset % (card_width + 3), 0);
            if !left {
                prop_assert!(!state.at_end);
            }
        }
    }

    /// An empty carousel never moves and reports whichever boundary was
    /// asked about.
    #[test]
    fn empty_carousel_is_pinned(viewport in 320..2560i32, clicks in clicks_strategy(20)) {
        let doc = document(viewport, 0, 200);
        let mut carousel = Carousel::new(layout());
        for left in clicks {
            let state = if left {
                let state = carousel.page_left(&doc).unwrap();
                prop_assert!(state.at_end);
                state
            } else {
                let state = carousel.page_right(&doc).unwrap();
                prop_assert!(state.at_start);
                state
            };
            prop_assert_eq!(state.offset, 0);
        }
    }
}

// ============================================================================
// Smooth Scroll Properties
// ============================================================================

proptest! {
    /// Every animation ends exactly on its target, moves monotonically,
    /// and finishes within one tick past its duration.
    #[test]
    fn scroll_lands_on_target(
        start in 0u32..5000,
        target in 0u32..5000,
        duration_ms in 10u64..2000,
    ) {
        prop_assume!(start != target);
        let (start, target) = (f64::from(start), f64::from(target));
        let tick = Duration::from_millis(10);
        let mut doc = MemoryDocument::new(1024);
        doc.scroll_externally(start);

        let mut animation =
            ScrollAnimation::new(start, target, Duration::from_millis(duration_ms), tick).unwrap();
        let budget = duration_ms / 10 + 3;
        let mut finished = false;
        for _ in 0..budget {
            if animation.tick(&mut doc).is_finished() {
                finished = true;
                break;
            }
        }

        prop_assert!(finished);
        prop_assert_eq!(doc.scroll_top(), target);
        let writes = doc.scroll_writes();
        if target > start {
            prop_assert!(writes.windows(2).all(|pair| pair[1] >= pair[0]));
        } else {
            prop_assert!(writes.windows(2).all(|pair| pair[1] <= pair[0]));
        }
    }
}
