//! Card carousel paging.
//!
//! The carousel is a row of equally sized cards translated horizontally by
//! `offset` pixels. Paging moves the row by one card width (rendered width
//! plus the gap). Wide viewports show four cards at once, narrow ones show
//! a single card, which changes where the row has to stop.
//!
//! Item count and width are measured on every call so that a resize or a
//! changed card list between clicks is picked up without a recompute hook.

use crate::document::GeometryProvider;
use crate::error::LandingResult;

/// Cards visible at once on a wide viewport
const WIDE_VISIBLE_CARDS: i32 = 4;

/// Transient paging state, owned by the landing controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// Horizontal translation in pixels, never positive
    pub offset: i32,
    /// Row is at its leftmost position (`offset == 0`)
    pub at_start: bool,
    /// No further leftward paging is possible
    pub at_end: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            offset: 0,
            at_start: true,
            at_end: false,
        }
    }
}

/// Where the carousel elements live and how they are spaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Element whose children are the cards
    pub track_id: String,
    /// Card measured to obtain the item width
    pub reference_card_id: String,
    /// Gap added to the measured card width
    pub gap: i32,
    /// Viewports strictly wider than this are "wide"
    pub wide_breakpoint: i32,
}

/// A fresh measurement of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselGeometry {
    pub item_count: i32,
    pub item_width: i32,
    pub viewport_width: i32,
}

impl CarouselGeometry {
    /// Measure the carousel. The reference card is only measured when
    /// there is at least one card.
    pub fn measure(layout: &CarouselLayout, geometry: &dyn GeometryProvider) -> LandingResult<Self> {
        let track = geometry.element_metrics(&layout.track_id)?;
        let item_count = i32::try_from(track.child_count).unwrap_or(i32::MAX);
        let item_width = if item_count > 0 {
            geometry.element_metrics(&layout.reference_card_id)?.offset_width + layout.gap
        } else {
            0
        };
        Ok(Self {
            item_count,
            item_width,
            viewport_width: geometry.viewport_width()?,
        })
    }

    fn is_wide(&self, layout: &CarouselLayout) -> bool {
        self.viewport_width > layout.wide_breakpoint
    }

    /// Whether a leftward page is allowed from `offset`.
    ///
    /// The boundary is checked against the current offset, before moving:
    /// `-(n-5)*w` on wide viewports (resting end `-(n-4)*w`) and
    /// `-(n-1)*w` on narrow ones (resting end is the boundary itself).
    pub fn can_page_left(&self, layout: &CarouselLayout, offset: i32) -> bool {
        if self.item_count == 0 {
            return false;
        }
        if self.is_wide(layout) {
            self.item_count > WIDE_VISIBLE_CARDS
                && offset >= -(self.item_count - WIDE_VISIBLE_CARDS - 1) * self.item_width
        } else {
            offset > -(self.item_count - 1) * self.item_width
        }
    }

    /// The offset at which the last card is fully in view.
    pub fn end_offset(&self, layout: &CarouselLayout) -> i32 {
        if self.is_wide(layout) {
            -(self.item_count - WIDE_VISIBLE_CARDS) * self.item_width
        } else {
            -(self.item_count - 1) * self.item_width
        }
    }
}

/// Carousel engine: layout plus the current paging state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    layout: CarouselLayout,
    state: CarouselState,
}

impl Carousel {
    pub fn new(layout: CarouselLayout) -> Self {
        Self {
            layout,
            state: CarouselState::default(),
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    /// Move the row one card to the left, revealing cards on the right.
    pub fn page_left(&mut self, geometry: &dyn GeometryProvider) -> LandingResult<CarouselState> {
        let measured = CarouselGeometry::measure(&self.layout, geometry)?;
        let state = &mut self.state;

        if measured.item_count == 0 {
            state.at_end = true;
            return Ok(*state);
        }

        if measured.can_page_left(&self.layout, state.offset) {
            state.offset -= measured.item_width;
            tracing::debug!(offset = state.offset, "Carousel paged left");
        }
        state.at_start = state.offset == 0;
        state.at_end = state.offset == measured.end_offset(&self.layout)
            || !measured.can_page_left(&self.layout, state.offset);
        Ok(*state)
    }

    /// Move the row one card to the right, back toward the first card.
    pub fn page_right(&mut self, geometry: &dyn GeometryProvider) -> LandingResult<CarouselState> {
        let measured = CarouselGeometry::measure(&self.layout, geometry)?;
        let state = &mut self.state;
        state.at_end = false;

        if measured.item_count == 0 {
            state.at_start = true;
            return Ok(*state);
        }

        if state.offset != 0 {
            state.offset = (state.offset + measured.item_width).min(0);
            tracing::debug!(offset = state.offset, "Carousel paged right");
        }
        state.at_start = state.offset == 0;
        Ok(*state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::error::LandingError;

    const CARD: i32 = 197;
    const STEP: i32 = CARD + 3;

    fn layout() -> CarouselLayout {
        CarouselLayout {
            track_id: "scroll-me".to_string(),
            reference_card_id: "first-card".to_string(),
            gap: 3,
            wide_breakpoint: 840,
        }
    }

    fn doc(viewport: i32, count: usize) -> MemoryDocument {
        MemoryDocument::new(viewport).with_carousel("scroll-me", "first-card", count, CARD)
    }

    #[test]
    fn initial_state_is_at_start() {
        let carousel = Carousel::new(layout());
        assert_eq!(
            carousel.state(),
            CarouselState {
                offset: 0,
                at_start: true,
                at_end: false
            }
        );
    }

    #[test]
    fn wide_viewport_stops_with_four_cards_visible() {
        let doc = doc(1280, 7);
        let mut carousel = Carousel::new(layout());

        let first = carousel.page_left(&doc).unwrap();
        assert_eq!(first.offset, -STEP);
        assert!(!first.at_start);
        assert!(!first.at_end);

        carousel.page_left(&doc).unwrap();
        let third = carousel.page_left(&doc).unwrap();
        assert_eq!(third.offset, -3 * STEP);
        assert!(third.at_end);

        let blocked = carousel.page_left(&doc).unwrap();
        assert_eq!(blocked.offset, -3 * STEP);
        assert!(blocked.at_end);
    }

    #[test]
    fn wide_viewport_with_four_cards_does_not_move() {
        let doc = doc(1280, 4);
        let mut carousel = Carousel::new(layout());
        let state = carousel.page_left(&doc).unwrap();
        assert_eq!(state.offset, 0);
        assert!(state.at_start);
        assert!(state.at_end);
    }

    #[test]
    fn narrow_viewport_walks_to_last_card() {
        let doc = doc(840, 3);
        let mut carousel = Carousel::new(layout());

        assert!(!carousel.page_left(&doc).unwrap().at_end);
        let last = carousel.page_left(&doc).unwrap();
        assert_eq!(last.offset, -2 * STEP);
        assert!(last.at_end);
        assert_eq!(carousel.page_left(&doc).unwrap().offset, -2 * STEP);
    }

    #[test]
    fn breakpoint_width_counts_as_narrow() {
        // Exactly 840 pages one card at a time; only wider shows four.
        let mut carousel = Carousel::new(layout());
        let narrow = doc(840, 4);
        let state = carousel.page_left(&narrow).unwrap();
        assert_eq!(state.offset, -STEP);
        assert!(!state.at_end);

        let mut carousel = Carousel::new(layout());
        let wide = doc(841, 4);
        let state = carousel.page_left(&wide).unwrap();
        assert_eq!(state.offset, 0);
        assert!(state.at_end);
    }

    #[test]
    fn page_right_returns_to_start_and_clears_end() {
        let doc = doc(600, 3);
        let mut carousel = Carousel::new(layout());
        carousel.page_left(&doc).unwrap();
        carousel.page_left(&doc).unwrap();

        let state = carousel.page_right(&doc).unwrap();
        assert_eq!(state.offset, -STEP);
        assert!(!state.at_end);
        assert!(!state.at_start);

        let state = carousel.page_right(&doc).unwrap();
        assert_eq!(state.offset, 0);
        assert!(state.at_start);

        let state = carousel.page_right(&doc).unwrap();
        assert_eq!(state.offset, 0);
        assert!(state.at_start);
    }

    #[test]
    fn page_right_clamps_at_zero_after_cards_grow() {
        let mut doc = doc(600, 3);
        let mut carousel = Carousel::new(layout());
        carousel.page_left(&doc).unwrap();

        // Cards grew after a resize: one step would overshoot zero.
        doc = doc.with_carousel("scroll-me", "first-card", 3, CARD * 2);
        let state = carousel.page_right(&doc).unwrap();
        assert_eq!(state.offset, 0);
        assert!(state.at_start);
    }

    #[test]
    fn empty_carousel_reports_boundaries() {
        let doc = doc(1280, 0);
        let mut carousel = Carousel::new(layout());

        let left = carousel.page_left(&doc).unwrap();
        assert_eq!(left.offset, 0);
        assert!(left.at_end);

        let right = carousel.page_right(&doc).unwrap();
        assert_eq!(right.offset, 0);
        assert!(right.at_start);
        assert!(!right.at_end);
    }

    #[test]
    fn missing_track_leaves_state_untouched() {
        let doc = MemoryDocument::new(1280);
        let mut carousel = Carousel::new(layout());
        let err = carousel.page_left(&doc).unwrap_err();
        assert!(matches!(err, LandingError::ElementNotFound(id) if id == "scroll-me"));
        assert_eq!(carousel.state(), CarouselState::default());
    }

    #[test]
    fn remeasures_viewport_on_every_call() {
        let mut doc = doc(1280, 6);
        let mut carousel = Carousel::new(layout());
        carousel.page_left(&doc).unwrap();
        carousel.page_left(&doc).unwrap();
        assert!(carousel.state().at_end);

        // Shrinking to a narrow viewport unlocks the remaining cards.
        doc.set_viewport_width(500);
        let state = carousel.page_left(&doc).unwrap();
        assert_eq!(state.offset, -3 * STEP);
        assert!(!state.at_end);
    }
}
