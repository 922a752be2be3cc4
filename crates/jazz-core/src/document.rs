//! Host document capabilities.
//!
//! The landing logic never touches a live DOM. Everything it needs from
//! the rendering host goes through the four traits below, which the
//! desktop shell implements over mounted Dioxus elements and which
//! [`MemoryDocument`] implements for tests and headless runs.

use std::collections::HashMap;

use crate::error::{LandingError, LandingResult};

/// Layout measurements of a single element, in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementMetrics {
    pub offset_left: i32,
    pub offset_top: i32,
    pub offset_width: i32,
    pub child_count: usize,
}

/// Read-only layout queries.
pub trait GeometryProvider {
    /// Measure the element with the given id.
    fn element_metrics(&self, id: &str) -> LandingResult<ElementMetrics>;

    /// Width of the visible page area.
    fn viewport_width(&self) -> LandingResult<i32>;
}

/// The vertically scrolling page container.
pub trait ScrollSurface {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&mut self, value: f64);
}

/// Decorative layers located by class.
pub trait LayerSurface {
    /// Assign `id` to the first element carrying `class`.
    ///
    /// Returns `false` when no such element is mounted.
    fn assign_layer_id(&mut self, class: &str, id: &str) -> bool;
}

/// Class list mutation by element id.
pub trait ClassList {
    fn append_class(&mut self, id: &str, class: &str) -> LandingResult<()>;
}

/// Everything the landing controller needs from its host.
pub trait Document: GeometryProvider + ScrollSurface + LayerSurface + ClassList {}

impl<T: GeometryProvider + ScrollSurface + LayerSurface + ClassList> Document for T {}

/// In-memory document.
///
/// Holds element metrics, class lists and layer ids in plain maps and
/// records every scroll write so callers can inspect the trajectory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, ElementMetrics>,
    classes: HashMap<String, Vec<String>>,
    /// class -> id currently assigned to the first element with that class
    layers: HashMap<String, Option<String>>,
    viewport_width: Option<i32>,
    scroll_top: f64,
    scroll_writes: Vec<f64>,
}

impl MemoryDocument {
    pub fn new(viewport_width: i32) -> Self {
        Self {
            viewport_width: Some(viewport_width),
            ..Self::default()
        }
    }

    /// Insert or replace an element's metrics.
    pub fn insert_element(&mut self, id: impl Into<String>, metrics: ElementMetrics) {
        let id = id.into();
        self.classes.entry(id.clone()).or_default();
        self.elements.insert(id, metrics);
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
        self.classes.remove(id);
    }

    /// Lay out a carousel: a track with `count` children and a reference
    /// card `card_width` pixels wide.
    pub fn with_carousel(
        mut self,
        track_id: &str,
        card_id: &str,
        count: usize,
        card_width: i32,
    ) -> Self {
        self.insert_element(
            track_id,
            ElementMetrics {
                child_count: count,
                offset_width: card_width * count as i32,
                ..ElementMetrics::default()
            },
        );
        if count > 0 {
            self.insert_element(
                card_id,
                ElementMetrics {
                    offset_width: card_width,
                    ..ElementMetrics::default()
                },
            );
        }
        self
    }

    /// Mount a decorative layer with the given class.
    pub fn mount_layer(&mut self, class: impl Into<String>) {
        self.layers.entry(class.into()).or_insert(None);
    }

    pub fn set_viewport_width(&mut self, width: i32) {
        self.viewport_width = Some(width);
    }

    /// Current id of the layer with `class`, if mounted and assigned.
    pub fn layer_id(&self, class: &str) -> Option<&str> {
        self.layers.get(class).and_then(|id| id.as_deref())
    }

    /// Classes currently on the element with `id`.
    pub fn classes_of(&self, id: &str) -> &[String] {
        self.classes.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every value ever written through [`ScrollSurface::set_scroll_top`].
    pub fn scroll_writes(&self) -> &[f64] {
        &self.scroll_writes
    }

    /// Move the scroll position without recording a write (user scroll).
    pub fn scroll_externally(&mut self, value: f64) {
        self.scroll_top = value;
    }
}

impl GeometryProvider for MemoryDocument {
    fn element_metrics(&self, id: &str) -> LandingResult<ElementMetrics> {
        self.elements
            .get(id)
            .copied()
            .ok_or_else(|| LandingError::ElementNotFound(id.to_string()))
    }

    fn viewport_width(&self) -> LandingResult<i32> {
        self.viewport_width
            .ok_or_else(|| LandingError::ElementNotFound("viewport".to_string()))
    }
}

impl ScrollSurface for MemoryDocument {
    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, value: f64) {
        self.scroll_top = value;
        self.scroll_writes.push(value);
    }
}

impl LayerSurface for MemoryDocument {
    fn assign_layer_id(&mut self, class: &str, id: &str) -> bool {
        match self.layers.get_mut(class) {
            Some(slot) => {
                *slot = Some(id.to_string());
                true
            }
            None => false,
        }
    }
}

impl ClassList for MemoryDocument {
    fn append_class(&mut self, id: &str, class: &str) -> LandingResult<()> {
        let classes = self
            .classes
            .get_mut(id)
            .ok_or_else(|| LandingError::ElementNotFound(id.to_string()))?;
        classes.push(class.to_string());
        Ok(())
    }
}
