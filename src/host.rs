//! Desktop host document.
//!
//! Implements the `jazz-core` document traits over the Dioxus webview:
//!
//! - Geometry comes from `onmounted` handles. Measuring is async, so
//!   `refresh()` re-reads every registered element into a snapshot right
//!   before the controller needs it; the trait methods read the snapshot.
//! - The front parallax layer id and element class lists live in signals,
//!   so writes re-render the page instead of poking the DOM.
//! - Scroll writes go through `document::eval` on the page container. The
//!   signal is updated first; a failed eval is logged and the two may
//!   disagree until the next write.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use jazz_core::{
    ClassList, ElementMetrics, GeometryProvider, LandingError, LandingResult, LayerSurface,
    ScrollSurface,
};

/// Id of the scrolling page container, also measured as the viewport
pub const MAIN_ID: &str = "landing-main";

#[derive(Clone, Copy)]
pub struct DesktopDocument {
    mounted: Signal<HashMap<String, Rc<MountedData>>>,
    metrics: Signal<HashMap<String, ElementMetrics>>,
    child_counts: Signal<HashMap<String, usize>>,
    classes: Signal<HashMap<String, Vec<String>>>,
    layer_class: Signal<Option<String>>,
    layer_id: Signal<Option<String>>,
    scroll_top: Signal<f64>,
}

impl DesktopDocument {
    /// Create the document signals. Call from a hook so they are owned by
    /// the page's scope.
    pub fn new() -> Self {
        Self {
            mounted: Signal::new(HashMap::new()),
            metrics: Signal::new(HashMap::new()),
            child_counts: Signal::new(HashMap::new()),
            classes: Signal::new(HashMap::new()),
            layer_class: Signal::new(None),
            layer_id: Signal::new(None),
            scroll_top: Signal::new(0.0),
        }
    }

    /// Track a mounted element under `id`.
    pub fn register(&mut self, id: &str, event: MountedEvent) {
        self.mounted.write().insert(id.to_string(), event.data());
        self.classes.write().entry(id.to_string()).or_default();
    }

    /// Whether an element has reported its mount under `id`.
    pub fn is_registered(&self, id: &str) -> bool {
        self.mounted.read().contains_key(id)
    }

    /// Record how many children the element `id` renders.
    pub fn set_child_count(&mut self, id: &str, count: usize) {
        self.child_counts.write().insert(id.to_string(), count);
    }

    /// Mark the decorative layer with `class` as mounted.
    pub fn mount_layer(&mut self, class: &str) {
        self.layer_class.set(Some(class.to_string()));
    }

    /// Current id of the decorative layer, if it has been rotated.
    pub fn layer_id(&self) -> Option<String> {
        self.layer_id.read().clone()
    }

    /// Space-separated class attribute for `id`, starting with `base`.
    pub fn class_attr(&self, id: &str, base: &str) -> String {
        let classes = self.classes.read();
        match classes.get(id) {
            Some(extra) if !extra.is_empty() => format!("{} {}", base, extra.join(" ")),
            _ => base.to_string(),
        }
    }

    /// Re-measure every registered element.
    pub async fn refresh(&mut self) {
        let mounted: Vec<(String, Rc<MountedData>)> = self
            .mounted
            .read()
            .iter()
            .map(|(id, data)| (id.clone(), data.clone()))
            .collect();
        let scroll_top = *self.scroll_top.read();

        for (id, element) in mounted {
            match element.get_client_rect().await {
                Ok(rect) => {
                    let child_count = self.child_counts.read().get(&id).copied().unwrap_or(0);
                    let metrics = ElementMetrics {
                        offset_left: rect.origin.x.round() as i32,
                        offset_top: (rect.origin.y + scroll_top).round() as i32,
                        offset_width: rect.size.width.round() as i32,
                        child_count,
                    };
                    self.metrics.write().insert(id, metrics);
                }
                Err(e) => tracing::debug!("Could not measure #{}: {:?}", id, e),
            }
        }
    }
}

impl Default for DesktopDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryProvider for DesktopDocument {
    fn element_metrics(&self, id: &str) -> LandingResult<ElementMetrics> {
        self.metrics
            .read()
            .get(id)
            .copied()
            .ok_or_else(|| LandingError::ElementNotFound(id.to_string()))
    }

    fn viewport_width(&self) -> LandingResult<i32> {
        self.element_metrics(MAIN_ID).map(|main| main.offset_width)
    }
}

impl ScrollSurface for DesktopDocument {
    fn scroll_top(&self) -> f64 {
        *self.scroll_top.read()
    }

    fn set_scroll_top(&mut self, value: f64) {
        self.scroll_top.set(value);
        let write = document::eval(&format!(
            "document.getElementById('{}').scrollTop = {};",
            MAIN_ID, value
        ));
        spawn(async move {
            if let Err(e) = write.await {
                tracing::warn!("Scroll write to #{} failed: {:?}", MAIN_ID, e);
            }
        });
    }
}

impl LayerSurface for DesktopDocument {
    fn assign_layer_id(&mut self, class: &str, id: &str) -> bool {
        if self.layer_class.read().as_deref() != Some(class) {
            return false;
        }
        self.layer_id.set(Some(id.to_string()));
        true
    }
}

impl ClassList for DesktopDocument {
    fn append_class(&mut self, id: &str, class: &str) -> LandingResult<()> {
        let mut classes = self.classes.write();
        let list = classes
            .get_mut(id)
            .ok_or_else(|| LandingError::ElementNotFound(id.to_string()))?;
        list.push(class.to_string());
        Ok(())
    }
}
