//! Background layer rotation.
//!
//! The landing background is a stack of decorative layers; CSS shows the
//! image matching the id of the `parallax-2` element and crossfades when
//! it changes. Rotation only has to cycle that id.

use crate::document::LayerSurface;

/// First frame assigned, so the first swap differs from the initial `bg1`
const FIRST_FRAME: u32 = 2;

/// Cyclic `bg{n}` id generator over `1..frames`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundRotator {
    class: String,
    next: u32,
    frames: u32,
}

impl BackgroundRotator {
    /// `frames` below 2 is treated as 2; config validation rejects it earlier.
    pub fn new(class: impl Into<String>, frames: u32) -> Self {
        let frames = frames.max(2);
        Self {
            class: class.into(),
            next: FIRST_FRAME.min(frames - 1),
            frames,
        }
    }

    /// Id the next successful tick will assign.
    pub fn next_id(&self) -> String {
        format!("bg{}", self.next)
    }

    /// Assign the next id to the layer. Returns the id, or `None` when the
    /// layer is not mounted, in which case the cycle does not advance.
    pub fn tick<L: LayerSurface + ?Sized>(&mut self, layers: &mut L) -> Option<String> {
        let id = self.next_id();
        if !layers.assign_layer_id(&self.class, &id) {
            return None;
        }
        self.next += 1;
        if self.next >= self.frames {
            self.next = 1;
        }
        Some(id)
    }
}
