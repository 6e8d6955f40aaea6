// SPDX-License-Identifier: MPL-2.0
//! Shared image slot of a zoom container.
//!
//! The loader fills the slot once decoding finishes; the widget inspects it
//! to learn whether its image has completed. A filled slot never empties.

use super::ImageData;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Default)]
pub struct ImageSlot {
    inner: Arc<OnceLock<ImageData>>,
}

impl ImageSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds a completed image.
    #[must_use]
    pub fn filled(image: ImageData) -> Self {
        let slot = Self::new();
        slot.fill(image);
        slot
    }

    /// Stores the decoded image. Returns false if the slot was already filled.
    pub fn fill(&self, image: ImageData) -> bool {
        self.inner.set(image).is_ok()
    }

    /// Returns the image once it has completed loading.
    #[must_use]
    pub fn get(&self) -> Option<&ImageData> {
        self.inner.get()
    }
}
