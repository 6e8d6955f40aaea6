// SPDX-License-Identifier: MPL-2.0
//! Image handling for zoom containers.
//!
//! This module decodes image files and provides the slot through which a
//! container's image becomes visible to its widget.

pub mod image;
pub mod slot;

// Re-export commonly used types
pub use image::{load_image, ImageData};
pub use slot::ImageSlot;
