// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Widget**: Loading label and animation pacing of the hover zoom widget
//! - **Load detection**: Image-completion polling interval
//! - **Gallery**: Container size used for images passed on the command line

use crate::domain::zoom::newtypes::animation_bounds;

// ==========================================================================
// Widget Defaults
// ==========================================================================

/// Text shown inside the container while its image is still loading.
pub const DEFAULT_LOADING_MESSAGE: &str = "loading image...";

/// Default number of animation steps per transition (1 = instant snap).
pub const DEFAULT_INCREMENT_COUNT: u32 = animation_bounds::DEFAULT_INCREMENTS;

/// Default delay between animation ticks (in milliseconds).
pub const DEFAULT_STEP_DELAY_MS: u64 = animation_bounds::DEFAULT_DELAY_MS;

// ==========================================================================
// Load Detection Defaults
// ==========================================================================

/// Interval at which a polling widget checks whether its image completed.
pub const LOAD_POLL_INTERVAL_MS: u64 = 10;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Container width for images given on the command line.
pub const DEFAULT_CONTAINER_WIDTH: u32 = 188;

/// Container height for images given on the command line.
pub const DEFAULT_CONTAINER_HEIGHT: u32 = 250;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_INCREMENT_COUNT > 0);
    assert!(DEFAULT_STEP_DELAY_MS > 0);

    assert!(LOAD_POLL_INTERVAL_MS > 0);

    assert!(DEFAULT_CONTAINER_WIDTH > 0);
    assert!(DEFAULT_CONTAINER_HEIGHT > 0);
};
