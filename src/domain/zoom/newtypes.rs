// SPDX-License-Identifier: MPL-2.0
//! Zoom widget newtypes.
//!
//! This module provides type-safe wrappers for the widget's pacing and
//! sizing values. Pacing values are unbounded above; zero means "not set".

use std::time::Duration;

// =============================================================================
// Animation Bounds
// =============================================================================

/// Animation pacing defaults.
pub mod animation_bounds {
    /// Default increment count.
    pub const DEFAULT_INCREMENTS: u32 = 5;
    /// Default tick delay in milliseconds.
    pub const DEFAULT_DELAY_MS: u64 = 20;
}

// =============================================================================
// IncrementCount
// =============================================================================

/// Number of animation steps per transition.
///
/// Each tick closes `1 / count` of the remaining gap. Zero is treated as
/// "not set" and yields the default, so the divisor is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IncrementCount(u32);

impl IncrementCount {
    /// Creates a new increment count. Zero yields the default.
    #[must_use]
    pub fn new(count: u32) -> Self {
        if count == 0 {
            return Self::default();
        }
        Self(count)
    }

    /// Returns the raw count.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the count as the per-tick divisor.
    #[must_use]
    pub fn as_divisor(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for IncrementCount {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_INCREMENTS)
    }
}

// =============================================================================
// StepDelay
// =============================================================================

/// Delay between two animation ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepDelay(u64);

impl StepDelay {
    /// Creates a new delay from milliseconds. Zero yields the default.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        if millis == 0 {
            return Self::default();
        }
        Self(millis)
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for StepDelay {
    fn default() -> Self {
        Self(animation_bounds::DEFAULT_DELAY_MS)
    }
}

// =============================================================================
// TargetSize
// =============================================================================

/// Container size in pixels; both sides are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSize {
    width: u32,
    height: u32,
}

impl TargetSize {
    /// Returns `None` when either side is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }
}

// =============================================================================
// Tests
// =============================================================================
