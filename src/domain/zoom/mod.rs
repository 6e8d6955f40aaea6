// SPDX-License-Identifier: MPL-2.0
//! Hover zoom domain types.
//!
//! This module contains the framework-independent geometry of the hover
//! zoom widget: the scaled fit, the current pose and the interpolation step.

pub mod geometry;
pub mod newtypes;

// Re-export commonly used types
pub use geometry::{approach, Fit, NaturalSize, Offset, Pose, TargetPose};
pub use newtypes::{IncrementCount, StepDelay, TargetSize};
