// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`zoom`]: Hover zoom geometry ([`Fit`](zoom::Fit), [`Pose`](zoom::Pose),
//!   [`TargetPose`](zoom::TargetPose)) and value objects
//!   ([`IncrementCount`](zoom::IncrementCount), [`StepDelay`](zoom::StepDelay),
//!   [`TargetSize`](zoom::TargetSize))

pub mod zoom;
