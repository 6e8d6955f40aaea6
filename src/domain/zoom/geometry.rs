// SPDX-License-Identifier: MPL-2.0
//! Fit, pose and interpolation math for the hover zoom widget.
//!
//! All arithmetic is plain `f64`; values are truncated toward zero when a
//! pose is written, matching integer pixel placement.

use super::newtypes::{IncrementCount, TargetSize};

/// Absorbs the rounding error of `natural * (target / natural)` so the
/// limiting axis floors to the target itself.
const FLOOR_EPSILON: f64 = 1e-6;

/// Unscaled image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Integer pixel offset inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

/// Scaled-to-fit geometry computed once when the image becomes ready.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// `min(target_w / natural_w, target_h / natural_h)`.
    pub scale: f64,
    pub width: i32,
    pub height: i32,
    /// Top-left position centering the scaled image in the container.
    pub center: Offset,
}

impl Fit {
    /// Computes the aspect-preserving fit of `natural` inside `target`.
    #[must_use]
    pub fn compute(natural: NaturalSize, target: TargetSize) -> Self {
        let target_w = f64::from(target.width());
        let target_h = f64::from(target.height());
        let natural_w = f64::from(natural.width);
        let natural_h = f64::from(natural.height);

        let scale = (target_w / natural_w).min(target_h / natural_h);
        let width = floor_px(natural_w * scale);
        let height = floor_px(natural_h * scale);

        let center = Offset {
            x: floor_px((target_w - f64::from(width)) / 2.0),
            y: floor_px((target_h - f64::from(height)) / 2.0),
        };

        Self {
            scale,
            width,
            height,
            center,
        }
    }

    /// The centered, scaled pose (idle state).
    #[must_use]
    pub fn pose(&self) -> Pose {
        Pose {
            left: self.center.x,
            top: self.center.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn floor_px(value: f64) -> i32 {
    (value + FLOOR_EPSILON).floor() as i32
}

/// Position and size of the image relative to the container's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pose {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Pose {
    /// Moves every quantity one increment toward `target`, truncating to
    /// whole pixels.
    #[must_use]
    pub fn step_toward(self, target: &TargetPose, increments: IncrementCount) -> Pose {
        Pose {
            left: truncate(approach(f64::from(self.left), target.left, increments)),
            top: truncate(approach(f64::from(self.top), target.top, increments)),
            width: truncate(approach(f64::from(self.width), target.width, increments)),
            height: truncate(approach(f64::from(self.height), target.height, increments)),
        }
    }
}

/// Pose the animation is heading toward; fractional until applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TargetPose {
    /// Target while idle: the centered fit.
    #[must_use]
    pub fn idle(fit: &Fit) -> Self {
        Self {
            left: f64::from(fit.center.x),
            top: f64::from(fit.center.y),
            width: f64::from(fit.width),
            height: f64::from(fit.height),
        }
    }

    /// Target while hovering: natural size, panned toward the pointer.
    ///
    /// `pointer_offset` is the pointer position relative to the container's
    /// top-left corner. The pan is scaled by how far the image is currently
    /// zoomed relative to the container.
    #[must_use]
    pub fn hover(
        current: Pose,
        natural: NaturalSize,
        target: TargetSize,
        pointer_offset: (f64, f64),
    ) -> Self {
        let width_ratio = f64::from(current.width) / f64::from(target.width());
        let height_ratio = f64::from(current.height) / f64::from(target.height());
        Self {
            left: width_ratio * -pointer_offset.0 / 2.0,
            top: height_ratio * -pointer_offset.1 / 2.0,
            width: f64::from(natural.width),
            height: f64::from(natural.height),
        }
    }
}

/// One linear interpolation step: closes `1 / increments` of the gap.
#[must_use]
pub fn approach(current: f64, target: f64, increments: IncrementCount) -> f64 {
    let step = (current - target) / increments.as_divisor();
    current - step
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i32 {
    value.trunc() as i32
}
