// SPDX-License-Identifier: MPL-2.0
pub mod zoom_frame;

pub use zoom_frame::ZoomFrame;
