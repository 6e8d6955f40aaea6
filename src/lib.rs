// SPDX-License-Identifier: MPL-2.0
//! `iced_hover_zoom` shows images scaled down to fit fixed-size containers
//! and smoothly zooms them to natural size under the pointer.
//!
//! The widget lives in [`ui::hover_zoom`]; its geometry and interpolation
//! are plain functions in [`domain::zoom`]. [`app`] wires a gallery of
//! widgets into an Iced application.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
