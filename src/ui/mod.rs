// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`hover_zoom`] - Image zoom-on-hover component
//! - [`widgets`] - Custom Iced widgets (zoom frame canvas)

pub mod hover_zoom;
pub mod widgets;
