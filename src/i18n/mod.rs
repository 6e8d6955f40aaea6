// SPDX-License-Identifier: MPL-2.0
//! Localized strings for the gallery window and the widget's loading label.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale is picked from the command line first, then the config file, then
//! the operating system, and finally falls back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
