// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::hover_zoom;
use iced::window;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Widget messages are tagged
/// with the index of the gallery entry they belong to.
#[derive(Debug, Clone)]
pub enum Message {
    Zoom(usize, hover_zoom::Message),
    /// Background decode of an entry's image finished.
    ImageLoaded {
        index: usize,
        result: Result<ImageData, Error>,
    },
    /// The window asked to close; widgets are disposed first.
    CloseRequested(window::Id),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
    /// Settings file to read instead of the per-user one.
    pub config_path: Option<PathBuf>,
    /// Container width for images given on the command line.
    pub width: Option<u32>,
    /// Container height for images given on the command line.
    pub height: Option<u32>,
    /// Images to show in addition to the configured containers.
    pub images: Vec<PathBuf>,
}
