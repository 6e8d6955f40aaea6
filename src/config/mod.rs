// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: the interface
//! language, widget-wide zoom defaults and the containers shown in the
//! gallery, stored in a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_hover_zoom::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//! config.zoom.increment_count = Some(10);
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::hover_zoom::{LoadDetection, Options, StopRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedHoverZoom";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub zoom: ZoomDefaults,
    #[serde(default)]
    pub containers: Vec<ContainerConfig>,
}

/// Widget options shared by every container unless overridden.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoomDefaults {
    #[serde(default)]
    pub loading_message: Option<String>,
    #[serde(default)]
    pub increment_count: Option<u32>,
    #[serde(default)]
    pub step_delay_ms: Option<u64>,
    #[serde(default)]
    pub load_detection: Option<LoadDetection>,
    #[serde(default)]
    pub stop_rule: Option<StopRule>,
}

/// A named container and the image it hosts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    pub id: String,
    pub image: PathBuf,
    #[serde(default = "default_container_width")]
    pub width: u32,
    #[serde(default = "default_container_height")]
    pub height: u32,
    #[serde(default)]
    pub loading_message: Option<String>,
    #[serde(default)]
    pub increment_count: Option<u32>,
    #[serde(default)]
    pub step_delay_ms: Option<u64>,
}

fn default_container_width() -> u32 {
    DEFAULT_CONTAINER_WIDTH
}

fn default_container_height() -> u32 {
    DEFAULT_CONTAINER_HEIGHT
}

impl ContainerConfig {
    /// Creates a container entry with the default gallery size.
    #[must_use]
    pub fn new(id: impl Into<String>, image: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            image: image.into(),
            width: DEFAULT_CONTAINER_WIDTH,
            height: DEFAULT_CONTAINER_HEIGHT,
            loading_message: None,
            increment_count: None,
            step_delay_ms: None,
        }
    }

    /// Builds the widget options, falling back to `defaults` for every
    /// field this container leaves unset.
    #[must_use]
    pub fn options(&self, defaults: &ZoomDefaults) -> Options {
        let mut options = Options::new(self.width, self.height)
            .with_load_detection(defaults.load_detection.unwrap_or_default())
            .with_stop_rule(defaults.stop_rule.unwrap_or_default());

        if let Some(message) = self
            .loading_message
            .as_ref()
            .or(defaults.loading_message.as_ref())
        {
            options = options.with_loading_message(message.clone());
        }
        if let Some(count) = self.increment_count.or(defaults.increment_count) {
            options = options.with_increment_count(count);
        }
        if let Some(delay) = self.step_delay_ms.or(defaults.step_delay_ms) {
            options = options.with_step_delay_ms(delay);
        }
        options
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
