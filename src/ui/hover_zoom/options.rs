// SPDX-License-Identifier: MPL-2.0
//! Construction options of the hover zoom widget.
//!
//! An [`Options`] value is captured once at construction and never changes
//! afterwards. Only the target size is required; everything else falls back
//! to the defaults in [`crate::config::defaults`].

use crate::config::defaults::DEFAULT_LOADING_MESSAGE;
use crate::domain::zoom::{IncrementCount, StepDelay, TargetSize};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How the widget learns that its image finished loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadDetection {
    /// React to the loader's completion message.
    #[default]
    Notify,
    /// Inspect the container on a short repeating timer.
    Poll,
}

/// When the animation tick cancels itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopRule {
    /// Stop as soon as the image's left edge lands exactly on pixel 0.
    #[default]
    LeftAtZero,
    /// Stop once a tick leaves the pose unchanged.
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub target_width: u32,
    pub target_height: u32,
    pub loading_message: Option<String>,
    pub increment_count: Option<u32>,
    pub step_delay_ms: Option<u64>,
    pub load_detection: LoadDetection,
    pub stop_rule: StopRule,
}

impl Options {
    /// Creates options for a `target_width` × `target_height` container.
    #[must_use]
    pub fn new(target_width: u32, target_height: u32) -> Self {
        Self {
            target_width,
            target_height,
            loading_message: None,
            increment_count: None,
            step_delay_ms: None,
            load_detection: LoadDetection::default(),
            stop_rule: StopRule::default(),
        }
    }

    #[must_use]
    pub fn with_loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_increment_count(mut self, count: u32) -> Self {
        self.increment_count = Some(count);
        self
    }

    #[must_use]
    pub fn with_step_delay_ms(mut self, millis: u64) -> Self {
        self.step_delay_ms = Some(millis);
        self
    }

    #[must_use]
    pub fn with_load_detection(mut self, detection: LoadDetection) -> Self {
        self.load_detection = detection;
        self
    }

    #[must_use]
    pub fn with_stop_rule(mut self, rule: StopRule) -> Self {
        self.stop_rule = rule;
        self
    }

    /// Text of the transient loading label.
    #[must_use]
    pub fn loading_message(&self) -> &str {
        self.loading_message
            .as_deref()
            .unwrap_or(DEFAULT_LOADING_MESSAGE)
    }

    #[must_use]
    pub fn increment_count(&self) -> IncrementCount {
        self.increment_count
            .map(IncrementCount::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn step_delay(&self) -> StepDelay {
        self.step_delay_ms
            .map(StepDelay::from_millis)
            .unwrap_or_default()
    }

    /// Validates the required container size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] when either side is zero.
    pub fn target_size(&self) -> Result<TargetSize> {
        TargetSize::new(self.target_width, self.target_height).ok_or_else(|| {
            Error::InvalidOptions(format!(
                "target size must be positive, got {}x{}",
                self.target_width, self.target_height
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_target_size_yields_documented_defaults() {
        let options = Options::new(188, 250);

        assert_eq!(options.increment_count().value(), 5);
        assert_eq!(options.step_delay().millis(), 20);
        assert_eq!(options.loading_message(), "loading image...");
        assert_eq!(options.load_detection, LoadDetection::Notify);
        assert_eq!(options.stop_rule, StopRule::LeftAtZero);
    }

    #[test]
    fn builder_overrides_every_optional_field() {
        let options = Options::new(100, 80)
            .with_loading_message("wait")
            .with_increment_count(1)
            .with_step_delay_ms(50)
            .with_load_detection(LoadDetection::Poll)
            .with_stop_rule(StopRule::Settled);

        assert_eq!(options.loading_message(), "wait");
        assert_eq!(options.increment_count().value(), 1);
        assert_eq!(options.step_delay().millis(), 50);
        assert_eq!(options.load_detection, LoadDetection::Poll);
        assert_eq!(options.stop_rule, StopRule::Settled);
    }

    #[test]
    fn large_pacing_values_pass_through_unchanged() {
        let options = Options::new(188, 250)
            .with_increment_count(5000)
            .with_step_delay_ms(5000);

        assert_eq!(options.increment_count().value(), 5000);
        assert_eq!(options.step_delay().millis(), 5000);
        assert!(options.target_size().is_ok());
    }

    #[test]
    fn zero_increment_count_means_default() {
        let options = Options::new(188, 250).with_increment_count(0);
        assert_eq!(options.increment_count().value(), 5);
    }

    #[test]
    fn zero_target_side_is_rejected() {
        let result = Options::new(0, 250).target_size();
        assert!(matches!(result, Err(Error::InvalidOptions(_))));

        let result = Options::new(188, 0).target_size();
        assert!(matches!(result, Err(Error::InvalidOptions(_))));
    }
}
