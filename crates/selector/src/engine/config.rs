// SPDX-License-Identifier: MIT

//!
//! Selector config
//!

use crate::engine::DEFAULT_HANDLE_WIDTH_PX;
use log::{info, warn};
use month_range_core::{MonthRange, RangeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading a [`SelectorConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Range(#[from] RangeError),
}

/// How a width drag is bounded on the right
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidthClamp {
    /// The trailing edge can't pass the end of the track (width is bounded by
    /// `track_width - offset`)
    #[default]
    TrackEdge,

    /// The width alone is bounded by `track_width`, whatever the offset.  The
    /// trailing edge can then overshoot the track mid-drag (the committed range
    /// is still clamped to December)
    TrackWidth,
}

/// Selector configuration, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// The range selected when the selector is created, as `[start, end]`
    /// month indexes
    pub initial_range: [i64; 2],

    /// How width drags are bounded
    pub width_clamp: WidthClamp,

    /// The width (px) of the resize handle at the trailing edge of the
    /// selection
    pub handle_width_px: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let (start, end) = MonthRange::default().as_values();
        Self {
            initial_range: [start.into(), end.into()],
            width_clamp: WidthClamp::default(),
            handle_width_px: DEFAULT_HANDLE_WIDTH_PX,
        }
    }
}

impl SelectorConfig {
    /// Load the config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading selector config from {}", path.display());
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Parse the config from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SelectorConfig = serde_json::from_str(json)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Check the initial range is valid
    pub fn validate(&self) -> Result<MonthRange, ConfigError> {
        Ok(MonthRange::try_from(self.initial_range)?)
    }

    /// The initial range.  If the configured one is invalid it is clamped into
    /// a valid range
    pub fn initial_range(&self) -> MonthRange {
        match self.validate() {
            Ok(range) => range,
            Err(error) => {
                let [start, end] = self.initial_range;
                let range = MonthRange::clamped(start, end);
                warn!("{error}, using {range} as the initial range");
                range
            }
        }
    }

    /// The handle width, falling back to the default if the configured one
    /// can't be used
    pub fn handle_width_px(&self) -> f64 {
        if self.handle_width_px.is_finite() && self.handle_width_px >= 0.0 {
            self.handle_width_px
        } else {
            warn!(
                "handle width {} is unusable, using {DEFAULT_HANDLE_WIDTH_PX}",
                self.handle_width_px
            );
            DEFAULT_HANDLE_WIDTH_PX
        }
    }
}
