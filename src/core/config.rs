//! Configuration for the bridge and the native engine
//!
//! Settings can be picked from a profile, built in code, or read from a TOML
//! file. Every field has a default, so a partial file only overrides what it
//! names.

use crate::core::constants::{
    DARK_THEME_CLASS, DEFAULT_CONTAINER_SIZE, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM,
    DEFAULT_SETTLE_DELAY_MS,
};
use crate::core::geo::Point;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeProfile {
    /// Settle delay tuned for real layouts
    Balanced,
    /// No settle delay; for headless hosts whose layout is final at mount
    Immediate,
    Custom(BridgeConfig),
}

impl BridgeProfile {
    pub fn resolve(&self) -> BridgeConfig {
        match self {
            Self::Balanced => BridgeConfig::default(),
            Self::Immediate => BridgeConfig {
                settle_delay_ms: 0,
                ..BridgeConfig::default()
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for BridgeProfile {
    fn default() -> Self {
        Self::Balanced
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Wait between the ready callback and the forced size recalculation
    pub settle_delay_ms: u64,
    /// Class toggled on the container when the dark theme is selected
    pub dark_theme_class: String,
    pub engine: EngineConfig,
}

impl BridgeConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            dark_theme_class: DARK_THEME_CLASS.to_string(),
            engine: EngineConfig::default(),
        }
    }
}

/// Settings of the built-in native engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Container size assumed until the host reports a real one
    pub container_width: f64,
    pub container_height: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl EngineConfig {
    pub fn container_size(&self) -> Point {
        Point::new(self.container_width, self.container_height)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            container_width: DEFAULT_CONTAINER_SIZE.0,
            container_height: DEFAULT_CONTAINER_SIZE.1,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}
