//! Session settings
//!
//! Window size, end screen delay and the RNG seed. Gameplay constants are
//! fixed and live in `consts`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{END_SCREEN_DELAY_SECS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::half_extents;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window width in pixels (playfield spans ±width/2)
    pub window_width: u32,
    /// Window height in pixels (playfield spans ±height/2)
    pub window_height: u32,
    /// How long the win/lose screen stays up
    pub end_screen_delay_secs: f32,
    /// Fixed seed for level generation; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            end_screen_delay_secs: END_SCREEN_DELAY_SECS,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize settings")
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("bad settings file {}", path.display()))
    }

    /// Load settings from `path` if given, falling back to defaults on any
    /// problem
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{:#}, using default settings", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.window_width > 0 && self.window_height > 0,
            "window size must be non-zero, got {}x{}",
            self.window_width,
            self.window_height
        );
        ensure!(
            self.end_screen_delay_secs.is_finite() && self.end_screen_delay_secs >= 0.0,
            "end screen delay must be a non-negative number of seconds"
        );
        Ok(())
    }

    /// Half width/height of the playfield
    pub fn half_extents(&self) -> Vec2 {
        half_extents(self.window_width, self.window_height)
    }
}
