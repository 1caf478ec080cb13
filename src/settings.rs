//! Run settings
//!
//! Screen size, RNG seed and frame timing. Stored as JSON; any field missing
//! from the file takes its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;
use crate::error::SettingsError;
use crate::sim::Screen;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Screen width in pixels
    pub screen_width: f64,
    /// Screen height in pixels
    pub screen_height: f64,
    /// Seed for the spin jitter RNG
    pub seed: u64,
    /// Longest frame the clock reports (seconds)
    pub max_frame_dt: f64,
    /// Frame rate of the headless driver
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Portrait phone
            screen_width: 375.0,
            screen_height: 667.0,
            seed: 0,
            max_frame_dt: MAX_FRAME_DT,
            fps: 60,
        }
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |x: f64| x.is_finite() && x > 0.0;
        if !positive(self.screen_width) || !positive(self.screen_height) {
            return Err(SettingsError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !positive(self.max_frame_dt) {
            return Err(SettingsError::InvalidFrameClamp(self.max_frame_dt));
        }
        if self.fps == 0 {
            return Err(SettingsError::InvalidFps);
        }
        Ok(())
    }

    pub fn screen(&self) -> Screen {
        Screen::new(self.screen_width, self.screen_height)
    }

    /// Duration of one driver frame (milliseconds)
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }
}
