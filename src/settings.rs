//! Runtime settings
//!
//! Read from an optional JSON file. Missing fields fall back to defaults and an
//! unreadable file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, SIM_DT};
use crate::sim::{Field, Tuning};

/// Dimensions outside `(MIN_FIELD_DIMENSION, MAX_FIELD_DIMENSION]` fall back to defaults
const MIN_FIELD_DIMENSION: f32 = 2.0;
const MAX_FIELD_DIMENSION: f32 = 4096.0;

/// Demo-driver and gameplay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play-field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Driver ===
    /// RNG seed; `None` picks one from the OS
    pub seed: Option<u64>,
    /// Number of frames the headless demo runs
    pub frames: u32,
    /// Wall-clock seconds fed to the accumulator per frame
    pub frame_time: f32,
    /// Print the final frame as text
    pub render: bool,
    /// Print the final state as JSON
    pub dump_state: bool,

    // === Gameplay ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            seed: None,
            frames: 1800,
            frame_time: SIM_DT,
            render: true,
            dump_state: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Replace degenerate or oversized dimensions and non-positive frame times
    /// with defaults
    pub fn sanitized(mut self) -> Self {
        if !valid_dimension(self.field_width) {
            log::warn!("Invalid field width {}, using {}", self.field_width, FIELD_WIDTH);
            self.field_width = FIELD_WIDTH;
        }
        if !valid_dimension(self.field_height) {
            log::warn!("Invalid field height {}, using {}", self.field_height, FIELD_HEIGHT);
            self.field_height = FIELD_HEIGHT;
        }
        if self.frame_time.is_nan() || self.frame_time <= 0.0 {
            self.frame_time = SIM_DT;
        }
        self
    }

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }
}

/// NaN and infinities fail both comparisons
fn valid_dimension(d: f32) -> bool {
    d > MIN_FIELD_DIMENSION && d <= MAX_FIELD_DIMENSION
}
