//! Game settings
//!
//! The only runtime-configurable knob is the grid game's tick interval,
//! picked from a discrete speed menu. Soccer constants are fixed at
//! build time in `crate::consts`.

use serde::{Deserialize, Serialize};

/// Grid-game speed menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl SpeedPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Slow => "Slow",
            SpeedPreset::Normal => "Normal",
            SpeedPreset::Fast => "Fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(SpeedPreset::Slow),
            "normal" | "norm" => Some(SpeedPreset::Normal),
            "fast" => Some(SpeedPreset::Fast),
            _ => None,
        }
    }

    /// Tick period for this menu entry (milliseconds)
    pub fn interval_ms(&self) -> u64 {
        match self {
            SpeedPreset::Slow => 300,
            SpeedPreset::Normal => 180,
            SpeedPreset::Fast => 100,
        }
    }
}

/// Runtime settings for a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Grid-game speed
    pub speed: SpeedPreset,
    /// Run seed override (None = driver default)
    pub seed: Option<u64>,
}
