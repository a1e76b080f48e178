//! Runtime-tunable parameters.
//!
//! `PuckSettings` is the value handed to the engine; `Settings` is the wider
//! document the settings screen edits, parsed from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Puck tunables, normalized on construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PuckSettings {
    pub restitution: f32,
    pub damping: f32,
    /// `None` means unbounded
    pub max_speed: Option<f32>,
}

impl PuckSettings {
    /// Clamp restitution to `[0, 1]`, damping to `>= 0`; `max_speed <= 0` disables the ceiling
    pub fn new(restitution: f32, damping: f32, max_speed: f32) -> Self {
        Self {
            restitution: restitution.clamp(0.0, 1.0),
            damping: damping.max(0.0),
            max_speed: if max_speed > 0.0 { Some(max_speed) } else { None },
        }
    }
}

impl Default for PuckSettings {
    fn default() -> Self {
        Self::new(
            Params::PUCK_RESTITUTION_SETTING,
            Params::PUCK_DAMPING_SETTING,
            Params::MAX_PUCK_SPEED,
        )
    }
}

/// Settings document. Missing keys fall back to defaults, unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub puck_restitution: f32,
    pub puck_damping: f32,
    pub max_puck_speed: f32,
    pub mallet_speed_limit: f32,
    pub smoothing: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puck_restitution: Params::PUCK_RESTITUTION_SETTING,
            puck_damping: Params::PUCK_DAMPING_SETTING,
            max_puck_speed: Params::MAX_PUCK_SPEED,
            mallet_speed_limit: Params::MALLET_SPEED_LIMIT,
            smoothing: Params::TRACKING_SMOOTHING,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn puck(&self) -> PuckSettings {
        PuckSettings::new(self.puck_restitution, self.puck_damping, self.max_puck_speed)
    }

    /// Mallet drive ceiling, `None` when non-positive
    pub fn mallet_max_speed(&self) -> Option<f32> {
        (self.mallet_speed_limit > 0.0).then_some(self.mallet_speed_limit)
    }
}
