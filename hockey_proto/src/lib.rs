//! Messages between the simulation and its collaborators
//!
//! Uses postcard for compact binary serialization

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtoError {
    #[error("encode error: {0}")]
    Encode(postcard::Error),

    #[error("decode error: {0}")]
    Decode(postcard::Error),
}

/// 0 = left, 1 = right
pub type SideId = u8;

pub const LEFT: SideId = 0;
pub const RIGHT: SideId = 1;

// ============================================================================
// C2S Messages (collaborators to simulation)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum C2S {
    /// Tracked mallet position in table meters
    Target { side: SideId, x: f32, y: f32 },

    /// Raw detection in pixels, relative to that side's half of the camera frame
    Detection {
        side: SideId,
        x: f32,
        y: f32,
        half_frame_width: f32,
        frame_height: f32,
    },

    /// Camera box a player can reach, in half-frame pixels; `None` uses the frame edge
    Calibrate {
        side: SideId,
        x_min: Option<f32>,
        x_max: Option<f32>,
        y_min: Option<f32>,
        y_max: Option<f32>,
    },

    /// New tunables from the settings screen
    Settings {
        puck_restitution: f32,
        puck_damping: f32,
        max_puck_speed: f32,
        mallet_speed_limit: f32,
    },

    Pause,
    Resume,

    /// Start over after a match has ended
    Restart,
}

// ============================================================================
// S2C Messages (simulation to renderer, scoreboard and audio)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BodyState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl BodyState {
    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u32,
    pub puck: BodyState,
    pub mallet_left: BodyState,
    pub mallet_right: BodyState,
    pub score_left: u8,
    pub score_right: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Wall,
    Mallet,
    Goal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum S2C {
    /// State after the last fixed step of a frame
    Frame(Snapshot),

    /// Something the audio layer should play
    Sound(SoundCue),

    /// Countdown before play starts
    Countdown { seconds: u8 },

    GameOver { winner: SideId },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}

impl S2C {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtoError> {
        to_allocvec(self).map_err(ProtoError::Encode)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtoError> {
        from_bytes(bytes).map_err(ProtoError::Decode)
    }
}
