use crate::components::BodySpec;
use crate::field::FieldSpec;
use crate::params::Params;

/// Match configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field: FieldSpec,
    pub puck: BodySpec,
    pub mallet: BodySpec,
    pub fixed_dt: f32,
    pub max_frame_dt: f32,
    pub trail_len: usize,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldSpec::default(),
            puck: BodySpec::puck(),
            mallet: BodySpec::mallet(),
            fixed_dt: Params::FIXED_DT,
            max_frame_dt: Params::MAX_FRAME_DT,
            trail_len: Params::TRAIL_LEN,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a variable frame delta to `[0, max_frame_dt]`
    pub fn clamp_frame_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_frame_dt)
    }
}
