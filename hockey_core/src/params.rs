/// Tuning parameters for the air-hockey table
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (meters)
    pub const FIELD_WIDTH: f32 = 2.0;
    pub const FIELD_HEIGHT: f32 = 1.0;
    pub const WALL_THICKNESS: f32 = 0.05;
    pub const GOAL_HEIGHT: f32 = 0.35;

    // Puck
    pub const PUCK_RADIUS: f32 = 0.04;
    pub const PUCK_DENSITY: f32 = 0.8;
    pub const PUCK_RESTITUTION: f32 = 0.9;
    pub const PUCK_DAMPING: f32 = 0.0;

    // Mallet
    pub const MALLET_RADIUS: f32 = 0.07;
    pub const MALLET_DENSITY: f32 = 5.0;
    pub const MALLET_RESTITUTION: f32 = 1.0;
    pub const MALLET_DAMPING: f32 = 0.2;

    // Collision
    pub const WALL_BOUNCE_MIN_SPEED: f32 = 0.1; // m/s, keeps the puck off the wall after grazing hits
    pub const MIN_CONTACT_DISTANCE: f32 = 1e-6;

    // Tunables exposed in the settings screen
    pub const PUCK_RESTITUTION_SETTING: f32 = 0.6;
    pub const PUCK_DAMPING_SETTING: f32 = 0.6;
    pub const MAX_PUCK_SPEED: f32 = 1.0;
    pub const MALLET_SPEED_LIMIT: f32 = 2.0;
    pub const TRACKING_SMOOTHING: f32 = 0.2;

    // Match
    pub const WIN_SCORE: u8 = 7;
    pub const TRAIL_LEN: usize = 12;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 120.0; // 120 Hz
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent a spiral of catch-up steps
}
