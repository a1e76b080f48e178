use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Table geometry. Origin at the table center, `x` toward the right goal,
/// `y` downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub goal_height: f32,
}

impl FieldSpec {
    pub fn new(width: f32, height: f32, wall_thickness: f32, goal_height: f32) -> Self {
        Self {
            width,
            height,
            wall_thickness,
            goal_height,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Half the height of the goal opening on each end wall
    pub fn goal_half_height(&self) -> f32 {
        self.goal_height / 2.0
    }

    /// True when `y` lies inside the goal mouth, where end walls do not collide
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        y.abs() < self.goal_half_height()
    }

    /// Side whose goal line `x` has crossed, if any
    pub fn goal_line_crossed(&self, x: f32) -> Option<Side> {
        if x < -self.half_width() {
            Some(Side::Left)
        } else if x > self.half_width() {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn puck_spawn(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Mallets start a quarter of the table in from their own goal
    pub fn mallet_spawn(&self, side: Side) -> Vec2 {
        match side {
            Side::Left => Vec2::new(-self.width * 0.25, 0.0),
            Side::Right => Vec2::new(self.width * 0.25, 0.0),
        }
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            goal_height: Params::GOAL_HEIGHT,
        }
    }
}
