//! Mallet control: keyboard axes, tracked positions and the mapping from
//! calibrated camera coordinates to table meters.

use glam::Vec2;

use crate::components::Side;
use crate::field::FieldSpec;

/// What a player is doing with their mallet this sub-step
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MalletInput {
    /// Keep the mallet where it is
    #[default]
    Hold,
    /// Keyboard axis, each component in `[-1, 1]`
    Direction(Vec2),
    /// Tracked table position
    Target(Vec2),
}

/// Calibrated camera bounds for one player; `None` falls back to the frame size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisBounds {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

impl AxisBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Calibrated camera box for one player
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Calibration {
    pub x: AxisBounds,
    pub y: AxisBounds,
}

/// Position reached by moving along `dir` at `speed` for `dt`
pub fn keyboard_target(current: Vec2, dir: Vec2, speed: f32, dt: f32) -> Vec2 {
    current + dir.clamp(Vec2::splat(-1.0), Vec2::ONE) * speed * dt
}

/// Keep a mallet of `radius` inside its own half of the table
pub fn clamp_to_half(field: &FieldSpec, side: Side, radius: f32, pos: Vec2) -> Vec2 {
    let half_w = field.half_width();
    let half_h = field.half_height();
    let (x_min, x_max) = match side {
        Side::Left => (-half_w + radius, -radius),
        Side::Right => (radius, half_w - radius),
    };
    let y_min = -half_h + radius;
    let y_max = half_h - radius;

    Vec2::new(pos.x.max(x_min).min(x_max), pos.y.max(y_min).min(y_max))
}

/// Exponential smoothing toward `target`; `alpha <= 0` or no history returns the target
pub fn smooth(current: Option<Vec2>, target: Vec2, alpha: f32) -> Vec2 {
    match current {
        Some(current) if alpha > 0.0 => current.lerp(target, alpha.min(1.0)),
        _ => target,
    }
}

/// Normalize `value` into `[0, 1]` between calibrated bounds, or the fallback range
pub fn normalize_axis(value: f32, bounds: AxisBounds, fallback_min: f32, fallback_max: f32) -> f32 {
    let (min, max) = match (bounds.min, bounds.max) {
        (Some(min), Some(max)) if max != min => (min, max),
        _ => (fallback_min, fallback_max),
    };
    if max == min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Map a normalized detection inside a side's half of the camera frame to
/// table meters. The left camera half is mirrored so moving toward the
/// center of the frame moves the mallet toward the center line.
pub fn normalized_to_table(field: &FieldSpec, side: Side, radius: f32, norm: Vec2) -> Vec2 {
    let half_w = field.half_width();
    let world = match side {
        Side::Left => Vec2::new(-half_w + (1.0 - norm.x) * half_w, 0.0),
        Side::Right => Vec2::new(norm.x * half_w, 0.0),
    };
    let y = -field.half_height() + norm.y * field.height;
    clamp_to_half(field, side, radius, Vec2::new(world.x, y))
}

/// Table target for a detection at `pixel` inside one side's half of the
/// camera frame, whose size is `half_frame`
pub fn detection_to_table(
    field: &FieldSpec,
    side: Side,
    radius: f32,
    calibration: &Calibration,
    pixel: Vec2,
    half_frame: Vec2,
) -> Vec2 {
    let norm = Vec2::new(
        normalize_axis(pixel.x, calibration.x, 0.0, half_frame.x),
        normalize_axis(pixel.y, calibration.y, 0.0, half_frame.y),
    );
    normalized_to_table(field, side, radius, norm)
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 0.07;

    #[test]
    fn test_keyboard_target_moves_at_speed() {
        let next = keyboard_target(Vec2::new(-0.5, 0.0), Vec2::new(1.0, -1.0), 2.0, 0.1);
        assert!((next.x + 0.3).abs() < 1e-6);
        assert!((next.y + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_keyboard_axis_is_clamped() {
        let next = keyboard_target(Vec2::ZERO, Vec2::new(5.0, 0.0), 2.0, 0.1);
        assert!((next.x - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_keeps_mallet_in_own_half() {
        let field = FieldSpec::default();
        let left = clamp_to_half(&field, Side::Left, R, Vec2::new(0.4, 0.9));
        assert_eq!(left, Vec2::new(-R, 0.5 - R));

        let right = clamp_to_half(&field, Side::Right, R, Vec2::new(-0.4, -0.9));
        assert_eq!(right, Vec2::new(R, -0.5 + R));

        let far_right = clamp_to_half(&field, Side::Right, R, Vec2::new(3.0, 0.0));
        assert_eq!(far_right.x, 1.0 - R);
    }

    #[test]
    fn test_smoothing() {
        let target = Vec2::new(1.0, 0.0);
        assert_eq!(smooth(None, target, 0.5), target, "No history jumps to target");
        assert_eq!(smooth(Some(Vec2::ZERO), target, 0.0), target, "Disabled smoothing");
        let s = smooth(Some(Vec2::ZERO), target, 0.25);
        assert!((s.x - 0.25).abs() < 1e-6);
        assert_eq!(smooth(Some(Vec2::ZERO), target, 4.0), target, "Alpha clamps to 1");
    }

    #[test]
    fn test_normalize_axis_with_calibration() {
        let bounds = AxisBounds::new(100.0, 300.0);
        assert_eq!(normalize_axis(200.0, bounds, 0.0, 640.0), 0.5);
        assert_eq!(normalize_axis(50.0, bounds, 0.0, 640.0), 0.0);
        assert_eq!(normalize_axis(999.0, bounds, 0.0, 640.0), 1.0);
    }

    #[test]
    fn test_normalize_axis_falls_back_without_calibration() {
        assert_eq!(normalize_axis(320.0, AxisBounds::default(), 0.0, 640.0), 0.5);
        let degenerate = AxisBounds::new(10.0, 10.0);
        assert_eq!(normalize_axis(160.0, degenerate, 0.0, 640.0), 0.25);
        assert_eq!(normalize_axis(5.0, AxisBounds::default(), 3.0, 3.0), 0.0);
    }

    #[test]
    fn test_normalized_to_table_mirrors_left() {
        let field = FieldSpec::default();
        // Frame center edge of the left half maps to the center line
        let left = normalized_to_table(&field, Side::Left, R, Vec2::new(0.0, 0.5));
        assert_eq!(left, Vec2::new(-R, 0.0));
        let left_far = normalized_to_table(&field, Side::Left, R, Vec2::new(1.0, 0.5));
        assert_eq!(left_far.x, -1.0 + R);

        let right = normalized_to_table(&field, Side::Right, R, Vec2::new(0.5, 0.0));
        assert_eq!(right, Vec2::new(0.5, -0.5 + R));
    }

    #[test]
    fn test_detection_uses_calibration() {
        let field = FieldSpec::default();
        let half_frame = Vec2::new(320.0, 480.0);
        let calibration = Calibration {
            x: AxisBounds::new(60.0, 260.0),
            y: AxisBounds::default(),
        };
        // Middle of the calibrated box, middle of the frame height
        let right = detection_to_table(
            &field,
            Side::Right,
            R,
            &calibration,
            Vec2::new(160.0, 240.0),
            half_frame,
        );
        assert!((right - Vec2::new(0.5, 0.0)).length() < 1e-6, "got {:?}", right);

        // Uncalibrated left side mirrors the frame
        let left = detection_to_table(
            &field,
            Side::Left,
            R,
            &Calibration::default(),
            Vec2::new(80.0, 0.0),
            half_frame,
        );
        assert!((left - Vec2::new(-0.25, -0.5 + R)).length() < 1e-6, "got {:?}", left);
    }
}
