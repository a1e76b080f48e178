use crate::components::Body;

/// Scale velocity down to `max_speed` when it is exceeded, keeping direction
pub fn clamp_speed(body: &mut Body, max_speed: Option<f32>) -> bool {
    let Some(max_speed) = max_speed else {
        return false;
    };
    let speed = body.speed();
    if speed > max_speed && speed > 0.0 {
        body.vel *= max_speed / speed;
        true
    } else {
        false
    }
}
