use crate::components::{Body, PhysicsEntities};

/// Decay velocity by `max(0, 1 - damping * dt)`; undamped bodies are untouched
pub fn apply_damping(body: &mut Body, dt: f32) {
    if body.damping > 0.0 {
        body.vel *= (1.0 - body.damping * dt).max(0.0);
    }
}

/// Advance position from the (already damped) velocity
pub fn integrate(body: &mut Body, dt: f32) {
    body.pos += body.vel * dt;
}

/// Damp every body, then move every body
pub fn move_bodies(entities: &mut PhysicsEntities, dt: f32) {
    for body in entities.bodies_mut() {
        apply_damping(body, dt);
    }
    for body in entities.bodies_mut() {
        integrate(body, dt);
    }
}
