use crate::components::Body;
use crate::field::FieldSpec;

/// Resolve puck contact with the table boundary.
///
/// A breached wall clamps the puck back inside and points the normal velocity
/// inward with at least `min_speed`. End walls are skipped while the puck is
/// inside the goal mouth. Any contact scales the whole velocity by the puck's
/// restitution once. Returns true if a wall was hit.
pub fn resolve_walls(puck: &mut Body, field: &FieldSpec, min_speed: f32) -> bool {
    let r = puck.radius;
    let half_w = field.half_width();
    let half_h = field.half_height();
    let mut hit = false;

    // Top (y negative) and bottom (y positive)
    if puck.pos.y - r < -half_h {
        puck.pos.y = -half_h + r;
        puck.vel.y = puck.vel.y.abs().max(min_speed);
        hit = true;
    } else if puck.pos.y + r > half_h {
        puck.pos.y = half_h - r;
        puck.vel.y = -puck.vel.y.abs().max(min_speed);
        hit = true;
    }

    // End walls only exist outside the goal mouth
    if !field.in_goal_mouth(puck.pos.y) {
        if puck.pos.x - r < -half_w {
            puck.pos.x = -half_w + r;
            puck.vel.x = puck.vel.x.abs().max(min_speed);
            hit = true;
        } else if puck.pos.x + r > half_w {
            puck.pos.x = half_w - r;
            puck.vel.x = -puck.vel.x.abs().max(min_speed);
            hit = true;
        }
    }

    if hit {
        puck.vel *= puck.restitution;
    }

    hit
}

/// Pull the puck center back inside the table without touching its velocity.
///
/// Used after mallet push-out, which may shove the puck through a wall. End
/// walls are left open while the puck is inside the goal mouth. Returns true
/// if the position changed.
pub fn confine_puck(puck: &mut Body, field: &FieldSpec) -> bool {
    let r = puck.radius;
    let half_w = field.half_width();
    let half_h = field.half_height();
    let before = puck.pos;

    puck.pos.y = puck.pos.y.clamp(-half_h + r, half_h - r);
    if !field.in_goal_mouth(puck.pos.y) {
        puck.pos.x = puck.pos.x.clamp(-half_w + r, half_w - r);
    }

    puck.pos != before
}
