use glam::Vec2;

use crate::components::Body;
use crate::params::Params;

/// Resolve puck contact with one mallet. Returns true when the circles overlap.
///
/// The puck is pushed out along the contact normal by the full penetration;
/// the mallet keeps its position. Unless the pair is already separating, an
/// impulse is exchanged using the mean restitution. A resting contact (zero
/// relative normal speed) gets no impulse, so the puck is given `min_speed`
/// along the normal instead. `fallback_normal` is used when the centers
/// coincide.
pub fn resolve_mallet(
    puck: &mut Body,
    mallet: &mut Body,
    fallback_normal: Vec2,
    min_speed: f32,
) -> bool {
    let sum_radii = puck.radius + mallet.radius;
    let delta = puck.pos - mallet.pos;
    let dist_sq = delta.length_squared();
    if dist_sq >= sum_radii * sum_radii {
        return false;
    }

    let dist = dist_sq.sqrt();
    // Points from the mallet toward the puck
    let normal = if dist > Params::MIN_CONTACT_DISTANCE {
        delta / dist
    } else {
        fallback_normal
    };

    puck.pos = mallet.pos + normal * sum_radii;

    let rel_normal = (puck.vel - mallet.vel).dot(normal);
    if rel_normal > 0.0 {
        return true;
    }

    let restitution = ((puck.restitution + mallet.restitution) * 0.5).clamp(0.0, 1.0);
    let inv_mass_puck = puck.inv_mass();
    let inv_mass_mallet = mallet.inv_mass();
    let mut inv_mass_sum = inv_mass_puck + inv_mass_mallet;
    if inv_mass_sum <= 0.0 {
        inv_mass_sum = 1.0;
    }

    let impulse = -(1.0 + restitution) * rel_normal / inv_mass_sum;
    puck.vel += normal * (impulse * inv_mass_puck);
    // Recoil is overwritten by the next mallet drive
    mallet.vel -= normal * (impulse * inv_mass_mallet);

    if rel_normal == 0.0 {
        let out_speed = puck.vel.dot(normal);
        if out_speed < min_speed {
            puck.vel += normal * (min_speed - out_speed);
        }
    }

    true
}
