use glam::Vec2;
use hockey_core::{Match, MalletInput, Side};

const DEADZONE: f32 = 0.02;

/// Keyboard-style opponent: chase the puck while it is on our half, otherwise
/// drift back toward the home position.
pub fn chase_input(game: &Match, side: Side) -> MalletInput {
    let engine = game.engine();
    let puck = engine.puck();
    let mallet = engine.entities().mallet(side);

    let on_our_half = match side {
        Side::Left => puck.pos.x < 0.0,
        Side::Right => puck.pos.x > 0.0,
    };
    let goal = if on_our_half {
        puck.pos
    } else {
        engine.field().mallet_spawn(side)
    };

    let diff = goal - mallet.pos;
    let axis = |d: f32| {
        if d > DEADZONE {
            1.0
        } else if d < -DEADZONE {
            -1.0
        } else {
            0.0
        }
    };
    MalletInput::Direction(Vec2::new(axis(diff.x), axis(diff.y)))
}
