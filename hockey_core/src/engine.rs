//! Fixed-step physics for one puck and two mallets.
//!
//! Every step runs the same phases in the same order: damping, integration,
//! puck against walls, puck against the left then the right mallet, and the
//! puck speed ceiling. A mallet push-out is followed by a position clamp so
//! the puck never ends a step inside a wall. The engine is owned by a single game-loop thread.

use std::panic::{catch_unwind, AssertUnwindSafe};

use glam::Vec2;
use log::{debug, warn};

use crate::components::{Body, BodySpec, PhysicsEntities, Side};
use crate::field::FieldSpec;
use crate::params::Params;
use crate::resources::Events;
use crate::settings::PuckSettings;
use crate::systems::{clamp_speed, confine_puck, move_bodies, resolve_mallet, resolve_walls};

type Hook = Box<dyn FnMut() + Send>;

/// Collision callbacks, invoked synchronously from `step`
#[derive(Default)]
pub struct CollisionHooks {
    puck_wall: Option<Hook>,
    puck_mallet: Option<Hook>,
}

impl CollisionHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_puck_wall(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.puck_wall = Some(Box::new(hook));
        self
    }

    pub fn on_puck_mallet(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.puck_mallet = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for CollisionHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionHooks")
            .field("puck_wall", &self.puck_wall.is_some())
            .field("puck_mallet", &self.puck_mallet.is_some())
            .finish()
    }
}

/// Run a hook, swallowing any panic so it never escapes the step
fn fire(hook: &mut Option<Hook>, name: &str) {
    if let Some(hook) = hook.as_mut() {
        if catch_unwind(AssertUnwindSafe(|| hook())).is_err() {
            warn!("{} hook panicked; ignoring", name);
        }
    }
}

/// Optional overrides applied to the puck spec at construction
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PuckOverrides {
    pub restitution: Option<f32>,
    pub damping: Option<f32>,
    pub max_speed: Option<f32>,
}

#[derive(Debug)]
pub struct PhysicsEngine {
    field: FieldSpec,
    entities: PhysicsEntities,
    max_puck_speed: Option<f32>,
    wall_min_speed: f32,
    hooks: CollisionHooks,
    events: Events,
}

impl PhysicsEngine {
    /// Engine with default puck and mallet specs
    pub fn new(field: FieldSpec, overrides: PuckOverrides, hooks: CollisionHooks) -> Self {
        Self::with_specs(field, BodySpec::puck(), BodySpec::mallet(), overrides, hooks)
    }

    pub fn with_specs(
        field: FieldSpec,
        puck: BodySpec,
        mallet: BodySpec,
        overrides: PuckOverrides,
        hooks: CollisionHooks,
    ) -> Self {
        let puck = BodySpec {
            restitution: overrides.restitution.unwrap_or(puck.restitution),
            damping: overrides.damping.unwrap_or(puck.damping),
            ..puck
        };
        let entities = PhysicsEntities::new(&field, &puck, &mallet);
        Self {
            field,
            entities,
            max_puck_speed: overrides.max_speed.filter(|s| *s > 0.0),
            wall_min_speed: Params::WALL_BOUNCE_MIN_SPEED,
            hooks,
            events: Events::new(),
        }
    }

    /// Advance the simulation by `dt` seconds; `dt <= 0` does nothing
    pub fn step(&mut self, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        self.events.clear();

        // 1-2. Damping, then integration
        move_bodies(&mut self.entities, dt);

        // 3. Walls
        if resolve_walls(&mut self.entities.puck, &self.field, self.wall_min_speed) {
            self.events.puck_hit_wall = true;
            fire(&mut self.hooks.puck_wall, "puck_wall");
        }

        // 4. Mallets, left first
        for side in [Side::Left, Side::Right] {
            let fallback = match side {
                Side::Left => Vec2::X,
                Side::Right => Vec2::NEG_X,
            };
            let PhysicsEntities {
                puck,
                mallet_left,
                mallet_right,
            } = &mut self.entities;
            let mallet = match side {
                Side::Left => mallet_left,
                Side::Right => mallet_right,
            };
            if resolve_mallet(puck, mallet, fallback, self.wall_min_speed) {
                // Push-out may leave the puck inside a wall
                confine_puck(puck, &self.field);
                self.events.mark_mallet(side);
                fire(&mut self.hooks.puck_mallet, "puck_mallet");
            }
        }

        // 5. Speed ceiling
        clamp_speed(&mut self.entities.puck, self.max_puck_speed);
    }

    /// Move both mallets toward their targets.
    ///
    /// `teleport` places them on the target at rest. Otherwise each mallet gets
    /// the velocity that reaches its target in `dt`, limited to `max_speed`.
    /// A non-positive `dt` falls back to teleporting.
    pub fn set_mallet_positions(
        &mut self,
        left: Vec2,
        right: Vec2,
        dt: f32,
        teleport: bool,
        max_speed: Option<f32>,
    ) {
        for (side, target) in [(Side::Left, left), (Side::Right, right)] {
            let mallet = self.entities.mallet_mut(side);
            if teleport || dt.is_nan() || dt <= 0.0 {
                mallet.place(target);
                continue;
            }
            let mut vel = (target - mallet.pos) / dt;
            if let Some(max_speed) = max_speed {
                let speed = vel.length();
                if speed > max_speed && speed > 0.0 {
                    vel *= max_speed.max(0.0) / speed;
                }
            }
            mallet.vel = vel;
        }
    }

    /// Live-tune the puck; values are normalized by `PuckSettings`
    pub fn update_puck_settings(&mut self, settings: PuckSettings) {
        let puck = &mut self.entities.puck;
        puck.restitution = settings.restitution.clamp(0.0, 1.0);
        puck.damping = settings.damping.max(0.0);
        self.max_puck_speed = settings.max_speed.filter(|s| *s > 0.0);
        debug!(
            "puck settings: restitution={:.2} damping={:.2} max_speed={:?}",
            puck.restitution, puck.damping, self.max_puck_speed
        );
    }

    pub fn puck_settings(&self) -> PuckSettings {
        PuckSettings {
            restitution: self.entities.puck.restitution,
            damping: self.entities.puck.damping,
            max_speed: self.max_puck_speed,
        }
    }

    /// Put the puck somewhere with a given velocity
    pub fn place_puck(&mut self, pos: Vec2, vel: Vec2) {
        self.entities.puck.pos = pos;
        self.entities.puck.vel = vel;
    }

    /// Puck to center at rest, mallets teleported to their start positions
    pub fn reset_positions(&mut self) {
        let field = self.field;
        self.entities.puck.place(field.puck_spawn());
        self.set_mallet_positions(
            field.mallet_spawn(Side::Left),
            field.mallet_spawn(Side::Right),
            0.0,
            true,
            None,
        );
        debug!("positions reset");
    }

    /// Override the anti-stick floor used for wall and mallet bounces
    pub fn set_wall_min_speed(&mut self, min_speed: f32) {
        self.wall_min_speed = min_speed.max(0.0);
    }

    pub fn wall_min_speed(&self) -> f32 {
        self.wall_min_speed
    }

    pub fn field(&self) -> &FieldSpec {
        &self.field
    }

    pub fn entities(&self) -> &PhysicsEntities {
        &self.entities
    }

    pub fn puck(&self) -> &Body {
        &self.entities.puck
    }

    pub fn mallet_left(&self) -> &Body {
        &self.entities.mallet_left
    }

    pub fn mallet_right(&self) -> &Body {
        &self.entities.mallet_right
    }

    /// Collisions from the most recent step
    pub fn events(&self) -> &Events {
        &self.events
    }
}
