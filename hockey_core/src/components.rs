use glam::Vec2;

use crate::field::FieldSpec;
use crate::params::Params;

/// Table half owned by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Identity of a simulated body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRole {
    Puck,
    MalletLeft,
    MalletRight,
}

impl BodyRole {
    pub fn mallet(side: Side) -> Self {
        match side {
            Side::Left => BodyRole::MalletLeft,
            Side::Right => BodyRole::MalletRight,
        }
    }
}

/// Material and shape used to build a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub radius: f32,
    pub density: f32,
    pub restitution: f32,
    pub damping: f32,
}

impl BodySpec {
    pub fn puck() -> Self {
        Self {
            radius: Params::PUCK_RADIUS,
            density: Params::PUCK_DENSITY,
            restitution: Params::PUCK_RESTITUTION,
            damping: Params::PUCK_DAMPING,
        }
    }

    pub fn mallet() -> Self {
        Self {
            radius: Params::MALLET_RADIUS,
            density: Params::MALLET_DENSITY,
            restitution: Params::MALLET_RESTITUTION,
            damping: Params::MALLET_DAMPING,
        }
    }

    /// Area density times disc area
    pub fn mass(&self) -> f32 {
        self.density * std::f32::consts::PI * self.radius * self.radius
    }
}

/// Circular rigid body on the table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    mass: f32,
    pub restitution: f32,
    pub damping: f32,
}

impl Body {
    /// Build a body at rest. Mass is fixed here and never recomputed.
    pub fn from_spec(spec: &BodySpec, pos: Vec2) -> Self {
        let mass = spec.mass();
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: spec.radius,
            mass: if mass > 0.0 { mass } else { f32::MIN_POSITIVE },
            restitution: spec.restitution.clamp(0.0, 1.0),
            damping: spec.damping.max(0.0),
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Put the body somewhere else, at rest
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }
}

/// The three bodies of a match
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsEntities {
    pub puck: Body,
    pub mallet_left: Body,
    pub mallet_right: Body,
}

impl PhysicsEntities {
    /// Spawn the puck at center and the mallets at their start positions
    pub fn new(field: &FieldSpec, puck: &BodySpec, mallet: &BodySpec) -> Self {
        Self {
            puck: Body::from_spec(puck, field.puck_spawn()),
            mallet_left: Body::from_spec(mallet, field.mallet_spawn(Side::Left)),
            mallet_right: Body::from_spec(mallet, field.mallet_spawn(Side::Right)),
        }
    }

    pub fn get(&self, role: BodyRole) -> &Body {
        match role {
            BodyRole::Puck => &self.puck,
            BodyRole::MalletLeft => &self.mallet_left,
            BodyRole::MalletRight => &self.mallet_right,
        }
    }

    pub fn mallet(&self, side: Side) -> &Body {
        self.get(BodyRole::mallet(side))
    }

    pub(crate) fn mallet_mut(&mut self, side: Side) -> &mut Body {
        match side {
            Side::Left => &mut self.mallet_left,
            Side::Right => &mut self.mallet_right,
        }
    }

    pub(crate) fn bodies_mut(&mut self) -> [&mut Body; 3] {
        [
            &mut self.puck,
            &mut self.mallet_left,
            &mut self.mallet_right,
        ]
    }
}
