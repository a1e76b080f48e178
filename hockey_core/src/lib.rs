//! Air-hockey simulation core.
//!
//! `PhysicsEngine` owns the puck and both mallets and advances them in fixed
//! steps. `Match` drives the engine from player input with a fixed-timestep
//! accumulator and keeps score.

pub mod components;
pub mod config;
pub mod engine;
pub mod field;
pub mod game;
pub mod params;
pub mod resources;
pub mod settings;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use field::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use settings::*;
pub use systems::{AxisBounds, Calibration, MalletInput};
