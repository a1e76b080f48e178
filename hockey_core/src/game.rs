//! Match driver: fixed-timestep accumulator, mallet control, goals and score.

use std::collections::VecDeque;

use glam::Vec2;
use log::{debug, info, warn};

use crate::components::Side;
use crate::config::Config;
use crate::engine::{CollisionHooks, PhysicsEngine, PuckOverrides};
use crate::params::Params;
use crate::resources::Score;
use crate::settings::Settings;
use crate::systems::{check_goal, clamp_to_half, keyboard_target, smooth, MalletInput};

/// What happened during one `advance`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchEvents {
    pub steps: u32,
    pub wall_hits: u32,
    pub mallet_hits: u32,
    /// Scoring side, in order
    pub goals: Vec<Side>,
    pub winner: Option<Side>,
}

pub struct Match {
    engine: PhysicsEngine,
    config: Config,
    settings: Settings,
    score: Score,
    accumulator: f32,
    tick: u32,
    smoothed: [Option<Vec2>; 2],
    trail: VecDeque<Vec2>,
}

fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl Match {
    /// A non-positive or NaN `fixed_dt` is replaced with `Params::FIXED_DT`
    pub fn new(mut config: Config, settings: Settings, hooks: CollisionHooks) -> Self {
        if config.fixed_dt.is_nan() || config.fixed_dt <= 0.0 {
            warn!("fixed dt {} is not positive, using {}", config.fixed_dt, Params::FIXED_DT);
            config.fixed_dt = Params::FIXED_DT;
        }
        let puck = settings.puck();
        let engine = PhysicsEngine::with_specs(
            config.field,
            config.puck,
            config.mallet,
            PuckOverrides {
                restitution: Some(puck.restitution),
                damping: Some(puck.damping),
                max_speed: puck.max_speed,
            },
            hooks,
        );
        Self {
            engine,
            trail: VecDeque::with_capacity(config.trail_len),
            config,
            settings,
            score: Score::new(),
            accumulator: 0.0,
            tick: 0,
            smoothed: [None, None],
        }
    }

    /// Feed a variable frame delta and run as many fixed steps as it covers
    pub fn advance(&mut self, frame_dt: f32, left: MalletInput, right: MalletInput) -> MatchEvents {
        let mut out = MatchEvents::default();
        if let Some(winner) = self.winner() {
            out.winner = Some(winner);
            return out;
        }

        let clamped = self.config.clamp_frame_dt(frame_dt);
        if clamped < frame_dt {
            debug!("frame dt {:.3}s clamped to {:.3}s", frame_dt, clamped);
        }
        self.accumulator += clamped;

        let dt = self.config.fixed_dt;
        while self.accumulator >= dt {
            self.accumulator -= dt;
            self.fixed_step(dt, left, right, &mut out);

            if let Some(winner) = self.winner() {
                info!("{:?} wins {}:{}", winner, self.score.left, self.score.right);
                out.winner = Some(winner);
                self.accumulator = 0.0;
                break;
            }
        }

        out
    }

    fn fixed_step(&mut self, dt: f32, left: MalletInput, right: MalletInput, out: &mut MatchEvents) {
        let left_target = self.resolve_input(Side::Left, left, dt);
        let right_target = self.resolve_input(Side::Right, right, dt);
        self.engine.set_mallet_positions(
            left_target,
            right_target,
            dt,
            false,
            self.settings.mallet_max_speed(),
        );

        self.engine.step(dt);
        self.tick = self.tick.wrapping_add(1);
        out.steps += 1;

        let events = *self.engine.events();
        out.wall_hits += events.puck_hit_wall as u32;
        out.mallet_hits += events.mallet_hits();

        if let Some(scorer) = check_goal(self.engine.puck(), &self.config.field) {
            self.score.increment(scorer);
            info!("goal for {:?}, score {}:{}", scorer, self.score.left, self.score.right);
            out.goals.push(scorer);
            self.reset_positions();
        } else {
            self.push_trail(self.engine.puck().pos);
        }
    }

    /// Target position for a mallet this sub-step, kept in its half
    fn resolve_input(&mut self, side: Side, input: MalletInput, dt: f32) -> Vec2 {
        let current = self.engine.entities().mallet(side).pos;
        let radius = self.config.mallet.radius;
        let target = match input {
            MalletInput::Hold => current,
            MalletInput::Direction(dir) => {
                keyboard_target(current, dir, self.settings.mallet_speed_limit.max(0.0), dt)
            }
            MalletInput::Target(pos) => {
                let s = smooth(self.smoothed[slot(side)], pos, self.settings.smoothing);
                self.smoothed[slot(side)] = Some(s);
                s
            }
        };
        clamp_to_half(&self.config.field, side, radius, target)
    }

    fn push_trail(&mut self, pos: Vec2) {
        if self.config.trail_len == 0 {
            return;
        }
        while self.trail.len() >= self.config.trail_len {
            self.trail.pop_front();
        }
        self.trail.push_back(pos);
    }

    fn reset_positions(&mut self) {
        self.engine.reset_positions();
        self.trail.clear();
        self.smoothed = [None, None];
    }

    /// Forward new tunables to the engine and driver
    pub fn apply_settings(&mut self, settings: Settings) {
        self.engine.update_puck_settings(settings.puck());
        self.settings = settings;
    }

    /// Fresh score and positions, keeping settings
    pub fn restart(&mut self) {
        self.score = Score::new();
        self.accumulator = 0.0;
        self.tick = 0;
        self.reset_positions();
        info!("match restarted");
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    /// Fraction of a fixed step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.config.fixed_dt
    }

    pub fn engine(&self) -> &PhysicsEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PhysicsEngine {
        &mut self.engine
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Recent puck positions, oldest first
    pub fn trail(&self) -> impl Iterator<Item = &Vec2> {
        self.trail.iter()
    }
}
