use std::sync::Arc;

use glam::Vec2;
use hockey_core::systems::detection_to_table;
use hockey_core::{
    AxisBounds, Calibration, CollisionHooks, Config, MalletInput, Match, Settings, Side,
};
use hockey_proto::{BodyState, SideId, Snapshot, SoundCue, C2S, LEFT, RIGHT, S2C};
use log::{debug, info};
use parking_lot::Mutex;

use crate::tracking::LatestCell;
use crate::SimError;

/// Seconds counted down before play starts
pub const COUNTDOWN_SECS: u8 = 3;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Countdown,
    Playing,
    Paused,
    GameOver,
}

/// Where encoded `S2C` messages go: renderer, scoreboard window, audio
pub trait FrameSink {
    fn send_bytes(&self, bytes: &[u8]) -> Result<(), SimError>;
}

pub fn side_from_id(id: SideId) -> Option<Side> {
    match id {
        LEFT => Some(Side::Left),
        RIGHT => Some(Side::Right),
        _ => None,
    }
}

pub fn side_id(side: Side) -> SideId {
    match side {
        Side::Left => LEFT,
        Side::Right => RIGHT,
    }
}

fn body_state(body: &hockey_core::Body) -> BodyState {
    BodyState {
        x: body.pos.x,
        y: body.pos.y,
        vx: body.vel.x,
        vy: body.vel.y,
    }
}

/// Wire snapshot of the current match
pub fn snapshot(game: &Match) -> Snapshot {
    let entities = game.engine().entities();
    let score = game.score();
    Snapshot {
        tick: game.tick(),
        puck: body_state(&entities.puck),
        mallet_left: body_state(&entities.mallet_left),
        mallet_right: body_state(&entities.mallet_right),
        score_left: score.left,
        score_right: score.right,
    }
}

pub struct Session {
    game: Match,
    sink: Box<dyn FrameSink>,
    state: SessionState,
    countdown_remaining: u8,
    countdown_timer: f32,
    inputs: [MalletInput; 2],
    calibration: [Calibration; 2],
    trackers: [Option<LatestCell<Vec2>>; 2],
    /// Last value read from each tracker, reused when no fresh one is available
    last_tracked: [Option<Vec2>; 2],
    sounds: Arc<Mutex<Vec<SoundCue>>>,
}

fn slot(side: Side) -> usize {
    match side {
        Side::Left => 0,
        Side::Right => 1,
    }
}

impl Session {
    pub fn new(config: Config, settings: Settings, sink: Box<dyn FrameSink>) -> Self {
        let sounds = Arc::new(Mutex::new(Vec::new()));
        let (wall, mallet) = (Arc::clone(&sounds), Arc::clone(&sounds));
        let hooks = CollisionHooks::new()
            .on_puck_wall(move || wall.lock().push(SoundCue::Wall))
            .on_puck_mallet(move || mallet.lock().push(SoundCue::Mallet));

        Self {
            game: Match::new(config, settings, hooks),
            sink,
            state: SessionState::Countdown,
            countdown_remaining: COUNTDOWN_SECS,
            countdown_timer: 0.0,
            inputs: [MalletInput::Hold; 2],
            calibration: [Calibration::default(); 2],
            trackers: [None, None],
            last_tracked: [None, None],
            sounds,
        }
    }

    /// Read this side's mallet target from a tracker thread
    pub fn attach_tracker(&mut self, side: Side, cell: LatestCell<Vec2>) {
        self.trackers[slot(side)] = Some(cell);
        self.last_tracked[slot(side)] = None;
    }

    /// Keyboard or scripted input; a tracker with a value takes precedence
    pub fn set_input(&mut self, side: Side, input: MalletInput) {
        self.inputs[slot(side)] = input;
    }

    fn send(&self, msg: &S2C) -> Result<(), SimError> {
        let bytes = msg.to_bytes()?;
        self.sink.send_bytes(&bytes)
    }

    pub fn handle(&mut self, msg: C2S) -> Result<(), SimError> {
        match msg {
            C2S::Target { side, x, y } => {
                let side = side_from_id(side).ok_or(SimError::UnknownSide(side))?;
                self.set_input(side, MalletInput::Target(Vec2::new(x, y)));
            }
            C2S::Detection {
                side,
                x,
                y,
                half_frame_width,
                frame_height,
            } => {
                let side = side_from_id(side).ok_or(SimError::UnknownSide(side))?;
                let config = self.game.config();
                let target = detection_to_table(
                    &config.field,
                    side,
                    config.mallet.radius,
                    &self.calibration[slot(side)],
                    Vec2::new(x, y),
                    Vec2::new(half_frame_width, frame_height),
                );
                self.set_input(side, MalletInput::Target(target));
            }
            C2S::Calibrate {
                side,
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                let side = side_from_id(side).ok_or(SimError::UnknownSide(side))?;
                self.calibration[slot(side)] = Calibration {
                    x: AxisBounds {
                        min: x_min,
                        max: x_max,
                    },
                    y: AxisBounds {
                        min: y_min,
                        max: y_max,
                    },
                };
                info!("{:?} calibration updated", side);
            }
            C2S::Settings {
                puck_restitution,
                puck_damping,
                max_puck_speed,
                mallet_speed_limit,
            } => {
                let settings = Settings {
                    puck_restitution,
                    puck_damping,
                    max_puck_speed,
                    mallet_speed_limit,
                    ..*self.game.settings()
                };
                self.game.apply_settings(settings);
                info!("settings updated");
            }
            C2S::Pause => {
                if self.state == SessionState::Playing {
                    self.state = SessionState::Paused;
                    info!("paused");
                }
            }
            C2S::Resume => {
                if self.state == SessionState::Paused {
                    self.state = SessionState::Playing;
                    info!("resumed");
                }
            }
            C2S::Restart => {
                if self.state == SessionState::GameOver {
                    self.game.restart();
                    self.start_countdown();
                }
            }
        }
        Ok(())
    }

    fn start_countdown(&mut self) {
        self.state = SessionState::Countdown;
        self.countdown_remaining = COUNTDOWN_SECS;
        self.countdown_timer = 0.0;
    }

    fn input_for(&mut self, side: Side) -> MalletInput {
        let i = slot(side);
        if let Some(target) = self.trackers[i].as_ref().and_then(|cell| cell.latest()) {
            self.last_tracked[i] = Some(target);
        }
        self.last_tracked[i]
            .map(MalletInput::Target)
            .unwrap_or(self.inputs[i])
    }

    /// Run one rendered frame
    pub fn tick(&mut self, frame_dt: f32) -> Result<(), SimError> {
        match self.state {
            SessionState::Countdown => self.tick_countdown(frame_dt),
            SessionState::Playing => self.tick_playing(frame_dt),
            SessionState::Paused | SessionState::GameOver => Ok(()),
        }
    }

    fn tick_countdown(&mut self, frame_dt: f32) -> Result<(), SimError> {
        self.countdown_timer -= frame_dt.max(0.0);
        if self.countdown_timer > 0.0 {
            return Ok(());
        }
        if self.countdown_remaining > 0 {
            self.send(&S2C::Countdown {
                seconds: self.countdown_remaining,
            })?;
            debug!("countdown: {}", self.countdown_remaining);
            self.countdown_remaining -= 1;
            self.countdown_timer += 1.0;
        } else {
            info!("countdown complete, play");
            self.state = SessionState::Playing;
            self.send(&S2C::Frame(snapshot(&self.game)))?;
        }
        Ok(())
    }

    fn tick_playing(&mut self, frame_dt: f32) -> Result<(), SimError> {
        let left = self.input_for(Side::Left);
        let right = self.input_for(Side::Right);
        let events = self.game.advance(frame_dt, left, right);

        let cues: Vec<SoundCue> = self.sounds.lock().drain(..).collect();
        for cue in cues {
            self.send(&S2C::Sound(cue))?;
        }
        for _ in &events.goals {
            self.send(&S2C::Sound(SoundCue::Goal))?;
        }

        self.send(&S2C::Frame(snapshot(&self.game)))?;

        if let Some(winner) = events.winner {
            self.state = SessionState::GameOver;
            self.send(&S2C::GameOver {
                winner: side_id(winner),
            })?;
        }
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }
}
