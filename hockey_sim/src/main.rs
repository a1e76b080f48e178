use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use glam::Vec2;
use hockey_core::{Config, Settings, Side};
use hockey_proto::S2C;
use hockey_sim::{ai, FrameSink, LatestCell, Session, SimError};
use log::{error, info};
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};

const RUN_SECONDS: f32 = 8.0;
const FRAME_DT: f32 = 1.0 / 60.0;
const TRACKER_HZ: u64 = 30;

#[derive(Default)]
struct Stats {
    frames: Mutex<u32>,
    bytes: Mutex<usize>,
}

/// Counts what a renderer would receive
struct StatsSink(Arc<Stats>);

impl FrameSink for StatsSink {
    fn send_bytes(&self, bytes: &[u8]) -> Result<(), SimError> {
        *self.0.bytes.lock() += bytes.len();
        if let Ok(S2C::Frame(_)) = S2C::from_bytes(bytes) {
            *self.0.frames.lock() += 1;
        }
        Ok(())
    }
}

fn load_settings() -> Result<Settings, SimError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).map_err(|source| SimError::Io {
                path: path.clone(),
                source,
            })?;
            let settings = Settings::from_json(&text)?;
            info!("loaded settings from {}", path);
            Ok(settings)
        }
        None => Ok(Settings::default()),
    }
}

/// Stand-in for the camera tracker: sweeps a figure eight over the right half
fn spawn_tracker(cell: LatestCell<Vec2>, running: Arc<AtomicBool>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut t = 0.0f32;
        let period = 1.0 / TRACKER_HZ as f32;
        while running.load(Ordering::Relaxed) {
            let target = Vec2::new(0.5 + 0.3 * t.sin(), 0.3 * (2.0 * t).sin());
            cell.publish(target);
            t += period;
            thread::sleep(Duration::from_millis(1000 / TRACKER_HZ));
        }
    })
}

fn run() -> Result<(), SimError> {
    let settings = load_settings()?;
    let stats = Arc::new(Stats::default());
    let sink = StatsSink(Arc::clone(&stats));
    let mut session = Session::new(Config::new(), settings, Box::new(sink));

    let cell = LatestCell::new();
    session.attach_tracker(Side::Right, cell.clone());
    let running = Arc::new(AtomicBool::new(true));
    let tracker = spawn_tracker(cell, Arc::clone(&running));

    // Frame deltas jitter around 60 Hz like a real render loop
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);
    let mut elapsed = 0.0f32;
    while elapsed < RUN_SECONDS {
        let frame_dt = FRAME_DT * rng.gen_range(0.7f32..1.4);
        let input = ai::chase_input(session.game(), Side::Left);
        session.set_input(Side::Left, input);
        session.tick(frame_dt)?;
        elapsed += frame_dt;
        thread::sleep(Duration::from_secs_f32(frame_dt));
    }

    running.store(false, Ordering::Relaxed);
    if tracker.join().is_err() {
        error!("tracker thread panicked");
    }

    let score = session.game().score();
    info!(
        "finished: state={:?} score {}:{} frames={} bytes={}",
        session.state(),
        score.left,
        score.right,
        *stats.frames.lock(),
        *stats.bytes.lock()
    );
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
