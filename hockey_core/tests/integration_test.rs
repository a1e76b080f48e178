use glam::Vec2;
use hockey_core::*;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const DT: f32 = 1.0 / 120.0;

fn field() -> FieldSpec {
    FieldSpec::new(2.0, 1.0, 0.05, 0.35)
}

/// Engine with both mallets parked off the table, out of the puck's way
fn bare_engine(restitution: f32, damping: f32, hooks: CollisionHooks) -> PhysicsEngine {
    let mut engine = PhysicsEngine::new(
        field(),
        PuckOverrides {
            restitution: Some(restitution),
            damping: Some(damping),
            max_speed: None,
        },
        hooks,
    );
    engine.set_mallet_positions(Vec2::new(-3.0, 3.0), Vec2::new(3.0, 3.0), 0.0, true, None);
    engine
}

#[test]
fn test_puck_bounces_off_bottom_edge() {
    let mut engine = bare_engine(1.0, 0.0, CollisionHooks::new());
    engine.place_puck(Vec2::new(0.0, 0.46), Vec2::new(0.0, 5.0));

    engine.step(DT);

    let puck = engine.puck();
    assert!((puck.pos.y - (0.5 - puck.radius)).abs() < 1e-6);
    assert!(puck.vel.y < 0.0, "Puck should head back up");
    assert!((puck.vel.y + 5.0).abs() < 1e-4);
}

#[test]
fn test_puck_enters_goal_without_bounce() {
    let walls = Arc::new(AtomicUsize::new(0));
    let counter = walls.clone();
    let hooks = CollisionHooks::new().on_puck_wall(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let mut engine = bare_engine(0.9, 0.0, hooks);
    engine.place_puck(Vec2::new(0.98, 0.0), Vec2::new(2.0, 0.0));

    for _ in 0..5 {
        engine.step(DT);
    }

    assert!(engine.puck().pos.x > 1.0, "Puck should cross the goal line");
    assert_eq!(engine.puck().vel, Vec2::new(2.0, 0.0));
    assert_eq!(walls.load(Ordering::SeqCst), 0, "No wall collision in the goal mouth");
}

#[test]
fn test_overlapping_puck_is_pushed_off_mallet() {
    let mut engine = PhysicsEngine::with_specs(
        field(),
        BodySpec {
            restitution: 0.9,
            ..BodySpec::puck()
        },
        BodySpec {
            restitution: 0.9,
            ..BodySpec::mallet()
        },
        PuckOverrides::default(),
        CollisionHooks::new(),
    );
    engine.set_mallet_positions(Vec2::new(-3.0, 3.0), Vec2::new(0.14, 0.0), 0.0, true, None);
    engine.place_puck(Vec2::new(0.11, 0.0), Vec2::ZERO);

    engine.step(DT);

    let puck = engine.puck();
    let mallet = engine.mallet_right();
    let dist = puck.pos.distance(mallet.pos);
    assert!(dist >= 0.11 - 1e-5, "distance {}", dist);
    assert!(puck.vel.length() > 0.0);
    assert!(
        puck.vel.dot(puck.pos - mallet.pos) > 0.0,
        "Puck should move away from the mallet"
    );
}

#[test]
fn test_negative_max_speed_means_unbounded() {
    let mut engine = bare_engine(1.0, 0.0, CollisionHooks::new());
    engine.update_puck_settings(PuckSettings::new(1.0, 0.0, -1.0));
    engine.place_puck(Vec2::ZERO, Vec2::new(0.0, 500.0));

    engine.step(1e-5);

    assert!((engine.puck().speed() - 500.0).abs() < 1e-2);
}

#[test]
fn test_resting_puck_stays_put() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let mut engine = bare_engine(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..3.0),
            CollisionHooks::new(),
        );
        let pos = Vec2::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.3..0.3));
        engine.place_puck(pos, Vec2::ZERO);
        engine.step(rng.gen_range(1e-4..0.05));
        assert_eq!(engine.puck().pos, pos);
    }
}

#[test]
fn test_puck_stays_on_table_outside_goal_mouth() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    let f = field();
    for _ in 0..50 {
        let mut engine = bare_engine(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..1.0),
            CollisionHooks::new(),
        );
        engine.place_puck(
            Vec2::new(rng.gen_range(-0.9..0.9), rng.gen_range(-0.4..0.4)),
            Vec2::new(rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0)),
        );
        for _ in 0..600 {
            engine.step(DT);
            let puck = engine.puck();
            if f.goal_line_crossed(puck.pos.x).is_some() {
                break;
            }
            if !f.in_goal_mouth(puck.pos.y) {
                assert!(
                    puck.pos.x.abs() <= f.half_width() + puck.radius + 1e-5,
                    "puck escaped at {:?}",
                    puck.pos
                );
            }
            assert!(puck.pos.y.abs() <= f.half_height() - puck.radius + 1e-5);
        }
    }
}

#[test]
fn test_mallets_never_push_puck_through_walls() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let f = field();
    let r = BodySpec::mallet().radius;
    for _ in 0..50 {
        let mut engine = bare_engine(
            rng.gen_range(0.0..=1.0),
            rng.gen_range(0.0..1.0),
            CollisionHooks::new(),
        );
        // Mallets parked against the rails, where clamp_to_half lets them go
        let left_rail = Vec2::new(-1.0, rng.gen_range(-0.5..0.5));
        let right_rail = Vec2::new(rng.gen_range(0.0..1.0), 0.5);
        let left = systems::clamp_to_half(&f, Side::Left, r, left_rail);
        let right = systems::clamp_to_half(&f, Side::Right, r, right_rail);
        engine.set_mallet_positions(left, right, 0.0, true, None);
        engine.place_puck(
            Vec2::new(rng.gen_range(-0.9..0.9), rng.gen_range(-0.4..0.4)),
            Vec2::new(rng.gen_range(-6.0..6.0), rng.gen_range(-6.0..6.0)),
        );
        for _ in 0..300 {
            engine.step(DT);
            let puck = engine.puck();
            if f.goal_line_crossed(puck.pos.x).is_some() {
                assert!(f.in_goal_mouth(puck.pos.y), "goal through the wall at {:?}", puck.pos);
                break;
            }
            if !f.in_goal_mouth(puck.pos.y) {
                assert!(
                    puck.pos.x.abs() <= f.half_width() - puck.radius + 1e-5,
                    "puck in end wall at {:?}",
                    puck.pos
                );
            }
            assert!(puck.pos.y.abs() <= f.half_height() - puck.radius + 1e-5);
        }
    }
}

#[test]
fn test_pinned_puck_does_not_score_through_end_wall() {
    let mut game = Match::new(Config::new(), Settings::default(), CollisionHooks::new());
    let f = *game.engine().field();
    game.engine_mut().set_mallet_positions(
        f.mallet_spawn(Side::Left),
        Vec2::new(0.84, 0.3),
        0.0,
        true,
        None,
    );
    game.engine_mut().place_puck(Vec2::new(0.96, 0.3), Vec2::ZERO);

    let mut goals = Vec::new();
    for _ in 0..60 {
        let out = game.advance(
            1.0 / 60.0,
            MalletInput::Hold,
            MalletInput::Target(Vec2::new(0.99, 0.3)),
        );
        goals.extend(out.goals);
    }

    assert!(goals.is_empty(), "goals scored through the wall: {:?}", goals);
    assert!(game.engine().puck().pos.x <= 0.96 + 1e-5);
}

#[test]
fn test_match_rally_scores_goal() {
    let mut settings = Settings::default();
    settings.max_puck_speed = 0.0;
    settings.puck_damping = 0.0;
    let goals = Arc::new(AtomicUsize::new(0));
    let mallet_hits = goals.clone();
    let hooks = CollisionHooks::new().on_puck_mallet(move || {
        mallet_hits.fetch_add(1, Ordering::SeqCst);
    });
    let mut game = Match::new(Config::new(), settings, hooks);

    // Left mallet drives straight through the resting puck
    let mut scored = Vec::new();
    for _ in 0..240 {
        let out = game.advance(
            1.0 / 60.0,
            MalletInput::Target(Vec2::new(-0.05, 0.0)),
            MalletInput::Target(Vec2::new(0.9, 0.4)),
        );
        scored.extend(out.goals);
        if !scored.is_empty() {
            break;
        }
    }

    assert!(goals.load(Ordering::SeqCst) >= 1, "Mallet should strike the puck");
    assert_eq!(scored.first(), Some(&Side::Left));
    assert_eq!(game.score().left, 1);
}

#[test]
fn test_settings_document_drives_match() {
    let settings = Settings::from_json(r#"{ "puck_restitution": 0.3, "max_puck_speed": -1 }"#)
        .expect("valid settings");
    let game = Match::new(Config::new(), settings, CollisionHooks::new());
    let puck = game.engine().puck_settings();
    assert_eq!(puck.restitution, 0.3);
    assert_eq!(puck.max_speed, None);
}
