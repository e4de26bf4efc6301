//! End-to-end behaviour of the state machine and velocity resolver together.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::body::horizontal;
use super::config::LocomotionConfig;
use super::input::LocomotionInput;
use super::state::LocomotionState;
use super::testing::{forward, sprinting_forward, Rig};

#[test]
fn test_sprint_needs_movement() {
    let mut rig = Rig::new(LocomotionConfig::default());
    let input = LocomotionInput {
        sprint_held: true,
        ..Default::default()
    };

    for _ in 0..20 {
        rig.frame(0.25, &input);
        assert!(!rig.ctx.is_sprinting());
        assert_eq!(rig.ctx.sprint().timer(), rig.ctx.config().sprint_max_duration);
    }
}

#[test]
fn test_auto_sprint_needs_no_key() {
    let mut rig = Rig::new(LocomotionConfig::default());
    let input = LocomotionInput {
        auto_sprint: true,
        ..forward()
    };
    rig.frame(0.25, &input);
    assert!(rig.ctx.is_sprinting());
}

#[test]
fn test_sprint_drains_then_recharges_to_full() {
    let config = LocomotionConfig::default();
    let max = config.sprint_max_duration;
    let rate = config.sprint_recharge_rate;
    let mut rig = Rig::new(config);
    let dt = 0.25;
    let frames = (max / dt) as usize;

    for i in 1..=frames {
        rig.frame(dt, &sprinting_forward());
        if i < frames {
            assert!(rig.ctx.is_sprinting(), "frame {i}");
            assert!(!rig.ctx.sprint().is_drained());
        }
    }
    assert!(!rig.ctx.is_sprinting());
    assert!(rig.ctx.sprint().is_drained());
    assert_eq!(rig.ctx.sprint().timer(), 0.0);

    // Key still held: energy climbs at the recharge rate, sprint stays locked out
    let mut previous = 0.0;
    while rig.ctx.sprint().is_drained() {
        rig.frame(dt, &sprinting_forward());
        let timer = rig.ctx.sprint().timer();
        assert!(timer > previous);
        if rig.ctx.sprint().is_drained() {
            assert!((timer - previous - rate * dt).abs() < 1e-6);
            assert!(!rig.ctx.is_sprinting());
        }
        previous = timer;
    }
    assert_eq!(rig.ctx.sprint().timer(), max);
}

#[test]
fn test_slide_runs_for_its_duration() {
    let config = LocomotionConfig::default();
    let mut rig = Rig::new(config.clone());
    rig.frame(0.25, &sprinting_forward());
    assert_eq!(rig.ctx.slide_cooldown_timer(), 0.0);

    let mut input = sprinting_forward();
    input.slide_pressed = true;
    rig.frame(0.25, &input);

    assert_eq!(rig.ctx.state(), LocomotionState::Slide);
    assert_eq!(rig.collider.height, config.crouch_height);
    assert!((rig.body.velocity.length() - config.slide_speed).abs() < 1e-5);

    // Half the slide: still going
    rig.frame(0.25, &sprinting_forward());
    assert_eq!(rig.ctx.state(), LocomotionState::Slide);
    assert!(horizontal(rig.body.velocity).length() > 1.0);

    // Timer expires
    rig.frame(0.25, &sprinting_forward());
    assert_eq!(rig.ctx.state(), LocomotionState::Normal);
    assert_eq!(rig.collider.height, 2.0);
    assert_eq!(rig.collider.center, Vec3::ZERO);
    assert_eq!(rig.ctx.slide_timer(), 0.0);
}

#[test]
fn test_jump_in_place_then_steer_once() {
    let config = LocomotionConfig::default();
    let mut rig = Rig::new(config.clone());

    let jump = LocomotionInput {
        jump_pressed: true,
        ..Default::default()
    };
    rig.advance(1.0 / 60.0, &jump);
    assert!(rig.ctx.awaiting_air_direction());
    assert!(!rig.ctx.air_direction_locked());
    assert_eq!(rig.body.velocity, Vec3::new(0.0, config.jump_force, 0.0));

    rig.grounded = false;
    rig.frame(1.0 / 60.0, &LocomotionInput::default());
    assert!(rig.ctx.awaiting_air_direction());

    let right = LocomotionInput::moving(Vec2::new(1.0, 0.0));
    rig.frame(1.0 / 60.0, &right);
    assert!(rig.ctx.air_direction_locked());
    assert!(!rig.ctx.awaiting_air_direction());
    assert_eq!(rig.ctx.air_momentum(), Vec3::X * config.move_speed);
    let committed = horizontal(rig.body.velocity);
    assert_eq!(committed, Vec3::X * config.move_speed);

    // Any later input is ignored until landing
    for axes in [Vec2::new(-1.0, 0.0), Vec2::new(0.0, 1.0), Vec2::ZERO] {
        rig.frame(1.0 / 60.0, &LocomotionInput::moving(axes));
        assert_eq!(horizontal(rig.body.velocity), committed);
    }
}

#[test]
fn test_dropshot_cancel_waits_for_ground() {
    let config = LocomotionConfig::default();
    let mut rig = Rig::new(config.clone());
    rig.frame(0.25, &sprinting_forward());

    let mut crouch = sprinting_forward();
    crouch.crouch_pressed = true;
    rig.advance(0.25, &crouch);
    assert_eq!(rig.ctx.state(), LocomotionState::Dropshot);

    let mut jump = sprinting_forward();
    jump.jump_pressed = true;

    rig.grounded = false;
    rig.frame(0.25, &jump);
    assert_eq!(rig.ctx.state(), LocomotionState::Dropshot);
    assert_eq!(rig.collider.height, config.crouch_height);

    // Landed and settled
    rig.grounded = true;
    rig.body.velocity = Vec3::ZERO;
    rig.advance(0.25, &jump);
    assert_eq!(rig.ctx.state(), LocomotionState::Normal);
    assert_eq!(rig.collider.height, 2.0);
    assert_eq!(rig.collider.center, Vec3::ZERO);
    assert_eq!(rig.body.velocity.y, 0.0);
    assert!(!rig.ctx.air_direction_locked());
    assert!(!rig.ctx.awaiting_air_direction());

    // The next press is a real jump
    rig.advance(0.25, &jump);
    assert_eq!(rig.body.velocity.y, config.jump_force);
}

#[test]
fn test_double_crouch_restores_collider() {
    let mut rig = Rig::new(LocomotionConfig::default());
    let before = (rig.collider.height, rig.collider.center);

    let crouch = LocomotionInput {
        crouch_pressed: true,
        ..Default::default()
    };
    rig.advance(1.0 / 60.0, &crouch);
    rig.advance(1.0 / 60.0, &crouch);

    assert_eq!(rig.ctx.state(), LocomotionState::Normal);
    assert_eq!((rig.collider.height, rig.collider.center), before);
}

#[test]
fn test_invariants_hold_under_arbitrary_input() {
    let config = LocomotionConfig::default();
    let mut rig = Rig::new(config.clone());
    let snapshot = rig.ctx.collider_snapshot();
    let mut rng = StdRng::seed_from_u64(42);

    for frame in 0..5000 {
        let input = LocomotionInput {
            axes: Vec2::new(rng.gen_range(-1..=1) as f32, rng.gen_range(-1..=1) as f32),
            slide_pressed: rng.gen_ratio(1, 7),
            jump_pressed: rng.gen_ratio(1, 9),
            crouch_pressed: rng.gen_ratio(1, 8),
            sprint_held: !rng.gen_ratio(1, 4),
            auto_sprint: rng.gen_ratio(1, 10),
            ..Default::default()
        };
        if rng.gen_ratio(1, 6) {
            rig.grounded = !rig.grounded;
        }
        if rng.gen_ratio(1, 5) {
            // Friction from the physics side
            rig.body.velocity *= 0.5;
        }

        let state_before = rig.ctx.state();
        let cooldown_before = rig.ctx.slide_cooldown_timer();
        let dt = [1.0 / 144.0, 1.0 / 60.0, 1.0 / 30.0, 0.1][rng.gen_range(0..4)];

        rig.frame(dt, &input);
        let ctx = &rig.ctx;

        let timer = ctx.sprint().timer();
        assert!(
            (0.0..=config.sprint_max_duration).contains(&timer),
            "frame {frame}: sprint timer {timer}"
        );
        assert!(ctx.slide_timer() >= 0.0);
        assert!(ctx.slide_cooldown_timer() >= 0.0);
        assert!(ctx.recovery_timer() >= 0.0);

        if state_before == LocomotionState::Slide && ctx.state() == LocomotionState::Slide {
            assert_eq!(ctx.slide_cooldown_timer(), cooldown_before, "frame {frame}");
        }

        if ctx.state().is_lowered() {
            assert_eq!(rig.collider.height, config.crouch_height, "frame {frame}");
        } else {
            assert_eq!(rig.collider.height, snapshot.height, "frame {frame}");
            assert_eq!(rig.collider.center, snapshot.center, "frame {frame}");
        }

        assert!(!(ctx.awaiting_air_direction() && ctx.air_direction_locked()));
        if ctx.air_direction_locked() {
            assert!(ctx.air_momentum() != Vec3::ZERO, "frame {frame}");
        }
    }
}
