// Host-side tests for the follower easing step.

use knot_core::*;

const MAX_FRAMES: usize = 10_000;

/// Step until idle, returning (pre-step distance, pre-step speed, post-step follower) per frame.
fn run_to_arrival(f: &mut Follower) -> Vec<(f32, f32, Follower)> {
    let mut trace = Vec::new();
    for _ in 0..MAX_FRAMES {
        let Some(target) = f.target_x() else {
            break;
        };
        let before = ((f.position().x - target).abs(), f.speed());
        f.step();
        trace.push((before.0, before.1, f.clone()));
    }
    assert!(f.is_idle(), "follower did not arrive within {MAX_FRAMES} frames");
    trace
}

#[test]
fn idle_follower_stays_put_but_spins() {
    let mut f = Follower::at(12.5, 40.0);
    f.step();
    f.step();
    assert_eq!(f.position().x, 12.5);
    assert_eq!(f.position().y, 40.0);
    assert_eq!(f.speed(), FOLLOW_REST_SPEED);
    assert!((f.rotation_y() - 2.0 * FOLLOW_SPIN_PER_FRAME).abs() < 1e-6);
}

#[test]
fn new_follower_is_hidden_and_idle() {
    let f = Follower::new();
    assert!(!f.visible());
    assert!(f.is_idle());
    assert_eq!(f.speed(), 1.0);
}

#[test]
fn ramps_up_from_rest_toward_far_target() {
    let mut f = Follower::at(0.0, 0.0);
    f.set_target_x(Some(500.0));

    f.step();
    assert!((f.speed() - 1.2).abs() < 1e-5);
    assert!((f.position().x - 1.2).abs() < 1e-5);

    f.step();
    assert!((f.speed() - 1.4).abs() < 1e-5);
    assert!((f.position().x - 2.6).abs() < 1e-5);
}

#[test]
fn speed_strictly_increases_while_far() {
    let mut f = Follower::at(0.0, 0.0);
    f.set_target_x(Some(500.0));
    let trace = run_to_arrival(&mut f);

    let far: Vec<_> = trace
        .iter()
        .filter(|(d, _, _)| *d >= FOLLOW_FAR_DISTANCE)
        .collect();
    assert!(far.len() > 2);
    for (_, speed_before, after) in far {
        assert!(
            after.speed() > *speed_before,
            "speed {} did not grow from {}",
            after.speed(),
            speed_before
        );
    }
}

#[test]
fn speed_strictly_decreases_while_close() {
    let mut f = Follower::at(0.0, 0.0);
    f.set_target_x(Some(500.0));
    let trace = run_to_arrival(&mut f);

    let close: Vec<_> = trace
        .iter()
        .filter(|(d, _, after)| *d < FOLLOW_FAR_DISTANCE && !after.is_idle())
        .collect();
    assert!(!close.is_empty());
    for (_, speed_before, after) in close {
        assert!(after.speed() < *speed_before);
    }
}

#[test]
fn far_target_scenario_snaps_exactly_on_target() {
    let mut f = Follower::at(0.0, 0.0);
    f.set_target_x(Some(500.0));
    let trace = run_to_arrival(&mut f);

    for (_, _, after) in &trace {
        assert!(after.position().x <= 500.0, "overshot to {}", after.position().x);
    }
    assert_eq!(f.position().x, 500.0);
    assert_eq!(f.speed(), FOLLOW_REST_SPEED);
    assert_eq!(f.target_x(), None);
}

#[test]
fn moves_in_negative_direction() {
    let mut f = Follower::at(400.0, 0.0);
    f.set_target_x(Some(-400.0));
    f.step();
    assert!(f.position().x < 400.0);
    let trace = run_to_arrival(&mut f);
    for (_, _, after) in &trace {
        assert!(after.position().x >= -400.0);
    }
    assert_eq!(f.position().x, -400.0);
}

#[test]
fn snaps_when_distance_fits_in_one_step() {
    let mut f = Follower::at(0.0, 0.0);
    f.set_target_x(Some(0.3));
    f.step();
    assert_eq!(f.position().x, 0.3);
    assert_eq!(f.speed(), 1.0);
    assert!(f.is_idle());
}

#[test]
fn exhausted_speed_forces_arrival() {
    // 1.0 -> 0.5 (step) -> 0.0 (snap) before the distance check could pass
    let mut f = Follower::at(0.0, 0.0);
    f.set_target_x(Some(99.0));
    f.step();
    assert!((f.speed() - 0.5).abs() < 1e-6);
    assert!((f.position().x - 0.5).abs() < 1e-6);
    f.step();
    assert_eq!(f.position().x, 99.0);
    assert_eq!(f.speed(), FOLLOW_REST_SPEED);
    assert!(f.is_idle());
}

#[test]
fn target_on_current_position_resolves_immediately() {
    let mut f = Follower::at(-400.0, 300.0);
    f.set_target_x(Some(-400.0));
    f.step();
    assert!(f.is_idle());
    assert_eq!(f.position().x, -400.0);
    assert_eq!(f.speed(), 1.0);
}

#[test]
fn clearing_target_freezes_motion_and_keeps_speed() {
    let mut f = Follower::at(0.0, 0.0);
    f.set_target_x(Some(1000.0));
    for _ in 0..5 {
        f.step();
    }
    let x = f.position().x;
    let speed = f.speed();
    f.set_target_x(None);
    f.step();
    assert_eq!(f.position().x, x);
    assert_eq!(f.speed(), speed);
}

#[test]
fn setters_do_not_touch_x() {
    let mut f = Follower::at(5.0, 0.0);
    f.set_y(300.0);
    f.set_visible(true);
    assert_eq!(f.position().x, 5.0);
    assert_eq!(f.position().y, 300.0);
    assert!(f.visible());
}
