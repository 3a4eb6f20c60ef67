// Host-side tests for the orbiting directional light.

use knot_core::*;

#[test]
fn starts_along_base_direction() {
    let light = DirectionalLight::default();
    assert_eq!(light.angle(), 0.0);
    assert!((light.direction() - LIGHT_DIRECTION).length() < 1e-6);
    assert_eq!(light.color, Rgb::WHITE);
}

#[test]
fn quarter_turn_swings_direction_onto_x() {
    let mut light = DirectionalLight::default();
    light.advance(std::f32::consts::FRAC_PI_2);
    let d = light.direction();
    assert!((d.length() - 1.0).abs() < 1e-5);
    assert!((d.x - 1.0).abs() < 1e-5);
    assert!(d.z.abs() < 1e-5);
}

#[test]
fn angle_wraps_after_full_turn() {
    let mut light = DirectionalLight::default();
    for _ in 0..7 {
        light.advance(1.0);
    }
    assert!(light.angle() >= 0.0 && light.angle() < std::f32::consts::TAU);
    assert!((light.angle() - (7.0 - std::f32::consts::TAU)).abs() < 1e-4);
}
