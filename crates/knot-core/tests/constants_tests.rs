// Host-side tests for constants and their relationships.

use knot_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn follower_constants_are_positive() {
    assert!(FOLLOW_FAR_DISTANCE > 0.0);
    assert!(FOLLOW_ACCELERATION > 0.0);
    assert!(FOLLOW_DECELERATION > 0.0);
    assert!(FOLLOW_REST_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The follower must float clear of the sphere it hovers over
    assert!(FOLLOWER_Y_OFFSET > SPHERE_RADIUS);

    // Neighbouring spheres must not overlap, or picking becomes ambiguous
    assert!(SPHERE_SPACING >= 2.0 * SPHERE_RADIUS);

    // Shadows sit below the spheres
    assert!(SHADOW_Y < -SPHERE_RADIUS);

    // Camera clip range must contain the scene
    assert!(CAMERA_NEAR < CAMERA_Z && CAMERA_Z < CAMERA_FAR);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE <= 1.0);

    assert!(ORBIT_SPEED_DEFAULT >= 0.0 && ORBIT_SPEED_DEFAULT <= ORBIT_SPEED_MAX);
}

#[test]
fn sphere_tables_line_up() {
    assert_eq!(SPHERE_NAMES.len(), SPHERE_DETAILS.len());
    assert!(SPHERE_NAMES.iter().all(|n| !n.is_empty()));
}
