use glam::Vec3;

// Shared scene and motion tuning constants.

// Follower easing
pub const FOLLOW_FAR_DISTANCE: f32 = 100.0; // at or beyond this distance the follower accelerates
pub const FOLLOW_ACCELERATION: f32 = 0.2; // speed gained per frame while far
pub const FOLLOW_DECELERATION: f32 = 0.5; // speed lost per frame while close
pub const FOLLOW_REST_SPEED: f32 = 1.0; // speed after arrival
pub const FOLLOW_SPIN_PER_FRAME: f32 = 0.01; // cosmetic Y rotation, radians
pub const FOLLOWER_Y_OFFSET: f32 = 300.0; // hover height above the picked object

// Camera
pub const CAMERA_FOV_DEG: f32 = 30.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 10_000.0;
pub const CAMERA_Z: f32 = 1800.0;
pub const CAMERA_EASE: f32 = 0.05; // fraction of the remaining offset covered per frame

// Light
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub const ORBIT_SPEED_DEFAULT: f32 = 0.01; // radians per frame
pub const ORBIT_SPEED_MAX: f32 = 0.2;

// Scene layout
pub const SPHERE_RADIUS: f32 = 200.0;
pub const SPHERE_SPACING: f32 = 400.0;
// Per sphere, left to right
pub const SPHERE_NAMES: [&str; 3] = ["left", "center", "right"];
pub const SPHERE_DETAILS: [u32; 3] = [1, 8, 4];
pub const SPHERE_TILTS_X: [f32; 3] = [-1.87, 0.0, 0.0]; // radians about X
pub const SHADOW_SIZE: f32 = 300.0;
pub const SHADOW_Y: f32 = -250.0;
pub const SHADOW_SEGMENTS: u32 = 16;

// Torus knot (follower mesh)
pub const KNOT_RADIUS: f32 = 60.0;
pub const KNOT_TUBE: f32 = 20.0;
pub const KNOT_TUBULAR_SEGMENTS: u32 = 100;
pub const KNOT_RADIAL_SEGMENTS: u32 = 16;
pub const KNOT_P: u32 = 2;
pub const KNOT_Q: u32 = 3;

// Colors (0xRRGGBB)
pub const BACKGROUND_HEX: u32 = 0xFFFFFF;
pub const LIGHT_HEX: u32 = 0xFFFFFF;
pub const KNOT_HEX: u32 = 0x00FF1F;
pub const HIGHLIGHT_HEX_DEFAULT: u32 = 0xFF0000;
pub const SPHERE_EMISSIVE_HEX: u32 = 0x000000;
pub const WIREFRAME_HEX: u32 = 0x000000;
