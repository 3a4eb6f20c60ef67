//! The floating shape that chases the hovered object along X.
//!
//! Motion is a speed ramp rather than a physical model: speed grows by a fixed
//! amount per step while the target is far and shrinks while it is close. The
//! follower snaps onto the target once the remaining distance fits in one step
//! or the speed runs out.

use crate::constants::{
    FOLLOW_ACCELERATION, FOLLOW_DECELERATION, FOLLOW_FAR_DISTANCE, FOLLOW_REST_SPEED,
    FOLLOW_SPIN_PER_FRAME,
};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Follower {
    position: Vec2,
    target_x: Option<f32>,
    speed: f32,
    visible: bool,
    rotation_y: f32,
}

impl Default for Follower {
    fn default() -> Self {
        Self::new()
    }
}

impl Follower {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            target_x: None,
            speed: FOLLOW_REST_SPEED,
            visible: false,
            rotation_y: 0.0,
        }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            ..Self::new()
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target_x(&self) -> Option<f32> {
        self.target_x
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn is_idle(&self) -> bool {
        self.target_x.is_none()
    }

    pub fn set_target_x(&mut self, target: Option<f32>) {
        self.target_x = target;
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        self.rotation_y += FOLLOW_SPIN_PER_FRAME;

        let Some(target) = self.target_x else {
            return;
        };
        let x = self.position.x;
        let distance = (x - target).abs();

        if distance >= FOLLOW_FAR_DISTANCE {
            self.speed += FOLLOW_ACCELERATION;
        } else {
            self.speed -= FOLLOW_DECELERATION;
        }

        if distance <= self.speed || self.speed <= 0.0 {
            self.position.x = target;
            self.speed = FOLLOW_REST_SPEED;
            self.target_x = None;
        } else if x < target {
            self.position.x += self.speed;
        } else if x > target {
            self.position.x -= self.speed;
        }
    }
}
