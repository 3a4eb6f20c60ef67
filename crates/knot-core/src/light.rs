use crate::color::Rgb;
use crate::constants::{LIGHT_DIRECTION, LIGHT_HEX};
use glam::{Quat, Vec3};

/// Directional light orbiting the Y axis.
#[derive(Clone, Debug)]
pub struct DirectionalLight {
    pub color: Rgb,
    base_direction: Vec3,
    angle: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(LIGHT_HEX),
            base_direction: LIGHT_DIRECTION,
            angle: 0.0,
        }
    }
}

impl DirectionalLight {
    pub fn advance(&mut self, radians: f32) {
        self.angle = (self.angle + radians).rem_euclid(std::f32::consts::TAU);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Unit vector pointing from the scene toward the light.
    pub fn direction(&self) -> Vec3 {
        (Quat::from_rotation_y(self.angle) * self.base_direction).normalize()
    }
}
