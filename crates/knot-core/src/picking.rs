//! Ray casting against the pickable scene objects.

use crate::color::Rgb;
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Hit volume used for picking, centered on the object position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickShape {
    Sphere { radius: f32 },
    /// Horizontal square in the XZ plane.
    Quad { half_extent: f32 },
}

#[derive(Clone, Debug)]
pub struct PickableObject {
    /// Unnamed objects block the ray but never count as a hit.
    pub name: Option<String>,
    pub position: Vec3,
    /// Orientation of the drawn mesh. Pick shapes are symmetric and ignore it.
    pub rotation: Quat,
    pub shape: PickShape,
    pub base_color: Rgb,
    /// `None` when the material has no emissive channel.
    pub emissive: Option<Rgb>,
}

impl PickableObject {
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self.shape {
            PickShape::Sphere { radius } => {
                ray_sphere(ray.origin, ray.direction, self.position, radius)
            }
            PickShape::Quad { half_extent } => {
                ray_quad(ray.origin, ray.direction, self.position, half_extent)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub t: f32,
    pub point: Vec3,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Intersect a horizontal square centered at `center` (normal +Y).
#[inline]
pub fn ray_quad(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, half_extent: f32) -> Option<f32> {
    if ray_dir.y.abs() < 1e-6 {
        return None;
    }
    let t = (center.y - ray_origin.y) / ray_dir.y;
    if t < 0.0 {
        return None;
    }
    let p = ray_origin + ray_dir * t;
    let inside = (p.x - center.x).abs() <= half_extent && (p.z - center.z).abs() <= half_extent;
    inside.then_some(t)
}

/// Nearest intersection over all objects, named or not.
pub fn pick_nearest(ray: &Ray, objects: &[PickableObject]) -> Option<Hit> {
    let mut best = None::<(usize, f32)>;
    for (i, obj) in objects.iter().enumerate() {
        if let Some(t) = obj.intersect(ray) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(index, t)| Hit {
        index,
        t,
        point: ray.at(t),
    })
}
