//! Per-frame scene driver: camera easing, light orbit, picking, highlight and
//! the follower, advanced in that order once per display refresh.

use crate::camera::Camera;
use crate::color::Rgb;
use crate::constants::*;
use crate::follower::Follower;
use crate::highlight::Highlighter;
use crate::light::DirectionalLight;
use crate::mesh::ColorRamp;
use crate::picking::{pick_nearest, Hit, PickShape, PickableObject};
use crate::pointer::{PointerState, Viewport};
use crate::settings::Settings;
use glam::{Mat4, Quat, Vec3};

/// Which mesh a scene object is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ObjectKind {
    /// `wireframe` adds a black edge overlay drawn with the same transform.
    Sphere {
        detail: u32,
        ramp: ColorRamp,
        wireframe: bool,
    },
    Shadow,
}

/// Outcome of the pick step for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickOutcome {
    Named(Hit),
    Miss,
}

pub struct SceneDriver {
    camera: Camera,
    light: DirectionalLight,
    objects: Vec<PickableObject>,
    kinds: Vec<ObjectKind>,
    follower: Follower,
    highlighter: Highlighter,
    pointer: PointerState,
    viewport: Viewport,
    settings: Settings,
    last_pick: PickOutcome,
}

impl SceneDriver {
    /// Empty scene; see [`SceneDriver::with_demo_objects`] for the default layout.
    pub fn new(settings: Settings, viewport: Viewport) -> Self {
        Self {
            camera: Camera::new(viewport.aspect()),
            light: DirectionalLight::default(),
            objects: Vec::new(),
            kinds: Vec::new(),
            follower: Follower::new(),
            highlighter: Highlighter::default(),
            pointer: PointerState::default(),
            viewport,
            settings,
            last_pick: PickOutcome::Miss,
        }
    }

    /// Three wireframed icosahedron spheres in a row, each over an unnamed
    /// shadow quad. The left sphere is tipped so its hue sweep runs front to back.
    pub fn with_demo_objects(settings: Settings, viewport: Viewport) -> Self {
        let mut scene = Self::new(settings, viewport);
        let ramps = [
            ColorRamp::HueSweep,
            ColorRamp::Magenta,
            ColorRamp::RedSaturation,
        ];
        for (i, x) in [-SPHERE_SPACING, 0.0, SPHERE_SPACING].into_iter().enumerate() {
            scene.add_object(
                PickableObject {
                    name: None,
                    position: Vec3::new(x, SHADOW_Y, 0.0),
                    rotation: Quat::IDENTITY,
                    shape: PickShape::Quad {
                        half_extent: SHADOW_SIZE * 0.5,
                    },
                    base_color: Rgb::WHITE,
                    emissive: None,
                },
                ObjectKind::Shadow,
            );
            scene.add_object(
                PickableObject {
                    name: Some(SPHERE_NAMES[i].to_string()),
                    position: Vec3::new(x, 0.0, 0.0),
                    rotation: Quat::from_rotation_x(SPHERE_TILTS_X[i]),
                    shape: PickShape::Sphere {
                        radius: SPHERE_RADIUS,
                    },
                    base_color: Rgb::WHITE,
                    emissive: Some(Rgb::from_hex(SPHERE_EMISSIVE_HEX)),
                },
                ObjectKind::Sphere {
                    detail: SPHERE_DETAILS[i],
                    ramp: ramps[i],
                    wireframe: true,
                },
            );
        }
        scene
    }

    pub fn add_object(&mut self, object: PickableObject, kind: ObjectKind) -> usize {
        self.objects.push(object);
        self.kinds.push(kind);
        self.objects.len() - 1
    }

    // ---------------- Inputs ----------------

    /// Pointer position in drawing-buffer pixels.
    pub fn on_pointer_move(&mut self, px: f32, py: f32) {
        self.pointer = PointerState::from_pixels(px, py, &self.viewport);
    }

    /// Zero-sized viewports (hidden tab, collapsed canvas) are ignored.
    /// The pixel ratio carries over.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if let Some(vp) = Viewport::new(width, height) {
            self.viewport = vp.with_pixel_ratio(self.viewport.pixel_ratio);
            self.camera.aspect = vp.aspect();
        }
    }

    /// Drawing-buffer pixels per CSS pixel; takes effect on the next pointer move.
    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.viewport = self.viewport.with_pixel_ratio(ratio);
    }

    // ---------------- Settings ----------------

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_orbit_speed(&mut self, speed: f32) {
        self.settings.set_orbit_speed(speed);
    }

    /// Disabling restores the currently highlighted object immediately.
    pub fn set_highlight_enabled(&mut self, enabled: bool) {
        self.settings.set_highlight_enabled(enabled);
        if !enabled {
            self.highlighter.clear(&mut self.objects);
        }
    }

    pub fn set_highlight_color(&mut self, color: Rgb) {
        self.settings.set_highlight_color(color);
        let applied = self.settings.highlight_color();
        self.highlighter.recolor(&mut self.objects, applied);
    }

    // ---------------- Frame ----------------

    pub fn frame(&mut self) {
        self.camera.ease_toward(self.pointer.offset);
        self.light.advance(self.settings.orbit_speed());
        self.last_pick = self.pick();
        self.apply_pick(self.last_pick);
        self.follower.step();
    }

    /// Cast the pointer ray and classify the nearest hit.
    pub fn pick(&self) -> PickOutcome {
        let ray = self.camera.screen_ray(self.pointer.ndc);
        match pick_nearest(&ray, &self.objects) {
            Some(hit) if self.objects[hit.index].name.is_some() => PickOutcome::Named(hit),
            _ => PickOutcome::Miss,
        }
    }

    /// Update highlight and follower state from a pick result.
    pub fn apply_pick(&mut self, outcome: PickOutcome) {
        match outcome {
            PickOutcome::Named(hit) => {
                if self.settings.highlight_enabled() {
                    let color = self.settings.highlight_color();
                    self.highlighter.select(&mut self.objects, hit.index, color);
                } else {
                    self.highlighter.clear(&mut self.objects);
                }
                let pos = self.objects[hit.index].position;
                self.follower.set_y(pos.y + FOLLOWER_Y_OFFSET);
                self.follower.set_target_x(Some(pos.x));
                self.follower.set_visible(true);
            }
            PickOutcome::Miss => {
                self.highlighter.clear(&mut self.objects);
                self.follower.set_visible(false);
                self.follower.set_target_x(None);
            }
        }
    }

    // ---------------- Read access for rendering ----------------

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn objects(&self) -> &[PickableObject] {
        &self.objects
    }

    pub fn kinds(&self) -> &[ObjectKind] {
        &self.kinds
    }

    pub fn follower(&self) -> &Follower {
        &self.follower
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighter.current()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn last_pick(&self) -> PickOutcome {
        self.last_pick
    }

    /// World transform of object `index` for drawing.
    pub fn model_matrix(&self, index: usize) -> Option<Mat4> {
        self.objects
            .get(index)
            .map(|o| Mat4::from_rotation_translation(o.rotation, o.position))
    }

    pub fn background(&self) -> Rgb {
        Rgb::from_hex(BACKGROUND_HEX)
    }
}
