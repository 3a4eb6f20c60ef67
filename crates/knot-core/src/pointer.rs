use glam::Vec2;

/// Drawing-buffer size in pixels.
///
/// `pixel_ratio` is drawing-buffer pixels per CSS pixel (devicePixelRatio).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Returns `None` when either dimension is zero or not finite.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (positive(width) && positive(height)).then_some(Self {
            width,
            height,
            pixel_ratio: 1.0,
        })
    }

    /// Invalid ratios leave the current one in place.
    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        if positive(ratio) {
            self.pixel_ratio = ratio;
        }
        self
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn half(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Last pointer position, overwritten on every move.
///
/// `ndc` is in \[-1, 1\] with +y up and drives picking. `offset` is the CSS-pixel
/// offset from the viewport center with +y down and drives camera easing, so
/// the camera swing does not depend on the display density.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    pub offset: Vec2,
}

impl PointerState {
    /// `px`, `py` are drawing-buffer pixels.
    pub fn from_pixels(px: f32, py: f32, viewport: &Viewport) -> Self {
        let half = viewport.half();
        let ndc = Vec2::new(
            (2.0 * px / viewport.width) - 1.0,
            1.0 - (2.0 * py / viewport.height),
        );
        Self {
            ndc,
            offset: Vec2::new(px - half.x, py - half.y) / viewport.pixel_ratio,
        }
    }
}
