//! Exclusive emissive highlight over the pickable objects.

use crate::color::Rgb;
use crate::picking::PickableObject;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Active {
    index: usize,
    original: Option<Rgb>,
}

/// Tracks the single highlighted object and the emissive it had before.
#[derive(Clone, Debug, Default)]
pub struct Highlighter {
    active: Option<Active>,
}

impl Highlighter {
    pub fn current(&self) -> Option<usize> {
        self.active.map(|a| a.index)
    }

    /// Highlight `index`, restoring the previous object first.
    ///
    /// Re-selecting the current object is a no-op. Objects without an emissive
    /// channel are still tracked so the follower logic sees a stable selection.
    pub fn select(&mut self, objects: &mut [PickableObject], index: usize, color: Rgb) {
        if self.current() == Some(index) {
            return;
        }
        self.clear(objects);
        let Some(obj) = objects.get_mut(index) else {
            return;
        };
        let original = obj.emissive;
        if let Some(e) = obj.emissive.as_mut() {
            *e = color;
        }
        log::debug!("[highlight] select {:?}", obj.name);
        self.active = Some(Active { index, original });
    }

    /// Re-tint the current object, keeping the remembered original.
    pub fn recolor(&mut self, objects: &mut [PickableObject], color: Rgb) {
        if let Some(a) = self.active {
            if let Some(e) = objects.get_mut(a.index).and_then(|o| o.emissive.as_mut()) {
                *e = color;
            }
        }
    }

    /// Restore the highlighted object's original emissive, if any.
    pub fn clear(&mut self, objects: &mut [PickableObject]) {
        if let Some(prev) = self.active.take() {
            if let (Some(obj), Some(original)) = (objects.get_mut(prev.index), prev.original) {
                obj.emissive = Some(original);
                log::debug!("[highlight] restore {:?}", obj.name);
            }
        }
    }
}
