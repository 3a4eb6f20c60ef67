//! Debug tuning panel: orbit speed, highlight toggle and highlight color.
//!
//! The markup lives in `index.html`; this module only reads and writes the
//! inputs and forwards changes to the scene driver's bounded setters.

use crate::dom;
use knot_core::{Rgb, SceneDriver, Settings};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PANEL_ID: &str = "debug-panel";
const ORBIT_ID: &str = "orbit-speed";
const HIGHLIGHT_ID: &str = "highlight-enabled";
const COLOR_ID: &str = "highlight-color";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Write the current settings into the panel inputs.
pub fn sync_inputs(document: &web::Document, settings: &Settings) {
    if let Some(input) = dom::input_by_id(document, ORBIT_ID) {
        input.set_value(&format!("{:.3}", settings.orbit_speed()));
    }
    if let Some(input) = dom::input_by_id(document, HIGHLIGHT_ID) {
        input.set_checked(settings.highlight_enabled());
    }
    if let Some(input) = dom::input_by_id(document, COLOR_ID) {
        input.set_value(&format!("#{:06x}", settings.highlight_color().to_hex()));
    }
}

pub fn wire(document: &web::Document, scene: Rc<RefCell<SceneDriver>>) {
    let scene_orbit = scene.clone();
    dom::add_input_listener(document, ORBIT_ID, "input", move |input| {
        let v = input.value_as_number() as f32;
        scene_orbit.borrow_mut().set_orbit_speed(v);
        log::debug!("[panel] orbit speed {:.3}", scene_orbit.borrow().settings().orbit_speed());
    });

    let scene_toggle = scene.clone();
    dom::add_input_listener(document, HIGHLIGHT_ID, "change", move |input| {
        scene_toggle.borrow_mut().set_highlight_enabled(input.checked());
        log::debug!("[panel] highlight {}", input.checked());
    });

    dom::add_input_listener(document, COLOR_ID, "input", move |input| {
        match Rgb::parse(&input.value()) {
            Ok(color) => scene.borrow_mut().set_highlight_color(color),
            Err(e) => log::warn!("[panel] {}", e),
        }
    });
}
