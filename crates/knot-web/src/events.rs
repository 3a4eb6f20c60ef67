use crate::dom;
use crate::input;
use crate::panel;
use knot_core::SceneDriver;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneDriver>>) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        let ratio = dom::pixel_ratio();
        let mut scene = scene.borrow_mut();
        scene.set_pixel_ratio(ratio);
        scene.on_resize(w as f32, h as f32);
        log::debug!("[resize] {}x{} @{}x", w, h, ratio);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<SceneDriver>>) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !canvas.is_connected() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &canvas);
        scene.borrow_mut().on_pointer_move(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_panel_toggle_p(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if key == "p" || key == "P" {
                panel::toggle(&doc);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
