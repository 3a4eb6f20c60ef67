#![cfg(target_arch = "wasm32")]
use instant::Instant;
use knot_core::{SceneDriver, StartupConfig, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (config, rejected) = StartupConfig::from_query(&dom::location_query());
    let level = if config.debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("knot-web starting");
    for e in &rejected {
        log::warn!("[config] {}", e);
    }

    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(config: StartupConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let viewport = Viewport::new(w as f32, h as f32)
        .ok_or_else(|| anyhow::anyhow!("canvas has zero size"))?
        .with_pixel_ratio(dom::pixel_ratio());
    let scene = Rc::new(RefCell::new(SceneDriver::with_demo_objects(
        config.settings,
        viewport,
    )));
    log::debug!("[init] settings {:?}", config.settings);

    // GPU setup borrows the scene across an await, so no listeners are wired yet
    let gpu = frame::init_gpu(&canvas, &scene).await;

    events::wire_canvas_resize(&canvas, scene.clone());
    events::wire_pointermove(&canvas, scene.clone());
    events::wire_panel_toggle_p(&document);

    panel::sync_inputs(&document, scene.borrow().settings());
    panel::wire(&document, scene.clone());
    if config.debug {
        panel::show(&document);
    }
    dom::mark_loaded(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
