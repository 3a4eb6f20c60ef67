use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Raw `?a=b&c` query string of the page, empty when unavailable.
pub fn location_query() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Swap the page-level `loading` class for `loaded` so the CSS spinner goes away.
pub fn mark_loaded(document: &web::Document) {
    if let Some(root) = document.document_element() {
        let cl = root.class_list();
        _ = cl.remove_1("loading");
        _ = cl.add_1("loaded");
    }
}

pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

/// Call `handler` with the element every time `event` fires on `<input id=element_id>`.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(&web::HtmlInputElement) + 'static,
) {
    let Some(input) = input_by_id(document, element_id) else {
        log::warn!("[dom] missing #{}", element_id);
        return;
    };
    let target = input.clone();
    let closure = Closure::wrap(Box::new(move || handler(&target)) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// devicePixelRatio, 1.0 when unavailable.
pub fn pixel_ratio() -> f32 {
    web::window().map_or(1.0, |w| w.device_pixel_ratio() as f32)
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}
