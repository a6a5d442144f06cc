use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// This frame's normalized progress of the scroll container, `None` when the
/// track has no scrollable range yet (content not laid out).
pub fn scroll_progress(container: &web::Element) -> Option<f32> {
    input::normalized_progress(
        container.scroll_top() as f64,
        container.scroll_height() as f64,
        container.client_height() as f64,
    )
}

/// Write one style property on the element with `id`. Returns `false` when
/// the element is not mounted yet; callers skip and retry next frame.
pub fn set_style(document: &web::Document, id: &str, property: &str, value: &str) -> bool {
    let Some(el) = document.get_element_by_id(id) else {
        return false;
    };
    let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
        return false;
    };
    el.style().set_property(property, value).is_ok()
}
