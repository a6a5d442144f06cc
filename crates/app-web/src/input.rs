use glam::Vec2;
use web_sys as web;

/// Normalized scroll progress in [0, 1]; `None` while the track cannot
/// scroll (no layout yet, or content shorter than the viewport).
pub fn normalized_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> Option<f32> {
    let track = scroll_height - client_height;
    if track <= 0.0 {
        return None;
    }
    Some((scroll_top / track).clamp(0.0, 1.0) as f32)
}

/// Route portion of a location hash: `"#/about"` -> `"about"`.
#[inline]
pub fn route_of_hash(hash: &str) -> &str {
    hash.trim_start_matches('#').trim_start_matches('/')
}

#[inline]
pub fn pointer_client_x(ev: &web::PointerEvent) -> f32 {
    ev.client_x() as f32
}

/// Event position local to an element, from client coordinates and the
/// element's bounding rect.
#[inline]
pub fn local_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Vec2 {
    Vec2::new((client_x - rect_left) as f32, (client_y - rect_top) as f32)
}
