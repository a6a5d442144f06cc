//! Derived style computations.
//!
//! Pure functions mapping (scroll offset, viewport height) to CSS-equivalent
//! numeric outputs. Each carries its own clamp constants and is re-evaluated
//! fully every frame; any smoothing lives in the scroll container, never
//! here.

use crate::constants::*;

/// Hero video scale: full size at rest, gone by the end of the first page.
pub fn video_scale(offset: f32) -> f32 {
    (1.0 - offset).clamp(0.0, 1.0)
}

/// Hero video opacity fades twice as fast as its scale.
pub fn video_opacity(offset: f32) -> f32 {
    (1.0 - offset * 2.0).clamp(0.0, 1.0)
}

/// Title scale shrinks with scroll and floors once the title is revealed.
pub fn title_scale(offset: f32) -> f32 {
    1.0 - offset.clamp(0.0, TITLE_REVEAL_POINT) / 2.0
}

/// Vertical title displacement in px; fully raised at the reveal point.
pub fn title_raise_px(offset: f32, viewport_h: f32) -> f32 {
    -viewport_h * offset.clamp(0.0, TITLE_REVEAL_POINT)
}

/// Scroll marker top position in px.
pub fn marker_top_px(offset: f32, viewport_h: f32) -> f32 {
    MARKER_BASE_TOP_PX + offset * viewport_h
}

/// Rounded panel corner radius eases out over the first page.
pub fn panel_radius_px(offset: f32) -> f32 {
    PANEL_RADIUS_MAX_PX * (1.0 - offset.clamp(0.0, 1.0))
}
