//! Horizontally wrapping storefront carousel.
//!
//! Item content is static; the horizontal position is derived fresh each
//! frame from scroll offset, drag distance and the item index, folded into a
//! seamless wrap range independent of item count.

use crate::constants::*;

#[derive(Clone, Debug)]
pub struct CarouselItem {
    pub title: String,
    pub body: String,
    /// Asset path resolved by the external loader.
    pub image: String,
}

impl CarouselItem {
    pub fn new(title: &str, body: &str, image: &str) -> Self {
        Self {
            title: title.to_owned(),
            body: body.to_owned(),
            image: image.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CarouselConfig {
    /// Per-instance sign of the scroll contribution. The second storefront
    /// row runs reversed; kept as configuration rather than inferred.
    pub direction: f32,
    pub slot_width: f32,
    pub phase: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            direction: 1.0,
            slot_width: CAROUSEL_SLOT_WIDTH,
            phase: 0.0,
        }
    }
}

/// Horizontal position of one item in percent units, always inside
/// `[CAROUSEL_WRAP_MIN, CAROUSEL_WRAP_MIN + CAROUSEL_WRAP_SPAN)` and
/// continuous in both `scroll_offset` and `dragged_value`.
pub fn item_position(
    cfg: &CarouselConfig,
    index: usize,
    scroll_offset: f32,
    dragged_value: f32,
) -> f32 {
    let raw = scroll_offset * CAROUSEL_SCROLL_GAIN * cfg.direction
        + cfg.slot_width * index as f32
        + cfg.phase
        + dragged_value / CAROUSEL_DRAG_DIVISOR;
    raw.rem_euclid(CAROUSEL_WRAP_SPAN) + CAROUSEL_WRAP_MIN
}

#[derive(Clone, Debug, Default)]
pub struct Carousel {
    pub config: CarouselConfig,
    pub items: Vec<CarouselItem>,
}

impl Carousel {
    pub fn new(config: CarouselConfig, items: Vec<CarouselItem>) -> Self {
        Self { config, items }
    }

    pub fn position_of(&self, index: usize, scroll_offset: f32, dragged_value: f32) -> f32 {
        item_position(&self.config, index, scroll_offset, dragged_value)
    }
}
