// Host-side tests for the wrapping carousel position formula.

use app_core::{
    item_position, CarouselConfig, CAROUSEL_DRAG_DIVISOR, CAROUSEL_WRAP_MIN, CAROUSEL_WRAP_SPAN,
};

fn cfg(direction: f32) -> CarouselConfig {
    CarouselConfig {
        direction,
        ..CarouselConfig::default()
    }
}

#[test]
fn position_always_lies_in_the_wrap_range() {
    let c = cfg(1.0);
    let hi = CAROUSEL_WRAP_MIN + CAROUSEL_WRAP_SPAN;
    for index in 0..12 {
        for s in 0..=100 {
            let offset = s as f32 * 0.1;
            for d in [-10_000.0, -321.5, 0.0, 47.0, 2250.0, 99_999.0] {
                let p = item_position(&c, index, offset, d);
                assert!(
                    (CAROUSEL_WRAP_MIN..hi).contains(&p),
                    "position {p} out of range for index={index} offset={offset} dragged={d}"
                );
            }
        }
    }
}

#[test]
fn position_is_continuous_across_the_drag_period() {
    // dragged contributes dragged/15 in a 150-wide wrap space, so the
    // formula has period 150*15 in dragged; crossing a multiple of it must
    // not jump.
    let c = cfg(1.0);
    let period = CAROUSEL_WRAP_SPAN * CAROUSEL_DRAG_DIVISOR;
    for k in 1..=4 {
        let at = k as f32 * period;
        let eps = 0.01;
        let before = item_position(&c, 3, 2.5, at - eps);
        let after = item_position(&c, 3, 2.5, at + eps);
        assert!(
            (after - before).abs() < 0.01,
            "discontinuity at dragged={at}: {before} -> {after}"
        );
        // and one full period lands exactly back on itself
        let base = item_position(&c, 3, 2.5, 100.0);
        let wrapped = item_position(&c, 3, 2.5, 100.0 + period);
        assert!((base - wrapped).abs() < 1e-3);
    }
}

#[test]
fn direction_sign_reverses_scroll_motion() {
    let forward = cfg(1.0);
    let reverse = cfg(-1.0);
    let p0 = item_position(&forward, 0, 1.0, 0.0);
    let p1 = item_position(&forward, 0, 1.01, 0.0);
    let q0 = item_position(&reverse, 0, 1.0, 0.0);
    let q1 = item_position(&reverse, 0, 1.01, 0.0);
    // small steps away from the wrap seam move opposite ways
    assert!((p1 - p0) > 0.0);
    assert!((q1 - q0) < 0.0);
}

#[test]
fn adjacent_indices_keep_their_slot_spacing() {
    let c = cfg(1.0);
    let a = item_position(&c, 0, 0.1, 12.0);
    let b = item_position(&c, 1, 0.1, 12.0);
    let gap = (b - a).rem_euclid(CAROUSEL_WRAP_SPAN);
    assert!(
        (gap - c.slot_width).abs() < 1e-3,
        "slot spacing not preserved: {gap}"
    );
}

#[test]
fn drag_contribution_is_scaled_down() {
    let c = cfg(1.0);
    let p0 = item_position(&c, 0, 0.0, 0.0);
    let p1 = item_position(&c, 0, 0.0, 15.0);
    assert!(((p1 - p0) - 1.0).abs() < 1e-4, "15 dragged px must equal 1%");
}
