// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn normalized_progress_spans_the_track() {
    assert_eq!(normalized_progress(0.0, 5000.0, 1000.0), Some(0.0));
    assert_eq!(normalized_progress(2000.0, 5000.0, 1000.0), Some(0.5));
    assert_eq!(normalized_progress(4000.0, 5000.0, 1000.0), Some(1.0));
}

#[test]
fn normalized_progress_clamps_overscroll() {
    // rubber-banding can report positions past either end
    assert_eq!(normalized_progress(-50.0, 5000.0, 1000.0), Some(0.0));
    assert_eq!(normalized_progress(4100.0, 5000.0, 1000.0), Some(1.0));
}

#[test]
fn normalized_progress_is_none_without_a_scrollable_track() {
    // content not laid out yet, or shorter than the viewport
    assert_eq!(normalized_progress(0.0, 0.0, 0.0), None);
    assert_eq!(normalized_progress(0.0, 800.0, 1000.0), None);
    assert_eq!(normalized_progress(0.0, 1000.0, 1000.0), None);
}

#[test]
fn route_of_hash_strips_prefixes() {
    assert_eq!(route_of_hash("#/about"), "about");
    assert_eq!(route_of_hash("#shop"), "shop");
    assert_eq!(route_of_hash("#/"), "");
    assert_eq!(route_of_hash(""), "");
    assert_eq!(route_of_hash("faq"), "faq");
}

#[test]
fn local_point_is_relative_to_the_element_rect() {
    let p = local_point(130.0, 220.0, 100.0, 200.0);
    assert_eq!(p.x, 30.0);
    assert_eq!(p.y, 20.0);

    // pointer left of the rect goes negative; callers only position a
    // decorative circle, so no clamping here
    let q = local_point(90.0, 190.0, 100.0, 200.0);
    assert_eq!(q.x, -10.0);
    assert_eq!(q.y, -10.0);
}
