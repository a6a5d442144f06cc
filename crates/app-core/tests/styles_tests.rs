// Host-side tests for the derived style computations.

use app_core::styles::*;
use app_core::{MARKER_BASE_TOP_PX, TITLE_REVEAL_POINT};

const VIEWPORT_H: f32 = 900.0;

#[test]
fn at_rest_everything_sits_at_its_resting_pose() {
    assert_eq!(video_scale(0.0), 1.0);
    assert_eq!(video_opacity(0.0), 1.0);
    assert_eq!(title_scale(0.0), 1.0);
    assert_eq!(title_raise_px(0.0, VIEWPORT_H), 0.0);
    assert_eq!(marker_top_px(0.0, VIEWPORT_H), MARKER_BASE_TOP_PX);
}

#[test]
fn mid_scroll_video_is_gone_and_title_fully_raised() {
    let s = 5.0;
    assert_eq!(video_scale(s), 0.0, "scale clamps at zero, never negative");
    assert_eq!(video_opacity(s), 0.0);
    assert_eq!(
        title_raise_px(s, VIEWPORT_H),
        -VIEWPORT_H * TITLE_REVEAL_POINT,
        "title raise saturates at the reveal point"
    );
}

#[test]
fn max_scroll_holds_every_transform_at_its_clamped_extreme() {
    let s = 10.0;
    assert_eq!(video_scale(s), 0.0);
    assert_eq!(video_opacity(s), 0.0);
    assert_eq!(title_scale(s), 1.0 - TITLE_REVEAL_POINT / 2.0);
    assert_eq!(title_raise_px(s, VIEWPORT_H), -VIEWPORT_H * TITLE_REVEAL_POINT);
    assert_eq!(panel_radius_px(s), 0.0);
}

#[test]
fn title_scale_is_non_increasing_and_floored() {
    let floor = 1.0 - TITLE_REVEAL_POINT / 2.0;
    let mut prev = f32::INFINITY;
    for i in 0..=1000 {
        let s = i as f32 * 0.01; // sweep [0, 10]
        let v = title_scale(s);
        assert!(v <= prev, "title scale increased at offset {s}");
        assert!(v >= floor - 1e-6, "title scale broke its floor at {s}");
        assert!(v > 0.0);
        prev = v;
    }
    assert_eq!(title_scale(TITLE_REVEAL_POINT), floor);
    assert_eq!(title_scale(10.0), floor);
}

#[test]
fn video_fade_leads_its_shrink() {
    // opacity hits zero at half a page, scale at a full page
    assert_eq!(video_opacity(0.5), 0.0);
    assert!(video_scale(0.5) > 0.0);
    assert_eq!(video_scale(1.0), 0.0);
}

#[test]
fn marker_follows_scroll_linearly() {
    let a = marker_top_px(1.0, VIEWPORT_H);
    let b = marker_top_px(2.0, VIEWPORT_H);
    assert!((b - a - VIEWPORT_H).abs() < 1e-3);
}

#[test]
fn negative_offsets_clamp_to_the_rest_pose() {
    // the scroll container may report a transient negative during rubber-banding
    assert_eq!(video_scale(-0.2), 1.0);
    assert_eq!(title_scale(-0.2), 1.0);
    assert_eq!(title_raise_px(-0.2, VIEWPORT_H), 0.0);
    assert_eq!(panel_radius_px(-0.2), panel_radius_px(0.0));
}
