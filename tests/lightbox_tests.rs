// Host-side tests for the lightbox group and zoom/pan logic.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod direction {
        include!("../src/core/direction.rs");
    }
    pub mod media {
        include!("../src/core/media.rs");
    }
    pub mod group {
        include!("../src/core/group.rs");
    }
    pub mod zoom {
        include!("../src/core/zoom.rs");
    }
}

use crate::constants::*;
use crate::core::direction::Direction;
use crate::core::group::MediaGroup;
use crate::core::media::{first_caption, MediaItem, MediaKind};
use crate::core::zoom::{PanDrag, ViewTransform, Viewport};
use glam::DVec2;

fn group_of(n: usize, start: usize) -> MediaGroup {
    let items = (0..n)
        .map(|i| MediaItem::new(format!("/img/{i}.jpg"), format!("item {i}")))
        .collect();
    MediaGroup::new(items, start).unwrap()
}

#[test]
fn next_wraps_past_the_end() {
    let mut g = group_of(3, 1);
    g.next();
    assert_eq!(g.index(), 2);
    g.next();
    assert_eq!(g.index(), 0);
    assert_eq!(g.current().src, "/img/0.jpg");
}

#[test]
fn prev_wraps_before_the_start() {
    let mut g = group_of(3, 0);
    g.prev();
    assert_eq!(g.index(), 2);
}

#[test]
fn n_steps_in_either_direction_return_to_start() {
    for n in 1..=7 {
        for start in 0..n {
            let mut g = group_of(n, start);
            for _ in 0..n {
                g.next();
            }
            assert_eq!(g.index(), start, "next x{n} from {start}");
            for _ in 0..n {
                g.prev();
            }
            assert_eq!(g.index(), start, "prev x{n} from {start}");
        }
    }
}

#[test]
fn single_item_group_stays_put() {
    let mut g = group_of(1, 0);
    g.navigate(Direction::Next);
    assert_eq!(g.index(), 0);
    g.navigate(Direction::Prev);
    assert_eq!(g.index(), 0);
}

#[test]
fn empty_group_is_rejected_and_bad_start_opens_at_zero() {
    assert!(MediaGroup::new(Vec::new(), 0).is_none());
    assert_eq!(group_of(4, 9).index(), 0);
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Prev));
    assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
    assert_eq!(Direction::from_key("Escape"), None);
    assert_eq!(Direction::from_key("ArrowUp"), None);
}

#[test]
fn media_kind_by_suffix() {
    assert_eq!(MediaKind::from_src("/v/clip.mp4"), MediaKind::Video);
    assert_eq!(MediaKind::from_src("/v/CLIP.MP4"), MediaKind::Video);
    assert_eq!(MediaKind::from_src("/p/photo.jpg"), MediaKind::Image);
    // Only the configured extension counts as video.
    assert_eq!(MediaKind::from_src("/v/clip.webm"), MediaKind::Image);
    assert_eq!(MediaKind::from_src("/v/clip.mp4?x=1"), MediaKind::Image);
    assert!(MediaItem::new("a.mp4", "").is_video());
}

#[test]
fn caption_precedence_skips_missing_and_empty() {
    let explicit = first_caption([Some("explicit"), Some("alt"), Some("label")]);
    assert_eq!(explicit, "explicit");
    let alt = first_caption([None, Some("alt"), Some("label")]);
    assert_eq!(alt, "alt");
    let label = first_caption([Some(""), Some(""), Some("label")]);
    assert_eq!(label, "label");
    let none: String = first_caption([None::<&str>, None, None]);
    assert_eq!(none, "");
}

#[test]
fn wheel_up_at_rest_zooms_to_1_12() {
    let mut v = ViewTransform::default();
    assert!(v.wheel(-100.0));
    assert!((v.scale - 1.12).abs() < 1e-12);
}

#[test]
fn wheel_down_at_minimum_is_a_noop() {
    let mut v = ViewTransform::default();
    assert!(!v.wheel(100.0));
    assert_eq!(v.scale, MIN_SCALE);
    assert_eq!(v.offset, DVec2::ZERO);
}

#[test]
fn scale_is_clamped_under_any_wheel_sequence() {
    let mut v = ViewTransform::default();
    for _ in 0..100 {
        v.wheel(-1.0);
        assert!(v.scale >= MIN_SCALE && v.scale <= MAX_SCALE);
    }
    assert_eq!(v.scale, MAX_SCALE);
    for i in 0..100 {
        v.wheel(if i % 3 == 0 { -1.0 } else { 1.0 });
        assert!(v.scale >= MIN_SCALE && v.scale <= MAX_SCALE);
        if v.scale == MIN_SCALE {
            assert_eq!(v.offset, DVec2::ZERO);
        }
    }
}

#[test]
fn zooming_all_the_way_out_recenters_exactly() {
    let mut v = ViewTransform::default();
    for _ in 0..5 {
        v.wheel(-1.0);
    }
    let pan = PanDrag::begin(DVec2::ZERO, &v).unwrap();
    pan.update(DVec2::new(120.0, -80.0), &mut v);
    assert_ne!(v.offset, DVec2::ZERO);
    for _ in 0..5 {
        v.wheel(1.0);
    }
    assert_eq!(v.scale, MIN_SCALE);
    assert_eq!(v.offset, DVec2::ZERO);
}

#[test]
fn pan_is_clamped_to_bounds() {
    let mut v = ViewTransform::default();
    v.wheel(-1.0);
    v.wheel(-1.0); // 1.24x
    let bound = PAN_BOUND_PER_SCALE * (v.scale - 1.0);
    assert!((v.pan_bound() - bound).abs() < 1e-9);

    let pan = PanDrag::begin(DVec2::new(500.0, 500.0), &v).unwrap();
    pan.update(DVec2::new(5000.0, -5000.0), &mut v);
    assert!((v.offset.x - bound).abs() < 1e-9);
    assert!((v.offset.y + bound).abs() < 1e-9);
}

#[test]
fn pan_follows_pointer_relative_to_grab_point() {
    let mut v = ViewTransform::default();
    for _ in 0..10 {
        v.wheel(-1.0);
    }
    let pan = PanDrag::begin(DVec2::new(100.0, 100.0), &v).unwrap();
    pan.update(DVec2::new(130.0, 90.0), &mut v);
    assert_eq!(v.offset, DVec2::new(30.0, -10.0));
    // A second pan continues from the current offset.
    let pan = PanDrag::begin(DVec2::new(0.0, 0.0), &v).unwrap();
    pan.update(DVec2::new(5.0, 5.0), &mut v);
    assert_eq!(v.offset, DVec2::new(35.0, -5.0));
}

#[test]
fn pan_only_starts_when_zoomed() {
    let v = ViewTransform::default();
    assert!(PanDrag::begin(DVec2::new(10.0, 10.0), &v).is_none());
}

#[test]
fn zooming_out_reclamps_offset() {
    let mut v = ViewTransform::default();
    for _ in 0..10 {
        v.wheel(-1.0);
    }
    let pan = PanDrag::begin(DVec2::ZERO, &v).unwrap();
    pan.update(DVec2::new(10_000.0, 10_000.0), &mut v);
    v.wheel(1.0);
    v.wheel(1.0);
    let b = v.pan_bound();
    assert!(v.offset.x.abs() <= b + 1e-9 && v.offset.y.abs() <= b + 1e-9);
}

#[test]
fn reset_returns_to_identity_and_css_reflects_state() {
    let mut v = ViewTransform::default();
    assert_eq!(v.css(), "translate(0px, 0px) scale(1)");
    v.wheel(-1.0);
    v.reset();
    assert_eq!(v, ViewTransform::IDENTITY);
}

#[test]
fn switching_to_a_video_drops_zoom_and_pan() {
    let mut vp = Viewport::default();
    vp.show(MediaKind::Image);
    assert!(vp.wheel(-1.0));
    assert!(vp.wheel(-1.0));
    assert!(vp.begin_pan(DVec2::new(5.0, 5.0)));
    assert!(vp.move_pan(DVec2::new(40.0, -20.0)));
    assert!(vp.view.scale > MIN_SCALE);

    vp.show(MediaKind::Video);
    assert_eq!(vp.view, ViewTransform::IDENTITY);
    assert!(vp.pan.is_none());
    assert!(!vp.zoomable());
    assert!(!vp.wheel(-1.0));
    assert!(!vp.begin_pan(DVec2::ZERO));
    assert_eq!(vp.view, ViewTransform::IDENTITY);
}

#[test]
fn every_new_image_starts_at_identity() {
    let mut vp = Viewport::default();
    vp.show(MediaKind::Image);
    vp.wheel(-1.0);
    vp.show(MediaKind::Image);
    assert_eq!(vp.view, ViewTransform::IDENTITY);
    assert!(vp.zoomable());
}

#[test]
fn pan_ends_once_and_clear_disables_zoom() {
    let mut vp = Viewport::default();
    assert!(!vp.zoomable());
    vp.show(MediaKind::Image);
    vp.wheel(-1.0);
    assert!(vp.begin_pan(DVec2::ZERO));
    assert!(vp.end_pan());
    assert!(!vp.end_pan());
    assert!(!vp.move_pan(DVec2::new(1.0, 1.0)));

    vp.clear();
    assert_eq!(vp.view, ViewTransform::IDENTITY);
    assert!(!vp.zoomable());
}
