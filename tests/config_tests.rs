// Host-side tests for marquee configuration parsing and disclosure toggles.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod disclosure {
    include!("../src/core/disclosure.rs");
}

use config::*;
use constants::*;
use disclosure::*;

#[test]
fn css_time_parses_seconds_and_milliseconds() {
    assert_eq!(parse_css_time("40s"), Some(40.0));
    assert_eq!(parse_css_time(" 1.5s "), Some(1.5));
    assert_eq!(parse_css_time("800ms"), Some(0.8));
    assert_eq!(parse_css_time("0s"), Some(0.0));
    assert_eq!(parse_css_time("40"), None);
    assert_eq!(parse_css_time("fast"), None);
    assert_eq!(parse_css_time("-2s"), None);
}

#[test]
fn px_parses_lengths_and_rejects_keywords() {
    assert_eq!(parse_px("16px"), Some(16.0));
    assert_eq!(parse_px(" 24 "), Some(24.0));
    assert_eq!(parse_px("normal"), None);
    assert_eq!(parse_px("1rem"), None);
}

#[test]
fn driver_defaults_to_frame() {
    assert_eq!(Driver::from_attr(None), Driver::Frame);
    assert_eq!(Driver::from_attr(Some("")), Driver::Frame);
    assert_eq!(Driver::from_attr(Some("frame")), Driver::Frame);
    assert_eq!(Driver::from_attr(Some("CSS")), Driver::Css);
    assert_eq!(Driver::Css.name(), "css");
}

#[test]
fn gallery_markup_without_driver_value_runs_css() {
    let attrs = MarqueeAttrs {
        gallery: true,
        ..MarqueeAttrs::default()
    };
    assert_eq!(MarqueeConfig::from_attrs(&attrs).driver, Driver::Css);

    let attrs = MarqueeAttrs {
        gallery: true,
        driver: Some("frame".into()),
        ..MarqueeAttrs::default()
    };
    assert_eq!(MarqueeConfig::from_attrs(&attrs).driver, Driver::Frame);
}

#[test]
fn speed_falls_back_to_the_short_property() {
    let attrs = MarqueeAttrs {
        legacy_speed: Some("10s".into()),
        ..MarqueeAttrs::default()
    };
    assert_eq!(MarqueeConfig::from_attrs(&attrs).loop_secs, 10.0);

    let attrs = MarqueeAttrs {
        speed: Some("25s".into()),
        legacy_speed: Some("10s".into()),
        ..MarqueeAttrs::default()
    };
    assert_eq!(MarqueeConfig::from_attrs(&attrs).loop_secs, 25.0);

    // An unusable primary value defers to the fallback.
    let attrs = MarqueeAttrs {
        speed: Some("0s".into()),
        legacy_speed: Some("800ms".into()),
        ..MarqueeAttrs::default()
    };
    assert_eq!(MarqueeConfig::from_attrs(&attrs).loop_secs, 0.8);
}

#[test]
fn flags_are_opt_out() {
    assert!(flag_enabled(None));
    assert!(flag_enabled(Some("")));
    assert!(flag_enabled(Some("on")));
    for off in ["off", "OFF", "false", "no", "0"] {
        assert!(!flag_enabled(Some(off)), "{off}");
    }
}

#[test]
fn config_from_empty_attrs_uses_defaults() {
    let cfg = MarqueeConfig::from_attrs(&MarqueeAttrs::default());
    assert_eq!(cfg, MarqueeConfig::default());
    assert_eq!(cfg.loop_secs, DEFAULT_LOOP_SECS);
    assert!(cfg.hover_pause && cfg.drag);
}

#[test]
fn config_reads_custom_properties_with_gap_fallback() {
    let attrs = MarqueeAttrs {
        driver: Some("css".into()),
        hover: Some("off".into()),
        speed: Some("25s".into()),
        column_gap: Some("12px".into()),
        ..MarqueeAttrs::default()
    };
    let cfg = MarqueeConfig::from_attrs(&attrs);
    assert_eq!(cfg.driver, Driver::Css);
    assert_eq!(cfg.loop_secs, 25.0);
    assert_eq!(cfg.gap_px, 12.0);
    assert!(!cfg.hover_pause);
    assert!(cfg.drag);

    let attrs = MarqueeAttrs {
        gap: Some("20px".into()),
        column_gap: Some("12px".into()),
        speed: Some("0s".into()),
        ..MarqueeAttrs::default()
    };
    let cfg = MarqueeConfig::from_attrs(&attrs);
    assert_eq!(cfg.gap_px, 20.0);
    // A zero period would stall the track; fall back to the default.
    assert_eq!(cfg.loop_secs, DEFAULT_LOOP_SECS);
}

#[test]
fn disclosure_toggle_flips_aria_state() {
    assert!(toggled_expanded(None));
    assert!(toggled_expanded(Some("false")));
    assert!(!toggled_expanded(Some("true")));
    assert_eq!(aria_bool(true), "true");
    assert_eq!(menu_display(false), "none");
    assert_eq!(menu_display(toggled_expanded(Some("false"))), "block");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(MIN_SCALE < MAX_SCALE);
    assert!(ZOOM_STEP > 0.0 && ZOOM_STEP < MAX_SCALE - MIN_SCALE);
    assert!(PAN_BOUND_PER_SCALE > 0.0);

    // Smoothing and friction are fractions; the glide must decay.
    assert!(VELOCITY_SMOOTHING > 0.0 && VELOCITY_SMOOTHING <= 1.0);
    assert!(INERTIA_FRICTION > 0.0 && INERTIA_FRICTION < 1.0);
    assert!(INERTIA_STOP_VELOCITY > 0.0);
    assert!(MIN_SAMPLE_DT_MS >= 1.0);
    assert!(INERTIA_TICK_MS > 0);

    // The centering animation finishes before auto-scroll resumes.
    assert!((CENTER_TRANSITION_MS as i32) < RESUME_DELAY_MS);
    assert!(DEFAULT_LOOP_SECS > 0.0);
}
