// Host-side tests for the front-end's selectors and the shared tuning constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::constants as tuning;

#[test]
fn cursor_hover_targets_cover_menu_links_and_logo() {
    let targets: Vec<&str> = CURSOR_HOVER_SELECTOR.split(',').map(str::trim).collect();
    assert!(targets.contains(&MOBILE_LINK_SELECTOR));
    assert!(targets.contains(&NAV_LOGO_SELECTOR));
    assert!(targets.contains(&"a"));
    assert!(targets.contains(&"button"));
}

#[test]
fn slider_selectors_are_distinct() {
    // The image slider's ".dot" must not be confused with ".dot-indicator"
    let selectors = [
        IMAGE_SLIDE_SELECTOR,
        IMAGE_DOT_SELECTOR,
        VIDEO_SLIDE_SELECTOR,
        VIDEO_DOT_SELECTOR,
    ];
    for (i, a) in selectors.iter().enumerate() {
        for b in &selectors[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(IMAGE_SLIDER_ID, VIDEO_SLIDER_ID);
}

#[test]
fn ids_are_bare_and_selectors_are_prefixed() {
    for id in [
        CURSOR_ID,
        CURSOR_DOT_ID,
        IMAGE_SLIDER_ID,
        VIDEO_SLIDER_ID,
        SLIDE_TITLE_ID,
        SLIDE_DESC_ID,
        CONTACT_FORM_ID,
        HERO_SHUTTER_ID,
        HERO_CANVAS_ID,
    ] {
        assert!(!id.starts_with('#') && !id.starts_with('.'), "{id}");
    }
    for sel in [
        MENU_TOGGLE_SELECTOR,
        MOBILE_MENU_SELECTOR,
        MOBILE_LINK_SELECTOR,
        REVEAL_SHUTTER_SELECTOR,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
}

#[test]
fn indicator_glows_use_the_active_green() {
    // #10B981 == rgb(16,185,129)
    assert!(IMAGE_INDICATOR_GLOW.contains("16,185,129"));
    assert!(VIDEO_INDICATOR_GLOW.contains("16,185,129"));
    assert_eq!(INDICATOR_ACTIVE_BG, "#10B981");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_constants_are_within_reasonable_bounds() {
    assert!(tuning::SWIPE_THRESHOLD_PX > 0.0);
    assert!(tuning::SLIDE_FADE_DELAY_MS > 0);
    assert!(tuning::REVEAL_THRESHOLD > 0.0 && tuning::REVEAL_THRESHOLD < 1.0);
    assert!(tuning::CURSOR_DOT_OFFSET_PX < tuning::CURSOR_RING_OFFSET_PX);
    assert!(tuning::CURSOR_HOVER_SCALE > tuning::CURSOR_IDLE_SCALE);
    assert!(tuning::CAMERA_NEAR > 0.0 && tuning::CAMERA_NEAR < tuning::CAMERA_FAR);
    assert!(tuning::POD_BOB_AMPLITUDE > 0.0);
}
