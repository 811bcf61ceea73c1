// Scroll-reactive controls: nav background and scroll-to-top visibility.

use amerey_web::core::scroll::{hero_scrub, nav_solid, scroll_top_visible, ScrollControls};

#[test]
fn thresholds_are_strict() {
    assert!(!nav_solid(100.0));
    assert!(nav_solid(100.5));
    assert!(!scroll_top_visible(500.0));
    assert!(scroll_top_visible(501.0));
}

#[test]
fn top_of_page() {
    let c = ScrollControls::at(0.0);
    assert!(!c.nav_solid);
    assert!(!c.scroll_top_visible);
}

#[test]
fn deep_scroll_then_back_near_top() {
    let mut c = ScrollControls::default();

    let ch = c.update(600.0);
    assert_eq!(ch.nav_solid, Some(true));
    assert_eq!(ch.scroll_top_visible, Some(true));

    let ch = c.update(50.0);
    assert_eq!(ch.nav_solid, Some(false));
    assert_eq!(ch.scroll_top_visible, Some(false));
    assert_eq!(c, ScrollControls::at(50.0));
}

#[test]
fn between_thresholds_only_nav_is_solid() {
    let c = ScrollControls::at(300.0);
    assert!(c.nav_solid);
    assert!(!c.scroll_top_visible);
}

#[test]
fn unchanged_offsets_report_nothing() {
    let mut c = ScrollControls::at(250.0);
    assert!(c.update(260.0).is_empty());
    assert!(c.update(499.0).is_empty());
}

#[test]
fn hero_scrub_halfway() {
    let s = hero_scrub(200.0, 800.0);
    assert!((s.bg_y_percent - 7.5).abs() < 1e-9);
    assert!((s.content_opacity - 0.5).abs() < 1e-9);
    assert!((s.content_y + 25.0).abs() < 1e-9);
}

#[test]
fn hero_scrub_without_height_is_neutral() {
    let s = hero_scrub(300.0, 0.0);
    assert_eq!(s.bg_y_percent, 0.0);
    assert_eq!(s.content_opacity, 1.0);
    assert_eq!(s.content_y, 0.0);
}
