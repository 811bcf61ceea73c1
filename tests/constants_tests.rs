// Host-side tests for constants and their relationships.

use amerey_web::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Time constants should be positive
    assert!(LOADER_TICK_MS > 0);
    assert!(LOADER_DELAY_MS > 0);
    assert!(LOADER_FADE_MS > 0);
    assert!(HERO_DECODE_INTERVAL_MS > 0);
    assert!(TILT_IN_MS > 0 && TILT_OUT_MS > 0);

    // Trigger lines sit inside the viewport
    for start in [REVEAL_START_TITLE, REVEAL_START_GRID, REVEAL_START_FOOTER] {
        assert!(start > 0.0 && start < 1.0);
    }

    // Overlay opacities are valid CSS opacities
    assert!((0.0..=1.0).contains(&CARD_OVERLAY_IDLE));
    assert!((0.0..=1.0).contains(&CARD_OVERLAY_HOVERED));
    assert!((0.0..=1.0).contains(&HERO_CONTENT_FADE_SPAN));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // The scroll-to-top button appears well after the nav turns solid
    assert!(SCROLL_TOP_OFFSET_PX > NAV_SOLID_OFFSET_PX);

    // A single tick can never jump past the end of the bar
    assert!(LOADER_MAX_INCREMENT < LOADER_PROGRESS_MAX);

    // The bar gets a chance to move before the loader completes
    assert!(LOADER_DELAY_MS > LOADER_TICK_MS);

    // Hovered card stands out from its neighbours
    assert!(CARD_OVERLAY_HOVERED > CARD_OVERLAY_IDLE);

    // Cards settle back slower than they tilt in
    assert!(TILT_OUT_MS > TILT_IN_MS);

    // Grid reveals trigger earlier on screen than titles
    assert!(REVEAL_START_GRID < REVEAL_START_TITLE);
}

#[test]
fn loader_completes_at_delay_plus_fade() {
    assert_eq!(LOADER_DELAY_MS + LOADER_FADE_MS, 3300);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_intro_timing() {
    assert!(HERO_INTRO_Y > 0.0);
    assert_eq!(HERO_INTRO_MS, 1000);
    // Intro waits for the title decode to get going.
    assert!(HERO_INTRO_DELAY_MS > HERO_INTRO_STAGGER_MS);
}

#[test]
fn page_scrolls_smoothly() {
    assert_eq!(ROOT_SCROLL_BEHAVIOR, "smooth");
}
