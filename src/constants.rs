// Timing and threshold constants shared by the page behaviors.

// Scroll-reactive controls (strict `>` comparisons against window.scrollY)
pub const NAV_SOLID_OFFSET_PX: f64 = 100.0;
pub const SCROLL_TOP_OFFSET_PX: f64 = 500.0;
pub const SCROLL_TOP_APPEAR_MS: u32 = 300;
pub const SCROLL_TOP_APPEAR_Y: f32 = 20.0;

// Loader sequencer
pub const LOADER_TICK_MS: u32 = 100; // progress tick period
pub const LOADER_MAX_INCREMENT: f64 = 15.0; // uniform in [0, max] per tick
pub const LOADER_PROGRESS_MAX: f64 = 100.0;
pub const LOADER_DELAY_MS: u32 = 2500; // authoritative completion trigger
pub const LOADER_FADE_MS: u32 = 800;

// Page-wide anchor and scroll-to-top scrolling (`scroll-behavior` on <html>)
pub const ROOT_SCROLL_BEHAVIOR: &str = "smooth";

// Composition root cross-fade of <main>
pub const CONTENT_FADE_MS: u32 = 500;

// Hero
pub const HERO_DECODE_INTERVAL_MS: u32 = 50;
pub const HERO_DECODE_STEP: f32 = 0.5; // revealed characters per tick
pub const HERO_INTRO_Y: f32 = 30.0; // subtitle/description rise distance
pub const HERO_INTRO_MS: u32 = 1000;
pub const HERO_INTRO_DELAY_MS: u32 = 1500;
pub const HERO_INTRO_STAGGER_MS: u32 = 200;
pub const HERO_PARALLAX_Y_PERCENT: f64 = 30.0; // background travel over full hero height
pub const HERO_CONTENT_FADE_Y: f64 = -50.0; // content travel over first half of hero
pub const HERO_CONTENT_FADE_SPAN: f64 = 0.5;

// Reveal triggers: fraction of viewport height where the section top must cross
pub const REVEAL_START_TITLE: f64 = 0.7;
pub const REVEAL_START_GRID: f64 = 0.6;
pub const REVEAL_START_FOOTER: f64 = 0.8;

// Collection card hover tilt
pub const TILT_DIVISOR: f32 = 20.0; // px of pointer offset per degree
pub const TILT_IN_MS: u32 = 300;
pub const TILT_OUT_MS: u32 = 500;
pub const CARD_OVERLAY_HOVERED: f32 = 1.0;
pub const CARD_OVERLAY_IDLE: f32 = 0.5;

// Welcome divider grows from 0 to this width
pub const DIVIDER_WIDTH_PX: f32 = 60.0;
