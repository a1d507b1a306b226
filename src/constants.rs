/// Effect timing, sizing and interaction tuning constants.
///
/// These are the defaults behind `EffectsConfig`; keeping them here keeps
/// magic numbers out of the effect code.
// Preloader
pub const PRELOADER_MIN_DISPLAY_MS: u32 = 2000; // minimum time the overlay stays up
pub const PRELOADER_DETACH_DELAY_MS: u32 = 1000; // CSS fade time before the element is removed

// Star field
pub const STAR_CAP: usize = 200;
pub const STAR_WIDTH_DIVISOR: u32 = 5; // one star per this many px of viewport width
pub const STAR_RADIUS_MAX: f32 = 2.0;
pub const STAR_SPEED_MIN: f32 = 0.1; // px per frame
pub const STAR_SPEED_SPAN: f32 = 0.5;
pub const STAR_TWINKLE_MIN: f32 = 0.01;
pub const STAR_TWINKLE_SPAN: f32 = 0.02;
pub const STAR_OPACITY_MIN: f32 = 0.2;
pub const STAR_OPACITY_MAX: f32 = 1.0;
pub const STAR_TRAIL_FADE_ALPHA: f32 = 0.1; // per-frame clear alpha; lower means longer trails
pub const STAR_PARALLAX_STRENGTH: f32 = 20.0; // px at the screen edge
pub const STAR_POINTER_THROTTLE_MS: f64 = 16.0;

// Viewport / scroll
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const SCROLL_THROTTLE_MS: f64 = 10.0;
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 100.0;

// Cursor
pub const CURSOR_SMOOTHING: f32 = 0.15;
pub const CURSOR_SMOOTHING_HOVER: f32 = 0.2; // tighter tracking over interactive targets
pub const HOVER_TARGET_TAGS: &[&str] = &["a", "button", "input", "textarea"];
pub const HOVER_TARGET_CLASSES: &[&str] = &["feature", "logo"];

// Parallax
pub const HERO_PARALLAX_RATE: f64 = 0.5;
pub const HERO_FADE_DISTANCE_PX: f64 = 800.0;
pub const CARD_PARALLAX_BASE: f64 = 0.05;
pub const CARD_PARALLAX_STEP: f64 = 0.02; // added per card index
pub const CARD_PARALLAX_WINDOW_PX: f64 = 500.0;

// Particles
pub const PARTICLE_INTERVAL_MS: u32 = 2000;
pub const PARTICLE_SIZE_MIN_PX: f64 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 4.0;
pub const PARTICLE_LIFETIME_MIN_MS: f64 = 4000.0;
pub const PARTICLE_LIFETIME_SPAN_MS: f64 = 3000.0;
pub const PARTICLE_DRIFT_MAX_PX: f64 = 50.0;
pub const PARTICLE_FADE_IN_OFFSET: f64 = 0.1; // keyframe offset of the fully visible point
pub const PARTICLE_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.15; // visible fraction of the element's area
pub const REVEAL_DELAY_MS: u32 = 100;
pub const REVEAL_SELECTOR: &str = ".content-section, .features";

// Smooth anchor scrolling
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 1200.0;
pub const SMOOTH_SCROLL_HEADER_OFFSET_PX: f64 = 80.0;

// Hover effects
pub const MAGNETIC_STRENGTH: f32 = 0.2;
pub const MAGNETIC_SCALE: f32 = 1.05;
pub const TILT_DIVISOR: f32 = 10.0; // px of offset per degree of rotation
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_LIFT_PX: f32 = 20.0;
pub const TILT_SCALE: f32 = 1.05;

// Easter egg
pub const KONAMI_SEQUENCE: &[&str] = &[
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];
pub const KONAMI_EFFECT_MS: u32 = 5000;
