// Scene tuning shared by the core actors and the web host.

// Timing (milliseconds, host clock)
pub const SPAWN_INTERVAL_MS: f64 = 2000.0; // one new guitar per interval
pub const GLOW_INTERVAL_MS: f64 = 5000.0; // one glow pick per interval
pub const STICKMAN_DURATION_MS: f64 = 3000.0; // strumming lifetime

// Collection caps
pub const MAX_GUITARS: usize = 64;
pub const MAX_NOTES: usize = 600;
pub const MAX_STICKMEN: usize = 32;

// Guitar spawn and motion
pub const GUITAR_SPAWN_Y: f64 = -80.0; // just above the visible area
pub const GUITAR_SPAWN_MARGIN: f64 = 40.0; // horizontal inset from both edges
pub const GUITAR_BASE_SIZE: f64 = 18.0;
pub const GUITAR_SPEED_MIN: f64 = 0.6; // px per tick
pub const GUITAR_SPEED_MAX: f64 = 1.4;
pub const GUITAR_ROTATION_MAX: f64 = 0.15; // radians, symmetric
pub const GROUND_OFFSET: f64 = 40.0; // landing line above the bottom edge
pub const STICKMAN_GROUND_OFFSET: f64 = 90.0; // stickman origin above the bottom edge

// Guitar glow/explosion
pub const GLOW_SCALE_STEP: f64 = 0.04;
pub const GLOW_SCALE_LIMIT: f64 = 3.0;
pub const EXPLODE_SCALE_STEP: f64 = 0.16;
pub const EXPLODE_ALPHA_STEP: f64 = 0.09;
pub const SCALE_EPSILON: f64 = 1e-9; // tolerance for accumulated scale steps
pub const HIT_RADIUS_FACTOR: f64 = 1.2; // interaction radius = base * scale * factor

// Guitar drawing
pub const GLOW_SHADOW_COLOR: &str = "rgba(224,123,57,0.9)"; // sunset orange
pub const GLOW_BLUR: f64 = 12.0;
pub const EXPLODE_BLUR: f64 = 28.0;
pub const GUITAR_LINE_WIDTH: f64 = 1.1;
pub const GUITAR_MIN_STROKE_ALPHA: f64 = 0.25;

// Emission counts
pub const HEART_COUNT: usize = 8;
pub const POP_NOTE_COUNT: usize = 3;

// Emission jitter (px, symmetric)
pub const HEART_JITTER: f64 = 10.0;
pub const POP_JITTER: f64 = 6.0;
pub const NOTE_JITTER: f64 = 8.0;

// Palettes
pub const HEART_COLORS: [&str; 3] = ["#FF3B3B", "#FFFFFF", "#E07B39"];
pub const POP_COLORS: [&str; 3] = ["#ffffff", "#FFA500", "#1E90FF"];
pub const STRUM_COLORS: [&str; 3] = ["#ffffff", "#FFA500", "#FF3B3B"];

// Notes
pub const HEART_GLYPH: &str = "❤";
pub const NOTE_GLYPHS: [&str; 2] = ["♪", "♫"];
pub const EIGHTH_NOTE_CHANCE: f64 = 0.6; // otherwise beamed pair
pub const NOTE_BASE_SIZE: f64 = 14.0;
pub const HEART_BASE_SIZE: f64 = 22.0;
pub const NOTE_SIZE_SPREAD: f64 = 8.0;
pub const NOTE_SPEED_BASE: f64 = 1.0;
pub const NOTE_SPEED_SPREAD: f64 = 1.2;
pub const HEART_SPEED: f64 = 0.5;
pub const NOTE_LIFE: i32 = 120; // ticks
pub const HEART_LIFE: i32 = 180;
pub const NOTE_FADE_STEP: f64 = 0.008;
pub const HEART_FADE_STEP: f64 = 0.005;
pub const NOTE_SWAY: f64 = 0.6;
pub const HEART_SWAY: f64 = 0.9;
pub const SWAY_LIFE_DIVISOR: f64 = 10.0;

// Stickman
pub const STRUM_CYCLES: f64 = 4.0; // full arm swings per lifetime
pub const STRUM_AMPLITUDE: f64 = 18.0;
pub const STRUM_NOTE_CHANCE: f64 = 0.08; // per tick
pub const STRUM_HAND_OFFSET: [f64; 2] = [18.0, -6.0]; // note origin relative to the figure
pub const STICKMAN_STROKE: &str = "rgba(255,255,255,0.95)";
pub const STICKMAN_LINE_WIDTH: f64 = 1.2;
