use crate::actor::pick;
use rand::Rng;

pub const TRAIL_GLYPHS: [&str; 4] = ["♪", "♫", "♬", "♩"];
pub const TRAIL_COLORS: [&str; 2] = ["#FFFFFF", "#FF4500"]; // white, sunset orange
pub const TRAIL_MIN_GAP_MS: f64 = 150.0;
pub const TRAIL_NOTE_LIFETIME_MS: i32 = 2000;

/// Rate limit for the cursor note trail.
#[derive(Clone, Debug)]
pub struct TrailThrottle {
    last: f64,
    min_gap_ms: f64,
}

impl Default for TrailThrottle {
    fn default() -> Self {
        Self::new(TRAIL_MIN_GAP_MS)
    }
}

impl TrailThrottle {
    pub fn new(min_gap_ms: f64) -> Self {
        Self {
            last: f64::NEG_INFINITY,
            min_gap_ms,
        }
    }

    /// True if a note may be released at `now`; records the release.
    pub fn allow(&mut self, now: f64) -> bool {
        if now - self.last < self.min_gap_ms {
            return false;
        }
        self.last = now;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailNote {
    pub glyph: &'static str,
    pub color: &'static str,
}

impl TrailNote {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            glyph: pick(rng, &TRAIL_GLYPHS),
            color: pick(rng, &TRAIL_COLORS),
        }
    }
}
