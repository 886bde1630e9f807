//! Hero banner: rotating headline words and the particles each word
//! releases. The DOM side lives in the web crate; this is the pure part.

use crate::actor::pick;
use rand::Rng;

pub const BANNER_WORDS: [&str; 3] = ["VIBEZ", "LOVE", "SWEETNESS"];
pub const WORD_INTERVAL_MS: i32 = 3000;
pub const BURST_SIZE: usize = 15;
pub const BURST_STAGGER_MS: i32 = 150;
pub const PARTICLE_LIFETIME_MS: i32 = 3000;

const SHAPES: [&str; 3] = ["■", "▲", "●"];
const SHAPE_COLOR: &str = "#ff9f55";
const LOVE_GLYPH: &str = "❤";
const LOVE_COLORS: [&str; 4] = ["#ff9f55", "#ffffff", "#ff2d55", "#e63946"];
const SWEETS: [&str; 3] = ["🍬", "🍭", "🍫"];

#[derive(Clone, Debug)]
pub struct WordCycle {
    words: &'static [&'static str],
    index: usize,
}

impl Default for WordCycle {
    fn default() -> Self {
        Self::new(&BANNER_WORDS)
    }
}

impl WordCycle {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self { words, index: 0 }
    }

    pub fn current(&self) -> Option<&'static str> {
        self.words.get(self.index).copied()
    }

    /// Step to the next word, wrapping around, and return it.
    pub fn advance(&mut self) -> Option<&'static str> {
        if self.words.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.words.len();
        self.current()
    }
}

/// One falling banner particle. `color` is `None` for emoji glyphs, which
/// carry their own colors.
#[derive(Clone, Debug, PartialEq)]
pub struct WordParticle {
    pub glyph: &'static str,
    pub color: Option<&'static str>,
    pub left_percent: f64,
}

pub fn word_particle<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Option<WordParticle> {
    let (glyph, color) = match word {
        "VIBEZ" => (pick(rng, &SHAPES), Some(SHAPE_COLOR)),
        "LOVE" => (LOVE_GLYPH, Some(pick(rng, &LOVE_COLORS))),
        "SWEETNESS" => (pick(rng, &SWEETS), None),
        _ => return None,
    };
    Some(WordParticle {
        glyph,
        color,
        left_percent: rng.gen_range(0.0..100.0),
    })
}
