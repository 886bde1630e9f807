use crate::actor::{jitter, Actor, Emissions, FrameEnv};
use crate::constants::*;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Floating glyph (music note or heart) that drifts up, sways and fades.
#[derive(Clone, Debug)]
pub struct Note {
    pub pos: DVec2,
    pub color: &'static str,
    pub glyph: &'static str,
    pub size: f64,
    pub speed: f64,
    pub offset: f64,
    pub life: i32,
    pub alpha: f64,
    pub is_heart: bool,
}

impl Note {
    pub fn music<R: Rng + ?Sized>(x: f64, y: f64, color: &'static str, rng: &mut R) -> Self {
        let glyph = if rng.gen_bool(EIGHTH_NOTE_CHANCE) {
            NOTE_GLYPHS[0]
        } else {
            NOTE_GLYPHS[1]
        };
        Self::build(x, y, color, glyph, false, rng)
    }

    pub fn heart<R: Rng + ?Sized>(x: f64, y: f64, color: &'static str, rng: &mut R) -> Self {
        Self::build(x, y, color, HEART_GLYPH, true, rng)
    }

    fn build<R: Rng + ?Sized>(
        x: f64,
        y: f64,
        color: &'static str,
        glyph: &'static str,
        is_heart: bool,
        rng: &mut R,
    ) -> Self {
        let pos = DVec2::new(x + jitter(rng, NOTE_JITTER), y + jitter(rng, NOTE_JITTER));
        let (base_size, speed, life) = if is_heart {
            (HEART_BASE_SIZE, HEART_SPEED, HEART_LIFE)
        } else {
            (
                NOTE_BASE_SIZE,
                NOTE_SPEED_BASE + rng.gen_range(0.0..NOTE_SPEED_SPREAD),
                NOTE_LIFE,
            )
        };
        Self {
            pos,
            color,
            glyph,
            size: base_size + rng.gen_range(0.0..NOTE_SIZE_SPREAD),
            speed,
            offset: rng.gen_range(0.0..TAU),
            life,
            alpha: 1.0,
            is_heart,
        }
    }

    #[inline]
    fn sway(&self) -> f64 {
        if self.is_heart {
            HEART_SWAY
        } else {
            NOTE_SWAY
        }
    }

    #[inline]
    fn fade_step(&self) -> f64 {
        if self.is_heart {
            HEART_FADE_STEP
        } else {
            NOTE_FADE_STEP
        }
    }
}

impl Actor for Note {
    fn update<R: Rng + ?Sized>(&mut self, _env: &FrameEnv, _rng: &mut R, _out: &mut Emissions) {
        self.pos.y -= self.speed;
        self.pos.x += (self.life as f64 / SWAY_LIFE_DIVISOR + self.offset).sin() * self.sway();
        self.alpha -= self.fade_step();
        self.life -= 1;
    }

    fn draw(&self, s: &mut dyn Surface) {
        s.save();
        s.set_global_alpha(self.alpha.max(0.0));
        s.set_fill_style(self.color);
        s.set_font(&format!("{}px Arial", self.size));
        s.fill_text(self.glyph, self.pos.x, self.pos.y);
        s.restore();
    }

    #[inline]
    fn is_dead(&self) -> bool {
        self.life <= 0 || self.alpha <= 0.0
    }
}
