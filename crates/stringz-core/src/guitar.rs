//! Falling guitar actor.
//!
//! A guitar falls until it lands (turning into a strumming stickman) or is
//! popped by the pointer. When the scene picks it to glow it swells up to
//! [`GLOW_SCALE_LIMIT`], then explodes: it keeps swelling while fading out
//! and bursts into hearts once fully transparent.

use crate::actor::{jitter, pick, Actor, Emissions, FrameEnv};
use crate::constants::*;
use crate::note::Note;
use crate::stickman::Stickman;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuitarKind {
    Acoustic,
    Electric,
}

#[derive(Clone, Debug)]
pub struct Guitar {
    pub pos: DVec2,
    pub kind: GuitarKind,
    pub base_size: f64,
    pub scale: f64,
    pub rotation: f64,
    pub speed: f64,
    pub glow: bool,
    pub exploding: bool,
    pub alpha: f64,
    pub dead: bool,
}

impl Guitar {
    pub fn new(x: f64, kind: GuitarKind, speed: f64, rotation: f64) -> Self {
        Self {
            pos: DVec2::new(x, GUITAR_SPAWN_Y),
            kind,
            base_size: GUITAR_BASE_SIZE,
            scale: 1.0,
            rotation,
            speed,
            glow: false,
            exploding: false,
            alpha: 1.0,
            dead: false,
        }
    }

    /// Random guitar at the top of a surface `width` pixels wide.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f64) -> Self {
        let kind = if rng.gen_bool(0.5) {
            GuitarKind::Acoustic
        } else {
            GuitarKind::Electric
        };
        let x = if width > 2.0 * GUITAR_SPAWN_MARGIN {
            rng.gen_range(GUITAR_SPAWN_MARGIN..width - GUITAR_SPAWN_MARGIN)
        } else {
            width * 0.5
        };
        let speed = rng.gen_range(GUITAR_SPEED_MIN..GUITAR_SPEED_MAX);
        let rotation = rng.gen_range(-GUITAR_ROTATION_MAX..GUITAR_ROTATION_MAX);
        Self::new(x, kind, speed, rotation)
    }

    /// Pointer interaction radius at the current scale.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.base_size * self.scale * HIT_RADIUS_FACTOR
    }

    #[inline]
    pub fn can_glow(&self) -> bool {
        !self.dead && !self.glow && !self.exploding
    }

    pub fn start_glow(&mut self) {
        if self.can_glow() {
            self.glow = true;
        }
    }

    /// Skip the rest of the swell and explode right away.
    pub fn detonate(&mut self) {
        if self.glow && !self.dead {
            self.exploding = true;
        }
    }

    /// Burst into plain music notes and die.
    pub fn pop<R: Rng + ?Sized>(&mut self, rng: &mut R, out: &mut Emissions) {
        for _ in 0..POP_NOTE_COUNT {
            let x = self.pos.x + jitter(rng, POP_JITTER);
            let y = self.pos.y + jitter(rng, POP_JITTER);
            let color = pick(rng, &POP_COLORS);
            out.notes.push(Note::music(x, y, color, rng));
        }
        self.dead = true;
    }

    fn burst_hearts<R: Rng + ?Sized>(&mut self, rng: &mut R, out: &mut Emissions) {
        for _ in 0..HEART_COUNT {
            let x = self.pos.x + jitter(rng, HEART_JITTER);
            let y = self.pos.y + jitter(rng, HEART_JITTER);
            let color = pick(rng, &HEART_COLORS);
            out.notes.push(Note::heart(x, y, color, rng));
        }
        self.dead = true;
    }

    fn trace_acoustic(&self, s: &mut dyn Surface) {
        let b = self.base_size;
        s.ellipse(0.0, 0.0, b * 1.15, b * 0.95, 0.0, 0.0, TAU);
        // upper bout
        s.ellipse(0.0, -b * 0.7, b * 0.6, b * 0.45, 0.0, 0.0, TAU);
        // sound hole
        s.move_to(b * 0.18, -2.0);
        s.arc(0.0, 0.0, b * 0.28, 0.0, TAU);
        self.trace_neck(s, -b * 1.1);
    }

    fn trace_electric(&self, s: &mut dyn Surface) {
        let b = self.base_size;
        s.move_to(-b * 0.9, b * 0.45);
        s.line_to(b * 0.95, b * 0.4);
        s.line_to(b * 0.6, -b * 0.6);
        s.line_to(-b * 0.6, -b * 0.65);
        s.close_path();
        self.trace_neck(s, -b * 0.45);
    }

    fn trace_neck(&self, s: &mut dyn Surface, from_y: f64) {
        let b = self.base_size;
        s.move_to(0.0, from_y);
        s.line_to(0.0, -b * 3.0);
        // headstock
        s.move_to(0.0, -b * 3.0);
        s.line_to(0.0, -b * 3.6);
    }
}

impl Actor for Guitar {
    fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv, rng: &mut R, out: &mut Emissions) {
        if self.dead {
            return;
        }
        self.pos.y += self.speed;

        if self.glow && !self.exploding {
            self.scale += GLOW_SCALE_STEP;
            if self.scale >= GLOW_SCALE_LIMIT - SCALE_EPSILON {
                self.exploding = true;
            }
        }

        if self.exploding {
            self.scale += EXPLODE_SCALE_STEP;
            self.alpha -= EXPLODE_ALPHA_STEP;
            if self.alpha <= 0.0 {
                self.burst_hearts(rng, out);
                return;
            }
        }

        if self.pos.y > env.height - GROUND_OFFSET && !self.glow && !self.exploding {
            out.stickmen.push(Stickman::new(
                self.pos.x,
                env.height - STICKMAN_GROUND_OFFSET,
                env.now,
            ));
            self.dead = true;
        }
    }

    fn draw(&self, s: &mut dyn Surface) {
        if self.dead {
            return;
        }
        s.save();
        s.translate(self.pos.x, self.pos.y);
        s.rotate(self.rotation);
        s.scale(self.scale, self.scale);

        if self.exploding {
            s.set_shadow(GLOW_SHADOW_COLOR, EXPLODE_BLUR);
        } else if self.glow {
            s.set_shadow(GLOW_SHADOW_COLOR, GLOW_BLUR);
        } else {
            s.set_shadow(GLOW_SHADOW_COLOR, 0.0);
        }

        s.set_line_width(GUITAR_LINE_WIDTH);
        let stroke_alpha = self.alpha.max(GUITAR_MIN_STROKE_ALPHA);
        s.set_stroke_style(&format!("rgba(255,255,255,{stroke_alpha})"));

        s.begin_path();
        match self.kind {
            GuitarKind::Acoustic => self.trace_acoustic(s),
            GuitarKind::Electric => self.trace_electric(s),
        }
        s.stroke();
        s.restore();
    }

    #[inline]
    fn is_dead(&self) -> bool {
        self.dead
    }
}
