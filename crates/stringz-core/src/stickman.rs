use crate::actor::{pick, Actor, Emissions, FrameEnv};
use crate::constants::*;
use crate::note::Note;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::{PI, TAU};

/// Wireframe figure strumming a guitar where a guitar landed.
#[derive(Clone, Debug)]
pub struct Stickman {
    pub pos: DVec2,
    pub start: f64,
    pub duration: f64,
    pub dead: bool,
    // arm swing at the last update, reused by `draw`
    arm_offset: f64,
}

impl Stickman {
    pub fn new(x: f64, y: f64, start: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            start,
            duration: STICKMAN_DURATION_MS,
            dead: false,
            arm_offset: 0.0,
        }
    }

    /// Normalized lifetime progress; above 1 means finished.
    #[inline]
    pub fn progress(&self, now: f64) -> f64 {
        (now - self.start) / self.duration
    }

    #[inline]
    pub fn arm_offset(&self) -> f64 {
        self.arm_offset
    }

    /// Point where strummed notes appear.
    #[inline]
    pub fn hand(&self) -> DVec2 {
        self.pos + DVec2::from_array(STRUM_HAND_OFFSET)
    }
}

pub fn strum_offset(t: f64) -> f64 {
    (t * PI * STRUM_CYCLES).sin() * STRUM_AMPLITUDE
}

impl Actor for Stickman {
    fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv, rng: &mut R, out: &mut Emissions) {
        let t = self.progress(env.now);
        if t > 1.0 {
            self.dead = true;
            return;
        }
        self.arm_offset = strum_offset(t);

        if rng.gen_bool(STRUM_NOTE_CHANCE) {
            let hand = self.hand();
            let color = pick(rng, &STRUM_COLORS);
            out.notes.push(Note::music(hand.x, hand.y, color, rng));
        }
    }

    fn draw(&self, s: &mut dyn Surface) {
        if self.dead {
            return;
        }
        let d = self.arm_offset / 6.0;
        s.save();
        s.translate(self.pos.x, self.pos.y);
        s.set_stroke_style(STICKMAN_STROKE);
        s.set_line_width(STICKMAN_LINE_WIDTH);

        // head
        s.begin_path();
        s.arc(0.0, -52.0, 10.0, 0.0, TAU);
        s.stroke();

        // torso
        s.begin_path();
        s.move_to(0.0, -42.0);
        s.line_to(0.0, 0.0);
        s.stroke();

        // fretting arm
        s.begin_path();
        s.move_to(0.0, -30.0);
        s.line_to(-18.0, -14.0);
        s.stroke();

        // strumming arm
        s.begin_path();
        s.move_to(0.0, -30.0);
        s.line_to(18.0 + d, -12.0 + d);
        s.stroke();

        // legs
        s.begin_path();
        s.move_to(0.0, 0.0);
        s.line_to(-12.0, 32.0);
        s.move_to(0.0, 0.0);
        s.line_to(12.0, 32.0);
        s.stroke();

        // held guitar: body and neck
        s.begin_path();
        s.ellipse(18.0 + d, -6.0 + d, 12.0, 8.0, 0.0, 0.0, TAU);
        s.move_to(18.0 + d, -6.0 + d);
        s.line_to(34.0 + d, -18.0 + d);
        s.stroke();

        s.restore();
    }

    #[inline]
    fn is_dead(&self) -> bool {
        self.dead
    }
}
