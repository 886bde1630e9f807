//! Scene: owns every live actor and drives one frame per host tick.
//!
//! The clock is the `now` argument of [`Scene::tick`] (milliseconds, any
//! monotonic origin) and randomness comes from the injected `R`, so a test
//! can run the whole loop headless against a [`crate::RecordingSurface`].

use crate::actor::{Actor, Emissions, FrameEnv};
use crate::config::SceneConfig;
use crate::guitar::Guitar;
use crate::hover::{apply_hover, HoverReport};
use crate::note::Note;
use crate::stickman::Stickman;
use crate::surface::Surface;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub guitars: usize,
    pub notes: usize,
    pub stickmen: usize,
}

pub struct Scene<R: Rng = StdRng> {
    config: SceneConfig,
    width: f64,
    height: f64,
    guitars: Vec<Guitar>,
    notes: Vec<Note>,
    stickmen: Vec<Stickman>,
    last_spawn: f64,
    last_glow_pick: f64,
    rng: R,
    pending: Emissions,
}

impl Scene<StdRng> {
    pub fn from_seed(config: SceneConfig, width: f64, height: f64, seed: u64) -> Self {
        Self::new(config, width, height, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scene<R> {
    pub fn new(config: SceneConfig, width: f64, height: f64, rng: R) -> Self {
        Self {
            config,
            width,
            height,
            guitars: Vec::new(),
            notes: Vec::new(),
            stickmen: Vec::new(),
            last_spawn: 0.0,
            last_glow_pick: 0.0,
            rng,
            pending: Emissions::default(),
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn guitars(&self) -> &[Guitar] {
        &self.guitars
    }

    pub fn guitars_mut(&mut self) -> &mut [Guitar] {
        &mut self.guitars
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn stickmen(&self) -> &[Stickman] {
        &self.stickmen
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            guitars: self.guitars.len(),
            notes: self.notes.len(),
            stickmen: self.stickmen.len(),
        }
    }

    /// One frame: clear, run the spawn and glow timers, then update, draw
    /// and sweep guitars, notes and stickmen in that order.
    pub fn tick(&mut self, now: f64, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);

        if now - self.last_spawn > self.config.spawn_interval_ms {
            self.spawn_guitar();
            self.last_spawn = now;
        }

        if now - self.last_glow_pick > self.config.glow_interval_ms {
            self.last_glow_pick = now;
            self.pick_glow();
        }

        let env = FrameEnv {
            now,
            width: self.width,
            height: self.height,
        };

        sweep(&mut self.guitars, &env, &mut self.rng, surface, &mut self.pending);
        self.absorb_pending();
        sweep(&mut self.notes, &env, &mut self.rng, surface, &mut self.pending);
        self.absorb_pending();
        sweep(&mut self.stickmen, &env, &mut self.rng, surface, &mut self.pending);
        self.absorb_pending();
    }

    /// Spawn one random guitar at the top edge. Returns false at the cap.
    pub fn spawn_guitar(&mut self) -> bool {
        let guitar = Guitar::spawn(&mut self.rng, self.width);
        self.push_guitar(guitar)
    }

    pub fn push_guitar(&mut self, guitar: Guitar) -> bool {
        if self.guitars.len() >= self.config.max_guitars {
            log::debug!(
                "[scene] guitar cap {} reached, skipping spawn",
                self.config.max_guitars
            );
            return false;
        }
        log::debug!(
            "[scene] guitar {:?} at x={:.0} speed={:.2}",
            guitar.kind,
            guitar.pos.x,
            guitar.speed
        );
        self.guitars.push(guitar);
        true
    }

    /// Make one eligible guitar glow, chosen uniformly. Returns its index.
    pub fn pick_glow(&mut self) -> Option<usize> {
        let candidates: SmallVec<[usize; 16]> = self
            .guitars
            .iter()
            .enumerate()
            .filter(|(_, g)| g.can_glow())
            .map(|(i, _)| i)
            .collect();
        let &idx = candidates.choose(&mut self.rng)?;
        self.guitars[idx].start_glow();
        log::debug!("[scene] guitar {} starts glowing", idx);
        Some(idx)
    }

    /// Pointer moved to canvas-local `(x, y)`.
    pub fn hover(&mut self, x: f64, y: f64) -> HoverReport {
        let report = apply_hover(
            &mut self.guitars,
            DVec2::new(x, y),
            &mut self.rng,
            &mut self.pending,
        );
        if !report.is_empty() {
            log::debug!(
                "[hover] popped={} detonated={}",
                report.popped,
                report.detonated
            );
        }
        self.guitars.retain(|g| !g.dead);
        self.absorb_pending();
        report
    }

    fn absorb_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let notes_room = self.config.max_notes.saturating_sub(self.notes.len());
        let dropped_notes = self.pending.notes.len().saturating_sub(notes_room);
        self.notes.extend(self.pending.notes.drain(..).take(notes_room));

        let stickmen_room = self.config.max_stickmen.saturating_sub(self.stickmen.len());
        let dropped_stickmen = self.pending.stickmen.len().saturating_sub(stickmen_room);
        self.stickmen.extend(self.pending.stickmen.drain(..).take(stickmen_room));

        if dropped_notes > 0 || dropped_stickmen > 0 {
            log::debug!(
                "[scene] caps reached, dropped notes={} stickmen={}",
                dropped_notes,
                dropped_stickmen
            );
        }
    }
}

/// Update, draw, then drop the dead, back to front. A dying note still shows
/// its last faded frame; dead guitars and stickmen draw nothing.
fn sweep<A: Actor, R: Rng + ?Sized>(
    actors: &mut Vec<A>,
    env: &FrameEnv,
    rng: &mut R,
    surface: &mut dyn Surface,
    out: &mut Emissions,
) {
    for i in (0..actors.len()).rev() {
        actors[i].update(env, rng, out);
        actors[i].draw(surface);
        if actors[i].is_dead() {
            actors.remove(i);
        }
    }
}
