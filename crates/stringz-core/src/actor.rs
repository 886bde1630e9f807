use crate::note::Note;
use crate::stickman::Stickman;
use crate::surface::Surface;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Per-tick environment handed to every actor.
#[derive(Clone, Copy, Debug)]
pub struct FrameEnv {
    pub now: f64,
    pub width: f64,
    pub height: f64,
}

/// Actors spawned during one sweep. The scene drains this into its own
/// collections after the sweep, so actors never touch the scene directly.
#[derive(Default, Debug)]
pub struct Emissions {
    pub notes: SmallVec<[Note; 8]>,
    pub stickmen: SmallVec<[Stickman; 2]>,
}

impl Emissions {
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.stickmen.is_empty()
    }
}

pub trait Actor {
    fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv, rng: &mut R, out: &mut Emissions);
    fn draw(&self, surface: &mut dyn Surface);
    fn is_dead(&self) -> bool;
}

#[inline]
pub(crate) fn jitter<R: Rng + ?Sized>(rng: &mut R, spread: f64) -> f64 {
    rng.gen_range(-spread..spread)
}

#[inline]
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[&'static str]) -> &'static str {
    palette.choose(rng).copied().unwrap_or("#FFFFFF")
}
