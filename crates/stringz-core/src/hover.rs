use crate::actor::Emissions;
use crate::guitar::Guitar;
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverAction {
    /// Plain falling guitar: burst into notes.
    Pop,
    /// Glowing guitar: explode now instead of finishing the swell.
    Detonate,
    /// Already exploding (or dead).
    Ignore,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverReport {
    pub popped: usize,
    pub detonated: usize,
}

impl HoverReport {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.popped == 0 && self.detonated == 0
    }
}

#[inline]
pub fn is_hit(guitar: &Guitar, point: DVec2) -> bool {
    !guitar.dead && guitar.pos.distance(point) < guitar.radius()
}

pub fn classify(guitar: &Guitar) -> HoverAction {
    match (guitar.dead, guitar.glow, guitar.exploding) {
        (true, _, _) | (_, _, true) => HoverAction::Ignore,
        (false, false, false) => HoverAction::Pop,
        (false, true, false) => HoverAction::Detonate,
    }
}

/// Apply a pointer position to every guitar under it. Overlapping guitars
/// are all affected. Popped guitars are marked dead here; the caller drops
/// them from its collection.
pub fn apply_hover<R: Rng + ?Sized>(
    guitars: &mut [Guitar],
    point: DVec2,
    rng: &mut R,
    out: &mut Emissions,
) -> HoverReport {
    let mut report = HoverReport::default();
    for g in guitars.iter_mut().rev() {
        if !is_hit(g, point) {
            continue;
        }
        match classify(g) {
            HoverAction::Pop => {
                g.pop(rng, out);
                report.popped += 1;
            }
            HoverAction::Detonate => {
                g.detonate();
                report.detonated += 1;
            }
            HoverAction::Ignore => {}
        }
    }
    report
}
