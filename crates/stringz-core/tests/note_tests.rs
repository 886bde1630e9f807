use rand::rngs::StdRng;
use rand::SeedableRng;
use stringz_core::constants::*;
use stringz_core::{Actor, DrawCmd, Emissions, FrameEnv, Note, RecordingSurface};

const ENV: FrameEnv = FrameEnv {
    now: 0.0,
    width: 800.0,
    height: 600.0,
};

fn ticks_until_dead(note: &mut Note) -> usize {
    let mut rng = StdRng::seed_from_u64(0);
    let mut out = Emissions::default();
    let mut ticks = 0;
    while !note.is_dead() {
        note.update(&ENV, &mut rng, &mut out);
        ticks += 1;
        assert!(ticks <= 1000, "note never died");
    }
    assert!(out.is_empty());
    ticks
}

#[test]
fn music_note_lives_for_its_tick_budget() {
    let mut rng = StdRng::seed_from_u64(10);
    let mut note = Note::music(100.0, 100.0, "#ffffff", &mut rng);
    assert_eq!(ticks_until_dead(&mut note), NOTE_LIFE as usize);
    assert_eq!(note.life, 0);
    assert!(note.alpha > 0.0);
}

#[test]
fn heart_outlives_music_note() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut heart = Note::heart(100.0, 100.0, "#FF3B3B", &mut rng);
    assert!(heart.is_heart);
    assert_eq!(heart.glyph, HEART_GLYPH);
    assert_eq!(ticks_until_dead(&mut heart), HEART_LIFE as usize);
}

#[test]
fn fading_to_zero_kills_before_life_runs_out() {
    let mut rng = StdRng::seed_from_u64(12);
    let mut note = Note::music(0.0, 0.0, "#ffffff", &mut rng);
    note.alpha = NOTE_FADE_STEP / 2.0;
    assert_eq!(ticks_until_dead(&mut note), 1);
    assert!(note.life > 0);
    assert!(note.alpha <= 0.0);
}

#[test]
fn life_and_alpha_only_decrease() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut out = Emissions::default();
    let mut note = Note::heart(50.0, 300.0, "#FFFFFF", &mut rng);
    let start_y = note.pos.y;
    let (mut life, mut alpha) = (note.life, note.alpha);
    for _ in 0..50 {
        note.update(&ENV, &mut rng, &mut out);
        assert!(note.life < life);
        assert!(note.alpha < alpha);
        life = note.life;
        alpha = note.alpha;
    }
    assert!((start_y - note.pos.y - 50.0 * HEART_SPEED).abs() < 1e-9);
}

#[test]
fn note_sways_within_bounds() {
    let mut rng = StdRng::seed_from_u64(14);
    let mut out = Emissions::default();
    let mut note = Note::music(200.0, 200.0, "#ffffff", &mut rng);
    for _ in 0..NOTE_LIFE {
        let x = note.pos.x;
        note.update(&ENV, &mut rng, &mut out);
        assert!((note.pos.x - x).abs() <= NOTE_SWAY + 1e-12);
    }
}

#[test]
fn construction_ranges() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..100 {
        let n = Note::music(100.0, 100.0, "#ffffff", &mut rng);
        assert!(NOTE_GLYPHS.contains(&n.glyph));
        assert!((n.pos.x - 100.0).abs() <= NOTE_JITTER);
        assert!((n.pos.y - 100.0).abs() <= NOTE_JITTER);
        assert!(n.size >= NOTE_BASE_SIZE && n.size < NOTE_BASE_SIZE + NOTE_SIZE_SPREAD);
        assert!(n.speed >= NOTE_SPEED_BASE && n.speed < NOTE_SPEED_BASE + NOTE_SPEED_SPREAD);
        assert!(n.offset >= 0.0 && n.offset < std::f64::consts::TAU);
        assert_eq!(n.alpha, 1.0);

        let h = Note::heart(100.0, 100.0, "#FFFFFF", &mut rng);
        assert!(h.size >= HEART_BASE_SIZE && h.size < HEART_BASE_SIZE + NOTE_SIZE_SPREAD);
        assert_eq!(h.speed, HEART_SPEED);
    }
}

#[test]
fn draw_renders_glyph_with_clamped_alpha() {
    let mut rng = StdRng::seed_from_u64(16);
    let mut note = Note::music(10.0, 20.0, "#FFA500", &mut rng);
    note.alpha = -0.5;
    let mut surface = RecordingSurface::new();
    note.draw(&mut surface);

    assert!(surface.commands.contains(&DrawCmd::GlobalAlpha(0.0)));
    assert!(surface
        .commands
        .contains(&DrawCmd::FillStyle("#FFA500".to_string())));
    assert!(surface
        .commands
        .contains(&DrawCmd::Font(format!("{}px Arial", note.size))));
    assert_eq!(surface.texts(), vec![note.glyph]);
}
