// Host-side tests for page constants and their relationships with the
// scene constants. The main crate is wasm-only, so we include the pure-Rust
// modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use stringz_core::banner::{
    BANNER_WORDS, BURST_SIZE, BURST_STAGGER_MS, PARTICLE_LIFETIME_MS, WORD_INTERVAL_MS,
};
use stringz_core::constants as scene;
use stringz_core::trail::{TRAIL_MIN_GAP_MS, TRAIL_NOTE_LIFETIME_MS};

#[test]
fn element_ids_are_distinct_and_selector_free() {
    let ids = [
        CANVAS_ID,
        GALLERY_BUTTON_ID,
        GALLERY_POPUP_ID,
        GALLERY_CLOSE_ID,
        CONTACT_FORM_ID,
        EMAIL_BUTTON_ID,
        PHONE_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#') && !a.starts_with('.'), "{a} is a selector");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn banner_text_selector_targets_the_animated_class() {
    assert!(BANNER_TEXT_SELECTOR.ends_with(&format!(".{BANNER_TEXT_CLASS}")));
}

#[test]
fn copy_attribute_is_a_data_attribute() {
    assert!(COPY_ATTR.starts_with(OVERRIDE_ATTR_PREFIX));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn banner_burst_finishes_before_next_word() {
    assert!(!BANNER_WORDS.is_empty());
    // last particle is released before the word changes again
    assert!((BURST_SIZE as i32 - 1) * BURST_STAGGER_MS < WORD_INTERVAL_MS);
    assert!(PARTICLE_LIFETIME_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_and_stats_timings_are_sane() {
    assert!(TRAIL_MIN_GAP_MS > 0.0);
    assert!(f64::from(TRAIL_NOTE_LIFETIME_MS) > TRAIL_MIN_GAP_MS);
    assert!(STATS_LOG_EVERY_FRAMES > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_ground_lines_are_ordered() {
    // stickmen stand above the landing line
    assert!(scene::STICKMAN_GROUND_OFFSET > scene::GROUND_OFFSET);
    assert!(scene::GUITAR_SPAWN_Y < 0.0);
    assert!(scene::GLOW_SCALE_LIMIT > 1.0);
    assert!(scene::EXPLODE_SCALE_STEP > scene::GLOW_SCALE_STEP);
}
