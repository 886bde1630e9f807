// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

fn rect(left: f64, top: f64, width: f64, height: f64) -> CanvasRect {
    CanvasRect {
        left,
        top,
        width,
        height,
    }
}

#[test]
fn client_to_canvas_identity_when_css_matches_backing() {
    let p = client_to_canvas(150.0, 90.0, rect(0.0, 0.0, 800.0, 600.0), 800.0, 600.0).unwrap();
    assert_eq!(p, glam::DVec2::new(150.0, 90.0));
}

#[test]
fn client_to_canvas_subtracts_offset() {
    let p = client_to_canvas(110.0, 70.0, rect(10.0, 20.0, 400.0, 300.0), 400.0, 300.0).unwrap();
    assert_eq!(p, glam::DVec2::new(100.0, 50.0));
}

#[test]
fn client_to_canvas_scales_to_backing_store() {
    // CSS box half the backing size (e.g. a 2x backing store)
    let p = client_to_canvas(50.0, 25.0, rect(0.0, 0.0, 400.0, 300.0), 800.0, 600.0).unwrap();
    assert_eq!(p, glam::DVec2::new(100.0, 50.0));
}

#[test]
fn client_to_canvas_outside_is_not_clamped() {
    let p = client_to_canvas(-10.0, 700.0, rect(0.0, 0.0, 800.0, 600.0), 800.0, 600.0).unwrap();
    assert!(p.x < 0.0);
    assert!(p.y > 600.0);
}

#[test]
fn client_to_canvas_none_without_layout() {
    assert!(client_to_canvas(1.0, 1.0, rect(0.0, 0.0, 0.0, 600.0), 800.0, 600.0).is_none());
    assert!(client_to_canvas(1.0, 1.0, rect(0.0, 0.0, 800.0, 0.0), 800.0, 600.0).is_none());
}

#[test]
fn backing_size_truncates_and_never_returns_zero() {
    assert_eq!(backing_size(1280.7, 720.2), (1280, 720));
    assert_eq!(backing_size(0.0, -5.0), (1, 1));
    assert_eq!(backing_size(f64::NAN, f64::INFINITY), (1, 1));
}
