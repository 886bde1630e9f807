use crate::constants::MUSIC_NOTE_CLASS;
use crate::dom;
use stringz_core::trail::{TrailNote, TrailThrottle, TRAIL_NOTE_LIFETIME_MS};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drop a music note under the cursor as it moves across the page.
pub fn wire(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let doc = document.clone();
    let mut throttle = TrailThrottle::default();
    dom::add_listener(document, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if !throttle.allow(instant::now()) {
            return;
        }
        let note = TrailNote::random(&mut rand::thread_rng());
        let style = format!(
            "left:{}px;top:{}px;color:{};",
            ev.page_x(),
            ev.page_y(),
            note.color
        );
        let Some(span) = dom::make_span(&doc, MUSIC_NOTE_CLASS, note.glyph, &style) else {
            return;
        };
        if body.append_child(&span).is_ok() {
            dom::after(TRAIL_NOTE_LIFETIME_MS, move || span.remove());
        }
    });
}
