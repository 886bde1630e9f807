use crate::constants::{
    BANNER_PARTICLE_PARENT, BANNER_TEXT_CLASS, BANNER_TEXT_SELECTOR, PARTICLE_CLASS,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use stringz_core::banner::{
    word_particle, WordCycle, BURST_SIZE, BURST_STAGGER_MS, PARTICLE_LIFETIME_MS,
    WORD_INTERVAL_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start the headline word rotation. One interval drives it for the
/// lifetime of the page.
pub fn start(document: &web::Document) {
    let Ok(Some(text)) = document.query_selector(BANNER_TEXT_SELECTOR) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let cycle = Rc::new(RefCell::new(WordCycle::default()));
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(word) = cycle.borrow_mut().advance() else {
            return;
        };
        show_word(&text, word);
        burst(&doc, word);
    }) as Box<dyn FnMut()>);
    _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        WORD_INTERVAL_MS,
    );
    closure.forget();
    log::info!("[banner] word cycle started");
}

/// Swap the word and replay its entrance animation.
fn show_word(text: &web::Element, word: &str) {
    let classes = text.class_list();
    _ = classes.remove_1(BANNER_TEXT_CLASS);
    // reading layout forces a reflow so the animation restarts
    if let Some(html) = text.dyn_ref::<web::HtmlElement>() {
        _ = html.offset_width();
    }
    text.set_text_content(Some(word));
    _ = classes.add_1(BANNER_TEXT_CLASS);
}

fn burst(document: &web::Document, word: &'static str) {
    for i in 0..BURST_SIZE {
        let doc = document.clone();
        dom::after(i as i32 * BURST_STAGGER_MS, move || spawn_particle(&doc, word));
    }
}

fn spawn_particle(document: &web::Document, word: &str) {
    let Some(particle) = word_particle(word, &mut rand::thread_rng()) else {
        return;
    };
    let Ok(Some(parent)) = document.query_selector(BANNER_PARTICLE_PARENT) else {
        return;
    };
    let mut style = format!("left:{:.2}%;", particle.left_percent);
    if let Some(color) = particle.color {
        style.push_str(&format!("color:{color};"));
    }
    let Some(span) = dom::make_span(document, PARTICLE_CLASS, particle.glyph, &style) else {
        return;
    };
    if parent.append_child(&span).is_ok() {
        dom::after(PARTICLE_LIFETIME_MS, move || span.remove());
    }
}
