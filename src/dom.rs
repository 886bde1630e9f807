use crate::input::{self, CanvasRect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", move |_| handler());
    }
}

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}

/// Match the canvas backing store to the window's inner size and return
/// the new size in pixels.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    if let Some(w) = web::window() {
        let inner_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let inner_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
        let (w_px, h_px) = input::backing_size(inner_w, inner_h);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
    (canvas.width() as f64, canvas.height() as f64)
}

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> CanvasRect {
    let rect = canvas.get_bounding_client_rect();
    CanvasRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Create a `<span>` with the given class, text and inline style.
pub fn make_span(
    document: &web::Document,
    class: &str,
    text: &str,
    style: &str,
) -> Option<web::Element> {
    let span = document.create_element("span").ok()?;
    span.set_class_name(class);
    span.set_text_content(Some(text));
    _ = span.set_attribute("style", style);
    Some(span)
}
