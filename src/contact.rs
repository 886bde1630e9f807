use crate::constants::{
    CONTACT_FORM_ID, COPY_ATTR, EMAIL_BUTTON_ID, EMAIL_COPIED_MESSAGE, FORM_SENT_MESSAGE,
    PHONE_BUTTON_ID, PHONE_COPIED_MESSAGE,
};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn wire(document: &web::Document) {
    wire_form(document);
    wire_copy_button(document, EMAIL_BUTTON_ID, EMAIL_COPIED_MESSAGE);
    wire_copy_button(document, PHONE_BUTTON_ID, PHONE_COPIED_MESSAGE);
}

/// The form has no backend: acknowledge and clear it.
fn wire_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let target = form.clone();
    dom::add_listener(&target, "submit", move |ev| {
        ev.prevent_default();
        dom::alert(FORM_SENT_MESSAGE);
        form.reset();
        log::info!("[contact] form submitted");
    });
}

/// Text a copy button puts on the clipboard.
fn copy_text(el: &web::Element) -> Option<String> {
    el.get_attribute(COPY_ATTR)
        .or_else(|| el.text_content())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn wire_copy_button(document: &web::Document, id: &str, message: &'static str) {
    let Some(el) = document.get_element_by_id(id) else {
        return;
    };
    let source = el.clone();
    dom::add_listener(&el, "click", move |_| {
        let Some(text) = copy_text(&source) else {
            log::warn!("[contact] nothing to copy");
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        let promise: js_sys::Promise = window.navigator().clipboard().write_text(&text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => dom::alert(message),
                Err(e) => log::error!("[contact] clipboard write failed: {:?}", e),
            }
        });
    });
}
