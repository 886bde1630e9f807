use crate::constants::{ACTIVE_CLASS, GALLERY_BUTTON_ID, GALLERY_CLOSE_ID, GALLERY_POPUP_ID};
use crate::dom;
use crate::gallery::{open_after, GalleryClick};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn open(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GALLERY_POPUP_ID) {
        _ = el.class_list().add_1(ACTIVE_CLASS);
    }
}

#[inline]
pub fn close(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(GALLERY_POPUP_ID) {
        _ = el.class_list().remove_1(ACTIVE_CLASS);
    }
}

#[inline]
pub fn is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(GALLERY_POPUP_ID)
        .map(|el| el.class_list().contains(ACTIVE_CLASS))
        .unwrap_or(false)
}

fn handle(document: &web::Document, click: GalleryClick) {
    let was_open = is_open(document);
    let now_open = open_after(click, was_open);
    if now_open == was_open {
        return;
    }
    if now_open {
        open(document);
    } else {
        close(document);
    }
    log::debug!("[popup] {:?} -> open={}", click, now_open);
}

/// Gallery button opens the popup; the close button or a click on the
/// backdrop itself (not its content) closes it.
pub fn wire(document: &web::Document) {
    let Some(popup) = document.get_element_by_id(GALLERY_POPUP_ID) else {
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(document, GALLERY_BUTTON_ID, move || {
        handle(&doc, GalleryClick::OpenButton)
    });
    let doc = document.clone();
    dom::add_click_listener(document, GALLERY_CLOSE_ID, move || {
        handle(&doc, GalleryClick::CloseButton)
    });

    let doc = document.clone();
    let backdrop = popup.clone();
    dom::add_listener(&popup, "click", move |ev| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .map(|el| el == backdrop)
            .unwrap_or(false);
        let click = if on_backdrop {
            GalleryClick::Backdrop
        } else {
            GalleryClick::Content
        };
        handle(&doc, click);
    });
}
