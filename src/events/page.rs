use crate::constants::{ACTIVE_CLASS, MENU_TOGGLE_SELECTOR, NAV_SELECTOR};
use crate::{contact, dom, popup};
use web_sys as web;

/// Static page behavior: navigation menu, gallery popup and contact page.
pub fn wire_page_handlers(document: &web::Document) {
    wire_menu_toggle(document);
    popup::wire(document);
    contact::wire(document);
}

fn wire_menu_toggle(document: &web::Document) {
    let (Ok(Some(toggle)), Ok(Some(nav))) = (
        document.query_selector(MENU_TOGGLE_SELECTOR),
        document.query_selector(NAV_SELECTOR),
    ) else {
        return;
    };
    dom::add_listener(&toggle, "click", move |_| {
        _ = nav.class_list().toggle(ACTIVE_CLASS);
    });
}
