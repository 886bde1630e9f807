use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use stringz_core::Scene;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_scene_handlers(w: PointerWiring) {
    wire_hover(&w);
    wire_resize(&w);
}

fn wire_hover(w: &PointerWiring) {
    let w = w.clone();
    let target = w.canvas.clone();
    dom::add_listener(&target, "mousemove", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let rect = dom::canvas_rect(&w.canvas);
        let (cw, ch) = (w.canvas.width() as f64, w.canvas.height() as f64);
        let (cx, cy) = (ev.client_x() as f64, ev.client_y() as f64);
        let Some(pos) = input::client_to_canvas(cx, cy, rect, cw, ch) else {
            return;
        };
        let report = w.scene.borrow_mut().hover(pos.x, pos.y);
        if !report.is_empty() {
            log::debug!(
                "[mouse] hover at ({:.0},{:.0}) popped={} detonated={}",
                pos.x,
                pos.y,
                report.popped,
                report.detonated
            );
        }
    });
}

fn wire_resize(w: &PointerWiring) {
    let w = w.clone();
    let Some(window) = web::window() else {
        return;
    };
    dom::add_listener(&window, "resize", move |_| {
        let (width, height) = dom::sync_canvas_to_window(&w.canvas);
        w.scene.borrow_mut().resize(width, height);
        log::debug!("[resize] canvas {}x{}", width, height);
    });
}
