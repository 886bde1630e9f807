#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use stringz_core::Scene;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod banner;
mod canvas;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod gallery;
mod input;
mod popup;
mod settings;
mod trail;

use constants::CANVAS_ID;

fn start_scene(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(CANVAS_ID) else {
        log::info!("[init] no #{} on this page; scene disabled", CANVAS_ID);
        return Ok(());
    };
    let config = settings::scene_config(|attr| el.get_attribute(attr));
    let canvas: web::HtmlCanvasElement = el
        .dyn_into()
        .map_err(|_| anyhow!("#{} is not a canvas", CANVAS_ID))?;

    let (width, height) = dom::sync_canvas_to_window(&canvas);
    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;
    log::info!(
        "[init] canvas {}x{} spawn={}ms glow={}ms",
        width,
        height,
        config.spawn_interval_ms,
        config.glow_interval_ms
    );
    let scene = Rc::new(RefCell::new(Scene::new(
        config,
        width,
        height,
        StdRng::from_entropy(),
    )));

    events::pointer::wire_scene_handlers(events::pointer::PointerWiring {
        canvas,
        scene: scene.clone(),
    });
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(
        scene, surface,
    ))));
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;

    events::page::wire_page_handlers(&document);
    banner::start(&document);
    trail::wire(&document);
    start_scene(&document)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stringz-web starting");
    if let Err(e) = init() {
        log::error!("[init] {:#}", e);
    }
}
