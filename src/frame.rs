use crate::canvas::CanvasSurface;
use crate::constants::STATS_LOG_EVERY_FRAMES;
use std::cell::RefCell;
use std::rc::Rc;
use stringz_core::Scene;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
    pub frames: u64,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<Scene>>, surface: CanvasSurface) -> Self {
        Self {
            scene,
            surface,
            frames: 0,
        }
    }

    /// One animation frame; `now` is the rAF timestamp in milliseconds.
    pub fn frame(&mut self, now: f64) {
        let mut scene = self.scene.borrow_mut();
        scene.tick(now, &mut self.surface);
        self.frames += 1;
        if self.frames % STATS_LOG_EVERY_FRAMES == 0 {
            let stats = scene.stats();
            log::debug!(
                "[frame] #{} guitars={} notes={} stickmen={}",
                self.frames,
                stats.guitars,
                stats.notes,
                stats.stickmen
            );
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        frame_ctx.borrow_mut().frame(now);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
    log::info!("[frame] animation loop started");
}
