use crate::dom::WebEmitter;
use instant::Instant;
use sparkle_core::constants::MAX_FRAME_DT_SEC;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the emitter's timeline from `requestAnimationFrame`.
pub fn start_loop(emitter: Rc<RefCell<WebEmitter>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let max_dt = Duration::from_secs_f32(MAX_FRAME_DT_SEC);
    let mut last = Instant::now();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = (now - last).min(max_dt);
        last = now;
        let removed = emitter.borrow_mut().tick(dt);
        if removed > 0 {
            log::trace!("[sparkle] removed {}", removed);
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick);
}
