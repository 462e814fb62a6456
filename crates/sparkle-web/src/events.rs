use crate::dom::WebEmitter;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Feed every `pointermove` on the window to the emitter, stamped with
/// `performance.now()`.
pub fn wire_pointermove(emitter: Rc<RefCell<WebEmitter>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let performance = window.performance();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let now = match &performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        };
        emitter
            .borrow_mut()
            .on_pointer_move(now, pointer_client_px(&ev));
    }) as Box<dyn FnMut(_)>);

    window
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}
