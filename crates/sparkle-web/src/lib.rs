#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use sparkle_core::SparkleEmitter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod footer;
mod frame;
mod setup;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sparkle-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    footer::set_current_year(&document);

    // No layer on this page: the trail is simply off.
    setup::wire_if_present(dom::query_layer(&document), |layer| wire_trail(document, layer))?;
    Ok(())
}

fn wire_trail(document: web::Document, layer: web::HtmlElement) -> anyhow::Result<()> {
    let config = dom::layer_config(&layer);
    log::info!(
        "[sparkle] throttle={}ms duration={}s ease={}",
        config.throttle_ms,
        config.duration_sec,
        config.ease
    );
    let surface = dom::DomSurface::new(document, layer);
    let emitter = SparkleEmitter::new(config, surface, StdRng::from_entropy())?;
    let emitter = Rc::new(RefCell::new(emitter));

    events::wire_pointermove(emitter.clone())?;
    frame::start_loop(emitter);
    Ok(())
}
