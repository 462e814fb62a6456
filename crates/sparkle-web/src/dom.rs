use crate::constants::LAYER_SELECTOR;
use crate::style;
use rand::rngs::StdRng;
use sparkle_core::{ParticleProps, SparkleConfig, SparkleEmitter, Surface, SurfaceError};
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebEmitter = SparkleEmitter<DomSurface, StdRng>;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The particle layer, if the page has one.
pub fn query_layer(document: &web::Document) -> Option<web::HtmlElement> {
    document
        .query_selector(LAYER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Build the emitter config from the layer's `data-*` attributes, e.g.
/// `<div class="sparkle-layer" data-throttle-ms="16" data-ease="power3.out">`.
pub fn layer_config(layer: &web::HtmlElement) -> SparkleConfig {
    let data = layer.dataset();
    match SparkleConfig::default().with_overrides(|key| data.get(key)) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[sparkle] ignoring layer overrides: {}", e);
            SparkleConfig::default()
        }
    }
}

/// Particles are `div`s appended to the layer and positioned with a CSS
/// transform.
pub struct DomSurface {
    document: web::Document,
    layer: web::HtmlElement,
}

impl DomSurface {
    pub fn new(document: web::Document, layer: web::HtmlElement) -> Self {
        Self { document, layer }
    }
}

impl Surface for DomSurface {
    type Node = web::HtmlElement;

    fn spawn(&mut self, class: &str, glyph: &str) -> Result<Self::Node, SurfaceError> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| SurfaceError::Create(format!("{:?}", e)))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| SurfaceError::Create(format!("{:?}", e)))?;
        el.set_class_name(class);
        el.set_text_content(Some(glyph));
        self.layer
            .append_child(&el)
            .map_err(|e| SurfaceError::Attach(format!("{:?}", e)))?;
        Ok(el)
    }

    fn apply(&mut self, node: &Self::Node, props: &ParticleProps) {
        let css = node.style();
        _ = css.set_property("transform", &style::transform_css(props));
        _ = css.set_property("opacity", &style::opacity_css(props));
    }

    fn remove(&mut self, node: &Self::Node) {
        node.remove();
    }
}
