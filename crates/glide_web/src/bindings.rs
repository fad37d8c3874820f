//! JavaScript-facing API.
//!
//! ```js
//! import init, { GlideSlideshow } from "./glide_web.js";
//! await init();
//! const slide = new GlideSlideshow(".slide-wrapper", ".slide");
//! slide.addArrows(".prev", ".next");
//! slide.addDots();
//! ```

use crate::slideshow::Slideshow;
use crate::WebError;
use glide_core::{CarouselConfig, SubscriptionId};
use wasm_bindgen::prelude::*;

fn to_js(err: WebError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct GlideSlideshow {
    inner: Slideshow,
    /// Indexed by the handle `onChange` returns.
    subscriptions: Vec<Option<SubscriptionId>>,
}

impl GlideSlideshow {
    fn wrap(inner: Slideshow) -> Self {
        Self {
            inner,
            subscriptions: Vec::new(),
        }
    }
}

#[wasm_bindgen]
impl GlideSlideshow {
    /// Mount with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new(wrapper: &str, track: &str) -> Result<GlideSlideshow, JsValue> {
        let inner = Slideshow::mount(wrapper, track, CarouselConfig::default()).map_err(to_js)?;
        Ok(Self::wrap(inner))
    }

    /// Mount with a JSON config, e.g. `{"commit_threshold": 80}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(wrapper: &str, track: &str, config: &str) -> Result<GlideSlideshow, JsValue> {
        let config = CarouselConfig::from_json(config).map_err(|e| to_js(e.into()))?;
        let inner = Slideshow::mount(wrapper, track, config).map_err(to_js)?;
        Ok(Self::wrap(inner))
    }

    #[wasm_bindgen(js_name = addArrows)]
    pub fn add_arrows(&mut self, prev: &str, next: &str) -> Result<(), JsValue> {
        self.inner.add_arrows(prev, next).map_err(to_js)
    }

    #[wasm_bindgen(js_name = addDots)]
    pub fn add_dots(&mut self, custom: Option<String>) -> Result<(), JsValue> {
        self.inner.add_dots(custom.as_deref()).map_err(to_js)
    }

    pub fn next(&self) {
        self.inner.advance();
    }

    pub fn prev(&self) {
        self.inner.retreat();
    }

    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&self, index: usize) {
        self.inner.go_to(index);
    }

    /// Active panel index, or `undefined` while busy.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> Option<usize> {
        self.inner.index().map(|state| state.active)
    }

    #[wasm_bindgen(getter, js_name = panelCount)]
    pub fn panel_count(&self) -> usize {
        self.inner.panel_count()
    }

    /// Call `callback(activeIndex)` after every committed navigation.
    /// Returns a handle for `offChange`, or `undefined` once destroyed.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: js_sys::Function) -> Option<u32> {
        let id = self.inner.on_change(move |state| {
            let _ = callback.call1(&JsValue::NULL, &JsValue::from(state.active as u32));
        })?;
        let handle = u32::try_from(self.subscriptions.len()).ok()?;
        self.subscriptions.push(Some(id));
        Some(handle)
    }

    /// Stop a callback registered with `onChange`. False for unknown or
    /// already removed handles.
    #[wasm_bindgen(js_name = offChange)]
    pub fn off_change(&mut self, handle: u32) -> bool {
        let Some(slot) = self.subscriptions.get_mut(handle as usize) else {
            return false;
        };
        match slot.take() {
            Some(id) => self.inner.off_change(id),
            None => false,
        }
    }

    /// Remove every listener and stop the carousel.
    pub fn destroy(&mut self) {
        self.subscriptions.clear();
        self.inner.teardown();
    }
}
