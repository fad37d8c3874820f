//! DOM-backed carousel surface.

use crate::error::WebError;
use crate::style::{transition_value, translate3d, TRACK_TOUCH_ACTION};
use glide_core::{CarouselConfig, PanelGeometry, Surface};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Wrapper and track elements of one carousel.
#[derive(Debug, Clone)]
pub struct DomSurface {
    wrapper: HtmlElement,
    track: HtmlElement,
    active_class: String,
    transition: String,
}

impl DomSurface {
    pub fn new(wrapper: HtmlElement, track: HtmlElement, config: &CarouselConfig) -> Self {
        if track
            .style()
            .set_property("touch-action", TRACK_TOUCH_ACTION)
            .is_err()
        {
            tracing::warn!("touch-action not set on track");
        }
        Self {
            wrapper,
            track,
            active_class: config.active_class.clone(),
            transition: config.transition.clone(),
        }
    }

    /// Look both elements up by selector.
    pub fn query(
        document: &Document,
        wrapper_selector: &str,
        track_selector: &str,
        config: &CarouselConfig,
    ) -> Result<Self, WebError> {
        let wrapper = query_html(document, wrapper_selector)?;
        let track = query_html(document, track_selector)?;
        Ok(Self::new(wrapper, track, config))
    }

    pub fn wrapper(&self) -> &HtmlElement {
        &self.wrapper
    }

    pub fn track(&self) -> &HtmlElement {
        &self.track
    }
}

impl Surface for DomSurface {
    type Panel = HtmlElement;

    fn wrapper_width(&self) -> f64 {
        f64::from(self.wrapper.offset_width())
    }

    fn panels(&self) -> Vec<HtmlElement> {
        let children = self.track.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn panel_geometry(&self, panel: &HtmlElement) -> PanelGeometry {
        PanelGeometry::new(
            f64::from(panel.offset_width()),
            f64::from(panel.offset_left()),
        )
    }

    fn set_track_offset(&mut self, offset: f64) {
        let _ = self
            .track
            .style()
            .set_property("transform", &translate3d(offset));
    }

    fn set_transition(&mut self, enabled: bool) {
        let _ = self
            .track
            .style()
            .set_property("transition", transition_value(enabled, &self.transition));
    }

    fn set_panel_active(&mut self, panel: &HtmlElement, active: bool) {
        toggle_class(panel, &self.active_class, active);
    }
}

/// Add or remove `class` on `element`.
pub(crate) fn toggle_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// First element matching `selector`.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Element, WebError> {
    document
        .query_selector(selector)
        .map_err(|err| WebError::InvalidSelector {
            selector: selector.to_string(),
            message: crate::error::js_message(&err),
        })?
        .ok_or_else(|| WebError::NotFound(selector.to_string()))
}

/// First HTML element matching `selector`.
pub(crate) fn query_html(document: &Document, selector: &str) -> Result<HtmlElement, WebError> {
    query(document, selector)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::NotHtmlElement(selector.to_string()))
}
