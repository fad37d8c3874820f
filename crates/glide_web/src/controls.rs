//! DOM dot list for navigation controls.

use crate::dom::toggle_class;
use crate::error::{js_message, WebError};
use crate::style::{dot_href, dot_label, DOT_LIST_ATTR, DOT_LIST_VALUE};
use glide_core::DotList;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Dot elements mirroring the active panel.
#[derive(Debug, Clone)]
pub struct DomDots {
    list: Element,
    items: Vec<Element>,
    active_class: String,
    generated: bool,
}

impl DomDots {
    /// Use the children of an existing list as dots.
    pub fn from_list(list: Element, active_class: &str) -> Self {
        let children = list.children();
        let items = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        Self {
            list,
            items,
            active_class: active_class.to_string(),
            generated: false,
        }
    }

    /// Build `<ul data-control="slide">` with one `<li><a href="#slideN">N</a></li>`
    /// per panel and append it to `parent`.
    pub fn generate(
        document: &Document,
        parent: &Element,
        count: usize,
        active_class: &str,
    ) -> Result<Self, WebError> {
        let dom = |err: JsValue| WebError::Dom(js_message(&err));

        let list = document.create_element("ul").map_err(dom)?;
        list.set_attribute(DOT_LIST_ATTR, DOT_LIST_VALUE).map_err(dom)?;

        let mut items = Vec::with_capacity(count);
        for index in 0..count {
            let item = document.create_element("li").map_err(dom)?;
            let anchor = document.create_element("a").map_err(dom)?;
            anchor.set_attribute("href", &dot_href(index)).map_err(dom)?;
            anchor.set_text_content(Some(&dot_label(index)));
            item.append_child(&anchor).map_err(dom)?;
            list.append_child(&item).map_err(dom)?;
            items.push(item);
        }
        parent.append_child(&list).map_err(dom)?;

        Ok(Self {
            list,
            items,
            active_class: active_class.to_string(),
            generated: true,
        })
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    /// Remove the list from the document if it was generated here.
    pub fn remove_generated(&self) {
        if self.generated {
            self.list.remove();
        }
    }
}

impl DotList for DomDots {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(item) = self.items.get(index) {
            toggle_class(item, &self.active_class, active);
        }
    }
}
