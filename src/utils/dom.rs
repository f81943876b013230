//! Thin wrappers over the browser DOM.
//!
//! Every helper degrades to a no-op (or `None`) when the document or a
//! queried element is missing, so callers can address page structure
//! without sprinkling unwraps through the engine.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`, if the document has one.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Like [`query`] but cast to `HtmlElement` for style access.
pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

/// All elements matching `selector`, skipping any non-HTML nodes.
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Sets one inline style property, ignoring CSSOM errors.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Clears one inline style property.
pub fn clear_style(el: &HtmlElement, property: &str) {
    let _ = el.style().set_property(property, "");
}

/// Uniform random draw in `[0, 1)`.
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

/// Appends a `<style>` block to the document head exactly once per id.
pub fn inject_style_once(id: &str, css: &str) {
    let Some(doc) = document() else {
        return;
    };
    let existing = doc
        .query_selector(&format!("style[data-style-id=\"{id}\"]"))
        .ok()
        .flatten();
    if existing.is_some() {
        return;
    }
    let Ok(style) = doc.create_element("style") else {
        return;
    };
    let _ = style.set_attribute("data-style-id", id);
    style.set_text_content(Some(css));
    if let Some(head) = doc.head() {
        let _ = head.append_child(&style);
    }
}

/// An attached DOM event listener that detaches itself on drop.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerHandle {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
