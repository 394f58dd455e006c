//! Shared web-sys glue used by the page initializers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement,
};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Collect a selector match into a Vec so callers can enumerate elements in
/// document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for index in 0..list.length() {
            if let Some(node) = list.item(index) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    elements.push(element);
                }
            }
        }
    }
    elements
}

/// One-shot callback with browser setTimeout semantics. Pending timers are
/// discarded with the page on navigation; there is no cancellation handle.
pub fn set_timeout(callback: impl FnOnce() + 'static, delay_ms: i32) {
    let Some(window) = window() else { return };
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        Closure::once_into_js(callback).as_ref().unchecked_ref(),
        delay_ms,
    );
}

/// Attach a listener that lives for the rest of the page view. The closure is
/// leaked on purpose; the page teardown reclaims it.
pub fn add_listener(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Current value of a form field. `None` for elements that are neither an
/// input nor a textarea.
pub fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        Some(textarea.value())
    } else {
        None
    }
}

pub fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
}
