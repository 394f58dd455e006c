use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::core::counter::{
    content_counter_text, counter_color, field_len, parse_max_length, title_counter_text,
};
use crate::wasm::dom;

const COUNTER_CLASS: &str = "char-counter";
const COUNTER_STYLE: &str =
    "text-align: right; color: #666; font-size: 0.85rem; margin-top: 0.25rem;";

/// Inject live character counters next to the title and content fields.
/// Each counter is created at most once per page load and only when its
/// target field exists.
pub fn init(document: &Document) {
    if let Ok(Some(title)) = document.query_selector("#title") {
        init_title_counter(document, title);
    }
    if let Ok(Some(content)) = document.query_selector("#content") {
        init_content_counter(document, content);
    }
}

fn init_title_counter(document: &Document, field: Element) {
    let Some(counter) = make_counter(document, &field) else {
        return;
    };
    let max = parse_max_length(field.get_attribute("maxlength").as_deref());

    let value_source = field.clone();
    let update = move || {
        let len = current_len(&value_source);
        counter.set_text_content(Some(&title_counter_text(len, max)));
        let _ = counter.style().set_property("color", counter_color(len, max));
    };

    update();
    dom::add_listener(field.as_ref(), "input", move |_| update());
}

fn init_content_counter(document: &Document, field: Element) {
    let Some(counter) = make_counter(document, &field) else {
        return;
    };

    let value_source = field.clone();
    let update = move || {
        let len = current_len(&value_source);
        counter.set_text_content(Some(&content_counter_text(len)));
    };

    update();
    dom::add_listener(field.as_ref(), "input", move |_| update());
}

/// Sibling div appended after the field, styled inline like the rest of the
/// page chrome.
fn make_counter(document: &Document, field: &Element) -> Option<HtmlElement> {
    let parent = field.parent_node()?;
    let counter = document.create_element("div").ok()?;
    counter.set_class_name(COUNTER_CLASS);
    let _ = counter.set_attribute("style", COUNTER_STYLE);
    parent.append_child(&counter).ok()?;
    counter.dyn_into::<HtmlElement>().ok()
}

fn current_len(field: &Element) -> usize {
    dom::field_value(field).map(|v| field_len(&v)).unwrap_or(0)
}
