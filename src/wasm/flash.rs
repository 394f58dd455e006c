use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::core::timing::{FLASH_FADE_MS, FLASH_VISIBLE_MS};
use crate::wasm::dom;

const FADE_TRANSITION: &str = "opacity 0.5s ease-out";

/// Fade out and remove every flash message a few seconds after page load.
/// Each alert gets its own pair of timers; they run independently.
pub fn init(document: &Document) {
    for element in dom::query_all(document, ".alert") {
        if let Ok(alert) = element.dyn_into::<HtmlElement>() {
            schedule_dismiss(alert);
        }
    }
}

fn schedule_dismiss(alert: HtmlElement) {
    dom::set_timeout(
        move || {
            let style = alert.style();
            let _ = style.set_property("transition", FADE_TRANSITION);
            let _ = style.set_property("opacity", "0");
            dom::set_timeout(move || alert.remove(), FLASH_FADE_MS);
        },
        FLASH_VISIBLE_MS,
    );
}
