use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::core::timing::card_delay_ms;
use crate::wasm::dom;

const ENTER_TRANSITION: &str = "opacity 0.5s ease-out, transform 0.5s ease-out";

/// Staggered fade-in for the post list: the card at position `index` starts
/// its 500 ms entrance after `index * 100` ms.
pub fn init(document: &Document) {
    for (index, element) in dom::query_all(document, ".post-card").into_iter().enumerate() {
        let Ok(card) = element.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let style = card.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "translateY(20px)");

        dom::set_timeout(
            move || {
                let style = card.style();
                let _ = style.set_property("transition", ENTER_TRANSITION);
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("transform", "translateY(0)");
            },
            card_delay_ms(index),
        );
    }
}
