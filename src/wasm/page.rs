use web_sys::window;

use crate::wasm::{cards, counter, dom, draft, flash, form};

/// Run every page behavior once. Initializers are independent: each one
/// queries for its own elements and no-ops when they are missing, so the
/// order here carries no meaning.
pub fn init_page() {
    let Some(document) = dom::document() else {
        return;
    };

    scroll_reset();
    flash::init(&document);
    form::init(&document);
    form::init_submit_shortcut(&document);
    counter::init(&document);
    cards::init(&document);
    draft::init(&document);
}

/// Jump the viewport back to the document origin on load.
fn scroll_reset() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
