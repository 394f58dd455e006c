// export all modules
pub mod cards;
pub mod counter;
pub mod dom;
pub mod draft;
pub mod flash;
pub mod form;
pub mod page;
pub mod storage;

pub use storage::LocalStorage;

use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format_args!($($t)*).to_string().into()))
}

pub(crate) use console_log;

/// Module entry point. Runs once per page view; the module script loads after
/// the document is parsed, so the DOM is ready by the time this fires.
#[wasm_bindgen(start)]
pub fn main() {
    page::init_page();
    console_log!("{}", crate::core::messages::APP_LOADED);
}
