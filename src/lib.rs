// Module declarations
pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Public API re-exports
pub use crate::core::counter::{content_counter_text, counter_color, field_len, title_counter_text};
pub use crate::core::draft::{is_create_page, Draft};
pub use crate::core::store::{KeyValueStore, MemoryStore};
pub use crate::core::validate::validate_post_form;
