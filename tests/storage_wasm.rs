#![cfg(target_arch = "wasm32")]

// Smoke test for the localStorage adapter. Runs under wasm-pack test in a
// browser; the native test suite covers the rest through MemoryStore.

use keijiban_ui::wasm::LocalStorage;
use keijiban_ui::KeyValueStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    LocalStorage.set("draft_title", "テスト").unwrap();
    assert_eq!(
        LocalStorage.get("draft_title").unwrap().as_deref(),
        Some("テスト")
    );

    LocalStorage.remove("draft_title").unwrap();
    assert_eq!(LocalStorage.get("draft_title").unwrap(), None);
}
