//! Timer schedule for the page-load effects.

/// How long a flash message stays fully visible before fading.
pub const FLASH_VISIBLE_MS: i32 = 3000;
/// Length of the flash message opacity fade.
pub const FLASH_FADE_MS: i32 = 500;

/// Delay between consecutive post cards starting their entrance.
pub const CARD_STAGGER_MS: i32 = 100;
/// Length of a single card's entrance transition.
pub const CARD_FADE_MS: i32 = 500;

/// Entrance delay for the card at `index`, zero-based in document order.
pub fn card_delay_ms(index: usize) -> i32 {
    index as i32 * CARD_STAGGER_MS
}
