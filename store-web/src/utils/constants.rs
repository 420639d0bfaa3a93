//! Application constants

/// Backend base URL. Override at build time with `STORE_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("STORE_API_URL").unwrap_or("http://127.0.0.1:3333")
}

/// Stripe publishable key. Override at build time with
/// `STORE_STRIPE_PUBLISHABLE_KEY`.
pub fn stripe_publishable_key() -> &'static str {
    option_env!("STORE_STRIPE_PUBLISHABLE_KEY").unwrap_or("pk_test_firmware_store_dev")
}

/// Currency code sent with one-off payment intents.
pub const CURRENCY: &str = "brl";

/// DOM id the card-entry element mounts into.
pub const CARD_MOUNT_ID: &str = "card-element";

// UI constants
pub const TOAST_DISMISS_MS: u32 = 4000;
