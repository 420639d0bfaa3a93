//! Durable credential storage
//!
//! One opaque bearer token in browser localStorage under a fixed key;
//! absence means unauthenticated.

use web_sys::window;

pub const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn load_token() -> Option<String> {
    local_storage()?
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                log::warn!("failed to persist session token");
            }
        }
        None => log::warn!("localStorage unavailable; session will not survive reload"),
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        storage.remove_item(TOKEN_KEY).ok();
    }
}
