//! Window helpers: `localStorage` token persistence and blocking alerts.

use ripdash_domain::session::AccessToken;

/// Key the dashboard token is stored under in `localStorage`.
const STORAGE_KEY: &str = "authToken";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored token. Empty or missing values mean no token.
pub fn load_token() -> Option<AccessToken> {
    local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
        .map(AccessToken::new)
}

/// Persist `token` for the dashboard page.
pub fn save_token(token: &AccessToken) {
    let saved = local_storage().is_some_and(|s| s.set_item(STORAGE_KEY, token.as_str()).is_ok());
    if !saved {
        leptos::logging::warn!("failed to write token to localStorage");
    }
}

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
