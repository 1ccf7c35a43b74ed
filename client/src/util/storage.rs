//! Durable tab storage for the access token.
//!
//! A single `ACCESS_TOKEN` key mirrors the in-memory session token so that
//! outside observers (the e2e harness, browser devtools) can inspect the
//! authenticated state. Absence of the key is equivalent to "no session".
//! Requires a browser environment; natively these are no-ops.

/// Storage key holding the current session token.
pub const ACCESS_TOKEN_KEY: &str = "ACCESS_TOKEN";

/// Persist the token. Quota or privacy-mode failures are ignored; the
/// in-memory session remains authoritative.
pub fn write_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token. Removing an absent key is a no-op.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            }
        }
    }
}

/// Current wall-clock time in milliseconds since the epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
