//! Token Store
//!
//! JWT pair persisted in browser localStorage under fixed keys. No expiry
//! metadata is kept and token contents are never inspected locally.

/// Storage key for the short-lived access token.
const ACCESS_KEY: &str = "access";

/// Storage key for the long-lived refresh token.
const REFRESH_KEY: &str = "refresh";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Store both tokens, overwriting any previous pair.
pub fn save(access: &str, refresh: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(ACCESS_KEY, access);
        let _ = storage.set_item(REFRESH_KEY, refresh);
    }
}

/// Replace only the access token, keeping the stored refresh token.
pub fn set_access(access: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(ACCESS_KEY, access);
    }
}

/// Stored access token, if any.
pub fn access() -> Option<String> {
    storage()?.get_item(ACCESS_KEY).ok()?
}

/// Stored refresh token, if any.
pub fn refresh() -> Option<String> {
    storage()?.get_item(REFRESH_KEY).ok()?
}

/// Remove both tokens.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(ACCESS_KEY);
        let _ = storage.remove_item(REFRESH_KEY);
    }
}

// These need a real browser localStorage; run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_and_read_round_trip() {
        clear();
        save("acc-1", "ref-1");
        assert_eq!(access().as_deref(), Some("acc-1"));
        assert_eq!(refresh().as_deref(), Some("ref-1"));
        clear();
    }

    #[wasm_bindgen_test]
    fn test_set_access_keeps_refresh() {
        clear();
        save("acc-1", "ref-1");
        set_access("acc-2");
        assert_eq!(access().as_deref(), Some("acc-2"));
        assert_eq!(refresh().as_deref(), Some("ref-1"));
        clear();
    }

    #[wasm_bindgen_test]
    fn test_clear_removes_both() {
        save("acc-1", "ref-1");
        clear();
        assert_eq!(access(), None);
        assert_eq!(refresh(), None);
    }

    #[wasm_bindgen_test]
    fn test_auth_headers_shape() {
        clear();
        assert!(crate::auth::auth_headers().is_empty());
        save("acc-1", "ref-1");
        let headers = crate::auth::auth_headers();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].0, "Authorization");
        assert_eq!(headers[0].1, "Bearer acc-1");
        clear();
    }
}
