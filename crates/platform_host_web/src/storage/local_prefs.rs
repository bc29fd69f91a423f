//! Theme and sound flags kept in `window.localStorage`.
//!
//! Each flag is one bare string under its own key (`theme` -> `"dark"`/`"light"`, `sound` ->
//! `"true"`/`"false"`), so values written by earlier builds stay readable. Outside wasm the store
//! reads nothing and accepts every write.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Desktop preference flags persisted in the browser's local storage.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl WebPrefsStore {
    /// Reads the stored flag for `key`. Missing keys and blocked storage both read as `None`.
    pub fn read_flag(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Writes `value` as the flag for `key`.
    ///
    /// # Errors
    ///
    /// Fails when storage is blocked (private browsing, sandboxed frames) or the quota is full.
    pub fn write_flag(self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .ok_or_else(|| "localStorage unavailable".to_string())?
                .set_item(key, value)
                .map_err(|e| format!("cannot store `{key}`: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.read_flag(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.write_flag(key, raw_value) })
    }
}
