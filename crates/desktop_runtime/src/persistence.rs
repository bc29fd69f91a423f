//! Durable theme/sound flags: stored-value encoding and host-backed load/save.
//!
//! Only these two flags survive a reload. Each is stored as a bare string under its own key so
//! values written by earlier builds (`"dark"`/`"light"`, `"true"`/`"false"`) keep working.

use leptos::logging;
use platform_host::PrefsStore;
use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const SOUND_KEY: &str = "sound";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("failed to load preference `{key}`: {message}")]
    Load { key: &'static str, message: String },
    #[error("failed to save preference `{key}`: {message}")]
    Save { key: &'static str, message: String },
    #[error("unrecognized value `{value}` for preference `{key}`")]
    Unrecognized { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceFlags {
    pub is_dark_mode: bool,
    pub is_sound_enabled: bool,
}

impl Default for PreferenceFlags {
    fn default() -> Self {
        Self {
            is_dark_mode: true,
            is_sound_enabled: true,
        }
    }
}

pub fn encode_theme(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        "dark"
    } else {
        "light"
    }
}

pub fn encode_sound(is_sound_enabled: bool) -> &'static str {
    if is_sound_enabled {
        "true"
    } else {
        "false"
    }
}

/// Strictly parses a stored theme value.
///
/// # Errors
///
/// Returns [`PreferenceError::Unrecognized`] for anything other than `"dark"` or `"light"`.
pub fn parse_theme(raw: &str) -> Result<bool, PreferenceError> {
    match raw {
        "dark" => Ok(true),
        "light" => Ok(false),
        other => Err(PreferenceError::Unrecognized {
            key: THEME_KEY,
            value: other.to_string(),
        }),
    }
}

/// Strictly parses a stored sound value.
///
/// # Errors
///
/// Returns [`PreferenceError::Unrecognized`] for anything other than `"true"` or `"false"`.
pub fn parse_sound(raw: &str) -> Result<bool, PreferenceError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(PreferenceError::Unrecognized {
            key: SOUND_KEY,
            value: other.to_string(),
        }),
    }
}

/// Anything other than `"light"` reads as dark.
pub fn decode_theme(raw: Option<&str>) -> bool {
    raw != Some("light")
}

/// Anything other than `"false"` reads as enabled.
pub fn decode_sound(raw: Option<&str>) -> bool {
    raw != Some("false")
}

async fn load_raw(
    prefs: &dyn PrefsStore,
    key: &'static str,
) -> Result<Option<String>, PreferenceError> {
    prefs
        .load_pref(key)
        .await
        .map_err(|message| PreferenceError::Load { key, message })
}

async fn save_raw(
    prefs: &dyn PrefsStore,
    key: &'static str,
    raw_value: &str,
) -> Result<(), PreferenceError> {
    prefs
        .save_pref(key, raw_value)
        .await
        .map_err(|message| PreferenceError::Save { key, message })
}

/// Loads both flags, falling back to the defaults on missing, unreadable, or unexpected values.
pub async fn load_preferences(prefs: &dyn PrefsStore) -> PreferenceFlags {
    let theme = match load_raw(prefs, THEME_KEY).await {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("{err}");
            None
        }
    };
    let sound = match load_raw(prefs, SOUND_KEY).await {
        Ok(raw) => raw,
        Err(err) => {
            logging::warn!("{err}");
            None
        }
    };

    if let Some(Err(err)) = theme.as_deref().map(parse_theme) {
        logging::warn!("{err}");
    }
    if let Some(Err(err)) = sound.as_deref().map(parse_sound) {
        logging::warn!("{err}");
    }

    PreferenceFlags {
        is_dark_mode: decode_theme(theme.as_deref()),
        is_sound_enabled: decode_sound(sound.as_deref()),
    }
}

/// Persists the theme flag.
///
/// # Errors
///
/// Returns [`PreferenceError::Save`] when the host store rejects the write.
pub async fn save_theme(prefs: &dyn PrefsStore, is_dark_mode: bool) -> Result<(), PreferenceError> {
    save_raw(prefs, THEME_KEY, encode_theme(is_dark_mode)).await
}

/// Persists the sound flag.
///
/// # Errors
///
/// Returns [`PreferenceError::Save`] when the host store rejects the write.
pub async fn save_sound(
    prefs: &dyn PrefsStore,
    is_sound_enabled: bool,
) -> Result<(), PreferenceError> {
    save_raw(prefs, SOUND_KEY, encode_sound(is_sound_enabled)).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryPrefsStore, PrefsStoreFuture};
    use pretty_assertions::assert_eq;

    use super::*;

    struct FailingPrefsStore;

    impl PrefsStore for FailingPrefsStore {
        fn load_pref<'a>(
            &'a self,
            _key: &'a str,
        ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
            Box::pin(async { Err("storage disabled".to_string()) })
        }

        fn save_pref<'a>(
            &'a self,
            _key: &'a str,
            _raw_value: &'a str,
        ) -> PrefsStoreFuture<'a, Result<(), String>> {
            Box::pin(async { Err("quota exceeded".to_string()) })
        }
    }

    #[test]
    fn missing_values_default_to_dark_with_sound() {
        let store = MemoryPrefsStore::default();
        assert_eq!(block_on(load_preferences(&store)), PreferenceFlags::default());
    }

    #[test]
    fn only_exact_light_and_false_turn_flags_off() {
        assert!(!decode_theme(Some("light")));
        assert!(decode_theme(Some("dark")));
        assert!(decode_theme(Some("Light")));
        assert!(decode_theme(Some("")));
        assert!(!decode_sound(Some("false")));
        assert!(decode_sound(Some("0")));
        assert!(decode_sound(None));

        let store = MemoryPrefsStore::with_entries([("theme", "light"), ("sound", "false")]);
        assert_eq!(
            block_on(load_preferences(&store)),
            PreferenceFlags {
                is_dark_mode: false,
                is_sound_enabled: false,
            }
        );
    }

    #[test]
    fn unexpected_values_fall_back_but_parse_strictly() {
        let store = MemoryPrefsStore::with_entries([("theme", "solarized"), ("sound", "off")]);
        assert_eq!(block_on(load_preferences(&store)), PreferenceFlags::default());
        assert_eq!(
            parse_theme("solarized"),
            Err(PreferenceError::Unrecognized {
                key: THEME_KEY,
                value: "solarized".to_string(),
            })
        );
        assert_eq!(parse_sound("false"), Ok(false));
    }

    #[test]
    fn saves_write_bare_strings() {
        let store = MemoryPrefsStore::default();
        block_on(save_theme(&store, false)).expect("save theme");
        block_on(save_sound(&store, true)).expect("save sound");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(store.get(SOUND_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn host_failures_surface_as_typed_errors_and_load_falls_back() {
        assert_eq!(
            block_on(load_preferences(&FailingPrefsStore)),
            PreferenceFlags::default()
        );
        assert_eq!(
            block_on(save_sound(&FailingPrefsStore, false)),
            Err(PreferenceError::Save {
                key: SOUND_KEY,
                message: "quota exceeded".to_string(),
            })
        );
    }
}
