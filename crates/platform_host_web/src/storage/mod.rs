//! Browser storage adapters.

/// `WebPrefsStore`, which keeps the theme and sound flags across reloads.
pub mod local_prefs;
