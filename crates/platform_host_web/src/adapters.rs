use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, NoopPrefsStore, NoopSoundCuePlayer, PrefsStore, PrefsStoreFuture,
    SoundCue, SoundCuePlayer,
};

use crate::{WebPrefsStore, WebSoundCuePlayer};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone, Copy)]
pub enum PrefsStoreAdapter {
    /// Browser `localStorage` preferences.
    Browser(WebPrefsStore),
    /// No-op fallback for stubbed builds.
    Stub(NoopPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Stub(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_value: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_value),
            Self::Stub(store) => store.save_pref(key, raw_value),
        }
    }
}

/// Adapter enum that erases the concrete audio backend behind [`SoundCuePlayer`].
#[derive(Debug)]
pub enum SoundCuePlayerAdapter {
    /// Web Audio synthesized cues.
    Browser(WebSoundCuePlayer),
    /// Silent fallback for stubbed builds.
    Stub(NoopSoundCuePlayer),
}

impl SoundCuePlayer for SoundCuePlayerAdapter {
    fn play(&self, cue: SoundCue) {
        match self {
            Self::Browser(player) => player.play(cue),
            Self::Stub(player) => player.play(cue),
        }
    }
}

/// Builds the preference adapter for the compile-time selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Stub => PrefsStoreAdapter::Stub(NoopPrefsStore),
    }
}

/// Builds the sound cue adapter for the compile-time selected host strategy.
pub fn sound_cue_player() -> SoundCuePlayerAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => SoundCuePlayerAdapter::Browser(WebSoundCuePlayer::default()),
        HostStrategy::Stub => SoundCuePlayerAdapter::Stub(NoopSoundCuePlayer),
    }
}

/// Builds the full host service bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices::new(
        Rc::new(prefs_store()),
        Rc::new(sound_cue_player()),
        selected_host_strategy(),
    )
}
