//! Shared host-bundle models for browser and headless runtime composition.

use std::rc::Rc;

use crate::{
    MemoryPrefsStore, NoopPrefsStore, NoopSoundCuePlayer, PrefsStore, SoundCuePlayer,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Headless composition with no-op or in-memory adapters.
    Stub,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Stub => "stub",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the session core decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Durable key/value store for the theme and sound flags.
    pub prefs: Rc<dyn PrefsStore>,
    /// Sound cue player for window lifecycle feedback.
    pub sound: Rc<dyn SoundCuePlayer>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle from explicit services.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        sound: Rc<dyn SoundCuePlayer>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            prefs,
            sound,
            host_strategy,
        }
    }

    /// Bundle whose services accept every call and remember nothing.
    pub fn noop() -> Self {
        Self::new(
            Rc::new(NoopPrefsStore),
            Rc::new(NoopSoundCuePlayer),
            HostStrategy::Stub,
        )
    }

    /// Bundle backed by a shared in-memory prefs store and a silent player.
    pub fn in_memory(prefs: MemoryPrefsStore) -> Self {
        Self::new(
            Rc::new(prefs),
            Rc::new(NoopSoundCuePlayer),
            HostStrategy::Stub,
        )
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn host_strategy_tokens_are_stable() {
        assert_eq!(HostStrategy::Browser.as_str(), "browser");
        assert_eq!(HostStrategy::Stub.as_str(), "stub");
    }

    #[test]
    fn in_memory_bundle_writes_through_to_shared_store() {
        let prefs = MemoryPrefsStore::default();
        let services = HostServices::in_memory(prefs.clone());

        block_on(services.prefs.save_pref("theme", "dark")).expect("save");
        assert_eq!(prefs.get("theme").as_deref(), Some("dark"));
        assert_eq!(services.host_strategy, HostStrategy::Stub);
    }
}
