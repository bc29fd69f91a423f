//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer stays pure; everything that touches storage, audio, timers, or the DOM is routed
//! through [`DesktopHostContext`] so the injected [`HostServices`] bundle decides what actually
//! happens.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use leptos::Callback;
use platform_host::{HostServices, PrefsStore};

use crate::{
    model::ViewportSize,
    reducer::{DesktopAction, RuntimeEffect},
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    /// Wraps an injected host service bundle.
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Installs boot hydration for the desktop provider.
    ///
    /// Stored preference flags are loaded asynchronously and applied through
    /// [`DesktopAction::HydratePreferences`]; the measured viewport is applied right after.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PlaySound(cue) => self.services.sound.play(cue),
            RuntimeEffect::PersistTheme { is_dark_mode } => {
                persistence_effects::persist_theme(self.clone(), is_dark_mode)
            }
            RuntimeEffect::PersistSound { is_sound_enabled } => {
                persistence_effects::persist_sound(self.clone(), is_sound_enabled)
            }
            RuntimeEffect::FocusLauncherInput => host_ui::focus_launcher_input(),
        }
    }

    /// Returns the current browser viewport, or the fallback size outside a browser.
    pub fn viewport_size(&self) -> ViewportSize {
        host_ui::viewport_size()
    }
}

impl std::fmt::Debug for DesktopHostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopHostContext")
            .field("host_strategy", &self.host_strategy_name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use platform_host::{HostStrategy, MemoryPrefsStore, RecordingSoundCuePlayer, SoundCue};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn play_sound_effect_reaches_the_injected_player() {
        let player = Rc::new(RecordingSoundCuePlayer::default());
        let host = DesktopHostContext::new(HostServices::new(
            Rc::new(MemoryPrefsStore::default()),
            player.clone(),
            HostStrategy::Stub,
        ));

        host.run_runtime_effect(RuntimeEffect::PlaySound(SoundCue::Open));
        host.run_runtime_effect(RuntimeEffect::PlaySound(SoundCue::Minimize));

        assert_eq!(player.played(), vec![SoundCue::Open, SoundCue::Minimize]);
        assert_eq!(host.host_strategy_name(), "stub");
    }

    #[test]
    fn viewport_falls_back_outside_the_browser() {
        let host = DesktopHostContext::new(HostServices::noop());
        assert_eq!(host.viewport_size(), crate::model::FALLBACK_VIEWPORT);
    }
}
