use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{host::DesktopHostContext, persistence, reducer::DesktopAction};

pub(super) fn install_boot_hydration(host: DesktopHostContext, dispatch: Callback<DesktopAction>) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let flags = persistence::load_preferences(prefs.as_ref()).await;
            logging::log!(
                "desktop boot ({}): dark_mode={} sound={}",
                host.host_strategy_name(),
                flags.is_dark_mode,
                flags.is_sound_enabled
            );
            dispatch.call(DesktopAction::HydratePreferences {
                is_dark_mode: flags.is_dark_mode,
                is_sound_enabled: flags.is_sound_enabled,
            });
            dispatch.call(DesktopAction::ViewportResized {
                viewport: host.viewport_size(),
            });
        });
    });
}
