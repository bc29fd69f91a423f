use leptos::{logging, spawn_local};

use crate::{host::DesktopHostContext, persistence};

pub(super) fn persist_theme(host: DesktopHostContext, is_dark_mode: bool) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::save_theme(prefs.as_ref(), is_dark_mode).await {
            logging::warn!("persist theme failed: {err}");
        }
    });
}

pub(super) fn persist_sound(host: DesktopHostContext, is_sound_enabled: bool) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::save_sound(prefs.as_ref(), is_sound_enabled).await {
            logging::warn!("persist sound failed: {err}");
        }
    });
}
