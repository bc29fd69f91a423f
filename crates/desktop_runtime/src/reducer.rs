//! Reducer actions, side-effect intents, and transition logic for the desktop session.

use platform_host::SoundCue;

use crate::{
    model::{BoundsPatch, DesktopState, OpenWindowRequest, ViewportSize, WindowId, WindowRecord},
    window_manager::{cascade_rect, raise_window},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or reactivate the existing window with the same id.
    OpenWindow(OpenWindowRequest),
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window; the record stays in the session.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Flip the maximized flag of a window without touching its stored geometry.
    ToggleMaximize {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack.
    FocusWindow {
        /// Window to raise.
        window_id: WindowId,
    },
    /// Merge a partial geometry update into a window.
    UpdateBounds {
        /// Window to update.
        window_id: WindowId,
        /// Fields to overwrite.
        patch: BoundsPatch,
    },
    /// Flip dark/light mode.
    ToggleTheme,
    /// Flip sound cues on/off.
    ToggleSound,
    /// Open the launcher when closed, close it when open.
    ToggleLauncher,
    /// Close the launcher if open.
    CloseLauncher,
    /// Record a new viewport size and recompute the mobile flag.
    ViewportResized {
        /// New viewport size.
        viewport: ViewportSize,
    },
    /// Apply persisted preference flags loaded at boot.
    HydratePreferences {
        /// Stored dark-mode flag.
        is_dark_mode: bool,
        /// Stored sound flag.
        is_sound_enabled: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Play a UI sound cue. Only emitted while sound is enabled.
    PlaySound(SoundCue),
    /// Persist the theme flag.
    PersistTheme {
        /// Flag value to store.
        is_dark_mode: bool,
    },
    /// Persist the sound flag.
    PersistSound {
        /// Flag value to store.
        is_sound_enabled: bool,
    },
    /// Move keyboard focus into the launcher input once it has finished opening.
    FocusLauncherInput,
}

/// Applies a [`DesktopAction`] to the desktop session state and collects resulting side effects.
///
/// This function is the only place window records are mutated. Actions that name a window which
/// is not open (other than [`DesktopAction::OpenWindow`]) leave the state untouched and emit
/// nothing.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => {
            if let Some(window) = find_window_mut(state, &req.id) {
                window.minimized = false;
            } else {
                let open_count = state.windows.len();
                state.windows.push(WindowRecord {
                    id: req.id.clone(),
                    title: req.title,
                    content: req.content,
                    icon_id: req.icon_id,
                    rect: cascade_rect(open_count, state.viewport.width),
                    z_index: 0,
                    minimized: false,
                    maximized: false,
                });
            }
            raise_window(state, &req.id);
            push_cue(state, &mut effects, SoundCue::Open);
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() != before_len {
                push_cue(state, &mut effects, SoundCue::Close);
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.minimized = true;
                push_cue(state, &mut effects, SoundCue::Minimize);
            }
        }
        DesktopAction::ToggleMaximize { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.maximized = !window.maximized;
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            raise_window(state, &window_id);
        }
        DesktopAction::UpdateBounds { window_id, patch } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.rect = window.rect.merged(patch);
            }
        }
        DesktopAction::ToggleTheme => {
            state.is_dark_mode = !state.is_dark_mode;
            effects.push(RuntimeEffect::PersistTheme {
                is_dark_mode: state.is_dark_mode,
            });
        }
        DesktopAction::ToggleSound => {
            state.is_sound_enabled = !state.is_sound_enabled;
            effects.push(RuntimeEffect::PersistSound {
                is_sound_enabled: state.is_sound_enabled,
            });
        }
        DesktopAction::ToggleLauncher => {
            state.launcher_open = !state.launcher_open;
            if state.launcher_open {
                effects.push(RuntimeEffect::FocusLauncherInput);
            }
        }
        DesktopAction::CloseLauncher => {
            state.launcher_open = false;
        }
        DesktopAction::ViewportResized { viewport } => {
            state.viewport = viewport;
            state.is_mobile = viewport.is_mobile();
        }
        DesktopAction::HydratePreferences {
            is_dark_mode,
            is_sound_enabled,
        } => {
            state.is_dark_mode = is_dark_mode;
            state.is_sound_enabled = is_sound_enabled;
        }
    }
    effects
}

fn find_window_mut<'a>(
    state: &'a mut DesktopState,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

fn push_cue(state: &DesktopState, effects: &mut Vec<RuntimeEffect>, cue: SoundCue) {
    if state.is_sound_enabled {
        effects.push(RuntimeEffect::PlaySound(cue));
    }
}
