//! Desktop-session core for the portfolio shell: window records, the session reducer, window
//! geometry, pointer gestures, the Spotlight launcher, and the Leptos components that render them.

pub mod apps;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod interaction;
pub mod launcher;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use host::DesktopHostContext;
pub use model::*;
pub use persistence::{load_preferences, save_sound, save_theme, PreferenceError, PreferenceFlags};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
