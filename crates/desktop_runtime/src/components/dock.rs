use leptos::*;

use super::use_desktop_runtime;
use crate::{apps, model::DesktopState};

/// Running-state marker rendered under a dock item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DockIndicator {
    Hidden,
    Running,
    Minimized,
}

impl DockIndicator {
    fn for_key(state: &DesktopState, key: &str) -> Self {
        match state.windows.iter().find(|w| w.id.as_str() == key) {
            None => Self::Hidden,
            Some(record) if record.minimized => Self::Minimized,
            Some(_) => Self::Running,
        }
    }

    fn class_name(self) -> &'static str {
        match self {
            Self::Hidden => "dock-indicator hidden",
            Self::Running => "dock-indicator running",
            Self::Minimized => "dock-indicator minimized",
        }
    }
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <nav class="dock" aria-label="Dock">
            {apps::app_catalog()
                .dock_apps()
                .map(|app| {
                    let key = app.key.clone();
                    let indicator_key = app.key.clone();
                    let indicator = move || {
                        state.with(|desktop| DockIndicator::for_key(desktop, &indicator_key))
                    };
                    view! {
                        <div class="dock-item">
                            <button
                                type="button"
                                class="dock-button"
                                title=app.dock_title.clone()
                                aria-label=format!("Open {}", app.dock_title)
                                on:click=move |_| runtime.open_app(&key)
                            >
                                <span class="dock-icon" data-icon=app.icon.clone() aria-hidden="true"></span>
                            </button>
                            <div class=move || indicator().class_name() aria-hidden="true"></div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
