//! Desktop shell UI composition and interaction surfaces.

mod dock;
mod menubar;
mod spotlight;
mod window;

use leptos::*;

use self::{dock::Dock, menubar::MenuBar, spotlight::Spotlight, window::DesktopWindow};

use crate::{
    launcher::classify_global_shortcut,
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_mouse_event(ev: &web_sys::MouseEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn shell_theme_class(is_dark_mode: bool) -> &'static str {
    if is_dark_mode {
        "desktop-shell dark"
    } else {
        "desktop-shell light"
    }
}

#[component]
/// Renders the full desktop shell UI: menu bar, window stack, dock, and launcher overlay.
///
/// Must be mounted inside [`DesktopProvider`]. Global shortcuts and viewport tracking are
/// registered here and removed when the shell unmounts.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        let launcher_open = state.with_untracked(|desktop| desktop.launcher_open);
        if let Some(action) =
            classify_global_shortcut(&ev.code(), ev.meta_key(), ev.ctrl_key(), launcher_open)
        {
            ev.prevent_default();
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || shortcut_listener.remove());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.dispatch_action(DesktopAction::ViewportResized {
            viewport: runtime.host.get_value().viewport_size(),
        });
    });
    on_cleanup(move || resize_listener.remove());

    view! {
        <div
            id="desktop-shell-root"
            class=move || shell_theme_class(state.with(|desktop| desktop.is_dark_mode))
            data-mobile=move || state.with(|desktop| desktop.is_mobile).to_string()
        >
            <MenuBar />
            <WindowStack />
            <Dock />
            <Spotlight />
        </div>
    }
}

#[component]
/// Overlay layer holding every open, non-minimized window.
fn WindowStack() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let visible_ids = create_memo(move |_| {
        runtime.state.with(|desktop| {
            desktop
                .visible_windows()
                .into_iter()
                .map(|record| record.id.clone())
                .collect::<Vec<WindowId>>()
        })
    });

    view! {
        <main class="window-layer">
            <For each=move || visible_ids.get() key=|window_id| window_id.0.clone() let:window_id>
                <DesktopWindow window_id=window_id />
            </For>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_root_class_tracks_theme() {
        assert_eq!(shell_theme_class(true), "desktop-shell dark");
        assert_eq!(shell_theme_class(false), "desktop-shell light");
    }
}
