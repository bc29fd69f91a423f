#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::model::{ViewportSize, FALLBACK_VIEWPORT};
#[cfg(target_arch = "wasm32")]
use crate::launcher::{LAUNCHER_FOCUS_DELAY, LAUNCHER_INPUT_DOM_ID};

/// Focuses the launcher search field after the open transition has started.
pub(super) fn focus_launcher_input() {
    #[cfg(target_arch = "wasm32")]
    leptos::set_timeout(
        || {
            let Some(element) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(LAUNCHER_INPUT_DOM_ID))
            else {
                return;
            };
            if let Ok(input) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = input.focus();
            }
        },
        LAUNCHER_FOCUS_DELAY,
    );
}

pub(super) fn viewport_size() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_VIEWPORT.height);

            return ViewportSize { width, height };
        }
    }

    FALLBACK_VIEWPORT
}
