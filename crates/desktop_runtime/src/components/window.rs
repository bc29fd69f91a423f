use desktop_app_contract::{AppHost, AppMountContext};
use leptos::*;
use leptos::leptos_dom::helpers::WindowListenerHandle;

use super::{pointer_from_mouse_event, stop_mouse_event, use_desktop_runtime};
use crate::{
    interaction::{GestureEnd, GestureTracker, GestureUpdate},
    model::{ResizeEdge, WindowId, WindowRect, FULLSCREEN_Z_INDEX},
    reducer::DesktopAction,
};

/// Mouse listeners installed for the lifetime of one gesture.
///
/// Dropping the guard removes both listeners and releases the document cursor/selection lock.
struct PointerListeners {
    handles: Vec<WindowListenerHandle>,
}

impl PointerListeners {
    fn install(
        cursor: &'static str,
        on_move: impl Fn(web_sys::MouseEvent) + 'static,
        on_release: impl Fn(web_sys::MouseEvent) + 'static,
    ) -> Self {
        set_document_lock(Some(cursor));
        Self {
            handles: vec![
                window_event_listener(ev::mousemove, on_move),
                window_event_listener(ev::mouseup, on_release),
            ],
        }
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
        set_document_lock(None);
    }
}

fn set_document_lock(cursor: Option<&str>) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let style = body.style();
        match cursor {
            Some(cursor) => {
                let _ = style.set_property("cursor", cursor);
                let _ = style.set_property("user-select", "none");
            }
            None => {
                let _ = style.remove_property("cursor");
                let _ = style.remove_property("user-select");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = cursor;
}

fn frame_style(rect: WindowRect, z_index: u32, fullscreen: bool, offset: (i32, i32)) -> String {
    if fullscreen {
        return format!("left:0;top:0;width:100%;height:100%;z-index:{FULLSCREEN_Z_INDEX};");
    }
    let (dx, dy) = offset;
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};transform:translate({}px, {}px);",
        rect.x, rect.y, rect.w, rect.h, z_index, dx, dy
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let id = store_value(window_id);

    let record = Signal::derive(move || {
        id.with_value(|id| state.with(|desktop| desktop.window(id).cloned()))
    });
    let fullscreen = Signal::derive(move || {
        id.with_value(|id| {
            state.with(|desktop| {
                desktop
                    .window(id)
                    .is_some_and(|w| w.renders_fullscreen(desktop.is_mobile))
            })
        })
    });

    let tracker = store_value(GestureTracker::<PointerListeners>::new());
    let drag_offset = create_rw_signal((0, 0));

    let dispatch_bounds = move |patch| {
        runtime.dispatch_action(DesktopAction::UpdateBounds {
            window_id: id.get_value(),
            patch,
        });
    };
    let on_move = move |ev: web_sys::MouseEvent| {
        let update = tracker
            .try_update_value(|tracker| tracker.pointer_moved(pointer_from_mouse_event(&ev)))
            .unwrap_or(GestureUpdate::Ignored);
        match update {
            GestureUpdate::Ignored => {}
            GestureUpdate::DragPreview { dx, dy } => drag_offset.set((dx, dy)),
            GestureUpdate::Resize(patch) => dispatch_bounds(patch),
        }
    };
    let on_release = move |_: web_sys::MouseEvent| {
        let end = tracker
            .try_update_value(|tracker| tracker.pointer_released())
            .unwrap_or(GestureEnd::Ignored);
        drag_offset.set((0, 0));
        if let GestureEnd::Moved(patch) = end {
            dispatch_bounds(patch);
        }
    };
    on_cleanup(move || {
        tracker.try_update_value(|tracker| tracker.cancel());
    });

    let focus = move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow {
            window_id: id.get_value(),
        });
    };
    let begin_drag = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(win) = record.get_untracked() else {
            return;
        };
        let pointer = pointer_from_mouse_event(&ev);
        let started = tracker
            .try_update_value(|tracker| {
                tracker.begin_drag(fullscreen.get_untracked(), win.rect, pointer, || {
                    PointerListeners::install("grabbing", on_move, on_release)
                })
            })
            .unwrap_or(false);
        if started {
            ev.prevent_default();
        }
    };
    let begin_resize = move |edge: ResizeEdge, ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(win) = record.get_untracked() else {
            return;
        };
        let pointer = pointer_from_mouse_event(&ev);
        let started = tracker
            .try_update_value(|tracker| {
                tracker.begin_resize(fullscreen.get_untracked(), win.rect, edge, pointer, || {
                    PointerListeners::install(edge.cursor(), on_move, on_release)
                })
            })
            .unwrap_or(false);
        if started {
            stop_mouse_event(&ev);
        }
    };

    let minimize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: id.get_value(),
        });
    };
    let toggle_maximize = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: id.get_value(),
        });
    };
    let close = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: id.get_value(),
        });
    };

    let host = AppHost::new(
        Callback::new(move |()| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: id.get_value(),
            });
        }),
        Callback::new(move |key: String| runtime.open_app(&key)),
    );
    let is_dark_mode = Signal::derive(move || state.with(|desktop| desktop.is_dark_mode));
    let contents = record.get_untracked().map(|win| {
        win.content.mount(AppMountContext {
            window_key: win.id.0.clone(),
            is_dark_mode,
            host,
        })
    });

    let title = move || record.with(|win| win.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let icon = move || record.with(|win| win.as_ref().and_then(|w| w.icon_id.clone()));
    let style = move || {
        record.with(|win| {
            win.as_ref()
                .map(|w| {
                    frame_style(
                        w.rect,
                        w.z_index,
                        fullscreen.get(),
                        drag_offset.get(),
                    )
                })
                .unwrap_or_default()
        })
    };
    let is_maximized = move || record.with(|win| win.as_ref().is_some_and(|w| w.maximized));

    view! {
        <section
            class="desktop-window"
            class:fullscreen=move || fullscreen.get()
            data-window-id=move || id.get_value().0
            style=style
            role="dialog"
            aria-label=title
            on:mousedown=focus
        >
            <header class="titlebar" on:mousedown=begin_drag on:dblclick=toggle_maximize>
                <div class="titlebar-controls">
                    <button
                        type="button"
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=close
                    />
                    <button
                        type="button"
                        class="titlebar-button minimize"
                        aria-label="Minimize window"
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=minimize
                    />
                    <button
                        type="button"
                        class="titlebar-button maximize"
                        aria-label=move || {
                            if is_maximized() { "Restore window" } else { "Maximize window" }
                        }
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=toggle_maximize
                    />
                </div>
                <div class="titlebar-title">
                    <span class="titlebar-icon" data-icon=icon aria-hidden="true"></span>
                    <span>{title}</span>
                </div>
            </header>
            <div class="window-body">{contents}</div>
            <Show when=move || !fullscreen.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| {
                        view! {
                            <div
                                class=format!("window-resize-handle {}", edge.token())
                                style=format!("cursor:{};", edge.cursor())
                                aria-hidden="true"
                                on:mousedown=move |ev| begin_resize(edge, ev)
                            />
                        }
                    })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn windowed_frame_applies_geometry_and_drag_preview() {
        let rect = WindowRect {
            x: 112,
            y: 100,
            w: 800,
            h: 600,
        };
        assert_eq!(
            frame_style(rect, 12, false, (15, -5)),
            "left:112px;top:100px;width:800px;height:600px;z-index:12;transform:translate(15px, -5px);"
        );
    }

    #[test]
    fn fullscreen_frame_ignores_geometry_and_offset() {
        let rect = WindowRect {
            x: 112,
            y: 100,
            w: 800,
            h: 600,
        };
        assert_eq!(
            frame_style(rect, 12, true, (15, -5)),
            "left:0;top:0;width:100%;height:100%;z-index:9999;"
        );
    }
}
