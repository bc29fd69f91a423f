use leptos::*;

use super::use_desktop_runtime;
use crate::{
    apps,
    launcher::{
        build_catalog, filter_items, group_by_category, LauncherKeyOutcome, LauncherState,
        LAUNCHER_INPUT_DOM_ID,
    },
    reducer::DesktopAction,
};

#[component]
pub(super) fn Spotlight() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let launcher = create_rw_signal(LauncherState::default());
    let is_open = create_memo(move |_| state.with(|desktop| desktop.launcher_open));

    create_effect(move |_| {
        if is_open.get() {
            launcher.update(LauncherState::reset);
        }
    });

    let catalog = create_memo(move |_| {
        build_catalog(
            apps::app_catalog(),
            state.with(|desktop| desktop.is_dark_mode),
        )
    });
    let results = create_memo(move |_| {
        let query = launcher.with(|launcher| launcher.query().to_string());
        catalog.with(|items| filter_items(items, &query))
    });

    let activate = move |index: usize| {
        if let Some(item) = results.with_untracked(|items| items.get(index).cloned()) {
            runtime.run_launcher_command(&item.command);
        }
    };
    let close = move || runtime.dispatch_action(DesktopAction::CloseLauncher);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let count = results.with_untracked(Vec::len);
        let outcome = launcher
            .try_update(|launcher| launcher.handle_key(&ev.key(), count))
            .unwrap_or(LauncherKeyOutcome::Ignored);
        match outcome {
            LauncherKeyOutcome::Ignored => {}
            LauncherKeyOutcome::SelectionMoved => ev.prevent_default(),
            LauncherKeyOutcome::Activate(index) => {
                ev.prevent_default();
                activate(index);
            }
            LauncherKeyOutcome::Dismiss => {
                ev.prevent_default();
                close();
            }
        }
    };

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <div class="launcher-backdrop" on:click=move |_| close()>
                <div
                    class="launcher-panel"
                    role="dialog"
                    aria-label="Spotlight Search"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="launcher-search">
                        <input
                            id=LAUNCHER_INPUT_DOM_ID
                            type="text"
                            class="launcher-input"
                            placeholder="Search apps, actions, skills..."
                            autocomplete="off"
                            prop:value=move || launcher.with(|launcher| launcher.query().to_string())
                            on:input=move |ev| {
                                launcher.update(|launcher| launcher.set_query(event_target_value(&ev)))
                            }
                            on:keydown=on_keydown
                        />
                    </div>
                    <div class="launcher-results" role="listbox">
                        {move || {
                            results
                                .with(|items| {
                                    if items.is_empty() {
                                        return view! {
                                            <div class="launcher-empty">
                                                <p>"No results found"</p>
                                                <p>"Try a different search term"</p>
                                            </div>
                                        }
                                            .into_view();
                                    }
                                    group_by_category(items)
                                        .into_iter()
                                        .map(|(category, members)| {
                                            view! {
                                                <div class="launcher-group" data-category=category.token()>
                                                    <div class="launcher-group-header">{category.label()}</div>
                                                    {members
                                                        .into_iter()
                                                        .map(|(index, item)| {
                                                            let is_selected = move || {
                                                                launcher.with(|launcher| launcher.selected() == index)
                                                            };
                                                            view! {
                                                                <div
                                                                    class="launcher-item"
                                                                    class:selected=is_selected
                                                                    role="option"
                                                                    aria-selected=move || is_selected().to_string()
                                                                    on:mouseenter=move |_| {
                                                                        launcher.update(|launcher| launcher.hover(index))
                                                                    }
                                                                    on:click=move |_| activate(index)
                                                                >
                                                                    <div class="launcher-item-title">{item.title.clone()}</div>
                                                                    <div class="launcher-item-subtitle">{item.subtitle.clone()}</div>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </div>
                    <footer class="launcher-footer">
                        <span>"↑ ↓ Navigate"</span>
                        <span>"↵ Open"</span>
                        <span>"ESC Close"</span>
                    </footer>
                </div>
            </div>
        </Show>
    }
}
