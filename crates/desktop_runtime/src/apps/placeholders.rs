//! Built-in placeholder app views mounted into shell windows.

use desktop_app_contract::AppMountContext;
use leptos::*;

fn shell_class(context: &AppMountContext) -> impl Fn() -> &'static str + 'static {
    let is_dark_mode = context.is_dark_mode;
    move || {
        if is_dark_mode.get() {
            "app-shell app-shell-dark"
        } else {
            "app-shell"
        }
    }
}

fn placeholder_view(
    context: AppMountContext,
    heading: &'static str,
    lines: &'static [&'static str],
) -> View {
    let host = context.host;
    view! {
        <div class=shell_class(&context) data-window-key=context.window_key.clone()>
            <h2 class="app-heading">{heading}</h2>
            {lines
                .iter()
                .map(|line| view! { <p class="app-line">{*line}</p> })
                .collect_view()}
            <div class="app-toolbar" role="group" aria-label="Window actions">
                <button type="button" class="app-action" on:click=move |_| host.close_window()>
                    "Close"
                </button>
            </div>
        </div>
    }
    .into_view()
}

/// Mounts the AI chat placeholder.
pub(super) fn mount_chat_app(context: AppMountContext) -> View {
    placeholder_view(
        context,
        "AI Chat",
        &[
            "Ask about my experience, projects, or skills.",
            "The assistant backend is not connected in this build.",
        ],
    )
}

/// Mounts the resume viewer placeholder.
pub(super) fn mount_resume_app(context: AppMountContext) -> View {
    placeholder_view(
        context,
        "Curriculum Vitae",
        &["Full Stack Developer", "Experience, education and skills."],
    )
}

/// Mounts the project browser placeholder.
pub(super) fn mount_projects_app(context: AppMountContext) -> View {
    let host = context.host;
    view! {
        <div class=shell_class(&context) data-window-key=context.window_key.clone()>
            <h2 class="app-heading">"Projects"</h2>
            <p class="app-line">"Selected portfolio work."</p>
            <div class="app-toolbar" role="group" aria-label="Project actions">
                <button type="button" class="app-action" on:click=move |_| host.open_app("contact")>
                    "Get in touch"
                </button>
                <button type="button" class="app-action" on:click=move |_| host.close_window()>
                    "Close"
                </button>
            </div>
        </div>
    }
    .into_view()
}

/// Mounts the contact form placeholder.
pub(super) fn mount_contact_app(context: AppMountContext) -> View {
    placeholder_view(
        context,
        "Contact",
        &["Send a message and I will get back to you."],
    )
}

/// Mounts the trash mini-game placeholder.
pub(super) fn mount_trash_game_app(context: AppMountContext) -> View {
    let host = context.host;
    let score = create_rw_signal(0_u32);
    view! {
        <div class=shell_class(&context) data-window-key=context.window_key.clone()>
            <h2 class="app-heading">"Trash Game"</h2>
            <p class="app-line">"Score: " {move || score.get()}</p>
            <div class="app-toolbar" role="group" aria-label="Game actions">
                <button type="button" class="app-action" on:click=move |_| score.update(|s| *s += 1)>
                    "Throw away"
                </button>
                <button type="button" class="app-action" on:click=move |_| host.close_window()>
                    "Close"
                </button>
            </div>
        </div>
    }
    .into_view()
}
