use std::time::Duration;

use leptos::*;

use super::use_desktop_runtime;
use crate::reducer::DesktopAction;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Local wall-clock fields shown in the menu bar. `weekday` is 0 for Sunday, `month` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct ClockReading {
    weekday: u32,
    day: u32,
    month: u32,
    hours: u32,
    minutes: u32,
}

impl ClockReading {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                weekday: date.get_day(),
                day: date.get_date(),
                month: date.get_month(),
                hours: date.get_hours(),
                minutes: date.get_minutes(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        Self::default()
    }

    fn time_label(self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }

    fn date_label(self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("");
        format!("{weekday} {} {month}", self.day)
    }
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(ClockReading::now());
    match set_interval_with_handle(move || clock.set(ClockReading::now()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("menu bar clock timer failed: {err:?}"),
    }

    let is_dark_mode = move || state.with(|desktop| desktop.is_dark_mode);
    let is_sound_enabled = move || state.with(|desktop| desktop.is_sound_enabled);

    view! {
        <header class="menubar" role="menubar">
            <div class="menubar-left">
                <button
                    type="button"
                    class="menubar-brand"
                    aria-label="Open launcher"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleLauncher)
                >
                    "Portfolio"
                </button>
                <button
                    type="button"
                    class="menubar-link"
                    on:click=move |_| runtime.open_app("cv")
                >
                    "Resume"
                </button>
            </div>
            <div class="menubar-right">
                <button
                    type="button"
                    class="menubar-toggle"
                    aria-label=move || {
                        if is_dark_mode() { "Switch to light mode" } else { "Switch to dark mode" }
                    }
                    aria-pressed=move || is_dark_mode().to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleTheme)
                >
                    {move || if is_dark_mode() { "Light" } else { "Dark" }}
                </button>
                <button
                    type="button"
                    class="menubar-toggle"
                    aria-label=move || {
                        if is_sound_enabled() { "Mute sounds" } else { "Enable sounds" }
                    }
                    aria-pressed=move || is_sound_enabled().to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleSound)
                >
                    {move || if is_sound_enabled() { "Sound on" } else { "Sound off" }}
                </button>
                <time class="menubar-clock">
                    <span class="menubar-date">{move || clock.get().date_label()}</span>
                    <span class="menubar-time">{move || clock.get().time_label()}</span>
                </time>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_labels_pad_time_and_name_the_day() {
        let reading = ClockReading {
            weekday: 1,
            day: 5,
            month: 0,
            hours: 9,
            minutes: 7,
        };
        assert_eq!(reading.time_label(), "09:07");
        assert_eq!(reading.date_label(), "Mon 5 Jan");
    }

    #[test]
    fn out_of_range_fields_render_without_names() {
        let reading = ClockReading {
            weekday: 9,
            day: 31,
            month: 11,
            hours: 23,
            minutes: 59,
        };
        assert_eq!(reading.time_label(), "23:59");
        assert_eq!(reading.date_label(), " 31 Dec");
    }
}
