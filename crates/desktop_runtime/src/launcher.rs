//! Launcher (command palette) catalog, filtering, keyboard navigation, and command dispatch.
//!
//! Everything here is plain data so it can be exercised without a DOM; the view in
//! [`crate::components`] only renders the results and forwards key presses.

use std::time::Duration;

use crate::{
    apps::{self, AppCatalog},
    model::DesktopState,
    reducer::DesktopAction,
};

/// Maximum number of results shown for a non-empty query.
pub const LAUNCHER_RESULT_CAP: usize = 8;
/// Number of configured skills exposed as launcher entries.
pub const SKILL_CAP: usize = 12;
/// Delay before the search input is focused, matching the open transition.
pub const LAUNCHER_FOCUS_DELAY: Duration = Duration::from_millis(100);
/// DOM id of the launcher search input.
pub const LAUNCHER_INPUT_DOM_ID: &str = "launcher-search-input";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LauncherCategory {
    Apps,
    Actions,
    Skills,
    Info,
}

impl LauncherCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Apps => "Applications",
            Self::Actions => "Quick Actions",
            Self::Skills => "Technical Skills",
            Self::Info => "Information",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Actions => "actions",
            Self::Skills => "skills",
            Self::Info => "info",
        }
    }

    fn shown_without_query(self) -> bool {
        matches!(self, Self::Apps | Self::Actions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LauncherCommand {
    OpenApp { key: String, window_title: String },
    ToggleTheme,
    CloseAllWindows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub keywords: Vec<String>,
    pub category: LauncherCategory,
    pub command: LauncherCommand,
}

impl LauncherItem {
    /// `lowered_query` must already be lowercased.
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.title.to_lowercase().contains(lowered_query)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(lowered_query))
    }
}

/// Builds the flat launcher catalog for the current session.
///
/// Order is apps, actions, skills, info; the theme entry's label follows the current mode.
pub fn build_catalog(catalog: &AppCatalog, is_dark_mode: bool) -> Vec<LauncherItem> {
    let mut items = Vec::new();

    for app in catalog.launcher_apps() {
        items.push(LauncherItem {
            id: app.key.clone(),
            title: app.launcher_title.clone(),
            subtitle: app.launcher_subtitle.clone(),
            keywords: app.keywords.clone(),
            category: LauncherCategory::Apps,
            command: LauncherCommand::OpenApp {
                key: app.key.clone(),
                window_title: app.launcher_window_title.clone(),
            },
        });
    }

    items.push(LauncherItem {
        id: "theme".to_string(),
        title: if is_dark_mode {
            "Switch to Light Mode"
        } else {
            "Switch to Dark Mode"
        }
        .to_string(),
        subtitle: "Toggle the interface theme".to_string(),
        keywords: ["dark", "light", "theme", "mode", "toggle", "color"]
            .map(String::from)
            .to_vec(),
        category: LauncherCategory::Actions,
        command: LauncherCommand::ToggleTheme,
    });
    items.push(LauncherItem {
        id: "clear".to_string(),
        title: "Close All Windows".to_string(),
        subtitle: "Clear the desktop".to_string(),
        keywords: ["close", "clear", "trash", "windows", "all", "reset"]
            .map(String::from)
            .to_vec(),
        category: LauncherCategory::Actions,
        command: LauncherCommand::CloseAllWindows,
    });

    let skill_window_title = catalog
        .app(&catalog.skills.opens)
        .map(|app| app.launcher_window_title.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| catalog.skills.opens.clone());
    for skill in catalog.skills.items.iter().take(SKILL_CAP) {
        items.push(LauncherItem {
            id: format!("skill-{skill}"),
            title: skill.clone(),
            subtitle: catalog.skills.subtitle.clone(),
            keywords: vec![
                skill.to_lowercase(),
                "skill".to_string(),
                "tech".to_string(),
                "technology".to_string(),
            ],
            category: LauncherCategory::Skills,
            command: LauncherCommand::OpenApp {
                key: catalog.skills.opens.clone(),
                window_title: skill_window_title.clone(),
            },
        });
    }

    for info in &catalog.info {
        let window_title = catalog
            .app(&info.opens)
            .map(|app| app.dock_title.clone())
            .unwrap_or_else(|| info.title.clone());
        items.push(LauncherItem {
            id: info.id.clone(),
            title: info.title.clone(),
            subtitle: info.subtitle.clone(),
            keywords: info.keywords.clone(),
            category: LauncherCategory::Info,
            command: LauncherCommand::OpenApp {
                key: info.opens.clone(),
                window_title,
            },
        });
    }

    items
}

/// Filters the catalog for `query`.
///
/// A blank query lists every app and action. Otherwise an item matches when the lowercased query
/// is a substring of its title or of any keyword; at most [`LAUNCHER_RESULT_CAP`] results are
/// kept in catalog order.
pub fn filter_items(items: &[LauncherItem], query: &str) -> Vec<LauncherItem> {
    if query.trim().is_empty() {
        return items
            .iter()
            .filter(|item| item.category.shown_without_query())
            .cloned()
            .collect();
    }

    let lowered = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches(&lowered))
        .take(LAUNCHER_RESULT_CAP)
        .cloned()
        .collect()
}

/// One rendered result section: the category and `(flat index, item)` pairs.
pub type LauncherGroup<'a> = (LauncherCategory, Vec<(usize, &'a LauncherItem)>);

/// Groups results by category in order of first appearance, keeping flat indices for selection.
pub fn group_by_category(results: &[LauncherItem]) -> Vec<LauncherGroup<'_>> {
    let mut groups: Vec<LauncherGroup<'_>> = Vec::new();
    for (index, item) in results.iter().enumerate() {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == item.category)
        {
            Some((_, members)) => members.push((index, item)),
            None => groups.push((item.category, vec![(index, item)])),
        }
    }
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherKeyOutcome {
    /// Key is not handled by the launcher.
    Ignored,
    /// Selection changed (or was already at a bound).
    SelectionMoved,
    /// Run the command of the result at this index, then close.
    Activate(usize),
    /// Close without running anything.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LauncherState {
    query: String,
    selected: usize,
}

impl LauncherState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Clears the query and selection; called every time the launcher opens.
    pub fn reset(&mut self) {
        self.query.clear();
        self.selected = 0;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = 0;
    }

    pub fn hover(&mut self, index: usize) {
        self.selected = index;
    }

    /// Applies a key press against a result list of `result_count` entries.
    pub fn handle_key(&mut self, key: &str, result_count: usize) -> LauncherKeyOutcome {
        match key {
            "ArrowDown" => {
                self.selected = (self.selected + 1).min(result_count.saturating_sub(1));
                LauncherKeyOutcome::SelectionMoved
            }
            "ArrowUp" => {
                self.selected = self.selected.saturating_sub(1);
                LauncherKeyOutcome::SelectionMoved
            }
            "Enter" if self.selected < result_count => LauncherKeyOutcome::Activate(self.selected),
            "Escape" => LauncherKeyOutcome::Dismiss,
            _ => LauncherKeyOutcome::Ignored,
        }
    }
}

/// Maps a global key press to a launcher action.
///
/// Cmd/Ctrl+Space toggles the launcher; Escape closes it only while it is open.
pub fn classify_global_shortcut(
    code: &str,
    meta: bool,
    ctrl: bool,
    launcher_open: bool,
) -> Option<DesktopAction> {
    if (meta || ctrl) && code == "Space" {
        return Some(DesktopAction::ToggleLauncher);
    }
    if code == "Escape" && launcher_open {
        return Some(DesktopAction::CloseLauncher);
    }
    None
}

/// Reducer actions for running `command`, ending with closing the launcher.
pub fn command_actions(command: &LauncherCommand, state: &DesktopState) -> Vec<DesktopAction> {
    let mut actions = match command {
        LauncherCommand::OpenApp { key, window_title } => apps::open_request(key, window_title)
            .map(DesktopAction::OpenWindow)
            .into_iter()
            .collect(),
        LauncherCommand::ToggleTheme => vec![DesktopAction::ToggleTheme],
        LauncherCommand::CloseAllWindows => state
            .window_ids()
            .into_iter()
            .map(|window_id| DesktopAction::CloseWindow { window_id })
            .collect(),
    };
    actions.push(DesktopAction::CloseLauncher);
    actions
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{apps::app_catalog, model::WindowId, reducer::reduce_desktop};

    fn titles(items: &[LauncherItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn blank_query_lists_apps_and_actions_only() {
        let catalog = build_catalog(app_catalog(), true);
        let results = filter_items(&catalog, "   ");
        assert_eq!(
            titles(&results),
            vec![
                "AI Chatbot",
                "Resume / CV",
                "Projects",
                "Switch to Light Mode",
                "Close All Windows",
            ]
        );
    }

    #[test]
    fn theme_entry_label_follows_mode() {
        let light = build_catalog(app_catalog(), false);
        assert!(light.iter().any(|item| item.title == "Switch to Dark Mode"));
    }

    #[test]
    fn query_matches_titles_and_keywords_case_insensitively() {
        let catalog = build_catalog(app_catalog(), true);
        assert_eq!(
            titles(&filter_items(&catalog, "res")),
            vec!["Resume / CV", "Close All Windows"]
        );
        assert_eq!(titles(&filter_items(&catalog, "PDF")), vec!["Resume / CV"]);
        assert!(filter_items(&catalog, "xyz123").is_empty());
    }

    #[test]
    fn skills_are_capped_and_results_limited() {
        let catalog = build_catalog(app_catalog(), true);
        let skills: Vec<&LauncherItem> = catalog
            .iter()
            .filter(|item| item.category == LauncherCategory::Skills)
            .collect();
        assert_eq!(skills.len(), SKILL_CAP);
        assert_eq!(skills[0].id, "skill-JavaScript");
        assert_eq!(skills[0].keywords[0], "javascript");
        assert!(!catalog.iter().any(|item| item.title == "Webpack"));

        let results = filter_items(&catalog, "tech");
        assert_eq!(results.len(), LAUNCHER_RESULT_CAP);
        assert!(results
            .iter()
            .all(|item| item.category == LauncherCategory::Skills));
    }

    #[test]
    fn grouping_keeps_flat_indices() {
        let catalog = build_catalog(app_catalog(), true);
        let results = filter_items(&catalog, "c");
        let groups = group_by_category(&results);
        let mut flat = Vec::new();
        for (_, members) in &groups {
            flat.extend(members.iter().map(|(index, _)| *index));
        }
        assert_eq!(flat, (0..results.len()).collect::<Vec<_>>());
        assert_eq!(groups[0].0, LauncherCategory::Apps);
    }

    #[test]
    fn arrow_keys_clamp_to_result_bounds() {
        let mut launcher = LauncherState::default();
        for _ in 0..10 {
            launcher.handle_key("ArrowDown", 5);
        }
        assert_eq!(launcher.selected(), 4);
        for _ in 0..10 {
            launcher.handle_key("ArrowUp", 5);
        }
        assert_eq!(launcher.selected(), 0);

        launcher.handle_key("ArrowDown", 0);
        assert_eq!(launcher.selected(), 0);
        assert_eq!(launcher.handle_key("Enter", 0), LauncherKeyOutcome::Ignored);
    }

    #[test]
    fn enter_activates_selection_and_escape_dismisses() {
        let mut launcher = LauncherState::default();
        launcher.handle_key("ArrowDown", 3);
        assert_eq!(
            launcher.handle_key("Enter", 3),
            LauncherKeyOutcome::Activate(1)
        );
        assert_eq!(launcher.handle_key("Escape", 3), LauncherKeyOutcome::Dismiss);
        assert_eq!(launcher.handle_key("a", 3), LauncherKeyOutcome::Ignored);
    }

    #[test]
    fn editing_query_and_reopening_reset_selection() {
        let mut launcher = LauncherState::default();
        launcher.hover(3);
        launcher.set_query("re");
        assert_eq!(launcher.selected(), 0);
        launcher.hover(2);
        launcher.reset();
        assert_eq!((launcher.query(), launcher.selected()), ("", 0));
    }

    #[test]
    fn global_shortcuts() {
        assert_eq!(
            classify_global_shortcut("Space", true, false, false),
            Some(DesktopAction::ToggleLauncher)
        );
        assert_eq!(
            classify_global_shortcut("Space", false, true, true),
            Some(DesktopAction::ToggleLauncher)
        );
        assert_eq!(classify_global_shortcut("Space", false, false, false), None);
        assert_eq!(
            classify_global_shortcut("Escape", false, false, true),
            Some(DesktopAction::CloseLauncher)
        );
        assert_eq!(classify_global_shortcut("Escape", false, false, false), None);
    }

    #[test]
    fn close_all_closes_every_window_then_the_launcher() {
        let mut state = DesktopState::default();
        for key in ["terminal", "cv"] {
            let request = apps::dock_open_request(key).expect("request");
            reduce_desktop(&mut state, DesktopAction::OpenWindow(request));
        }
        reduce_desktop(&mut state, DesktopAction::ToggleLauncher);

        let actions = command_actions(&LauncherCommand::CloseAllWindows, &state);
        assert_eq!(actions.len(), 3);
        let mut cues = 0;
        for action in actions {
            cues += reduce_desktop(&mut state, action).len();
        }
        assert!(state.windows.is_empty());
        assert!(!state.launcher_open);
        assert_eq!(cues, 2);
    }

    #[test]
    fn skill_entries_open_the_chat_window() {
        let catalog = build_catalog(app_catalog(), true);
        let python = catalog
            .iter()
            .find(|item| item.id == "skill-Python")
            .expect("python skill");
        let mut state = DesktopState::default();
        let actions = command_actions(&python.command, &state);
        for action in actions {
            reduce_desktop(&mut state, action);
        }
        let chat = state.window(&WindowId::from("terminal")).expect("chat");
        assert_eq!(chat.title, "Chat");
    }
}
