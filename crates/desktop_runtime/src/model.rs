use desktop_app_contract::AppContent;

pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;
/// First value handed out is `INITIAL_Z_INDEX_COUNTER + 1`.
pub const INITIAL_Z_INDEX_COUNTER: u32 = 10;
/// Viewports narrower than this render every window fullscreen.
pub const MOBILE_BREAKPOINT: i32 = 768;
/// Stacking value used for windows that render fullscreen.
pub const FULLSCREEN_Z_INDEX: u32 = 9999;
/// Viewport assumed before the browser reports one (and on non-wasm targets).
pub const FALLBACK_VIEWPORT: ViewportSize = ViewportSize {
    width: 1024,
    height: 768,
};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// Returns a copy with every field present in `patch` overwritten.
    pub fn merged(self, patch: BoundsPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            w: patch.w.unwrap_or(self.w),
            h: patch.h.unwrap_or(self.h),
        }
    }
}

/// Partial geometry update; `None` fields keep their stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub w: Option<i32>,
    pub h: Option<i32>,
}

impl BoundsPatch {
    pub fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.w.is_none() && self.h.is_none()
    }
}

impl From<WindowRect> for BoundsPatch {
    fn from(rect: WindowRect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            w: Some(rect.w),
            h: Some(rect.h),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub content: AppContent,
    pub icon_id: Option<String>,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
}

impl WindowRecord {
    /// Maximized windows, and every window on a mobile viewport, fill the whole layer.
    pub fn renders_fullscreen(&self, is_mobile: bool) -> bool {
        is_mobile || self.maximized
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

impl ViewportSize {
    pub fn is_mobile(self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        FALLBACK_VIEWPORT
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub z_index_counter: u32,
    pub is_dark_mode: bool,
    pub is_sound_enabled: bool,
    pub launcher_open: bool,
    pub viewport: ViewportSize,
    pub is_mobile: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_viewport(ViewportSize::default())
    }
}

impl DesktopState {
    pub fn with_viewport(viewport: ViewportSize) -> Self {
        Self {
            windows: Vec::new(),
            z_index_counter: INITIAL_Z_INDEX_COUNTER,
            is_dark_mode: true,
            is_sound_enabled: true,
            launcher_open: false,
            viewport,
            is_mobile: viewport.is_mobile(),
        }
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    /// Non-minimized windows, back to front.
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// Frontmost non-minimized window.
    pub fn top_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id.clone()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub title: String,
    pub content: AppContent,
    pub icon_id: Option<String>,
}

impl OpenWindowRequest {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: AppContent) -> Self {
        Self {
            id: WindowId::new(id),
            title: title.into(),
            content,
            icon_id: None,
        }
    }

    pub fn with_icon(mut self, icon_id: impl Into<String>) -> Self {
        self.icon_id = Some(icon_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn touches_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn touches_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn touches_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn touches_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Short compass token (`"n"`, `"se"`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    /// CSS cursor shown on the document while this edge is being dragged.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::North | Self::South => "ns-resize",
            Self::East | Self::West => "ew-resize",
            Self::NorthEast | Self::SouthWest => "nesw-resize",
            Self::NorthWest | Self::SouthEast => "nwse-resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merged_patch_only_overwrites_present_fields() {
        let rect = WindowRect {
            x: 10,
            y: 20,
            w: 800,
            h: 600,
        };
        assert_eq!(
            rect.merged(BoundsPatch::position(5, 6)),
            WindowRect {
                x: 5,
                y: 6,
                w: 800,
                h: 600
            }
        );
        assert_eq!(rect.merged(BoundsPatch::default()), rect);
        assert!(BoundsPatch::default().is_empty());
    }

    #[test]
    fn default_state_matches_boot_values() {
        let state = DesktopState::default();
        assert_eq!(state.z_index_counter, 10);
        assert!(state.is_dark_mode);
        assert!(state.is_sound_enabled);
        assert!(!state.launcher_open);
        assert!(!state.is_mobile);
        assert!(state.windows.is_empty());
    }

    fn record(maximized: bool) -> WindowRecord {
        fn empty_app(_: desktop_app_contract::AppMountContext) -> leptos::View {
            leptos::IntoView::into_view(())
        }
        WindowRecord {
            id: WindowId::new("about"),
            title: "About".to_string(),
            content: AppContent::new(desktop_app_contract::AppModule::new(empty_app)),
            icon_id: None,
            rect: WindowRect {
                x: 100,
                y: 100,
                w: 800,
                h: 600,
            },
            z_index: 11,
            minimized: false,
            maximized,
        }
    }

    #[test]
    fn mobile_viewport_forces_fullscreen_for_unmaximized_windows() {
        assert!(record(false).renders_fullscreen(true));
        assert!(!record(false).renders_fullscreen(false));
        assert!(record(true).renders_fullscreen(false));
    }

    #[test]
    fn mobile_breakpoint_is_exclusive() {
        assert!(ViewportSize {
            width: 767,
            height: 900
        }
        .is_mobile());
        assert!(!ViewportSize {
            width: 768,
            height: 900
        }
        .is_mobile());
    }

    #[test]
    fn edges_report_axes_and_cursors() {
        assert!(ResizeEdge::NorthWest.touches_north());
        assert!(ResizeEdge::NorthWest.touches_west());
        assert!(!ResizeEdge::NorthWest.touches_east());
        assert!(!ResizeEdge::East.touches_north());
        assert_eq!(ResizeEdge::SouthEast.cursor(), "nwse-resize");
        assert_eq!(ResizeEdge::SouthWest.token(), "sw");
    }
}
