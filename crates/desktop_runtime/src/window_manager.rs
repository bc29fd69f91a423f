//! Shared window-manager transition helpers used by the desktop reducer and window frames.

use crate::model::{
    DesktopState, ResizeEdge, WindowId, WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 400;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 300;
/// Per-window offset applied by cascade placement.
pub const CASCADE_STEP: i32 = 30;
/// Smallest x/y a freshly placed window may receive.
pub const PLACEMENT_FLOOR: i32 = 50;
/// Vertical start of the cascade before the floor is applied.
pub const CASCADE_TOP: i32 = 100;

/// Initial geometry for a newly opened window when `open_count` windows already exist.
///
/// The window is centered horizontally and offset diagonally per existing window. Only a floor
/// is applied, so a long cascade keeps walking down and right.
pub fn cascade_rect(open_count: usize, viewport_width: i32) -> WindowRect {
    let step = CASCADE_STEP.saturating_mul(i32::try_from(open_count).unwrap_or(i32::MAX));
    WindowRect {
        x: ((viewport_width - DEFAULT_WINDOW_WIDTH) / 2)
            .saturating_add(step)
            .max(PLACEMENT_FLOOR),
        y: CASCADE_TOP.saturating_add(step).max(PLACEMENT_FLOOR),
        w: DEFAULT_WINDOW_WIDTH,
        h: DEFAULT_WINDOW_HEIGHT,
    }
}

/// Assigns the next stacking value to `window_id`.
///
/// Returns `false` without touching the counter when the window does not exist.
pub fn raise_window(state: &mut DesktopState, window_id: &WindowId) -> bool {
    let next = state.z_index_counter + 1;
    let Some(window) = state.windows.iter_mut().find(|w| &w.id == window_id) else {
        return false;
    };
    window.z_index = next;
    state.z_index_counter = next;
    true
}

/// Computes resized geometry from the gesture baseline and the cumulative pointer delta.
///
/// East/south growth clamps at the minimum. West/north keep the baseline for that axis when the
/// candidate size would drop below the minimum, so the opposite edge never drifts.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: i32, dy: i32) -> WindowRect {
    let mut rect = start;

    if edge.touches_east() {
        rect.w = (start.w + dx).max(MIN_WINDOW_WIDTH);
    } else if edge.touches_west() {
        let candidate = start.w - dx;
        if candidate >= MIN_WINDOW_WIDTH {
            rect.w = candidate;
            rect.x = start.x + dx;
        }
    }

    if edge.touches_south() {
        rect.h = (start.h + dy).max(MIN_WINDOW_HEIGHT);
    } else if edge.touches_north() {
        let candidate = start.h - dy;
        if candidate >= MIN_WINDOW_HEIGHT {
            rect.h = candidate;
            rect.y = start.y + dy;
        }
    }

    rect
}
