//! Pointer gesture state machine for a single window frame.
//!
//! A gesture is `Idle -> Dragging -> Idle` or `Idle -> Resizing(edge) -> Idle`. Starting a gesture
//! installs document-level listeners through a caller-supplied closure and the returned guard is
//! held for exactly as long as the gesture lasts. Ending, cancelling, or dropping the tracker
//! drops the guard, so listener removal does not depend on a release event ever arriving.

use crate::{
    model::{BoundsPatch, PointerPosition, ResizeEdge, WindowRect},
    window_manager::resize_rect,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub pointer_start: PointerPosition,
    pub origin: WindowRect,
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub baseline: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

/// Result of feeding a pointer move into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureUpdate {
    /// No gesture is active.
    Ignored,
    /// Transient drag displacement to render locally; the session is not touched.
    DragPreview { dx: i32, dy: i32 },
    /// New geometry to commit immediately.
    Resize(BoundsPatch),
}

/// Result of ending a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// No gesture was active.
    Ignored,
    /// Drag finished; commit the final position.
    Moved(BoundsPatch),
    /// Resize finished; every frame was already committed.
    Resized,
}

#[derive(Debug)]
pub struct GestureTracker<G> {
    phase: GesturePhase,
    listeners: Option<G>,
}

impl<G> Default for GestureTracker<G> {
    fn default() -> Self {
        Self {
            phase: GesturePhase::Idle,
            listeners: None,
        }
    }
}

impl<G> GestureTracker<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, GesturePhase::Idle)
    }

    pub fn has_listeners(&self) -> bool {
        self.listeners.is_some()
    }

    /// Transient drag displacement, `(0, 0)` when not dragging.
    pub fn drag_offset(&self) -> (i32, i32) {
        match self.phase {
            GesturePhase::Dragging(session) => (session.dx, session.dy),
            _ => (0, 0),
        }
    }

    /// Starts a title-bar drag.
    ///
    /// Rejected (and `install_listeners` never called) while the window renders fullscreen or
    /// another gesture is active.
    pub fn begin_drag(
        &mut self,
        fullscreen: bool,
        origin: WindowRect,
        pointer: PointerPosition,
        install_listeners: impl FnOnce() -> G,
    ) -> bool {
        if fullscreen || !self.is_idle() {
            return false;
        }
        self.listeners = Some(install_listeners());
        self.phase = GesturePhase::Dragging(DragSession {
            pointer_start: pointer,
            origin,
            dx: 0,
            dy: 0,
        });
        true
    }

    /// Starts an edge/corner resize with the current geometry as baseline.
    ///
    /// Same rejection rules as [`GestureTracker::begin_drag`].
    pub fn begin_resize(
        &mut self,
        fullscreen: bool,
        baseline: WindowRect,
        edge: ResizeEdge,
        pointer: PointerPosition,
        install_listeners: impl FnOnce() -> G,
    ) -> bool {
        if fullscreen || !self.is_idle() {
            return false;
        }
        self.listeners = Some(install_listeners());
        self.phase = GesturePhase::Resizing(ResizeSession {
            edge,
            pointer_start: pointer,
            baseline,
        });
        true
    }

    pub fn pointer_moved(&mut self, pointer: PointerPosition) -> GestureUpdate {
        match &mut self.phase {
            GesturePhase::Idle => GestureUpdate::Ignored,
            GesturePhase::Dragging(session) => {
                session.dx = pointer.x - session.pointer_start.x;
                session.dy = pointer.y - session.pointer_start.y;
                GestureUpdate::DragPreview {
                    dx: session.dx,
                    dy: session.dy,
                }
            }
            GesturePhase::Resizing(session) => {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                GestureUpdate::Resize(resize_rect(session.baseline, session.edge, dx, dy).into())
            }
        }
    }

    /// Ends the active gesture and releases its listeners.
    pub fn pointer_released(&mut self) -> GestureEnd {
        let phase = std::mem::take(&mut self.phase);
        self.listeners = None;
        match phase {
            GesturePhase::Idle => GestureEnd::Ignored,
            GesturePhase::Dragging(session) => GestureEnd::Moved(BoundsPatch::position(
                session.origin.x + session.dx,
                session.origin.y + session.dy,
            )),
            GesturePhase::Resizing(_) => GestureEnd::Resized,
        }
    }

    /// Abandons the active gesture without a final commit and releases its listeners.
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
        self.listeners = None;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    struct CountingGuard(Rc<Cell<i32>>);

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn installer(live: &Rc<Cell<i32>>) -> impl FnOnce() -> CountingGuard {
        let live = Rc::clone(live);
        move || {
            live.set(live.get() + 1);
            CountingGuard(live)
        }
    }

    const ORIGIN: WindowRect = WindowRect {
        x: 200,
        y: 150,
        w: 800,
        h: 600,
    };

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn drag_previews_locally_and_commits_total_displacement_once() {
        let live = Rc::new(Cell::new(0));
        let mut tracker = GestureTracker::new();
        assert!(tracker.begin_drag(false, ORIGIN, at(10, 10), installer(&live)));
        assert_eq!(live.get(), 1);

        assert_eq!(
            tracker.pointer_moved(at(20, 15)),
            GestureUpdate::DragPreview { dx: 10, dy: 5 }
        );
        assert_eq!(
            tracker.pointer_moved(at(45, 50)),
            GestureUpdate::DragPreview { dx: 35, dy: 40 }
        );
        assert_eq!(tracker.drag_offset(), (35, 40));

        assert_eq!(
            tracker.pointer_released(),
            GestureEnd::Moved(BoundsPatch::position(235, 190))
        );
        assert!(tracker.is_idle());
        assert_eq!(tracker.drag_offset(), (0, 0));
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn resize_commits_each_frame_from_baseline() {
        let live = Rc::new(Cell::new(0));
        let mut tracker = GestureTracker::new();
        assert!(tracker.begin_resize(
            false,
            ORIGIN,
            ResizeEdge::West,
            at(200, 300),
            installer(&live)
        ));

        assert_eq!(
            tracker.pointer_moved(at(150, 300)),
            GestureUpdate::Resize(
                WindowRect {
                    x: 150,
                    w: 850,
                    ..ORIGIN
                }
                .into()
            )
        );
        assert_eq!(
            tracker.pointer_moved(at(700, 300)),
            GestureUpdate::Resize(ORIGIN.into())
        );
        assert_eq!(tracker.pointer_released(), GestureEnd::Resized);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn fullscreen_or_busy_tracker_rejects_start_without_installing() {
        let live = Rc::new(Cell::new(0));
        let mut tracker = GestureTracker::new();
        assert!(!tracker.begin_drag(true, ORIGIN, at(0, 0), installer(&live)));
        assert!(!tracker.begin_resize(
            true,
            ORIGIN,
            ResizeEdge::SouthEast,
            at(0, 0),
            installer(&live)
        ));
        assert_eq!(live.get(), 0);
        assert!(!tracker.has_listeners());

        assert!(tracker.begin_resize(
            false,
            ORIGIN,
            ResizeEdge::SouthEast,
            at(0, 0),
            installer(&live)
        ));
        assert!(!tracker.begin_drag(false, ORIGIN, at(0, 0), installer(&live)));
        assert_eq!(live.get(), 1);
        assert!(matches!(tracker.phase(), GesturePhase::Resizing(_)));
    }

    #[test]
    fn cancel_and_drop_release_listeners_mid_gesture() {
        let live = Rc::new(Cell::new(0));
        let mut tracker = GestureTracker::new();
        tracker.begin_drag(false, ORIGIN, at(0, 0), installer(&live));
        tracker.pointer_moved(at(5, 5));
        tracker.cancel();
        assert_eq!(live.get(), 0);
        assert_eq!(tracker.pointer_released(), GestureEnd::Ignored);

        tracker.begin_resize(false, ORIGIN, ResizeEdge::North, at(0, 0), installer(&live));
        assert_eq!(live.get(), 1);
        drop(tracker);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn idle_tracker_ignores_moves_and_releases() {
        let mut tracker: GestureTracker<()> = GestureTracker::new();
        assert_eq!(tracker.pointer_moved(at(1, 1)), GestureUpdate::Ignored);
        assert_eq!(tracker.pointer_released(), GestureEnd::Ignored);
    }
}
