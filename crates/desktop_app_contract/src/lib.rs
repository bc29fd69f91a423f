//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! Apps are registered as static mount functions ([`AppModule`]). The runtime never inspects what
//! an app renders: a window record only holds an [`AppContent`] handle, and the window frame mounts
//! it with a per-window [`AppMountContext`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, View};

#[derive(Clone, Copy)]
/// Narrow host surface an app can use to talk back to its window manager.
pub struct AppHost {
    close: Callback<()>,
    open: Callback<String>,
}

impl AppHost {
    /// Creates a host surface from runtime callbacks.
    pub fn new(close: Callback<()>, open: Callback<String>) -> Self {
        Self { close, open }
    }

    /// Requests that the hosting window be closed.
    pub fn close_window(&self) {
        self.close.call(());
    }

    /// Requests that another registered app window be opened (or reactivated) by key.
    pub fn open_app(&self, window_key: impl Into<String>) {
        self.open.call(window_key.into());
    }
}

impl std::fmt::Debug for AppHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppHost").finish_non_exhaustive()
    }
}

#[derive(Clone)]
/// App mount context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Window key the app was opened under.
    pub window_key: String,
    /// Reactive dark-mode flag of the shell.
    pub is_dark_mode: Signal<bool>,
    /// Host callbacks for the mounted window.
    pub host: AppHost,
}

impl std::fmt::Debug for AppMountContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppMountContext")
            .field("window_key", &self.window_key)
            .finish_non_exhaustive()
    }
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[derive(Clone)]
/// Opaque renderable payload stored on a window record.
///
/// Equality is identity: two handles are equal only when they were cloned from the same
/// [`AppContent::new`] call.
pub struct AppContent(Rc<AppModule>);

impl AppContent {
    /// Wraps a module in a fresh content handle.
    pub fn new(module: AppModule) -> Self {
        Self(Rc::new(module))
    }

    /// Mounts the wrapped module.
    pub fn mount(&self, context: AppMountContext) -> View {
        self.0.mount(context)
    }

    /// Returns `true` when both handles share the same allocation.
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for AppContent {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl std::fmt::Debug for AppContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AppContent")
            .field(&Rc::as_ptr(&self.0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use leptos::IntoView;

    use super::*;

    fn empty_app(_: AppMountContext) -> View {
        ().into_view()
    }

    #[test]
    fn content_equality_is_handle_identity() {
        let module = AppModule::new(empty_app);
        let first = AppContent::new(module);
        let clone = first.clone();
        let second = AppContent::new(module);

        assert_eq!(first, clone);
        assert!(first.same_as(&clone));
        assert_ne!(first, second);
    }
}
