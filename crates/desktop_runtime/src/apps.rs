//! App registry: build-time catalog metadata plus the mount function for each window key.

mod placeholders;

use std::sync::OnceLock;

use desktop_app_contract::{AppContent, AppModule};
use serde::Deserialize;
use thiserror::Error;

use crate::model::OpenWindowRequest;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppEntry {
    pub key: String,
    pub icon: String,
    pub dock_title: String,
    pub in_dock: bool,
    pub in_launcher: bool,
    #[serde(default)]
    pub launcher_title: String,
    #[serde(default)]
    pub launcher_subtitle: String,
    #[serde(default)]
    pub launcher_window_title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillSection {
    pub subtitle: String,
    pub opens: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InfoEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub keywords: Vec<String>,
    pub opens: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppCatalog {
    pub schema_version: u32,
    pub apps: Vec<AppEntry>,
    pub skills: SkillSection,
    #[serde(default)]
    pub info: Vec<InfoEntry>,
}

impl AppCatalog {
    pub fn app(&self, key: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.key == key)
    }

    pub fn dock_apps(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter().filter(|app| app.in_dock)
    }

    pub fn launcher_apps(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter().filter(|app| app.in_launcher)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode app catalog: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unsupported app catalog schema version {0}")]
    SchemaVersion(u32),
    #[error("app catalog references unregistered app `{0}`")]
    UnregisteredApp(String),
}

/// Decodes and checks a catalog document against the registered app modules.
///
/// # Errors
///
/// Returns [`CatalogError`] when the JSON is malformed, the schema version is unknown, or an
/// entry names a window key with no mount function.
pub fn parse_catalog(raw: &str) -> Result<AppCatalog, CatalogError> {
    let catalog: AppCatalog = serde_json::from_str(raw)?;
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        return Err(CatalogError::SchemaVersion(catalog.schema_version));
    }
    let referenced = catalog
        .apps
        .iter()
        .map(|app| app.key.as_str())
        .chain(std::iter::once(catalog.skills.opens.as_str()))
        .chain(catalog.info.iter().map(|info| info.opens.as_str()));
    for key in referenced {
        if app_module(key).is_none() {
            return Err(CatalogError::UnregisteredApp(key.to_string()));
        }
    }
    Ok(catalog)
}

/// Returns the build-time app catalog.
///
/// # Panics
///
/// Panics when the generated catalog does not match the registered modules. `build.rs` validates
/// the document shape, so this only fires when a catalog key has no mount function below.
pub fn app_catalog() -> &'static AppCatalog {
    static CATALOG: OnceLock<AppCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        parse_catalog(APP_CATALOG_JSON).unwrap_or_else(|err| panic!("invalid app catalog: {err}"))
    })
}

/// Mount function registered for a window key.
pub fn app_module(key: &str) -> Option<AppModule> {
    let mount_fn: desktop_app_contract::AppMountFn = match key {
        "terminal" => placeholders::mount_chat_app,
        "cv" => placeholders::mount_resume_app,
        "projects" => placeholders::mount_projects_app,
        "contact" => placeholders::mount_contact_app,
        "trash" => placeholders::mount_trash_game_app,
        _ => return None,
    };
    Some(AppModule::new(mount_fn))
}

/// Builds an open request for `key` with a fresh content handle.
pub fn open_request(key: &str, title: &str) -> Option<OpenWindowRequest> {
    let module = app_module(key)?;
    let mut request = OpenWindowRequest::new(key, title, AppContent::new(module));
    if let Some(entry) = app_catalog().app(key) {
        request = request.with_icon(entry.icon.clone());
    }
    Some(request)
}

/// Open request used by the dock and menu bar, titled with the entry's dock title.
pub fn dock_open_request(key: &str) -> Option<OpenWindowRequest> {
    let entry = app_catalog().app(key)?;
    open_request(key, &entry.dock_title)
}
