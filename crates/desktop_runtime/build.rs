use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppEntry {
    key: String,
    icon: String,
    dock_title: String,
    in_dock: bool,
    in_launcher: bool,
    #[serde(default)]
    launcher_title: String,
    #[serde(default)]
    launcher_subtitle: String,
    #[serde(default)]
    launcher_window_title: String,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SkillSection {
    subtitle: String,
    opens: String,
    items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InfoEntry {
    id: String,
    title: String,
    subtitle: String,
    keywords: Vec<String>,
    opens: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppCatalog {
    schema_version: u32,
    apps: Vec<AppEntry>,
    skills: SkillSection,
    #[serde(default)]
    info: Vec<InfoEntry>,
}

fn validate(catalog: &AppCatalog, path: &str) {
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {path}: expected 1 found {}",
            catalog.schema_version
        );
    }

    let mut keys = HashSet::new();
    for app in &catalog.apps {
        if app.key.trim().is_empty() {
            panic!("app entry with empty key in {path}");
        }
        if !keys.insert(app.key.as_str()) {
            panic!("duplicate app key `{}` in {path}", app.key);
        }
        if app.dock_title.trim().is_empty() {
            panic!("app `{}` has an empty dock_title in {path}", app.key);
        }
        if app.in_launcher
            && (app.launcher_title.trim().is_empty()
                || app.launcher_window_title.trim().is_empty())
        {
            panic!(
                "launcher app `{}` needs launcher_title and launcher_window_title in {path}",
                app.key
            );
        }
    }

    if !keys.contains(catalog.skills.opens.as_str()) {
        panic!(
            "skills open unknown app `{}` in {path}",
            catalog.skills.opens
        );
    }

    let mut info_ids = HashSet::new();
    for info in &catalog.info {
        if !info_ids.insert(info.id.as_str()) {
            panic!("duplicate info id `{}` in {path}", info.id);
        }
        if info.title.trim().is_empty() {
            panic!("info entry `{}` has an empty title in {path}", info.id);
        }
        if !keys.contains(info.opens.as_str()) {
            panic!(
                "info entry `{}` opens unknown app `{}` in {path}",
                info.id, info.opens
            );
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let display = path.display().to_string();
    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {display}: {err}"));
    let catalog: AppCatalog =
        toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {display}: {err}"));
    validate(&catalog, &display);

    let json = serde_json::to_string_pretty(&catalog).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated app catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
