//! # Global Settings
//!
//! User-level preferences persisted as a small JSON file: the active unit
//! system (which only selects default input values — every calculation
//! works from explicit unit tags), project identification for report
//! headers, and UI theme/locale.
//!
//! Loading is lenient: a missing or unreadable file yields the defaults,
//! and a partial file (saved by an older version) is merged over them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::CalcResult;
use crate::store::write_json_atomic;

/// Which set of default input values new calculations start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
}

/// User preferences shared by every calculator surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub unit_system: UnitSystem,
    pub project_name: String,
    pub project_number: String,
    pub theme: Theme,
    pub locale: Locale,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            unit_system: UnitSystem::Metric,
            project_name: "My Project".to_string(),
            project_number: "PROJ-001".to_string(),
            theme: Theme::Dark,
            locale: Locale::En,
        }
    }
}

/// Load settings from `path`, falling back to the defaults when the file
/// is missing or unreadable.
pub fn load_settings(path: &Path) -> GlobalSettings {
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(%error, path = %path.display(), "unreadable settings file, using defaults");
                GlobalSettings::default()
            }
        },
        Err(_) => GlobalSettings::default(),
    }
}

/// Save settings to `path` (atomic write).
pub fn save_settings(path: &Path, settings: &GlobalSettings) -> CalcResult<()> {
    write_json_atomic(path, settings)
}
