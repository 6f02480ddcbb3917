//! # Saved Calculation Store
//!
//! File-backed persistence for calculation snapshots: a single JSON array
//! of [`SavedCalculationItem`] records, newest first.
//!
//! Saves are atomic (write to a temp file, then rename) so a crash cannot
//! leave a half-written project file. There is no file locking: this is a
//! single-user tool and last-write-wins is the accepted behavior.
//!
//! Loading is lenient to match the save path: a missing or unreadable file
//! reads as an empty project rather than an error.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::calculations::CalculatorKind;
use crate::errors::{CalcError, CalcResult};
use crate::inputs::CalculationInputs;
use crate::results::CalculationResults;

/// One saved calculation: the inputs as entered and the results they
/// produced, plus identification for the project list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculationItem {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Calculator display title (e.g. "Rectangular/Square Column")
    #[serde(rename = "type")]
    pub calc_type: String,
    /// Free-text description entered by the user
    pub description: String,
    pub inputs: CalculationInputs,
    pub results: CalculationResults,
}

impl SavedCalculationItem {
    /// Snapshot a calculation under a fresh id and the current time.
    pub fn new(
        kind: CalculatorKind,
        description: impl Into<String>,
        inputs: CalculationInputs,
        results: CalculationResults,
    ) -> Self {
        SavedCalculationItem {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            calc_type: kind.title().to_string(),
            description: description.into(),
            inputs,
            results,
        }
    }
}

/// Serialize `value` as pretty JSON and write it atomically: temp file in
/// the same directory, then rename over the target.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CalcError::serialization(e.to_string()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json).map_err(|e| {
        CalcError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;
    fs::rename(&tmp_path, path)
        .map_err(|e| CalcError::file_error("rename", path.display().to_string(), e.to_string()))
}

/// File-backed collection of saved calculations.
#[derive(Debug, Clone)]
pub struct CalculationStore {
    path: PathBuf,
}

impl CalculationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CalculationStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every saved item. A missing or unreadable file reads as empty.
    pub fn load(&self) -> Vec<SavedCalculationItem> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(error) => {
                    warn!(%error, path = %self.path.display(), "unreadable project file, reading as empty");
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        }
    }

    /// Prepend a new item (newest first) and persist.
    pub fn add(&self, item: SavedCalculationItem) -> CalcResult<()> {
        let mut items = self.load();
        items.insert(0, item);
        write_json_atomic(&self.path, &items)
    }

    /// Remove the item with the given id, persist, and return the
    /// remaining items.
    pub fn delete(&self, id: &Uuid) -> CalcResult<Vec<SavedCalculationItem>> {
        let mut items = self.load();
        items.retain(|item| item.id != *id);
        write_json_atomic(&self.path, &items)?;
        Ok(items)
    }

    /// Replace the whole collection (project import).
    pub fn overwrite(&self, items: &[SavedCalculationItem]) -> CalcResult<()> {
        write_json_atomic(&self.path, &items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate_bracket_corbel;
    use crate::units::{ForceUnit, LengthUnit, StressUnit};

    fn temp_store(name: &str) -> CalculationStore {
        let path = std::env::temp_dir().join(format!(
            "civilcalc_store_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        CalculationStore::new(path)
    }

    fn sample_item(description: &str) -> SavedCalculationItem {
        let inputs = CalculationInputs {
            effective_depth: Some(400.0),
            effective_depth_unit: Some(LengthUnit::Millimeters),
            shear_span: Some(200.0),
            shear_span_unit: Some(LengthUnit::Millimeters),
            applied_load: Some(150.0),
            applied_load_unit: Some(ForceUnit::Kilonewtons),
            width: Some(300.0),
            width_unit: Some(LengthUnit::Millimeters),
            concrete_strength: Some(25.0),
            concrete_strength_unit: Some(StressUnit::Megapascals),
            steel_yield_strength: Some(420.0),
            steel_yield_strength_unit: Some(StressUnit::Megapascals),
            ..Default::default()
        };
        let results = calculate_bracket_corbel(&inputs);
        SavedCalculationItem::new(CalculatorKind::BracketCorbel, description, inputs, results)
    }

    #[test]
    fn test_empty_store_loads_empty() {
        let store = temp_store("empty");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let store = temp_store("prepend");
        store.add(sample_item("first")).unwrap();
        store.add(sample_item("second")).unwrap();
        let items = store.load();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "second");
        assert_eq!(items[1].description, "first");
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_delete_by_id() {
        let store = temp_store("delete");
        let keep = sample_item("keep");
        let drop = sample_item("drop");
        let drop_id = drop.id;
        store.add(keep).unwrap();
        store.add(drop).unwrap();
        let remaining = store.delete(&drop_id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description, "keep");
        assert_eq!(store.load().len(), 1);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_overwrite_replaces_collection() {
        let store = temp_store("overwrite");
        store.add(sample_item("old")).unwrap();
        let replacement = vec![sample_item("imported")];
        store.overwrite(&replacement).unwrap();
        let items = store.load();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "imported");
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_snapshot_roundtrip_preserves_text_contract() {
        let store = temp_store("roundtrip");
        let item = sample_item("corbel at grid B-4");
        let main_area = item.results.main_steel_area.unwrap();
        store.add(item).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        // The snapshot file carries the legacy formatted-text results and
        // camelCase keys
        assert!(raw.contains("\"type\": \"Bracket & Corbel Design\""));
        assert!(raw.contains("\"mainSteelArea\": \"476.19 mm²\""));

        let loaded = store.load();
        let reloaded_area = loaded[0].results.main_steel_area.unwrap();
        assert_eq!(reloaded_area.unit, main_area.unit);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let store = temp_store("corrupt");
        fs::write(store.path(), "[{broken").unwrap();
        assert!(store.load().is_empty());
        let _ = fs::remove_file(store.path());
    }
}
