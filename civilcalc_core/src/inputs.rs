//! # Calculation Inputs
//!
//! One flat, fully-optional input record shared by every calculator, plus
//! the selector enums and the field-keyed validation error map.
//!
//! A numeric field and its unit-tag field are always read together; field
//! names serialize in camelCase because saved snapshots and the report
//! layer consume the original key names.
//!
//! ## Example
//!
//! ```rust
//! use civilcalc_core::inputs::CalculationInputs;
//! use civilcalc_core::units::{DensityUnit, LengthUnit};
//!
//! let inputs = CalculationInputs {
//!     width: Some(400.0),
//!     width_unit: Some(LengthUnit::Millimeters),
//!     depth: Some(400.0),
//!     depth_unit: Some(LengthUnit::Millimeters),
//!     height: Some(3.0),
//!     height_unit: Some(LengthUnit::Meters),
//!     concrete_unit_weight: Some(2400.0),
//!     concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
//!     ..Default::default()
//! };
//! assert!(inputs.span.is_none());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::units::{
    DensityUnit, ForceUnit, LengthUnit, PressureUnit, SoilUnitWeightUnit, StressUnit,
};

/// Column/circular-column transverse reinforcement style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransverseType {
    Tied,
    Spiral,
    Stirrup,
}

/// Wall curtain count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReinforcementLayers {
    Single,
    Double,
}

/// Anchor installation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorType {
    #[serde(rename = "cast-in")]
    CastIn,
    #[serde(rename = "adhesive")]
    Adhesive,
    #[serde(rename = "mechanical")]
    Mechanical,
}

/// Diaphragm analysis idealization (carried on the input record for the
/// report sheet; it does not enter the quantity formulas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelingMethod {
    #[serde(rename = "flexible")]
    Flexible,
    #[serde(rename = "rigid")]
    Rigid,
    #[serde(rename = "semi-rigid")]
    SemiRigid,
}

/// Flat record of every calculator input. Each calculator reads only its
/// own subset; everything else stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationInputs {
    // === Common dimensions ===
    /// Web width for beams, plan width for footings/columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_unit: Option<LengthUnit>,
    /// Overall depth for columns/beams, thickness for walls/slabs/footings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_unit: Option<LengthUnit>,
    /// Height for columns/walls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_unit: Option<LengthUnit>,
    /// Span for beams/slabs (and column spacing for combined footings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_unit: Option<LengthUnit>,
    /// Length for slabs/foundations/walls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_unit: Option<LengthUnit>,
    /// Diameter for circular columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diameter_unit: Option<LengthUnit>,

    // === T-beam ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flange_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flange_width_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flange_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flange_thickness_unit: Option<LengthUnit>,

    // === Material properties ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_unit_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_unit_weight_unit: Option<DensityUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_strength_unit: Option<StressUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steel_yield_strength: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steel_yield_strength_unit: Option<StressUnit>,

    // === Foundation material properties ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_bearing_pressure: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_bearing_pressure_unit: Option<PressureUnit>,

    // === Column/wall longitudinal reinforcement ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitudinal_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitudinal_bar_count: Option<u32>,

    // === Beam longitudinal reinforcement ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_bar_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_bar_count: Option<u32>,

    // === Slab reinforcement ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_bar_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_bar_spacing_unit: Option<LengthUnit>,
    // Two-way slab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_dir_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_dir_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_dir_bar_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_dir_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_dir_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_dir_bar_spacing_unit: Option<LengthUnit>,

    // === Foundation reinforcement ===
    /// Top steel is optional; the UI sends the literal designation "None"
    /// when the mat has no top layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_top_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_top_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_top_bar_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_bottom_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_bottom_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_bottom_bar_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dowel_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dowel_bar_count: Option<u32>,

    // === Pile cap ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pile_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pile_diameter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pile_diameter_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pile_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pile_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_edge_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_edge_distance_unit: Option<LengthUnit>,

    // === Wall reinforcement ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_bar_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_bar_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reinforcement_layers: Option<ReinforcementLayers>,

    // === Transverse reinforcement ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transverse_type: Option<TransverseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transverse_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transverse_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transverse_spacing_unit: Option<LengthUnit>,
    /// Spiral pitch (circular columns)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_unit: Option<LengthUnit>,

    // === Diaphragm ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diaphragm_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diaphragm_thickness_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_bar_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_bar_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrinkage_bar_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrinkage_bar_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrinkage_bar_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modeling_method: Option<ModelingMethod>,

    // === Bracket/corbel ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_depth_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_span: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_span_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_load_unit: Option<ForceUnit>,

    // === Beam-column joint ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beam_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beam_depth_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_depth_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factored_shear_vu: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factored_shear_vu_unit: Option<ForceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_effective_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_effective_width_unit: Option<LengthUnit>,

    // === Anchorage ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_type: Option<AnchorType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedment_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedment_depth_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_distance_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_spacing_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factored_tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factored_tension_unit: Option<ForceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factored_shear: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factored_shear_unit: Option<ForceUnit>,

    // === Retaining wall ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_height_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_thickness_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_thickness_top_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_thickness_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_thickness_bottom_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heel_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heel_length_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toe_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toe_length_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_thickness_unit: Option<LengthUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_unit_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_unit_weight_unit: Option<SoilUnitWeightUnit>,
    /// Internal friction angle in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_friction_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge_load: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge_load_unit: Option<PressureUnit>,
}

/// Field-keyed validation messages. Empty means the inputs may be handed to
/// the matching calculation function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against an input field. The first message wins if a
    /// field is reported twice.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for ValidationErrors {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    #[test]
    fn test_inputs_serialize_camel_case() {
        let inputs = CalculationInputs {
            width: Some(400.0),
            width_unit: Some(LengthUnit::Millimeters),
            longitudinal_bar_size: Some("16mm".to_string()),
            longitudinal_bar_count: Some(8),
            ..Default::default()
        };
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("\"widthUnit\":\"mm\""));
        assert!(json.contains("\"longitudinalBarCount\":8"));
        // Unset fields are not serialized
        assert!(!json.contains("flangeWidth"));
    }

    #[test]
    fn test_inputs_roundtrip() {
        let inputs = CalculationInputs {
            diameter: Some(500.0),
            diameter_unit: Some(LengthUnit::Millimeters),
            transverse_type: Some(TransverseType::Spiral),
            pitch: Some(75.0),
            pitch_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        };
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("\"transverseType\":\"spiral\""));
        let roundtrip: CalculationInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(inputs, roundtrip);
    }

    #[test]
    fn test_partial_snapshot_deserializes() {
        // Snapshots saved by older versions carry only a subset of keys
        let json = r#"{"width":300.0,"widthUnit":"mm","anchorType":"cast-in"}"#;
        let inputs: CalculationInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.width, Some(300.0));
        assert_eq!(inputs.anchor_type, Some(AnchorType::CastIn));
        assert!(inputs.depth.is_none());
    }

    #[test]
    fn test_validation_errors_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("pitch", "Must be a positive number");
        errors.add("pitch", "Spiral pitch must be between 25 and 75 mm");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("pitch"), Some("Must be a positive number"));
    }
}
