//! # Foundation Quantities
//!
//! Isolated, combined and strip footings plus pile caps.
//!
//! Mats are itemized as two schedule lines per layer (lengthwise and
//! widthwise runs of the same bar); the lines are intentionally not merged
//! into one group. Formwork is the edge shutter only; the bearing face is
//! cast against ground.

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::results::{CalculationResults, Quantity};
use crate::schedule::{RebarTally, ShapeCode};
use crate::units::{density_kg_m3, length_m};

use super::{require_positive, POSITIVE_NUMBER};

/// Column starter dowels for isolated footings: 600 mm embedment plus
/// 600 mm projection
const ISOLATED_DOWEL_LENGTH_M: f64 = 1.2;

/// Column starter dowels for pile caps (deeper embedment)
const PILE_CAP_DOWEL_LENGTH_M: f64 = 1.5;

/// The UI sends this designation when a mat has no top layer
const NO_BAR: &str = "None";

/// Top-layer spacing, zeroed when the layer is switched off
fn top_layer_spacing_m(inputs: &CalculationInputs) -> f64 {
    if inputs.footing_top_bar_size.as_deref() != Some(NO_BAR) {
        length_m(inputs.footing_top_bar_spacing, inputs.footing_top_bar_spacing_unit)
    } else {
        0.0
    }
}

/// Add a two-way mat layer: lengthwise runs counted across the width,
/// widthwise runs counted across the length. Returns the layer weight.
fn add_mat_layer(
    tally: &mut RebarTally,
    bar_size: Option<&str>,
    spacing_m: f64,
    length_m_: f64,
    width_m: f64,
    lengthwise_description: &str,
    widthwise_description: &str,
) -> f64 {
    if spacing_m <= 0.0 {
        return 0.0;
    }
    let lengthwise = tally.add_spaced(
        bar_size,
        width_m,
        spacing_m,
        length_m_,
        ShapeCode::Straight,
        lengthwise_description,
    );
    let widthwise = tally.add_spaced(
        bar_size,
        length_m_,
        spacing_m,
        width_m,
        ShapeCode::Straight,
        widthwise_description,
    );
    lengthwise + widthwise
}

/// Concrete, formwork and steel quantities for an isolated (spread)
/// footing with optional top mat and column dowels.
pub fn calculate_isolated_footing(inputs: &CalculationInputs) -> CalculationResults {
    let length_m_ = length_m(inputs.length, inputs.length_unit);
    let width_m = length_m(inputs.width, inputs.width_unit);
    let thickness_m = length_m(inputs.depth, inputs.depth_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let bottom_spacing_m = length_m(
        inputs.footing_bottom_bar_spacing,
        inputs.footing_bottom_bar_spacing_unit,
    );
    let top_spacing_m = top_layer_spacing_m(inputs);

    let concrete_volume_m3 = length_m_ * width_m * thickness_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    let formwork_area_m2 = 2.0 * (length_m_ + width_m) * thickness_m;

    let mut tally = RebarTally::new();

    let bottom_weight_kg = add_mat_layer(
        &mut tally,
        inputs.footing_bottom_bar_size.as_deref(),
        bottom_spacing_m,
        length_m_,
        width_m,
        "Bottom Bars (Lengthwise)",
        "Bottom Bars (Widthwise)",
    );
    let top_weight_kg = add_mat_layer(
        &mut tally,
        inputs.footing_top_bar_size.as_deref(),
        top_spacing_m,
        length_m_,
        width_m,
        "Top Bars (Lengthwise)",
        "Top Bars (Widthwise)",
    );
    let dowel_weight_kg = tally.add_counted(
        inputs.dowel_bar_size.as_deref(),
        inputs.dowel_bar_count.unwrap_or(0),
        ISOLATED_DOWEL_LENGTH_M,
        ShapeCode::LBend,
        "Column Dowels",
    );

    let total_steel_weight_kg = bottom_weight_kg + top_weight_kg + dowel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        bottom_reinforcement_weight: Some(Quantity::kg(bottom_weight_kg)),
        top_reinforcement_weight: Some(Quantity::kg(top_weight_kg)),
        dowel_weight: Some(Quantity::kg(dowel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the isolated footing.
pub fn validate_isolated_footing(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "length", inputs.length);
    require_positive(&mut errors, "width", inputs.width);
    require_positive(&mut errors, "depth", inputs.depth);
    if !inputs.footing_bottom_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("footingBottomBarSpacing", POSITIVE_NUMBER);
    }
    errors
}

/// Concrete, formwork and steel quantities for a combined footing
/// (two-column rectangular mat; the `span` input records the column
/// spacing for the report sheet).
pub fn calculate_combined_footing(inputs: &CalculationInputs) -> CalculationResults {
    let length_m_ = length_m(inputs.length, inputs.length_unit);
    let width_m = length_m(inputs.width, inputs.width_unit);
    let thickness_m = length_m(inputs.depth, inputs.depth_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let bottom_spacing_m = length_m(
        inputs.footing_bottom_bar_spacing,
        inputs.footing_bottom_bar_spacing_unit,
    );
    let top_spacing_m = top_layer_spacing_m(inputs);

    let concrete_volume_m3 = length_m_ * width_m * thickness_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    let formwork_area_m2 = 2.0 * (length_m_ + width_m) * thickness_m;

    let mut tally = RebarTally::new();

    let bottom_weight_kg = add_mat_layer(
        &mut tally,
        inputs.footing_bottom_bar_size.as_deref(),
        bottom_spacing_m,
        length_m_,
        width_m,
        "Bottom Bars (Longitudinal)",
        "Bottom Bars (Transverse)",
    );
    let top_weight_kg = add_mat_layer(
        &mut tally,
        inputs.footing_top_bar_size.as_deref(),
        top_spacing_m,
        length_m_,
        width_m,
        "Top Bars (Longitudinal)",
        "Top Bars (Transverse)",
    );

    let total_steel_weight_kg = bottom_weight_kg + top_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        bottom_reinforcement_weight: Some(Quantity::kg(bottom_weight_kg)),
        top_reinforcement_weight: Some(Quantity::kg(top_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the combined footing.
pub fn validate_combined_footing(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "length", inputs.length);
    require_positive(&mut errors, "width", inputs.width);
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "span", inputs.span);
    if !inputs.footing_bottom_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("footingBottomBarSpacing", POSITIVE_NUMBER);
    }
    errors
}

/// Concrete, formwork and steel quantities for a strip (wall) footing.
/// Main bars run transverse at the given spacing along the strip;
/// distribution bars run the full length.
pub fn calculate_strip_footing(inputs: &CalculationInputs) -> CalculationResults {
    let width_m = length_m(inputs.width, inputs.width_unit);
    let thickness_m = length_m(inputs.depth, inputs.depth_unit);
    let length_m_ = length_m(inputs.length, inputs.length_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let main_spacing_m = length_m(inputs.main_bar_spacing, inputs.main_bar_spacing_unit);
    let temp_spacing_m = length_m(inputs.temp_bar_spacing, inputs.temp_bar_spacing_unit);

    let concrete_volume_m3 = width_m * thickness_m * length_m_;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    // Two strip edges
    let formwork_area_m2 = 2.0 * length_m_ * thickness_m;

    let mut tally = RebarTally::new();

    let main_steel_weight_kg = tally.add_spaced(
        inputs.main_bar_size.as_deref(),
        length_m_,
        main_spacing_m,
        width_m,
        ShapeCode::Straight,
        "Transverse Bars (Main)",
    );
    let temp_steel_weight_kg = tally.add_spaced(
        inputs.temp_bar_size.as_deref(),
        width_m,
        temp_spacing_m,
        length_m_,
        ShapeCode::Straight,
        "Longitudinal Bars (Distribution)",
    );

    let total_steel_weight_kg = main_steel_weight_kg + temp_steel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        main_steel_weight: Some(Quantity::kg(main_steel_weight_kg)),
        temp_steel_weight: Some(Quantity::kg(temp_steel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the strip footing.
pub fn validate_strip_footing(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "width", inputs.width);
    require_positive(&mut errors, "length", inputs.length);
    if !inputs.main_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("mainBarSpacing", POSITIVE_NUMBER);
    }
    if !inputs.temp_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("tempBarSpacing", POSITIVE_NUMBER);
    }
    errors
}

/// Concrete, formwork and steel quantities for a pile cap (mat layers plus
/// column dowels; the pile layout inputs drive validation only).
pub fn calculate_pile_cap_foundation(inputs: &CalculationInputs) -> CalculationResults {
    let length_m_ = length_m(inputs.length, inputs.length_unit);
    let width_m = length_m(inputs.width, inputs.width_unit);
    let thickness_m = length_m(inputs.depth, inputs.depth_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let bottom_spacing_m = length_m(
        inputs.footing_bottom_bar_spacing,
        inputs.footing_bottom_bar_spacing_unit,
    );
    let top_spacing_m = top_layer_spacing_m(inputs);

    let concrete_volume_m3 = length_m_ * width_m * thickness_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    let formwork_area_m2 = 2.0 * (length_m_ + width_m) * thickness_m;

    let mut tally = RebarTally::new();

    let bottom_weight_kg = add_mat_layer(
        &mut tally,
        inputs.footing_bottom_bar_size.as_deref(),
        bottom_spacing_m,
        length_m_,
        width_m,
        "Bottom Bars (Lengthwise)",
        "Bottom Bars (Widthwise)",
    );
    let top_weight_kg = add_mat_layer(
        &mut tally,
        inputs.footing_top_bar_size.as_deref(),
        top_spacing_m,
        length_m_,
        width_m,
        "Top Bars (Lengthwise)",
        "Top Bars (Widthwise)",
    );
    let dowel_weight_kg = tally.add_counted(
        inputs.dowel_bar_size.as_deref(),
        inputs.dowel_bar_count.unwrap_or(0),
        PILE_CAP_DOWEL_LENGTH_M,
        ShapeCode::LBend,
        "Column Dowels",
    );

    let total_steel_weight_kg = bottom_weight_kg + top_weight_kg + dowel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        bottom_reinforcement_weight: Some(Quantity::kg(bottom_weight_kg)),
        top_reinforcement_weight: Some(Quantity::kg(top_weight_kg)),
        dowel_weight: Some(Quantity::kg(dowel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the pile cap, including the plan fit of the pile
/// group (spacing plus two edge distances must fit in the cap width).
pub fn validate_pile_cap_foundation(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "length", inputs.length);
    require_positive(&mut errors, "width", inputs.width);
    require_positive(&mut errors, "depth", inputs.depth);
    if !inputs.pile_count.is_some_and(|c| c > 0) {
        errors.add("pileCount", POSITIVE_NUMBER);
    }
    require_positive(&mut errors, "pileSpacing", inputs.pile_spacing);
    require_positive(&mut errors, "capEdgeDistance", inputs.cap_edge_distance);

    if inputs.pile_count.is_some_and(|c| c > 1)
        && inputs.pile_spacing.is_some()
        && inputs.cap_edge_distance.is_some()
        && inputs.width.is_some()
    {
        let spacing_m = length_m(inputs.pile_spacing, inputs.pile_spacing_unit);
        let edge_m = length_m(inputs.cap_edge_distance, inputs.cap_edge_distance_unit);
        let width_m = length_m(inputs.width, inputs.width_unit);
        if spacing_m + 2.0 * edge_m > width_m {
            errors.add("pileSpacing", "Pile group does not fit within the cap width");
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DensityUnit, LengthUnit};

    fn metric_pile_cap() -> CalculationInputs {
        CalculationInputs {
            length: Some(2000.0),
            length_unit: Some(LengthUnit::Millimeters),
            width: Some(2000.0),
            width_unit: Some(LengthUnit::Millimeters),
            depth: Some(800.0),
            depth_unit: Some(LengthUnit::Millimeters),
            pile_count: Some(4),
            pile_diameter: Some(500.0),
            pile_diameter_unit: Some(LengthUnit::Millimeters),
            pile_spacing: Some(1500.0),
            pile_spacing_unit: Some(LengthUnit::Millimeters),
            cap_edge_distance: Some(250.0),
            cap_edge_distance_unit: Some(LengthUnit::Millimeters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            footing_bottom_bar_size: Some("20mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_top_bar_size: Some("16mm".to_string()),
            footing_top_bar_spacing: Some(250.0),
            footing_top_bar_spacing_unit: Some(LengthUnit::Millimeters),
            dowel_bar_size: Some("20mm".to_string()),
            dowel_bar_count: Some(8),
            ..Default::default()
        }
    }

    #[test]
    fn test_metric_pile_cap() {
        let results = calculate_pile_cap_foundation(&metric_pile_cap());

        // V = 2 × 2 × 0.8 = 3.2 m³, edge shutter = 2 × 4 × 0.8 = 6.4 m²
        assert!((results.concrete_volume.unwrap().magnitude - 3.2).abs() < 1e-9);
        assert!((results.concrete_weight.unwrap().magnitude - 7680.0).abs() < 1e-6);
        assert!((results.formwork_area.unwrap().magnitude - 6.4).abs() < 1e-9);
        // Bottom 20mm@150: 14 bars each way × 2 m = 56 m × 2.466 = 138.096
        assert!((results.bottom_reinforcement_weight.unwrap().magnitude - 138.096).abs() < 1e-3);
        // Top 16mm@250: 8 bars each way × 2 m = 32 m × 1.578 = 50.496
        assert!((results.top_reinforcement_weight.unwrap().magnitude - 50.496).abs() < 1e-3);
        // Dowels: 8 × 1.5 m × 2.466 = 29.592
        assert!((results.dowel_weight.unwrap().magnitude - 29.592).abs() < 1e-9);
        assert!((results.total_steel_weight.unwrap().magnitude - 218.184).abs() < 1e-3);
    }

    #[test]
    fn test_pile_cap_schedule_lines() {
        let results = calculate_pile_cap_foundation(&metric_pile_cap());
        // Two bottom lines, two top lines, one dowel line
        assert_eq!(results.detailed_reinforcement.len(), 5);
        let dowels = results.detailed_reinforcement.last().unwrap();
        assert_eq!(dowels.shape_code, ShapeCode::LBend);
        assert!((dowels.length - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_validate_pile_cap_group_fit() {
        assert!(validate_pile_cap_foundation(&metric_pile_cap()).is_empty());

        // 1.8 m spacing + 2 × 0.25 m edges = 2.3 m > 2.0 m cap
        let mut inputs = metric_pile_cap();
        inputs.pile_spacing = Some(1800.0);
        let errors = validate_pile_cap_foundation(&inputs);
        assert_eq!(
            errors.get("pileSpacing"),
            Some("Pile group does not fit within the cap width")
        );

        // A single pile skips the fit check
        let mut inputs = metric_pile_cap();
        inputs.pile_count = Some(1);
        inputs.pile_spacing = Some(1800.0);
        assert!(validate_pile_cap_foundation(&inputs).is_empty());
    }

    fn metric_isolated_footing() -> CalculationInputs {
        CalculationInputs {
            length: Some(2.5),
            length_unit: Some(LengthUnit::Meters),
            width: Some(2.5),
            width_unit: Some(LengthUnit::Meters),
            depth: Some(500.0),
            depth_unit: Some(LengthUnit::Millimeters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            footing_bottom_bar_size: Some("16mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_top_bar_size: Some("None".to_string()),
            dowel_bar_size: Some("20mm".to_string()),
            dowel_bar_count: Some(8),
            ..Default::default()
        }
    }

    #[test]
    fn test_metric_isolated_footing() {
        let results = calculate_isolated_footing(&metric_isolated_footing());

        assert!((results.concrete_volume.unwrap().magnitude - 3.125).abs() < 1e-9);
        assert!((results.formwork_area.unwrap().magnitude - 5.0).abs() < 1e-9);
        // Bottom 16mm@150: 17 each way × 2.5 m = 85 m × 1.578 = 134.13
        assert!((results.bottom_reinforcement_weight.unwrap().magnitude - 134.13).abs() < 1e-2);
        // "None" top layer contributes nothing
        assert_eq!(results.top_reinforcement_weight.unwrap().magnitude, 0.0);
        // Dowels: 8 × 1.2 m × 2.466 = 23.6736
        assert!((results.dowel_weight.unwrap().magnitude - 23.6736).abs() < 1e-9);
        assert!((results.total_steel_weight.unwrap().magnitude - 157.8036).abs() < 1e-2);
    }

    #[test]
    fn test_isolated_footing_none_top_layer_has_no_lines() {
        let results = calculate_isolated_footing(&metric_isolated_footing());
        // Two bottom lines + dowels, no top lines
        assert_eq!(results.detailed_reinforcement.len(), 3);
        assert!(results
            .detailed_reinforcement
            .iter()
            .all(|line| !line.description.starts_with("Top")));
    }

    #[test]
    fn test_metric_combined_footing() {
        let inputs = CalculationInputs {
            length: Some(6.0),
            length_unit: Some(LengthUnit::Meters),
            width: Some(2.5),
            width_unit: Some(LengthUnit::Meters),
            depth: Some(600.0),
            depth_unit: Some(LengthUnit::Millimeters),
            span: Some(4.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            footing_bottom_bar_size: Some("20mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_top_bar_size: Some("16mm".to_string()),
            footing_top_bar_spacing: Some(200.0),
            footing_top_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        };
        let results = calculate_combined_footing(&inputs);

        assert!((results.concrete_volume.unwrap().magnitude - 9.0).abs() < 1e-9);
        assert!((results.concrete_weight.unwrap().magnitude - 21600.0).abs() < 1e-6);
        assert!((results.formwork_area.unwrap().magnitude - 10.2).abs() < 1e-9);
        // Bottom @150: 17 × 6 m + 40 × 2.5 m = 202 m × 2.466 = 498.132
        assert!((results.bottom_reinforcement_weight.unwrap().magnitude - 498.132).abs() < 1e-3);
        // Top @200: 13 × 6 m + 30 × 2.5 m = 153 m × 1.578 = 241.434
        assert!((results.top_reinforcement_weight.unwrap().magnitude - 241.434).abs() < 1e-3);
        assert!((results.total_steel_weight.unwrap().magnitude - 739.566).abs() < 1e-3);
    }

    #[test]
    fn test_validate_combined_footing_requires_column_spacing() {
        let errors = validate_combined_footing(&CalculationInputs::default());
        assert!(errors.contains("span"));
    }

    #[test]
    fn test_metric_strip_footing() {
        let inputs = CalculationInputs {
            depth: Some(400.0),
            depth_unit: Some(LengthUnit::Millimeters),
            width: Some(800.0),
            width_unit: Some(LengthUnit::Millimeters),
            length: Some(10.0),
            length_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            main_bar_size: Some("12mm".to_string()),
            main_bar_spacing: Some(200.0),
            main_bar_spacing_unit: Some(LengthUnit::Millimeters),
            temp_bar_size: Some("12mm".to_string()),
            temp_bar_spacing: Some(250.0),
            temp_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        };
        let results = calculate_strip_footing(&inputs);

        assert!((results.concrete_volume.unwrap().magnitude - 3.2).abs() < 1e-9);
        // Two edges: 2 × 10 × 0.4 = 8 m²
        assert!((results.formwork_area.unwrap().magnitude - 8.0).abs() < 1e-9);
        // Transverse: ceil(10/0.2) = 50 × 0.8 m × 0.888 = 35.52
        assert!((results.main_steel_weight.unwrap().magnitude - 35.52).abs() < 1e-9);
        // Distribution: ceil(0.8/0.25) = 4 × 10 m × 0.888 = 35.52
        assert!((results.temp_steel_weight.unwrap().magnitude - 35.52).abs() < 1e-9);
        assert!((results.total_steel_weight.unwrap().magnitude - 71.04).abs() < 1e-9);
    }

    #[test]
    fn test_validate_strip_footing() {
        let errors = validate_strip_footing(&CalculationInputs::default());
        for field in ["depth", "width", "length", "mainBarSpacing", "tempBarSpacing"] {
            assert!(errors.contains(field), "missing error for {field}");
        }
    }
}
