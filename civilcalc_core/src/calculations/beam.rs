//! # Beam Quantities
//!
//! Rectangular and T-section beam concrete, formwork and reinforcement
//! takeoff.
//!
//! Formwork counts the exposed faces only: soffit plus both web sides for
//! a rectangular beam; web sides, overhang soffits and flange edges for a
//! T-beam (the flange top is the slab and is never formed).

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::results::{CalculationResults, Quantity};
use crate::schedule::{RebarTally, ShapeCode};
use crate::units::{density_kg_m3, length_m};

use super::{
    require_min_count, require_positive, CONCRETE_COVER_M, POSITIVE_NUMBER, TIE_HOOK_ALLOWANCE_M,
};

/// Concrete, formwork and steel quantities for a rectangular beam.
pub fn calculate_rectangular_beam(inputs: &CalculationInputs) -> CalculationResults {
    let width_m = length_m(inputs.width, inputs.width_unit);
    let depth_m = length_m(inputs.depth, inputs.depth_unit);
    let span_m = length_m(inputs.span, inputs.span_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let stirrup_spacing_m = length_m(inputs.transverse_spacing, inputs.transverse_spacing_unit);

    let concrete_volume_m3 = width_m * depth_m * span_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    // Soffit + two sides
    let formwork_area_m2 = (width_m * span_m) + (2.0 * depth_m * span_m);

    let mut tally = RebarTally::new();

    let top_steel_weight_kg = tally.add_counted(
        inputs.top_bar_size.as_deref(),
        inputs.top_bar_count.unwrap_or(0),
        span_m,
        ShapeCode::Straight,
        "Top Bars",
    );
    let bottom_steel_weight_kg = tally.add_counted(
        inputs.bottom_bar_size.as_deref(),
        inputs.bottom_bar_count.unwrap_or(0),
        span_m,
        ShapeCode::Straight,
        "Bottom Bars",
    );

    let stirrup_length_m = 2.0 * (width_m - 2.0 * CONCRETE_COVER_M)
        + 2.0 * (depth_m - 2.0 * CONCRETE_COVER_M)
        + TIE_HOOK_ALLOWANCE_M;
    let stirrup_steel_weight_kg = tally.add_spaced(
        inputs.transverse_bar_size.as_deref(),
        span_m,
        stirrup_spacing_m,
        stirrup_length_m,
        ShapeCode::Stirrup,
        "Stirrups",
    );

    let total_steel_weight_kg = top_steel_weight_kg + bottom_steel_weight_kg + stirrup_steel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        top_steel_weight: Some(Quantity::kg(top_steel_weight_kg)),
        bottom_steel_weight: Some(Quantity::kg(bottom_steel_weight_kg)),
        stirrup_steel_weight: Some(Quantity::kg(stirrup_steel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the rectangular beam.
pub fn validate_rectangular_beam(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "width", inputs.width);
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "span", inputs.span);
    require_min_count(&mut errors, "topBarCount", inputs.top_bar_count, 2);
    require_min_count(&mut errors, "bottomBarCount", inputs.bottom_bar_count, 2);
    if !inputs.transverse_spacing.is_some_and(|s| s > 0.0) {
        errors.add("transverseSpacing", POSITIVE_NUMBER);
    }
    errors
}

/// Concrete, formwork and steel quantities for a T-beam (web stem plus
/// flange). Stirrups wrap the web using the overall depth.
pub fn calculate_t_beam(inputs: &CalculationInputs) -> CalculationResults {
    let bw_m = length_m(inputs.width, inputs.width_unit);
    let h_m = length_m(inputs.depth, inputs.depth_unit);
    let bf_m = length_m(inputs.flange_width, inputs.flange_width_unit);
    let hf_m = length_m(inputs.flange_thickness, inputs.flange_thickness_unit);
    let span_m = length_m(inputs.span, inputs.span_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let stirrup_spacing_m = length_m(inputs.transverse_spacing, inputs.transverse_spacing_unit);

    let web_stem_area_m2 = bw_m * (h_m - hf_m);
    let flange_area_m2 = bf_m * hf_m;
    let concrete_volume_m3 = (web_stem_area_m2 + flange_area_m2) * span_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    // Web soffit + web sides + overhang soffits + flange edges
    let formwork_area_m2 = (bw_m + 2.0 * (h_m - hf_m) + (bf_m - bw_m) + 2.0 * hf_m) * span_m;

    let mut tally = RebarTally::new();

    let top_steel_weight_kg = tally.add_counted(
        inputs.top_bar_size.as_deref(),
        inputs.top_bar_count.unwrap_or(0),
        span_m,
        ShapeCode::Straight,
        "Top Bars",
    );
    let bottom_steel_weight_kg = tally.add_counted(
        inputs.bottom_bar_size.as_deref(),
        inputs.bottom_bar_count.unwrap_or(0),
        span_m,
        ShapeCode::Straight,
        "Bottom Bars",
    );

    let stirrup_length_m = 2.0 * (bw_m - 2.0 * CONCRETE_COVER_M)
        + 2.0 * (h_m - 2.0 * CONCRETE_COVER_M)
        + TIE_HOOK_ALLOWANCE_M;
    let stirrup_steel_weight_kg = tally.add_spaced(
        inputs.transverse_bar_size.as_deref(),
        span_m,
        stirrup_spacing_m,
        stirrup_length_m,
        ShapeCode::Stirrup,
        "Stirrups",
    );

    let total_steel_weight_kg = top_steel_weight_kg + bottom_steel_weight_kg + stirrup_steel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        top_steel_weight: Some(Quantity::kg(top_steel_weight_kg)),
        bottom_steel_weight: Some(Quantity::kg(bottom_steel_weight_kg)),
        stirrup_steel_weight: Some(Quantity::kg(stirrup_steel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the T-beam. The flange/web comparisons read the
/// raw magnitudes, so both dimensions are expected in the same unit.
pub fn validate_t_beam(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "width", inputs.width);
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "flangeWidth", inputs.flange_width);
    require_positive(&mut errors, "flangeThickness", inputs.flange_thickness);
    if let (Some(flange_width), Some(width)) = (inputs.flange_width, inputs.width) {
        if flange_width < width {
            errors.add("flangeWidth", "Flange must be at least as wide as the web");
        }
    }
    if let (Some(flange_thickness), Some(depth)) = (inputs.flange_thickness, inputs.depth) {
        if flange_thickness > depth {
            errors.add("flangeThickness", "Flange thickness cannot exceed overall depth");
        }
    }
    require_positive(&mut errors, "span", inputs.span);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DensityUnit, LengthUnit};

    fn metric_beam() -> CalculationInputs {
        CalculationInputs {
            width: Some(300.0),
            width_unit: Some(LengthUnit::Millimeters),
            depth: Some(500.0),
            depth_unit: Some(LengthUnit::Millimeters),
            span: Some(8.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            top_bar_size: Some("16mm".to_string()),
            top_bar_count: Some(3),
            bottom_bar_size: Some("20mm".to_string()),
            bottom_bar_count: Some(4),
            transverse_bar_size: Some("10mm".to_string()),
            transverse_spacing: Some(150.0),
            transverse_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        }
    }

    fn metric_t_beam() -> CalculationInputs {
        CalculationInputs {
            width: Some(300.0),
            width_unit: Some(LengthUnit::Millimeters),
            depth: Some(600.0),
            depth_unit: Some(LengthUnit::Millimeters),
            flange_width: Some(1200.0),
            flange_width_unit: Some(LengthUnit::Millimeters),
            flange_thickness: Some(150.0),
            flange_thickness_unit: Some(LengthUnit::Millimeters),
            span: Some(8.0),
            span_unit: Some(LengthUnit::Meters),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            top_bar_size: Some("16mm".to_string()),
            top_bar_count: Some(4),
            bottom_bar_size: Some("25mm".to_string()),
            bottom_bar_count: Some(4),
            transverse_bar_size: Some("10mm".to_string()),
            transverse_spacing: Some(175.0),
            transverse_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        }
    }

    #[test]
    fn test_metric_rectangular_beam() {
        let results = calculate_rectangular_beam(&metric_beam());

        // V = 0.3 × 0.5 × 8 = 1.2 m³, W = 2880 kg
        assert!((results.concrete_volume.unwrap().magnitude - 1.2).abs() < 1e-9);
        assert!((results.concrete_weight.unwrap().magnitude - 2880.0).abs() < 1e-6);
        // A = 0.3×8 + 2×0.5×8 = 10.4 m²
        assert!((results.formwork_area.unwrap().magnitude - 10.4).abs() < 1e-9);
        // Top: 3 × 8 × 1.578 = 37.872; bottom: 4 × 8 × 2.466 = 78.912
        assert!((results.top_steel_weight.unwrap().magnitude - 37.872).abs() < 1e-9);
        assert!((results.bottom_steel_weight.unwrap().magnitude - 78.912).abs() < 1e-9);
        // Stirrups: 2×0.22 + 2×0.42 + 0.2 = 1.48 m, 54 off, × 0.617 = 49.308
        assert!((results.stirrup_steel_weight.unwrap().magnitude - 49.3078).abs() < 1e-3);
        assert!((results.total_steel_weight.unwrap().magnitude - 166.0918).abs() < 1e-3);
    }

    #[test]
    fn test_rectangular_beam_schedule() {
        let results = calculate_rectangular_beam(&metric_beam());
        assert_eq!(results.detailed_reinforcement.len(), 3);
        let stirrups = &results.detailed_reinforcement[2];
        assert_eq!(stirrups.count, 54);
        assert_eq!(stirrups.shape_code, ShapeCode::Stirrup);
        assert!((stirrups.length - 1.48).abs() < 1e-9);
        // The beam emits no trace
        assert!(results.calculation_trace.is_empty());
    }

    #[test]
    fn test_tighter_stirrup_spacing_never_reduces_steel() {
        let coarse = calculate_rectangular_beam(&metric_beam());
        let mut inputs = metric_beam();
        inputs.transverse_spacing = Some(100.0);
        let fine = calculate_rectangular_beam(&inputs);
        assert!(
            fine.stirrup_steel_weight.unwrap().magnitude
                >= coarse.stirrup_steel_weight.unwrap().magnitude
        );
    }

    #[test]
    fn test_validate_rectangular_beam() {
        assert!(validate_rectangular_beam(&metric_beam()).is_empty());

        let mut inputs = metric_beam();
        inputs.top_bar_count = Some(1);
        inputs.transverse_spacing = Some(0.0);
        let errors = validate_rectangular_beam(&inputs);
        assert_eq!(errors.get("topBarCount"), Some("At least 2 bars required"));
        assert!(errors.contains("transverseSpacing"));
    }

    #[test]
    fn test_metric_t_beam() {
        let results = calculate_t_beam(&metric_t_beam());

        // Web stem 0.3 × 0.45 + flange 1.2 × 0.15 = 0.315 m², × 8 = 2.52 m³
        assert!((results.concrete_volume.unwrap().magnitude - 2.52).abs() < 1e-9);
        assert!((results.concrete_weight.unwrap().magnitude - 6048.0).abs() < 1e-6);
        // (0.3 + 0.9 + 0.9 + 0.3) × 8 = 19.2 m²
        assert!((results.formwork_area.unwrap().magnitude - 19.2).abs() < 1e-9);
        // Top 4 × 8 × 1.578 = 50.496; bottom 4 × 8 × 3.853 = 123.296
        assert!((results.top_steel_weight.unwrap().magnitude - 50.496).abs() < 1e-9);
        assert!((results.bottom_steel_weight.unwrap().magnitude - 123.296).abs() < 1e-9);
        // Stirrups wrap web × overall depth: 0.44 + 1.04 + 0.2 = 1.68 m,
        // ceil(8 / 0.175) = 46 off, × 0.617 = 47.682
        assert!((results.stirrup_steel_weight.unwrap().magnitude - 47.6818).abs() < 1e-3);
        assert!((results.total_steel_weight.unwrap().magnitude - 221.4738).abs() < 1e-3);
    }

    #[test]
    fn test_validate_t_beam_flange_rules() {
        assert!(validate_t_beam(&metric_t_beam()).is_empty());

        let mut inputs = metric_t_beam();
        inputs.flange_width = Some(250.0);
        let errors = validate_t_beam(&inputs);
        assert_eq!(
            errors.get("flangeWidth"),
            Some("Flange must be at least as wide as the web")
        );

        let mut inputs = metric_t_beam();
        inputs.flange_thickness = Some(700.0);
        let errors = validate_t_beam(&inputs);
        assert_eq!(
            errors.get("flangeThickness"),
            Some("Flange thickness cannot exceed overall depth")
        );
    }
}
