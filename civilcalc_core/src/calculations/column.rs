//! # Column Quantities
//!
//! Rectangular/square and circular column concrete, formwork and
//! reinforcement takeoff.
//!
//! The rectangular column is the one calculator that also emits a
//! calculation trace ("show your work") alongside its results.
//!
//! ## Example
//!
//! ```rust
//! use civilcalc_core::calculations::{calculate_rectangular_column, validate_rectangular_column};
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
//!     longitudinal_bar_size: Some("16mm".into()),
//!     longitudinal_bar_count: Some(8),
//!     transverse_bar_size: Some("10mm".into()),
//!     transverse_spacing: Some(200.0),
//!     transverse_spacing_unit: Some(LengthUnit::Millimeters),
//!     ..Default::default()
//! };
//! assert!(validate_rectangular_column(&inputs).is_empty());
//! let results = calculate_rectangular_column(&inputs);
//! assert_eq!(results.concrete_volume.unwrap().to_string(), "0.48 m³");
//! ```

use std::f64::consts::PI;

use crate::inputs::{CalculationInputs, TransverseType, ValidationErrors};
use crate::materials;
use crate::results::{CalculationResults, Quantity};
use crate::schedule::{CalculationTrace, RebarTally, ShapeCode};
use crate::units::{density_kg_m3, format, length_m};

use super::{
    require_min_count, require_positive, CONCRETE_COVER_M, POSITIVE_NUMBER, TIE_HOOK_ALLOWANCE_M,
};

/// Concrete, formwork and steel quantities for a rectangular/square column.
pub fn calculate_rectangular_column(inputs: &CalculationInputs) -> CalculationResults {
    let width_m = length_m(inputs.width, inputs.width_unit);
    let depth_m = length_m(inputs.depth, inputs.depth_unit);
    let height_m = length_m(inputs.height, inputs.height_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let transverse_spacing_m = length_m(inputs.transverse_spacing, inputs.transverse_spacing_unit);

    let concrete_volume_m3 = width_m * depth_m * height_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    let formwork_area_m2 = 2.0 * (width_m + depth_m) * height_m;

    let mut tally = RebarTally::new();
    let mut trace = Vec::new();

    trace.push(CalculationTrace {
        description: "Concrete Volume".to_string(),
        formula: "V = width × depth × height".to_string(),
        calculation: format!(
            "V = {} m × {} m × {} m",
            format(width_m, 2),
            format(depth_m, 2),
            format(height_m, 2)
        ),
        result: format!("{} m³", format(concrete_volume_m3, 3)),
        reference: None,
    });
    trace.push(CalculationTrace {
        description: "Formwork Area".to_string(),
        formula: "A = 2 × (width + depth) × height".to_string(),
        calculation: format!(
            "A = 2 × ({} m + {} m) × {} m",
            format(width_m, 2),
            format(depth_m, 2),
            format(height_m, 2)
        ),
        result: format!("{} m²", format(formwork_area_m2, 2)),
        reference: None,
    });

    let long_count = inputs.longitudinal_bar_count.unwrap_or(0);
    let long_steel_weight_kg = tally.add_counted(
        inputs.longitudinal_bar_size.as_deref(),
        long_count,
        height_m,
        ShapeCode::Straight,
        "Longitudinal Bars",
    );
    let long_bar = inputs.longitudinal_bar_size.as_deref().and_then(materials::bar_data);
    if let Some(bar) = long_bar {
        if long_count > 0 {
            trace.push(CalculationTrace {
                description: "Longitudinal Steel Weight".to_string(),
                formula: "W_long = count × height × weight_per_meter".to_string(),
                calculation: format!(
                    "W_long = {} × {} m × {} kg/m",
                    long_count,
                    format(height_m, 2),
                    bar.weight_kg_per_m
                ),
                result: format!("{} kg", format(long_steel_weight_kg, 2)),
                reference: None,
            });
        }
    }

    let mut trans_steel_weight_kg = 0.0;
    let trans_bar = inputs.transverse_bar_size.as_deref().and_then(materials::bar_data);
    if let Some(bar) = trans_bar {
        if transverse_spacing_m > 0.0 {
            let tie_length_m = 2.0 * (width_m - 2.0 * CONCRETE_COVER_M)
                + 2.0 * (depth_m - 2.0 * CONCRETE_COVER_M)
                + TIE_HOOK_ALLOWANCE_M;
            let number_of_ties = RebarTally::bars_at_spacing(height_m, transverse_spacing_m);
            trans_steel_weight_kg = tally.add_counted(
                inputs.transverse_bar_size.as_deref(),
                number_of_ties,
                tie_length_m,
                ShapeCode::Tie,
                "Transverse Ties",
            );
            trace.push(CalculationTrace {
                description: "Transverse Steel Weight".to_string(),
                formula: "W_trans = (tie_length) × (column_height / spacing) × weight_per_meter"
                    .to_string(),
                calculation: format!(
                    "W_trans = {} m/tie × {} ties × {} kg/m",
                    format(tie_length_m, 2),
                    number_of_ties,
                    bar.weight_kg_per_m
                ),
                result: format!("{} kg", format(trans_steel_weight_kg, 2)),
                reference: Some("ACI 318-19 Cl 25.7.2".to_string()),
            });
        }
    }

    let total_steel_weight_kg = long_steel_weight_kg + trans_steel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        longitudinal_steel_weight: Some(Quantity::kg(long_steel_weight_kg)),
        transverse_steel_weight: Some(Quantity::kg(trans_steel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        calculation_trace: trace,
        ..Default::default()
    }
}

/// Input constraints for the rectangular column.
///
/// Beyond positivity, the tie spacing is capped at
/// min(16·d_long, 48·d_tie, least section dimension) per the usual column
/// detailing rule.
pub fn validate_rectangular_column(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "width", inputs.width);
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "height", inputs.height);
    require_min_count(&mut errors, "longitudinalBarCount", inputs.longitudinal_bar_count, 4);

    if !inputs.transverse_spacing.is_some_and(|s| s > 0.0) {
        errors.add("transverseSpacing", POSITIVE_NUMBER);
    } else if let (Some(long_size), Some(tie_size), Some(_), Some(_)) = (
        inputs.longitudinal_bar_size.as_deref(),
        inputs.transverse_bar_size.as_deref(),
        inputs.width,
        inputs.depth,
    ) {
        let long_diameter_mm = materials::bar_data(long_size).map(|b| b.diameter_mm);
        let tie_diameter_mm = materials::bar_data(tie_size).map(|b| b.diameter_mm);
        let width_mm = length_m(inputs.width, inputs.width_unit) * 1000.0;
        let depth_mm = length_m(inputs.depth, inputs.depth_unit) * 1000.0;
        let spacing_mm = length_m(inputs.transverse_spacing, inputs.transverse_spacing_unit) * 1000.0;

        if let (Some(d_long), Some(d_tie)) = (long_diameter_mm, tie_diameter_mm) {
            let max_allowed = (16.0 * d_long)
                .min(48.0 * d_tie)
                .min(width_mm.min(depth_mm));
            if spacing_mm > max_allowed {
                errors.add(
                    "transverseSpacing",
                    format!("Tie spacing exceeds maximum of {} mm", max_allowed.round() as i64),
                );
            }
        }
    }
    errors
}

/// Concrete, formwork and steel quantities for a circular column with
/// spiral or tied transverse reinforcement.
pub fn calculate_circular_column(inputs: &CalculationInputs) -> CalculationResults {
    let diameter_m = length_m(inputs.diameter, inputs.diameter_unit);
    let height_m = length_m(inputs.height, inputs.height_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);

    let radius_m = diameter_m / 2.0;
    let concrete_volume_m3 = PI * radius_m * radius_m * height_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    let formwork_area_m2 = PI * diameter_m * height_m;

    let mut tally = RebarTally::new();

    let long_steel_weight_kg = tally.add_counted(
        inputs.longitudinal_bar_size.as_deref(),
        inputs.longitudinal_bar_count.unwrap_or(0),
        height_m,
        ShapeCode::Straight,
        "Longitudinal Bars",
    );

    let mut trans_steel_weight_kg = 0.0;
    if inputs.transverse_bar_size.as_deref().and_then(materials::bar_data).is_some() {
        let core_diameter_m = diameter_m - 2.0 * CONCRETE_COVER_M;
        match inputs.transverse_type {
            Some(TransverseType::Spiral) => {
                let pitch_m = length_m(inputs.pitch, inputs.pitch_unit);
                if pitch_m > 0.0 {
                    // Unrolled helix: each turn is the hypotenuse of the core
                    // circumference and the pitch
                    let number_of_turns = (height_m / pitch_m).ceil();
                    let length_per_turn_m =
                        ((PI * core_diameter_m).powi(2) + pitch_m.powi(2)).sqrt();
                    let total_spiral_length_m = number_of_turns * length_per_turn_m;
                    // One continuous spiral
                    trans_steel_weight_kg = tally.add_counted(
                        inputs.transverse_bar_size.as_deref(),
                        1,
                        total_spiral_length_m,
                        ShapeCode::Spiral,
                        "Spiral Reinforcement",
                    );
                }
            }
            _ => {
                let spacing_m = length_m(inputs.transverse_spacing, inputs.transverse_spacing_unit);
                if spacing_m > 0.0 {
                    let hoop_length_m = PI * core_diameter_m + TIE_HOOK_ALLOWANCE_M;
                    let number_of_hoops = RebarTally::bars_at_spacing(height_m, spacing_m);
                    trans_steel_weight_kg = tally.add_counted(
                        inputs.transverse_bar_size.as_deref(),
                        number_of_hoops,
                        hoop_length_m,
                        ShapeCode::Tie,
                        "Tied Hoops",
                    );
                }
            }
        }
    }

    let total_steel_weight_kg = long_steel_weight_kg + trans_steel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        longitudinal_steel_weight: Some(Quantity::kg(long_steel_weight_kg)),
        transverse_steel_weight: Some(Quantity::kg(trans_steel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Spiral pitch detailing limits in millimeters
const SPIRAL_PITCH_MIN_MM: f64 = 25.0;
const SPIRAL_PITCH_MAX_MM: f64 = 75.0;

/// Input constraints for the circular column.
pub fn validate_circular_column(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "diameter", inputs.diameter);
    require_positive(&mut errors, "height", inputs.height);

    match inputs.longitudinal_bar_count {
        None | Some(0) => errors.add("longitudinalBarCount", POSITIVE_NUMBER),
        Some(count) => match inputs.transverse_type {
            Some(TransverseType::Spiral) if count < 6 => {
                errors.add("longitudinalBarCount", "Minimum 6 bars required for spiral columns");
            }
            Some(TransverseType::Tied) if count < 4 => {
                require_min_count(&mut errors, "longitudinalBarCount", Some(count), 4);
            }
            _ => {}
        },
    }

    if inputs.transverse_type == Some(TransverseType::Spiral) {
        if !inputs.pitch.is_some_and(|p| p > 0.0) {
            errors.add("pitch", POSITIVE_NUMBER);
        } else {
            let pitch_mm = length_m(inputs.pitch, inputs.pitch_unit) * 1000.0;
            if !(SPIRAL_PITCH_MIN_MM..=SPIRAL_PITCH_MAX_MM).contains(&pitch_mm) {
                errors.add("pitch", "Spiral pitch must be between 25 and 75 mm");
            }
        }
    }

    if inputs.transverse_type == Some(TransverseType::Tied)
        && !inputs.transverse_spacing.is_some_and(|s| s > 0.0)
    {
        errors.add("transverseSpacing", POSITIVE_NUMBER);
    }

    errors
}
