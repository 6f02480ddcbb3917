//! # Wall Quantities
//!
//! Rectangular wall concrete, two-sided formwork and curtain
//! reinforcement. Double-layer walls duplicate both curtains.

use crate::inputs::{CalculationInputs, ReinforcementLayers, ValidationErrors};
use crate::results::{CalculationResults, Quantity};
use crate::schedule::{RebarTally, ShapeCode};
use crate::units::{density_kg_m3, length_m};

use super::{require_positive, POSITIVE_NUMBER};

/// Concrete, formwork and steel quantities for a rectangular wall.
pub fn calculate_rectangular_wall(inputs: &CalculationInputs) -> CalculationResults {
    let thickness_m = length_m(inputs.depth, inputs.depth_unit);
    let length_m_ = length_m(inputs.length, inputs.length_unit);
    let height_m = length_m(inputs.height, inputs.height_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let vertical_spacing_m = length_m(inputs.vertical_bar_spacing, inputs.vertical_bar_spacing_unit);
    let horizontal_spacing_m =
        length_m(inputs.horizontal_bar_spacing, inputs.horizontal_bar_spacing_unit);
    let layers: u32 = match inputs.reinforcement_layers {
        Some(ReinforcementLayers::Double) => 2,
        _ => 1,
    };

    let concrete_volume_m3 = thickness_m * length_m_ * height_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    // Both faces
    let formwork_area_m2 = 2.0 * length_m_ * height_m;

    let mut tally = RebarTally::new();

    let mut vertical_steel_weight_kg = 0.0;
    if vertical_spacing_m > 0.0 {
        let bars_per_layer = RebarTally::bars_at_spacing(length_m_, vertical_spacing_m);
        vertical_steel_weight_kg = tally.add_counted(
            inputs.vertical_bar_size.as_deref(),
            bars_per_layer * layers,
            height_m,
            ShapeCode::Straight,
            "Vertical Bars",
        );
    }

    let mut horizontal_steel_weight_kg = 0.0;
    if horizontal_spacing_m > 0.0 {
        let bars_per_layer = RebarTally::bars_at_spacing(height_m, horizontal_spacing_m);
        horizontal_steel_weight_kg = tally.add_counted(
            inputs.horizontal_bar_size.as_deref(),
            bars_per_layer * layers,
            length_m_,
            ShapeCode::Straight,
            "Horizontal Bars",
        );
    }

    let total_steel_weight_kg = vertical_steel_weight_kg + horizontal_steel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        vertical_steel_weight: Some(Quantity::kg(vertical_steel_weight_kg)),
        horizontal_steel_weight: Some(Quantity::kg(horizontal_steel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the rectangular wall.
pub fn validate_rectangular_wall(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "length", inputs.length);
    require_positive(&mut errors, "height", inputs.height);
    if !inputs.vertical_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("verticalBarSpacing", POSITIVE_NUMBER);
    }
    if !inputs.horizontal_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("horizontalBarSpacing", POSITIVE_NUMBER);
    }
    errors
}
