//! # Slab Quantities
//!
//! One-way and two-way slab concrete and reinforcement takeoff.
//!
//! Formwork is the soffit only (plan area); slab edges are not counted.
//! The `depth` field carries the slab thickness, `span` the plan width.

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::results::{CalculationResults, Quantity};
use crate::schedule::{RebarTally, ShapeCode};
use crate::units::{density_kg_m3, length_m};

use super::{require_positive, POSITIVE_NUMBER};

/// Concrete and steel quantities for a one-way slab (main bars across the
/// span, temperature bars across the length).
pub fn calculate_one_way_slab(inputs: &CalculationInputs) -> CalculationResults {
    let thickness_m = length_m(inputs.depth, inputs.depth_unit);
    let length_m_ = length_m(inputs.length, inputs.length_unit);
    let width_m = length_m(inputs.span, inputs.span_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let main_spacing_m = length_m(inputs.main_bar_spacing, inputs.main_bar_spacing_unit);
    let temp_spacing_m = length_m(inputs.temp_bar_spacing, inputs.temp_bar_spacing_unit);

    let concrete_volume_m3 = thickness_m * length_m_ * width_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    let formwork_area_m2 = length_m_ * width_m;

    let mut tally = RebarTally::new();

    let main_steel_weight_kg = tally.add_spaced(
        inputs.main_bar_size.as_deref(),
        length_m_,
        main_spacing_m,
        width_m,
        ShapeCode::Straight,
        "Main Reinforcement",
    );
    let temp_steel_weight_kg = tally.add_spaced(
        inputs.temp_bar_size.as_deref(),
        width_m,
        temp_spacing_m,
        length_m_,
        ShapeCode::Straight,
        "Temperature Reinforcement",
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

/// Input constraints for the one-way slab.
pub fn validate_one_way_slab(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "length", inputs.length);
    require_positive(&mut errors, "span", inputs.span);
    if !inputs.main_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("mainBarSpacing", POSITIVE_NUMBER);
    }
    if !inputs.temp_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("tempBarSpacing", POSITIVE_NUMBER);
    }
    errors
}

/// Concrete and steel quantities for a two-way slab (bottom mats in both
/// directions).
pub fn calculate_two_way_slab(inputs: &CalculationInputs) -> CalculationResults {
    let thickness_m = length_m(inputs.depth, inputs.depth_unit);
    let length_m_ = length_m(inputs.length, inputs.length_unit);
    let width_m = length_m(inputs.span, inputs.span_unit);
    let unit_weight_kg_m3 = density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit);
    let short_dir_spacing_m = length_m(inputs.short_dir_bar_spacing, inputs.short_dir_bar_spacing_unit);
    let long_dir_spacing_m = length_m(inputs.long_dir_bar_spacing, inputs.long_dir_bar_spacing_unit);

    let concrete_volume_m3 = thickness_m * length_m_ * width_m;
    let concrete_weight_kg = concrete_volume_m3 * unit_weight_kg_m3;
    let formwork_area_m2 = length_m_ * width_m;

    let mut tally = RebarTally::new();

    let short_dir_steel_weight_kg = tally.add_spaced(
        inputs.short_dir_bar_size.as_deref(),
        length_m_,
        short_dir_spacing_m,
        width_m,
        ShapeCode::Straight,
        "Short Direction Bars",
    );
    let long_dir_steel_weight_kg = tally.add_spaced(
        inputs.long_dir_bar_size.as_deref(),
        width_m,
        long_dir_spacing_m,
        length_m_,
        ShapeCode::Straight,
        "Long Direction Bars",
    );

    let total_steel_weight_kg = short_dir_steel_weight_kg + long_dir_steel_weight_kg;

    CalculationResults {
        concrete_volume: Some(Quantity::m3(concrete_volume_m3)),
        concrete_weight: Some(Quantity::kg(concrete_weight_kg)),
        formwork_area: Some(Quantity::m2(formwork_area_m2)),
        short_dir_steel_weight: Some(Quantity::kg(short_dir_steel_weight_kg)),
        long_dir_steel_weight: Some(Quantity::kg(long_dir_steel_weight_kg)),
        total_steel_weight: Some(Quantity::kg(total_steel_weight_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the two-way slab.
pub fn validate_two_way_slab(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "depth", inputs.depth);
    require_positive(&mut errors, "length", inputs.length);
    require_positive(&mut errors, "span", inputs.span);
    if !inputs.short_dir_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("shortDirBarSpacing", POSITIVE_NUMBER);
    }
    if !inputs.long_dir_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("longDirBarSpacing", POSITIVE_NUMBER);
    }
    errors
}
