//! # Bracket / Corbel Steel Areas
//!
//! Required bearing-plate area, main tension-tie steel and hanger steel
//! for a bracket or corbel under a factored vertical load.
//!
//! This is a shear-friction style simplification, not a full strut-and-tie
//! solve: the tie steel comes straight from Vu over the reduced yield
//! stress, and hanger steel is taken as half the main steel.

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::results::{CalculationResults, Quantity};
use crate::units::{force_kn, stress_mpa};

use super::require_positive;

/// Bearing stress limit as a fraction of f'c
const BEARING_STRESS_FACTOR: f64 = 0.85;

/// Strength reduction on the tension tie yield
const TENSION_TIE_PHI: f64 = 0.75;

/// Hanger (crack-control) steel as a fraction of the main tie steel
const HANGER_STEEL_RATIO: f64 = 0.5;

/// Required steel and bearing areas for a bracket/corbel.
pub fn calculate_bracket_corbel(inputs: &CalculationInputs) -> CalculationResults {
    let fc_mpa = stress_mpa(inputs.concrete_strength, inputs.concrete_strength_unit);
    let fy_mpa = stress_mpa(inputs.steel_yield_strength, inputs.steel_yield_strength_unit);
    let vu_kn = force_kn(inputs.applied_load, inputs.applied_load_unit);
    let vu_n = vu_kn * 1000.0;

    let required_bearing_area_mm2 = vu_n / (BEARING_STRESS_FACTOR * fc_mpa);
    let required_main_steel_mm2 = vu_n / (TENSION_TIE_PHI * fy_mpa);
    let required_hanger_steel_mm2 = HANGER_STEEL_RATIO * required_main_steel_mm2;

    CalculationResults {
        main_steel_area: Some(Quantity::mm2(required_main_steel_mm2)),
        hanger_steel_area: Some(Quantity::mm2(required_hanger_steel_mm2)),
        bearing_plate_area: Some(Quantity::mm2(required_bearing_area_mm2)),
        ..Default::default()
    }
}

/// Input constraints for the bracket/corbel. The shear-span-to-depth ratio
/// compares the raw magnitudes, so both lengths are expected in the same
/// unit.
pub fn validate_bracket_corbel(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "effectiveDepth", inputs.effective_depth);
    require_positive(&mut errors, "shearSpan", inputs.shear_span);
    require_positive(&mut errors, "appliedLoad", inputs.applied_load);
    require_positive(&mut errors, "width", inputs.width);
    if let (Some(shear_span), Some(effective_depth)) = (inputs.shear_span, inputs.effective_depth) {
        if shear_span / effective_depth > 1.0 {
            errors.add("shearSpan", "Shear span to depth ratio must not exceed 1.0");
        }
    }
    errors
}
