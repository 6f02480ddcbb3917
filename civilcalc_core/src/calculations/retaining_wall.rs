//! # Cantilever Retaining Wall
//!
//! Coulomb active-pressure stability checks (overturning, sliding, bearing)
//! plus per-meter concrete and reinforcement quantities.
//!
//! ## Assumptions
//!
//! - Unit-width strip: every result is per meter of wall length
//! - Active pressure with a level backfill: Ka = tan²(45° − φ/2)
//! - Sliding resistance is R_v·tan(φ) only — no shear key, no passive
//!   pressure, no separate base friction coefficient
//! - No-tension soil: when the resultant leaves the middle third the
//!   bearing distribution becomes triangular with q_min = 0

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::results::{BearingCheck, CalculationResults, Quantity, SafetyCheck};
use crate::schedule::{RebarTally, ShapeCode};
use crate::units::{density_kg_m3, length_m, pressure_kpa, soil_unit_weight_kn_m3};

use super::{require_non_negative, require_positive, CONCRETE_COVER_M};

/// Standard gravity, for concrete unit weight kg/m³ → kN/m³
const GRAVITY_M_S2: f64 = 9.81;

/// Minimum acceptable factor of safety against overturning
const FOS_OVERTURNING_MIN: f64 = 2.0;

/// Minimum acceptable factor of safety against sliding
const FOS_SLIDING_MIN: f64 = 1.5;

/// Stability checks and per-meter quantities for a cantilever retaining
/// wall with a tapered stem.
pub fn calculate_retaining_wall(inputs: &CalculationInputs) -> CalculationResults {
    let stem_height_m = length_m(inputs.stem_height, inputs.stem_height_unit);
    let t_top_m = length_m(inputs.stem_thickness_top, inputs.stem_thickness_top_unit);
    let t_bot_m = length_m(inputs.stem_thickness_bottom, inputs.stem_thickness_bottom_unit);
    let heel_m = length_m(inputs.heel_length, inputs.heel_length_unit);
    let toe_m = length_m(inputs.toe_length, inputs.toe_length_unit);
    let footing_m = length_m(inputs.footing_thickness, inputs.footing_thickness_unit);
    let phi_deg = inputs.soil_friction_angle.unwrap_or(0.0);
    let phi_rad = phi_deg.to_radians();
    let gamma_soil_kn_m3 = soil_unit_weight_kn_m3(inputs.soil_unit_weight, inputs.soil_unit_weight_unit);
    let gamma_concrete_kn_m3 =
        density_kg_m3(inputs.concrete_unit_weight, inputs.concrete_unit_weight_unit) * GRAVITY_M_S2
            / 1000.0;
    let q_surcharge_kpa = pressure_kpa(inputs.surcharge_load, inputs.surcharge_load_unit);
    let q_allowable_kpa = pressure_kpa(inputs.soil_bearing_pressure, inputs.soil_bearing_pressure_unit);

    // === Destabilizing: active soil + surcharge thrust ===
    let total_height_m = stem_height_m + footing_m;
    let ka = ((45.0 - phi_deg / 2.0).to_radians().tan()).powi(2);
    let thrust_soil_kn = 0.5 * ka * gamma_soil_kn_m3 * total_height_m.powi(2);
    let thrust_surcharge_kn = ka * q_surcharge_kpa * total_height_m;
    let sliding_force_kn = thrust_soil_kn + thrust_surcharge_kn;
    // Triangular resultant at H/3, uniform surcharge resultant at H/2
    let m_overturning = thrust_soil_kn * total_height_m / 3.0
        + thrust_surcharge_kn * total_height_m / 2.0;

    // === Stabilizing: self weight components with moment arms to the toe ===
    let w_stem_rect = t_top_m * stem_height_m * gamma_concrete_kn_m3;
    let w_stem_tri = 0.5 * (t_bot_m - t_top_m) * stem_height_m * gamma_concrete_kn_m3;
    let w_footing = (toe_m + t_bot_m + heel_m) * footing_m * gamma_concrete_kn_m3;
    let w_soil = heel_m * stem_height_m * gamma_soil_kn_m3;
    let w_surcharge = heel_m * q_surcharge_kpa;
    let resultant_kn = w_stem_rect + w_stem_tri + w_footing + w_soil + w_surcharge;

    let arm_stem_rect = toe_m + (t_bot_m + t_top_m) / 2.0;
    let arm_stem_tri = toe_m + (t_bot_m - t_top_m) * 2.0 / 3.0;
    let arm_footing = (toe_m + t_bot_m + heel_m) / 2.0;
    let arm_soil = toe_m + t_bot_m + heel_m / 2.0;
    let m_stabilizing = w_stem_rect * arm_stem_rect
        + w_stem_tri * arm_stem_tri
        + w_footing * arm_footing
        + (w_soil + w_surcharge) * arm_soil;

    let fos_overturning = if m_overturning > 0.0 {
        m_stabilizing / m_overturning
    } else {
        f64::INFINITY
    };
    let resisting_force_kn = resultant_kn * phi_rad.tan();
    let fos_sliding = if sliding_force_kn > 0.0 {
        resisting_force_kn / sliding_force_kn
    } else {
        f64::INFINITY
    };

    // === Bearing pressure under the base ===
    let base_width_m = toe_m + t_bot_m + heel_m;
    let x_bar = (m_stabilizing - m_overturning) / resultant_kn;
    let eccentricity = base_width_m / 2.0 - x_bar;
    let (q_max_kpa, q_min_kpa) = if eccentricity.abs() <= base_width_m / 6.0 {
        (
            (resultant_kn / base_width_m) * (1.0 + 6.0 * eccentricity / base_width_m),
            (resultant_kn / base_width_m) * (1.0 - 6.0 * eccentricity / base_width_m),
        )
    } else {
        // Resultant outside the middle third
        (
            2.0 * resultant_kn / (3.0 * (base_width_m / 2.0 - eccentricity)),
            0.0,
        )
    };

    // === Quantities and reinforcement, per meter of wall ===
    let stem_concrete_m3 = (t_top_m + t_bot_m) / 2.0 * stem_height_m;
    let footing_concrete_m3 = base_width_m * footing_m;

    let mut tally = RebarTally::new();
    let mut stem_steel_kg = 0.0;
    let mut footing_steel_kg = 0.0;

    let vertical_spacing_m = length_m(inputs.vertical_bar_spacing, inputs.vertical_bar_spacing_unit);
    if vertical_spacing_m > 0.0 {
        // L-bend down into the heel
        let bar_length_m = stem_height_m + heel_m - CONCRETE_COVER_M;
        stem_steel_kg += tally.add_spaced(
            inputs.vertical_bar_size.as_deref(),
            1.0,
            vertical_spacing_m,
            bar_length_m,
            ShapeCode::LBend,
            "Stem Vertical Bars (per m)",
        );
    }
    let horizontal_spacing_m =
        length_m(inputs.horizontal_bar_spacing, inputs.horizontal_bar_spacing_unit);
    if horizontal_spacing_m > 0.0 {
        // Both faces
        let bars_per_face = RebarTally::bars_at_spacing(stem_height_m, horizontal_spacing_m);
        stem_steel_kg += tally.add_counted(
            inputs.horizontal_bar_size.as_deref(),
            bars_per_face * 2,
            1.0,
            ShapeCode::Straight,
            "Stem Horizontal Bars (per m)",
        );
    }
    let footing_top_spacing_m =
        length_m(inputs.footing_top_bar_spacing, inputs.footing_top_bar_spacing_unit);
    if footing_top_spacing_m > 0.0 {
        footing_steel_kg += tally.add_spaced(
            inputs.footing_top_bar_size.as_deref(),
            1.0,
            footing_top_spacing_m,
            base_width_m,
            ShapeCode::Straight,
            "Footing Top Bars (per m)",
        );
    }
    let footing_bottom_spacing_m = length_m(
        inputs.footing_bottom_bar_spacing,
        inputs.footing_bottom_bar_spacing_unit,
    );
    if footing_bottom_spacing_m > 0.0 {
        footing_steel_kg += tally.add_spaced(
            inputs.footing_bottom_bar_size.as_deref(),
            1.0,
            footing_bottom_spacing_m,
            base_width_m,
            ShapeCode::Straight,
            "Footing Bottom Bars (per m)",
        );
    }

    CalculationResults {
        factor_of_safety_overturning: Some(SafetyCheck {
            value: fos_overturning,
            passes: fos_overturning >= FOS_OVERTURNING_MIN,
        }),
        factor_of_safety_sliding: Some(SafetyCheck {
            value: fos_sliding,
            passes: fos_sliding >= FOS_SLIDING_MIN,
        }),
        max_bearing_pressure: Some(BearingCheck {
            pressure_kpa: q_max_kpa,
            within_allowable: q_max_kpa <= q_allowable_kpa,
        }),
        min_bearing_pressure: Some(Quantity::kpa(q_min_kpa)),
        stem_concrete_volume: Some(Quantity::m3_per_m(stem_concrete_m3)),
        footing_concrete_volume: Some(Quantity::m3_per_m(footing_concrete_m3)),
        stem_steel_weight: Some(Quantity::kg_per_m(stem_steel_kg)),
        footing_steel_weight: Some(Quantity::kg_per_m(footing_steel_kg)),
        concrete_volume: Some(Quantity::m3_per_m(stem_concrete_m3 + footing_concrete_m3)),
        total_steel_weight: Some(Quantity::kg_per_m(stem_steel_kg + footing_steel_kg)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the retaining wall. The toe may be zero (no toe)
/// but never negative; the stem may not taper outward.
pub fn validate_retaining_wall(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "stemHeight", inputs.stem_height);
    require_positive(&mut errors, "stemThicknessBottom", inputs.stem_thickness_bottom);
    require_positive(&mut errors, "footingThickness", inputs.footing_thickness);
    require_positive(&mut errors, "heelLength", inputs.heel_length);
    require_non_negative(&mut errors, "toeLength", inputs.toe_length);
    require_positive(&mut errors, "soilUnitWeight", inputs.soil_unit_weight);
    if !inputs
        .soil_friction_angle
        .is_some_and(|phi| phi > 0.0 && phi < 90.0)
    {
        errors.add("soilFrictionAngle", "Friction angle must be between 0 and 90 degrees");
    }

    if inputs.stem_thickness_top.is_some() && inputs.stem_thickness_bottom.is_some() {
        let top_m = length_m(inputs.stem_thickness_top, inputs.stem_thickness_top_unit);
        let bottom_m = length_m(inputs.stem_thickness_bottom, inputs.stem_thickness_bottom_unit);
        if top_m > bottom_m {
            errors.add("stemThicknessTop", "Top thickness cannot exceed bottom thickness");
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DensityUnit, LengthUnit, PressureUnit, SoilUnitWeightUnit};

    fn metric_wall() -> CalculationInputs {
        CalculationInputs {
            stem_height: Some(3.0),
            stem_height_unit: Some(LengthUnit::Meters),
            stem_thickness_top: Some(200.0),
            stem_thickness_top_unit: Some(LengthUnit::Millimeters),
            stem_thickness_bottom: Some(300.0),
            stem_thickness_bottom_unit: Some(LengthUnit::Millimeters),
            footing_thickness: Some(400.0),
            footing_thickness_unit: Some(LengthUnit::Millimeters),
            toe_length: Some(1.0),
            toe_length_unit: Some(LengthUnit::Meters),
            heel_length: Some(1.5),
            heel_length_unit: Some(LengthUnit::Meters),
            soil_unit_weight: Some(18.0),
            soil_unit_weight_unit: Some(SoilUnitWeightUnit::KilonewtonsPerCubicMeter),
            soil_friction_angle: Some(30.0),
            soil_bearing_pressure: Some(150.0),
            soil_bearing_pressure_unit: Some(PressureUnit::Kilopascals),
            surcharge_load: Some(10.0),
            surcharge_load_unit: Some(PressureUnit::Kilopascals),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            vertical_bar_size: Some("16mm".to_string()),
            vertical_bar_spacing: Some(150.0),
            vertical_bar_spacing_unit: Some(LengthUnit::Millimeters),
            horizontal_bar_size: Some("12mm".to_string()),
            horizontal_bar_spacing: Some(200.0),
            horizontal_bar_spacing_unit: Some(LengthUnit::Millimeters),
            footing_bottom_bar_size: Some("16mm".to_string()),
            footing_bottom_bar_spacing: Some(150.0),
            footing_bottom_bar_spacing_unit: Some(LengthUnit::Millimeters),
            ..Default::default()
        }
    }

    #[test]
    fn test_stable_wall_passes_both_checks() {
        let results = calculate_retaining_wall(&metric_wall());

        // Ka = tan²(30°) = 1/3; soil thrust 34.68 kN, surcharge 11.33 kN;
        // M_ot = 58.57, M_stab = 255.14, R_v = 140.03
        let overturning = results.factor_of_safety_overturning.unwrap();
        assert!((overturning.value - 4.3561).abs() < 1e-3);
        assert!(overturning.passes);
        assert_eq!(overturning.to_string(), "4.36 (PASS)");

        let sliding = results.factor_of_safety_sliding.unwrap();
        assert!((sliding.value - 1.7570).abs() < 1e-3);
        assert!(sliding.passes);
        assert_eq!(sliding.to_string(), "1.76 (PASS)");
    }

    #[test]
    fn test_bearing_pressure_trapezoidal() {
        let results = calculate_retaining_wall(&metric_wall());
        // Resultant is 3.8 mm behind center: |e| well within B/6, so the
        // distribution stays trapezoidal and both corners carry load
        let max = results.max_bearing_pressure.unwrap();
        assert!((max.pressure_kpa - 49.60).abs() < 0.01);
        assert!(max.within_allowable);
        let min = results.min_bearing_pressure.unwrap();
        assert!((min.magnitude - 50.42).abs() < 0.01);
    }

    #[test]
    fn test_per_meter_quantities() {
        let results = calculate_retaining_wall(&metric_wall());
        // Stem trapezoid (0.2+0.3)/2 × 3 = 0.75 m³/m; base 2.8 × 0.4 = 1.12
        assert!((results.stem_concrete_volume.unwrap().magnitude - 0.75).abs() < 1e-9);
        assert!((results.footing_concrete_volume.unwrap().magnitude - 1.12).abs() < 1e-9);
        assert!((results.concrete_volume.unwrap().magnitude - 1.87).abs() < 1e-9);
        assert_eq!(results.concrete_volume.unwrap().to_string(), "1.87 m³/m");
    }

    #[test]
    fn test_per_meter_reinforcement() {
        let results = calculate_retaining_wall(&metric_wall());
        // Vertical: 7 bars × (3 + 1.5 − 0.04) m × 1.578 = 49.265 kg/m
        // Horizontal: 15 per face × 2 × 1 m × 0.888 = 26.64 kg/m
        assert!((results.stem_steel_weight.unwrap().magnitude - 75.9052).abs() < 1e-3);
        // Footing bottom: 7 bars × 2.8 m × 1.578 = 30.929 kg/m
        assert!((results.footing_steel_weight.unwrap().magnitude - 30.9288).abs() < 1e-3);
        assert!((results.total_steel_weight.unwrap().magnitude - 106.834).abs() < 1e-2);

        let vertical = &results.detailed_reinforcement[0];
        assert_eq!(vertical.shape_code, ShapeCode::LBend);
        assert_eq!(vertical.count, 7);
        assert!((vertical.length - 4.46).abs() < 1e-9);
        let horizontal = &results.detailed_reinforcement[1];
        assert_eq!(horizontal.count, 30);
        assert_eq!(horizontal.length, 1.0);
    }

    #[test]
    fn test_undersized_base_fails_both_checks() {
        let inputs = CalculationInputs {
            stem_height: Some(4.0),
            stem_height_unit: Some(LengthUnit::Meters),
            stem_thickness_top: Some(200.0),
            stem_thickness_top_unit: Some(LengthUnit::Millimeters),
            stem_thickness_bottom: Some(200.0),
            stem_thickness_bottom_unit: Some(LengthUnit::Millimeters),
            footing_thickness: Some(300.0),
            footing_thickness_unit: Some(LengthUnit::Millimeters),
            toe_length: Some(0.0),
            toe_length_unit: Some(LengthUnit::Meters),
            heel_length: Some(0.3),
            heel_length_unit: Some(LengthUnit::Meters),
            soil_unit_weight: Some(18.0),
            soil_unit_weight_unit: Some(SoilUnitWeightUnit::KilonewtonsPerCubicMeter),
            soil_friction_angle: Some(25.0),
            soil_bearing_pressure: Some(150.0),
            soil_bearing_pressure_unit: Some(PressureUnit::Kilopascals),
            surcharge_load: Some(10.0),
            surcharge_load_unit: Some(PressureUnit::Kilopascals),
            concrete_unit_weight: Some(2400.0),
            concrete_unit_weight_unit: Some(DensityUnit::KilogramsPerCubicMeter),
            ..Default::default()
        };
        let results = calculate_retaining_wall(&inputs);
        assert!(!results.factor_of_safety_overturning.unwrap().passes);
        assert!(!results.factor_of_safety_sliding.unwrap().passes);
    }

    #[test]
    fn test_imperial_units_convert_before_stability() {
        // 120 pcf ≈ 18.85 kN/m³, 200 psf ≈ 9.58 kPa
        let mut inputs = metric_wall();
        inputs.soil_unit_weight = Some(120.0);
        inputs.soil_unit_weight_unit = Some(SoilUnitWeightUnit::Pcf);
        inputs.surcharge_load = Some(200.0);
        inputs.surcharge_load_unit = Some(PressureUnit::Psf);
        let results = calculate_retaining_wall(&inputs);
        // Close to the metric case, so still comfortably stable
        let overturning = results.factor_of_safety_overturning.unwrap();
        assert!(overturning.passes);
        assert!(overturning.value > 3.0 && overturning.value < 6.0);
    }

    #[test]
    fn test_validate_retaining_wall() {
        assert!(validate_retaining_wall(&metric_wall()).is_empty());

        let mut inputs = metric_wall();
        inputs.soil_friction_angle = Some(95.0);
        inputs.toe_length = Some(-0.5);
        let errors = validate_retaining_wall(&inputs);
        assert_eq!(
            errors.get("soilFrictionAngle"),
            Some("Friction angle must be between 0 and 90 degrees")
        );
        assert_eq!(errors.get("toeLength"), Some(super::super::NON_NEGATIVE));

        // 250 mm top over 300 mm bottom is fine; 350 mm is not
        let mut inputs = metric_wall();
        inputs.stem_thickness_top = Some(350.0);
        let errors = validate_retaining_wall(&inputs);
        assert_eq!(
            errors.get("stemThicknessTop"),
            Some("Top thickness cannot exceed bottom thickness")
        );
    }

    #[test]
    fn test_zero_toe_is_valid_geometry() {
        let mut inputs = metric_wall();
        inputs.toe_length = Some(0.0);
        assert!(validate_retaining_wall(&inputs).is_empty());
        let results = calculate_retaining_wall(&inputs);
        // Base shrinks to t_bot + heel = 1.8 m
        assert!((results.footing_concrete_volume.unwrap().magnitude - 0.72).abs() < 1e-9);
    }
}
