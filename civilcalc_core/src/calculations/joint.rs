//! # Beam-Column Joint Shear
//!
//! Nominal joint shear strength and the beam/column depth ratio check.
//!
//! A single confinement condition is assumed: the joint classification
//! factor is fixed at γ = 20 regardless of the framing arrangement.

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::results::{CalculationResults, Quantity, RatioCheck};
use crate::units::{length_m, stress_mpa};

use super::require_positive;

/// Joint classification factor (one confinement condition only)
const JOINT_SHEAR_GAMMA: f64 = 20.0;

/// Strength reduction for joint shear
const JOINT_SHEAR_PHI: f64 = 0.75;

/// Beam depth over column depth advisory limit
const DEPTH_RATIO_LIMIT: f64 = 0.75;

/// Joint shear strength and geometry check.
///
/// The depth ratio compares the raw input magnitudes, so both depths are
/// expected in the same unit.
pub fn calculate_beam_column_joint(inputs: &CalculationInputs) -> CalculationResults {
    let fc_mpa = stress_mpa(inputs.concrete_strength, inputs.concrete_strength_unit);
    let column_depth_mm = length_m(inputs.column_depth, inputs.column_depth_unit) * 1000.0;
    let joint_width_mm = length_m(inputs.joint_effective_width, inputs.joint_effective_width_unit) * 1000.0;

    let vn_kn =
        JOINT_SHEAR_GAMMA * fc_mpa.sqrt() * joint_width_mm * column_depth_mm * JOINT_SHEAR_PHI
            / 1000.0;

    let ratio = match (inputs.beam_depth, inputs.column_depth) {
        (Some(beam_depth), Some(column_depth)) if column_depth != 0.0 => beam_depth / column_depth,
        _ => 0.0,
    };
    let ratio_ok = ratio > 0.0 && ratio <= DEPTH_RATIO_LIMIT;

    CalculationResults {
        joint_shear_strength: Some(Quantity::kn(vn_kn)),
        beam_column_depth_ratio: Some(RatioCheck { ratio, ok: ratio_ok }),
        ..Default::default()
    }
}

/// Input constraints for the beam-column joint.
pub fn validate_beam_column_joint(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "columnDepth", inputs.column_depth);
    require_positive(&mut errors, "beamDepth", inputs.beam_depth);
    require_positive(&mut errors, "factoredShearVu", inputs.factored_shear_vu);
    require_positive(&mut errors, "jointEffectiveWidth", inputs.joint_effective_width);
    require_positive(&mut errors, "concreteStrength", inputs.concrete_strength);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ForceUnit, LengthUnit, StressUnit};

    fn metric_joint() -> CalculationInputs {
        CalculationInputs {
            column_depth: Some(450.0),
            column_depth_unit: Some(LengthUnit::Millimeters),
            beam_depth: Some(500.0),
            beam_depth_unit: Some(LengthUnit::Millimeters),
            factored_shear_vu: Some(300.0),
            factored_shear_vu_unit: Some(ForceUnit::Kilonewtons),
            joint_effective_width: Some(400.0),
            joint_effective_width_unit: Some(LengthUnit::Millimeters),
            concrete_strength: Some(25.0),
            concrete_strength_unit: Some(StressUnit::Megapascals),
            ..Default::default()
        }
    }

    #[test]
    fn test_joint_shear_strength() {
        let results = calculate_beam_column_joint(&metric_joint());
        // Vn = 20 × √25 × 400 × 450 × 0.75 / 1000 = 13500 kN
        assert!((results.joint_shear_strength.unwrap().magnitude - 13500.0).abs() < 1e-6);
    }

    #[test]
    fn test_deep_beam_flags_ratio() {
        let results = calculate_beam_column_joint(&metric_joint());
        let ratio = results.beam_column_depth_ratio.unwrap();
        // 500 / 450 = 1.11 > 0.75
        assert!((ratio.ratio - 1.1111).abs() < 1e-3);
        assert!(!ratio.ok);
        assert_eq!(ratio.to_string(), "1.11 (Check)");
    }

    #[test]
    fn test_shallow_beam_ratio_ok() {
        let mut inputs = metric_joint();
        inputs.beam_depth = Some(300.0);
        let results = calculate_beam_column_joint(&inputs);
        let ratio = results.beam_column_depth_ratio.unwrap();
        assert!((ratio.ratio - 0.6667).abs() < 1e-3);
        assert!(ratio.ok);
    }

    #[test]
    fn test_validate_joint() {
        assert!(validate_beam_column_joint(&metric_joint()).is_empty());
        let errors = validate_beam_column_joint(&CalculationInputs::default());
        for field in [
            "columnDepth",
            "beamDepth",
            "factoredShearVu",
            "jointEffectiveWidth",
            "concreteStrength",
        ] {
            assert!(errors.contains(field), "missing error for {field}");
        }
    }
}
