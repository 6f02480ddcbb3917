//! # Anchorage to Concrete
//!
//! Tension and shear design capacities for a single cast-in anchor, with a
//! linear combined-interaction check.
//!
//! Per mode, the governing capacity is the lesser of anchor steel and
//! concrete breakout. Breakout follows the ACI-style `k·√f'c·ℓ^1.5` form
//! with the embedment depth (tension) or edge distance (shear) in
//! millimeters.

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::materials;
use crate::results::{CalculationResults, CapacityCheck, InteractionCheck};
use crate::units::{force_kn, length_m, stress_mpa};

use super::{require_non_negative, require_positive};

/// Strength reduction for steel-governed failure
const PHI_STEEL: f64 = 0.75;

/// Strength reduction for concrete breakout
const PHI_CONCRETE: f64 = 0.65;

/// Tension breakout coefficient for cast-in anchors
const K_C_CAST_IN: f64 = 24.0;

/// Shear capacity of anchor steel as a fraction of its tension capacity
const SHEAR_STEEL_FACTOR: f64 = 0.6;

/// Shear breakout coefficient
const SHEAR_BREAKOUT_COEFF: f64 = 0.42;

/// Combined tension-shear utilization limit (deliberately relaxed from the
/// usual unity envelope)
const INTERACTION_LIMIT: f64 = 1.2;

/// Governing anchor capacities and the combined interaction check. An
/// unknown anchor designation yields an empty result record.
pub fn calculate_anchorage(inputs: &CalculationInputs) -> CalculationResults {
    let hef_m = length_m(inputs.embedment_depth, inputs.embedment_depth_unit);
    let ca1_m = length_m(inputs.edge_distance, inputs.edge_distance_unit);
    let fc_mpa = stress_mpa(inputs.concrete_strength, inputs.concrete_strength_unit);
    let factored_tension_kn = force_kn(inputs.factored_tension, inputs.factored_tension_unit);
    let factored_shear_kn = force_kn(inputs.factored_shear, inputs.factored_shear_unit);

    let Some(anchor) = inputs.anchor_size.as_deref().and_then(materials::anchor_data) else {
        return CalculationResults::default();
    };

    // Tension: steel vs concrete breakout
    let nsa_kn = anchor.area_mm2 * anchor.fut_mpa * PHI_STEEL / 1000.0;
    let ncb_kn = K_C_CAST_IN * fc_mpa.sqrt() * (hef_m * 1000.0).powf(1.5) * PHI_CONCRETE / 1000.0;
    let tension_capacity_kn = nsa_kn.min(ncb_kn);

    // Shear: steel vs concrete breakout toward the near edge
    let vsa_kn = SHEAR_STEEL_FACTOR * anchor.area_mm2 * anchor.fut_mpa * PHI_STEEL / 1000.0;
    let vcb_kn =
        SHEAR_BREAKOUT_COEFF * fc_mpa.sqrt() * (ca1_m * 1000.0).powf(1.5) * PHI_CONCRETE / 1000.0;
    let shear_capacity_kn = vsa_kn.min(vcb_kn);

    let mut combined_value = 0.0;
    if tension_capacity_kn > 0.0 && shear_capacity_kn > 0.0 {
        combined_value =
            factored_tension_kn / tension_capacity_kn + factored_shear_kn / shear_capacity_kn;
    }

    CalculationResults {
        tension_capacity: Some(CapacityCheck {
            capacity_kn: tension_capacity_kn,
            adequate: tension_capacity_kn >= factored_tension_kn,
        }),
        shear_capacity: Some(CapacityCheck {
            capacity_kn: shear_capacity_kn,
            adequate: shear_capacity_kn >= factored_shear_kn,
        }),
        combined_check: Some(InteractionCheck {
            value: combined_value,
            passes: combined_value <= INTERACTION_LIMIT,
        }),
        ..Default::default()
    }
}

/// Input constraints for the anchorage check. The factored forces may be
/// zero (tension-only or shear-only) but never negative.
pub fn validate_anchorage(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "concreteStrength", inputs.concrete_strength);
    require_positive(&mut errors, "embedmentDepth", inputs.embedment_depth);
    require_positive(&mut errors, "edgeDistance", inputs.edge_distance);
    require_positive(&mut errors, "anchorSpacing", inputs.anchor_spacing);
    require_non_negative(&mut errors, "factoredTension", inputs.factored_tension);
    require_non_negative(&mut errors, "factoredShear", inputs.factored_shear);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::AnchorType;
    use crate::units::{ForceUnit, LengthUnit, StressUnit};

    fn imperial_anchor() -> CalculationInputs {
        CalculationInputs {
            anchor_type: Some(AnchorType::CastIn),
            anchor_size: Some("5/8\"".to_string()),
            concrete_strength: Some(4000.0),
            concrete_strength_unit: Some(StressUnit::Psi),
            embedment_depth: Some(5.0),
            embedment_depth_unit: Some(LengthUnit::Inches),
            edge_distance: Some(6.0),
            edge_distance_unit: Some(LengthUnit::Inches),
            anchor_spacing: Some(12.0),
            anchor_spacing_unit: Some(LengthUnit::Inches),
            factored_tension: Some(5.5),
            factored_tension_unit: Some(ForceUnit::Kips),
            factored_shear: Some(3.5),
            factored_shear_unit: Some(ForceUnit::Kips),
            ..Default::default()
        }
    }

    #[test]
    fn test_imperial_anchor_capacities() {
        let results = calculate_anchorage(&imperial_anchor());

        // Steel governs tension: 199 × 414 × 0.75 / 1000 = 61.79 kN
        // (breakout at hef = 127 mm is 117.25 kN)
        let tension = results.tension_capacity.unwrap();
        assert!((tension.capacity_kn - 61.7895).abs() < 1e-3);
        assert!(tension.adequate); // Tu = 24.47 kN

        // Edge breakout governs shear: 0.42 × √27.58 × 152.4^1.5 × 0.65 / 1000
        let shear = results.shear_capacity.unwrap();
        assert!((shear.capacity_kn - 2.6973).abs() < 1e-3);
        assert!(!shear.adequate); // Vu = 15.57 kN

        let combined = results.combined_check.unwrap();
        assert!((combined.value - 6.168).abs() < 5e-3);
        assert!(!combined.passes);
        assert!(combined.to_string().starts_with("Fail"));
    }

    #[test]
    fn test_metric_anchor_passes_interaction() {
        let inputs = CalculationInputs {
            anchor_type: Some(AnchorType::CastIn),
            anchor_size: Some("M16".to_string()),
            concrete_strength: Some(30.0),
            concrete_strength_unit: Some(StressUnit::Megapascals),
            embedment_depth: Some(100.0),
            embedment_depth_unit: Some(LengthUnit::Millimeters),
            edge_distance: Some(200.0),
            edge_distance_unit: Some(LengthUnit::Millimeters),
            anchor_spacing: Some(300.0),
            anchor_spacing_unit: Some(LengthUnit::Millimeters),
            factored_tension: Some(20.0),
            factored_tension_unit: Some(ForceUnit::Kilonewtons),
            factored_shear: Some(1.0),
            factored_shear_unit: Some(ForceUnit::Kilonewtons),
            ..Default::default()
        };
        let results = calculate_anchorage(&inputs);

        // Steel tension: 157 × 400 × 0.75 / 1000 = 47.1 kN (breakout 85.4)
        let tension = results.tension_capacity.unwrap();
        assert!((tension.capacity_kn - 47.1).abs() < 1e-6);
        assert!(tension.adequate);
        // Shear breakout: 0.42 × √30 × 200^1.5 × 0.65 / 1000 = 4.229 kN
        let shear = results.shear_capacity.unwrap();
        assert!((shear.capacity_kn - 4.2293).abs() < 1e-3);
        assert!(shear.adequate);
        // 20/47.1 + 1/4.229 = 0.661 ≤ 1.2
        let combined = results.combined_check.unwrap();
        assert!((combined.value - 0.661).abs() < 1e-3);
        assert!(combined.passes);
        assert_eq!(combined.to_string(), "Pass (0.661)");
    }

    #[test]
    fn test_unknown_anchor_size_yields_empty_results() {
        let mut inputs = imperial_anchor();
        inputs.anchor_size = Some("M24".to_string());
        let results = calculate_anchorage(&inputs);
        assert!(results.tension_capacity.is_none());
        assert!(results.shear_capacity.is_none());
        assert!(results.combined_check.is_none());
        assert!(results.detailed_reinforcement.is_empty());
    }

    #[test]
    fn test_validate_anchorage_allows_zero_forces() {
        let mut inputs = imperial_anchor();
        inputs.factored_tension = Some(0.0);
        inputs.factored_shear = Some(0.0);
        assert!(validate_anchorage(&inputs).is_empty());

        inputs.factored_shear = Some(-1.0);
        let errors = validate_anchorage(&inputs);
        assert!(errors.contains("factoredShear"));
    }
}
