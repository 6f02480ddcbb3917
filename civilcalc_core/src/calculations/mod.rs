//! # Element Calculations
//!
//! One pure calculation function and one validation function per structural
//! element type. Each calculation converts its inputs to SI, applies the
//! element's geometry and strength formulas, itemizes the reinforcement,
//! and returns a [`CalculationResults`] record.
//!
//! The calculation functions never validate: callers run the matching
//! validation function first and only calculate when it reports no errors
//! (or use [`CalculatorKind::run`], which gates for them). Unset numeric
//! fields enter the formulas as zero.
//!
//! ## Available Calculators
//!
//! - [`column`] - rectangular/square and circular columns
//! - [`beam`] - rectangular beams and T-beams
//! - [`slab`] - one-way and two-way slabs
//! - [`footing`] - isolated, combined, strip footings and pile caps
//! - [`wall`] - rectangular walls
//! - [`retaining_wall`] - cantilever retaining wall stability and quantities
//! - [`diaphragm`] - floor/roof diaphragm chord, collector and shrinkage steel
//! - [`bracket`] - bracket/corbel required steel areas
//! - [`joint`] - beam-column joint shear
//! - [`anchorage`] - anchorage to concrete (tension/shear/interaction)

pub mod anchorage;
pub mod beam;
pub mod bracket;
pub mod column;
pub mod diaphragm;
pub mod footing;
pub mod joint;
pub mod retaining_wall;
pub mod slab;
pub mod wall;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::results::CalculationResults;

pub use anchorage::{calculate_anchorage, validate_anchorage};
pub use beam::{
    calculate_rectangular_beam, calculate_t_beam, validate_rectangular_beam, validate_t_beam,
};
pub use bracket::{calculate_bracket_corbel, validate_bracket_corbel};
pub use column::{
    calculate_circular_column, calculate_rectangular_column, validate_circular_column,
    validate_rectangular_column,
};
pub use diaphragm::{calculate_diaphragm, validate_diaphragm};
pub use footing::{
    calculate_combined_footing, calculate_isolated_footing, calculate_pile_cap_foundation,
    calculate_strip_footing, validate_combined_footing, validate_isolated_footing,
    validate_pile_cap_foundation, validate_strip_footing,
};
pub use joint::{calculate_beam_column_joint, validate_beam_column_joint};
pub use retaining_wall::{calculate_retaining_wall, validate_retaining_wall};
pub use slab::{
    calculate_one_way_slab, calculate_two_way_slab, validate_one_way_slab, validate_two_way_slab,
};
pub use wall::{calculate_rectangular_wall, validate_rectangular_wall};

// ============================================================================
// Fixed Detailing Constants
// ============================================================================

/// Clear concrete cover to the outside of reinforcement, in millimeters.
/// Not user-configurable; every tie/hoop perimeter uses it.
pub const CONCRETE_COVER_MM: f64 = 40.0;

/// Concrete cover in meters
pub const CONCRETE_COVER_M: f64 = CONCRETE_COVER_MM / 1000.0;

/// Hook allowance added to every closed tie, hoop and stirrup, in meters
pub const TIE_HOOK_ALLOWANCE_M: f64 = 0.2;

// ============================================================================
// Validation Helpers
// ============================================================================

pub(crate) const POSITIVE_NUMBER: &str = "Must be a positive number";
pub(crate) const NON_NEGATIVE: &str = "Cannot be negative";

/// Field must be present and strictly positive
pub(crate) fn require_positive(errors: &mut ValidationErrors, field: &str, value: Option<f64>) {
    if !value.is_some_and(|v| v > 0.0) {
        errors.add(field, POSITIVE_NUMBER);
    }
}

/// Field must be present and not negative (zero allowed)
pub(crate) fn require_non_negative(errors: &mut ValidationErrors, field: &str, value: Option<f64>) {
    if !value.is_some_and(|v| v >= 0.0) {
        errors.add(field, NON_NEGATIVE);
    }
}

/// Count field must be present and at least `min`
pub(crate) fn require_min_count(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<u32>,
    min: u32,
) {
    if !value.is_some_and(|v| v >= min) {
        errors.add(
            field,
            format!("At least {min} bar{} required", if min == 1 { "" } else { "s" }),
        );
    }
}

// ============================================================================
// Calculator Registry
// ============================================================================

/// Every calculator the engine exposes, with its display title, report
/// category and dispatch to the matching function pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorKind {
    RectangularColumn,
    CircularColumn,
    RectangularBeam,
    TBeam,
    OneWaySlab,
    TwoWaySlab,
    IsolatedFooting,
    CombinedFooting,
    StripFooting,
    PileCapFoundation,
    RectangularWall,
    RetainingWall,
    Diaphragm,
    BracketCorbel,
    BeamColumnJoint,
    Anchorage,
}

impl CalculatorKind {
    /// All calculators in catalog order
    pub const ALL: [CalculatorKind; 16] = [
        CalculatorKind::RectangularColumn,
        CalculatorKind::CircularColumn,
        CalculatorKind::RectangularBeam,
        CalculatorKind::TBeam,
        CalculatorKind::OneWaySlab,
        CalculatorKind::TwoWaySlab,
        CalculatorKind::IsolatedFooting,
        CalculatorKind::CombinedFooting,
        CalculatorKind::StripFooting,
        CalculatorKind::PileCapFoundation,
        CalculatorKind::RectangularWall,
        CalculatorKind::RetainingWall,
        CalculatorKind::Diaphragm,
        CalculatorKind::BracketCorbel,
        CalculatorKind::BeamColumnJoint,
        CalculatorKind::Anchorage,
    ];

    /// Display title, also used as the saved-item type label
    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::RectangularColumn => "Rectangular/Square Column",
            CalculatorKind::CircularColumn => "Circular Column",
            CalculatorKind::RectangularBeam => "Rectangular Beam",
            CalculatorKind::TBeam => "T-Beam",
            CalculatorKind::OneWaySlab => "One-Way Slab",
            CalculatorKind::TwoWaySlab => "Two-Way Slab",
            CalculatorKind::IsolatedFooting => "Isolated Footing",
            CalculatorKind::CombinedFooting => "Combined Footing",
            CalculatorKind::StripFooting => "Strip Footing",
            CalculatorKind::PileCapFoundation => "Pile Cap Foundation",
            CalculatorKind::RectangularWall => "Rectangular Wall",
            CalculatorKind::RetainingWall => "Retaining Wall",
            CalculatorKind::Diaphragm => "Floor & Roof Diaphragms",
            CalculatorKind::BracketCorbel => "Bracket & Corbel Design",
            CalculatorKind::BeamColumnJoint => "Beam-Column Joint",
            CalculatorKind::Anchorage => "Anchorage to Concrete",
        }
    }

    /// Report grouping for project summaries
    pub fn category(&self) -> &'static str {
        match self {
            CalculatorKind::RectangularColumn | CalculatorKind::CircularColumn => "Columns",
            CalculatorKind::RectangularBeam | CalculatorKind::TBeam => "Beams",
            CalculatorKind::OneWaySlab | CalculatorKind::TwoWaySlab => "Slabs",
            CalculatorKind::IsolatedFooting
            | CalculatorKind::CombinedFooting
            | CalculatorKind::StripFooting
            | CalculatorKind::PileCapFoundation => "Foundations",
            CalculatorKind::RectangularWall | CalculatorKind::RetainingWall => "Walls",
            CalculatorKind::Diaphragm => "Diaphragms",
            CalculatorKind::BracketCorbel => "Brackets & Corbels",
            CalculatorKind::BeamColumnJoint | CalculatorKind::Anchorage => "Joints & Connections",
        }
    }

    /// Run this calculator's input constraints
    pub fn validate(&self, inputs: &CalculationInputs) -> ValidationErrors {
        match self {
            CalculatorKind::RectangularColumn => validate_rectangular_column(inputs),
            CalculatorKind::CircularColumn => validate_circular_column(inputs),
            CalculatorKind::RectangularBeam => validate_rectangular_beam(inputs),
            CalculatorKind::TBeam => validate_t_beam(inputs),
            CalculatorKind::OneWaySlab => validate_one_way_slab(inputs),
            CalculatorKind::TwoWaySlab => validate_two_way_slab(inputs),
            CalculatorKind::IsolatedFooting => validate_isolated_footing(inputs),
            CalculatorKind::CombinedFooting => validate_combined_footing(inputs),
            CalculatorKind::StripFooting => validate_strip_footing(inputs),
            CalculatorKind::PileCapFoundation => validate_pile_cap_foundation(inputs),
            CalculatorKind::RectangularWall => validate_rectangular_wall(inputs),
            CalculatorKind::RetainingWall => validate_retaining_wall(inputs),
            CalculatorKind::Diaphragm => validate_diaphragm(inputs),
            CalculatorKind::BracketCorbel => validate_bracket_corbel(inputs),
            CalculatorKind::BeamColumnJoint => validate_beam_column_joint(inputs),
            CalculatorKind::Anchorage => validate_anchorage(inputs),
        }
    }

    /// Run this calculator's formulas. The caller is responsible for having
    /// validated the inputs first.
    pub fn calculate(&self, inputs: &CalculationInputs) -> CalculationResults {
        match self {
            CalculatorKind::RectangularColumn => calculate_rectangular_column(inputs),
            CalculatorKind::CircularColumn => calculate_circular_column(inputs),
            CalculatorKind::RectangularBeam => calculate_rectangular_beam(inputs),
            CalculatorKind::TBeam => calculate_t_beam(inputs),
            CalculatorKind::OneWaySlab => calculate_one_way_slab(inputs),
            CalculatorKind::TwoWaySlab => calculate_two_way_slab(inputs),
            CalculatorKind::IsolatedFooting => calculate_isolated_footing(inputs),
            CalculatorKind::CombinedFooting => calculate_combined_footing(inputs),
            CalculatorKind::StripFooting => calculate_strip_footing(inputs),
            CalculatorKind::PileCapFoundation => calculate_pile_cap_foundation(inputs),
            CalculatorKind::RectangularWall => calculate_rectangular_wall(inputs),
            CalculatorKind::RetainingWall => calculate_retaining_wall(inputs),
            CalculatorKind::Diaphragm => calculate_diaphragm(inputs),
            CalculatorKind::BracketCorbel => calculate_bracket_corbel(inputs),
            CalculatorKind::BeamColumnJoint => calculate_beam_column_joint(inputs),
            CalculatorKind::Anchorage => calculate_anchorage(inputs),
        }
    }

    /// Validate, then calculate. The standard gated control flow.
    pub fn run(&self, inputs: &CalculationInputs) -> CalcResult<CalculationResults> {
        let errors = self.validate(inputs);
        if !errors.is_empty() {
            return Err(CalcError::validation_failed(errors));
        }
        Ok(self.calculate(inputs))
    }
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_unique() {
        let mut titles: Vec<_> = CalculatorKind::ALL.iter().map(|k| k.title()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), CalculatorKind::ALL.len());
    }

    #[test]
    fn test_categories() {
        assert_eq!(CalculatorKind::CircularColumn.category(), "Columns");
        assert_eq!(CalculatorKind::PileCapFoundation.category(), "Foundations");
        assert_eq!(CalculatorKind::RetainingWall.category(), "Walls");
        assert_eq!(CalculatorKind::Anchorage.category(), "Joints & Connections");
    }

    #[test]
    fn test_run_gates_on_validation() {
        // Empty inputs fail validation for every calculator; none may reach
        // the calculation function through `run`
        let inputs = CalculationInputs::default();
        for kind in CalculatorKind::ALL {
            let result = kind.run(&inputs);
            match result {
                Err(CalcError::ValidationFailed { errors }) => {
                    assert!(!errors.is_empty(), "{kind} reported no errors")
                }
                other => panic!("{kind} did not gate: {other:?}"),
            }
        }
    }

    #[test]
    fn test_require_helpers() {
        let mut errors = ValidationErrors::new();
        require_positive(&mut errors, "width", None);
        require_positive(&mut errors, "depth", Some(0.0));
        require_positive(&mut errors, "height", Some(3.0));
        require_non_negative(&mut errors, "toeLength", Some(0.0));
        require_min_count(&mut errors, "longitudinalBarCount", Some(3), 4);
        assert!(errors.contains("width"));
        assert!(errors.contains("depth"));
        assert!(!errors.contains("height"));
        assert!(!errors.contains("toeLength"));
        assert_eq!(
            errors.get("longitudinalBarCount"),
            Some("At least 4 bars required")
        );
    }
}
