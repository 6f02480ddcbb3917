//! # Diaphragm Reinforcement
//!
//! Floor/roof diaphragm chord, collector and shrinkage steel rates.
//!
//! Results are normalized rates, not totals: chord and collector steel per
//! meter of run, shrinkage mesh per square meter of deck (two layers).

use crate::inputs::{CalculationInputs, ValidationErrors};
use crate::materials;
use crate::results::{CalculationResults, Quantity};
use crate::schedule::{RebarTally, ReinforcementBar, ShapeCode};
use crate::units::length_m;

use super::{require_min_count, require_positive, POSITIVE_NUMBER};

/// Steel rates for a cast-in-place diaphragm.
pub fn calculate_diaphragm(inputs: &CalculationInputs) -> CalculationResults {
    let shrinkage_spacing_m = length_m(inputs.shrinkage_bar_spacing, inputs.shrinkage_bar_spacing_unit);

    let mut tally = RebarTally::new();

    let collector_steel_kg_m = tally.add_counted(
        inputs.collector_bar_size.as_deref(),
        inputs.collector_bar_count.unwrap_or(0),
        1.0,
        ShapeCode::Straight,
        "Collector Bar (per m)",
    );
    let chord_steel_kg_m = tally.add_counted(
        inputs.chord_bar_size.as_deref(),
        inputs.chord_bar_count.unwrap_or(0),
        1.0,
        ShapeCode::Straight,
        "Chord Bar (per m)",
    );

    // The per-m² weight keeps the exact (unrounded) bar density; only the
    // schedule line count is rounded up
    let mut shrinkage_steel_kg_m2 = 0.0;
    if let Some(bar) = inputs.shrinkage_bar_size.as_deref().and_then(materials::bar_data) {
        if shrinkage_spacing_m > 0.0 {
            shrinkage_steel_kg_m2 = bar.weight_kg_per_m * (1.0 / shrinkage_spacing_m) * 2.0;
            let count_per_m2 = RebarTally::bars_at_spacing(1.0, shrinkage_spacing_m) * 2;
            tally.push_line(ReinforcementBar {
                bar_size: inputs.shrinkage_bar_size.clone().unwrap_or_default(),
                count: count_per_m2,
                length: 1.0,
                shape_code: ShapeCode::Straight,
                description: "Shrinkage Bars (per m²)".to_string(),
            });
        }
    }

    CalculationResults {
        collector_steel_weight: Some(Quantity::kg_per_m(collector_steel_kg_m)),
        chord_steel_weight: Some(Quantity::kg_per_m(chord_steel_kg_m)),
        shrinkage_steel_weight: Some(Quantity::kg_per_m2(shrinkage_steel_kg_m2)),
        detailed_reinforcement: tally.into_lines(),
        ..Default::default()
    }
}

/// Input constraints for the diaphragm.
pub fn validate_diaphragm(inputs: &CalculationInputs) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    require_positive(&mut errors, "diaphragmThickness", inputs.diaphragm_thickness);
    require_min_count(&mut errors, "collectorBarCount", inputs.collector_bar_count, 1);
    require_min_count(&mut errors, "chordBarCount", inputs.chord_bar_count, 1);
    if !inputs.shrinkage_bar_spacing.is_some_and(|s| s > 0.0) {
        errors.add("shrinkageBarSpacing", POSITIVE_NUMBER);
    }
    errors
}
