//! # Reinforcement Scheduling
//!
//! Itemized reinforcement lines, the audit trace, and the shared tally that
//! every element function drives to build its bar list.
//!
//! Lines describing the same physical bar group at different positions
//! (e.g. "Bottom Bars (Lengthwise)" vs "(Widthwise)") are never merged
//! here; grouping identical size/length/shape lines into report bar marks
//! is a report-layer concern.
//!
//! Bar counts derived from a spacing are `ceil(span / spacing)` — always
//! rounded up, one extra bar at a boundary. Every spacing-driven group in
//! the engine goes through [`RebarTally::bars_at_spacing`] so the rule is
//! applied uniformly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::materials;

/// Fabricated form of a reinforcement bar, for scheduling and shape drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeCode {
    #[serde(rename = "straight")]
    Straight,
    #[serde(rename = "L-bend")]
    LBend,
    #[serde(rename = "stirrup")]
    Stirrup,
    #[serde(rename = "tie")]
    Tie,
    #[serde(rename = "spiral")]
    Spiral,
}

impl std::fmt::Display for ShapeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ShapeCode::Straight => "straight",
            ShapeCode::LBend => "L-bend",
            ShapeCode::Stirrup => "stirrup",
            ShapeCode::Tie => "tie",
            ShapeCode::Spiral => "spiral",
        };
        f.write_str(s)
    }
}

/// One line of the detailed reinforcement schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReinforcementBar {
    /// Bar designation (e.g. "16mm", "#5")
    pub bar_size: String,
    /// Number of identical bars in this group
    pub count: u32,
    /// Cut length of one bar in meters
    pub length: f64,
    pub shape_code: ShapeCode,
    /// Position description (e.g. "Stem Vertical Bars (per m)")
    pub description: String,
}

/// One step of the human-readable calculation audit
///
/// Purely informational; never parsed back as input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationTrace {
    pub description: String,
    /// Symbolic formula, e.g. "V = width × depth × height"
    pub formula: String,
    /// Formula with the numbers substituted in
    pub calculation: String,
    pub result: String,
    /// Code clause reference, when one applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Accumulates schedule lines and group weights for one calculation.
///
/// A group whose bar designation is unknown, or whose count resolves to
/// zero, contributes exactly 0.0 kg and produces no line.
#[derive(Debug, Default)]
pub struct RebarTally {
    lines: Vec<ReinforcementBar>,
}

impl RebarTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bar count from a spacing over a span: `ceil(span / spacing)`.
    ///
    /// The caller must have established `spacing_m > 0`.
    pub fn bars_at_spacing(span_m: f64, spacing_m: f64) -> u32 {
        (span_m / spacing_m).ceil() as u32
    }

    /// Add a group with an explicit bar count. Returns the group weight in
    /// kg (`count × length × linear mass`), or 0.0 for an unknown size or
    /// zero count.
    pub fn add_counted(
        &mut self,
        bar_size: Option<&str>,
        count: u32,
        length_m: f64,
        shape: ShapeCode,
        description: &str,
    ) -> f64 {
        let Some(size) = bar_size else {
            return 0.0;
        };
        let Some(data) = materials::bar_data(size) else {
            debug!(bar_size = size, "unknown bar size, group contributes no steel");
            return 0.0;
        };
        if count == 0 {
            return 0.0;
        }
        self.lines.push(ReinforcementBar {
            bar_size: size.to_string(),
            count,
            length: length_m,
            shape_code: shape,
            description: description.to_string(),
        });
        f64::from(count) * length_m * data.weight_kg_per_m
    }

    /// Add a group whose count comes from a spacing over a span. Returns
    /// the group weight in kg, or 0.0 when the spacing is not positive.
    pub fn add_spaced(
        &mut self,
        bar_size: Option<&str>,
        span_m: f64,
        spacing_m: f64,
        length_m: f64,
        shape: ShapeCode,
        description: &str,
    ) -> f64 {
        if spacing_m <= 0.0 {
            return 0.0;
        }
        self.add_counted(
            bar_size,
            Self::bars_at_spacing(span_m, spacing_m),
            length_m,
            shape,
            description,
        )
    }

    /// Append a pre-built line whose weight is accounted for separately
    /// (the diaphragm shrinkage mesh reports weight per m² from the
    /// unrounded spacing while its line carries the rounded count).
    pub fn push_line(&mut self, line: ReinforcementBar) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[ReinforcementBar] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<ReinforcementBar> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bars_at_spacing_rounds_up() {
        assert_eq!(RebarTally::bars_at_spacing(8.0, 0.15), 54);
        assert_eq!(RebarTally::bars_at_spacing(2.0, 0.15), 14);
        assert_eq!(RebarTally::bars_at_spacing(2.0, 0.25), 8);
        assert_eq!(RebarTally::bars_at_spacing(1.0, 0.3), 4);
    }

    #[test]
    fn test_add_counted_weight() {
        let mut tally = RebarTally::new();
        // 8 × 16mm bars, 3 m long: 8 × 3 × 1.578 = 37.872 kg
        let w = tally.add_counted(Some("16mm"), 8, 3.0, ShapeCode::Straight, "Longitudinal Bars");
        assert!((w - 37.872).abs() < 1e-9);
        assert_eq!(tally.lines().len(), 1);
        assert_eq!(tally.lines()[0].count, 8);
        assert_eq!(tally.lines()[0].shape_code, ShapeCode::Straight);
    }

    #[test]
    fn test_unknown_bar_size_contributes_zero() {
        let mut tally = RebarTally::new();
        assert_eq!(
            tally.add_counted(Some("14mm"), 8, 3.0, ShapeCode::Straight, "Bars"),
            0.0
        );
        assert_eq!(
            tally.add_counted(None, 8, 3.0, ShapeCode::Straight, "Bars"),
            0.0
        );
        assert!(tally.lines().is_empty());
    }

    #[test]
    fn test_zero_count_and_zero_spacing_guards()  {
        let mut tally = RebarTally::new();
        assert_eq!(
            tally.add_counted(Some("16mm"), 0, 3.0, ShapeCode::Straight, "Bars"),
            0.0
        );
        assert_eq!(
            tally.add_spaced(Some("10mm"), 3.0, 0.0, 1.48, ShapeCode::Tie, "Ties"),
            0.0
        );
        assert!(tally.lines().is_empty());
    }

    #[test]
    fn test_shape_code_serde_strings() {
        assert_eq!(serde_json::to_string(&ShapeCode::LBend).unwrap(), "\"L-bend\"");
        assert_eq!(serde_json::to_string(&ShapeCode::Spiral).unwrap(), "\"spiral\"");
        let code: ShapeCode = serde_json::from_str("\"stirrup\"").unwrap();
        assert_eq!(code, ShapeCode::Stirrup);
    }

    #[test]
    fn test_line_serialization() {
        let line = ReinforcementBar {
            bar_size: "10mm".to_string(),
            count: 15,
            length: 1.48,
            shape_code: ShapeCode::Tie,
            description: "Transverse Ties".to_string(),
        };
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"barSize\":\"10mm\""));
        assert!(json.contains("\"shapeCode\":\"tie\""));
        let roundtrip: ReinforcementBar = serde_json::from_str(&json).unwrap();
        assert_eq!(line, roundtrip);
    }

    proptest! {
        // Decreasing the spacing never decreases the bar count
        #[test]
        fn spacing_count_is_monotonic(
            span in 0.1_f64..100.0,
            spacing in 0.01_f64..5.0,
            shrink in 0.1_f64..1.0,
        ) {
            let coarse = RebarTally::bars_at_spacing(span, spacing);
            let fine = RebarTally::bars_at_spacing(span, spacing * shrink);
            prop_assert!(fine >= coarse);
        }
    }
}
