//! # Calculation Results
//!
//! Typed result values with a text boundary.
//!
//! Internally every result is a tagged number (`Quantity`, or one of the
//! check types that pair a number with a pass/fail status), so tests and
//! downstream code can work with magnitudes directly. At the serialization
//! boundary each value renders as the legacy number-plus-unit text
//! (`"12.34 kg"`, `"4.36 (PASS)"`) that the report and table layers
//! consume, and parses back from it.
//!
//! ## Example
//!
//! ```rust
//! use civilcalc_core::results::{Quantity, ResultUnit};
//!
//! let weight = Quantity::kg(51.5694);
//! assert_eq!(weight.to_string(), "51.57 kg");
//! assert_eq!(weight.unit, ResultUnit::Kilograms);
//!
//! let parsed: Quantity = "51.57 kg".parse().unwrap();
//! assert_eq!(parsed.unit, ResultUnit::Kilograms);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::schedule::{CalculationTrace, ReinforcementBar};

/// Result text that could not be parsed back into a typed value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable result text '{text}'")]
pub struct ParseResultError {
    text: String,
}

impl ParseResultError {
    fn new(text: &str) -> Self {
        ParseResultError {
            text: text.to_string(),
        }
    }
}

/// Unit attached to a formatted result value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultUnit {
    CubicMeters,
    /// Per meter of wall length (retaining wall strip results)
    CubicMetersPerMeter,
    SquareMeters,
    SquareMillimeters,
    Kilograms,
    KilogramsPerMeter,
    KilogramsPerSquareMeter,
    Kilonewtons,
    Kilopascals,
}

impl ResultUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ResultUnit::CubicMeters => "m³",
            ResultUnit::CubicMetersPerMeter => "m³/m",
            ResultUnit::SquareMeters => "m²",
            ResultUnit::SquareMillimeters => "mm²",
            ResultUnit::Kilograms => "kg",
            ResultUnit::KilogramsPerMeter => "kg/m",
            ResultUnit::KilogramsPerSquareMeter => "kg/m²",
            ResultUnit::Kilonewtons => "kN",
            ResultUnit::Kilopascals => "kPa",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "m³" => Some(ResultUnit::CubicMeters),
            "m³/m" => Some(ResultUnit::CubicMetersPerMeter),
            "m²" => Some(ResultUnit::SquareMeters),
            "mm²" => Some(ResultUnit::SquareMillimeters),
            "kg" => Some(ResultUnit::Kilograms),
            "kg/m" => Some(ResultUnit::KilogramsPerMeter),
            "kg/m²" => Some(ResultUnit::KilogramsPerSquareMeter),
            "kN" => Some(ResultUnit::Kilonewtons),
            "kPa" => Some(ResultUnit::Kilopascals),
            _ => None,
        }
    }
}

/// A magnitude with its result unit. Renders as "12.34 kg" (two decimals).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: ResultUnit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: ResultUnit) -> Self {
        Quantity { magnitude, unit }
    }

    pub fn m3(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::CubicMeters)
    }

    pub fn m3_per_m(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::CubicMetersPerMeter)
    }

    pub fn m2(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::SquareMeters)
    }

    pub fn mm2(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::SquareMillimeters)
    }

    pub fn kg(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::Kilograms)
    }

    pub fn kg_per_m(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::KilogramsPerMeter)
    }

    pub fn kg_per_m2(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::KilogramsPerSquareMeter)
    }

    pub fn kn(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::Kilonewtons)
    }

    pub fn kpa(magnitude: f64) -> Self {
        Quantity::new(magnitude, ResultUnit::Kilopascals)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.magnitude, self.unit.symbol())
    }
}

impl FromStr for Quantity {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, symbol) = s.split_once(' ').ok_or_else(|| ParseResultError::new(s))?;
        let magnitude = number.parse().map_err(|_| ParseResultError::new(s))?;
        let unit = ResultUnit::from_symbol(symbol).ok_or_else(|| ParseResultError::new(s))?;
        Ok(Quantity { magnitude, unit })
    }
}

/// Factor-of-safety check. Renders as "4.36 (PASS)" / "1.12 (FAIL)".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyCheck {
    pub value: f64,
    pub passes: bool,
}

impl fmt::Display for SafetyCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} ({})",
            self.value,
            if self.passes { "PASS" } else { "FAIL" }
        )
    }
}

impl FromStr for SafetyCheck {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, status) = s.split_once(' ').ok_or_else(|| ParseResultError::new(s))?;
        let value = number.parse().map_err(|_| ParseResultError::new(s))?;
        let passes = match status {
            "(PASS)" => true,
            "(FAIL)" => false,
            _ => return Err(ParseResultError::new(s)),
        };
        Ok(SafetyCheck { value, passes })
    }
}

/// Bearing pressure against the allowable. Renders as "97.22 kPa (OK)" /
/// "(Exceeded)".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingCheck {
    pub pressure_kpa: f64,
    pub within_allowable: bool,
}

impl fmt::Display for BearingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} kPa ({})",
            self.pressure_kpa,
            if self.within_allowable { "OK" } else { "Exceeded" }
        )
    }
}

impl FromStr for BearingCheck {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_suffix(" (OK)").or_else(|| s.strip_suffix(" (Exceeded)"));
        let rest = rest.ok_or_else(|| ParseResultError::new(s))?;
        let number = rest.strip_suffix(" kPa").ok_or_else(|| ParseResultError::new(s))?;
        Ok(BearingCheck {
            pressure_kpa: number.parse().map_err(|_| ParseResultError::new(s))?,
            within_allowable: s.ends_with("(OK)"),
        })
    }
}

/// Design capacity against the factored demand. Renders as
/// "61.79 kN (OK)" / "(FAIL)".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityCheck {
    pub capacity_kn: f64,
    pub adequate: bool,
}

impl fmt::Display for CapacityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} kN ({})",
            self.capacity_kn,
            if self.adequate { "OK" } else { "FAIL" }
        )
    }
}

impl FromStr for CapacityCheck {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_suffix(" (OK)").or_else(|| s.strip_suffix(" (FAIL)"));
        let rest = rest.ok_or_else(|| ParseResultError::new(s))?;
        let number = rest.strip_suffix(" kN").ok_or_else(|| ParseResultError::new(s))?;
        Ok(CapacityCheck {
            capacity_kn: number.parse().map_err(|_| ParseResultError::new(s))?,
            adequate: s.ends_with("(OK)"),
        })
    }
}

/// Dimensionless ratio with an advisory status. Renders as "0.63 (OK)" /
/// "(Check)".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioCheck {
    pub ratio: f64,
    pub ok: bool,
}

impl fmt::Display for RatioCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({})", self.ratio, if self.ok { "OK" } else { "Check" })
    }
}

impl FromStr for RatioCheck {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, status) = s.split_once(' ').ok_or_else(|| ParseResultError::new(s))?;
        let ratio = number.parse().map_err(|_| ParseResultError::new(s))?;
        let ok = match status {
            "(OK)" => true,
            "(Check)" => false,
            _ => return Err(ParseResultError::new(s)),
        };
        Ok(RatioCheck { ratio, ok })
    }
}

/// Combined tension-shear interaction. Renders as "Pass (0.661)" /
/// "Fail (6.168)" — status first, three decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionCheck {
    pub value: f64,
    pub passes: bool,
}

impl fmt::Display for InteractionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.3})",
            if self.passes { "Pass" } else { "Fail" },
            self.value
        )
    }
}

impl FromStr for InteractionCheck {
    type Err = ParseResultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (status, rest) = s.split_once(' ').ok_or_else(|| ParseResultError::new(s))?;
        let passes = match status {
            "Pass" => true,
            "Fail" => false,
            _ => return Err(ParseResultError::new(s)),
        };
        let number = rest
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(|| ParseResultError::new(s))?;
        Ok(InteractionCheck {
            value: number.parse().map_err(|_| ParseResultError::new(s))?,
            passes,
        })
    }
}

// Serialize through Display / deserialize through FromStr, so the JSON
// snapshot carries the legacy formatted text.
macro_rules! serde_as_text {
    ($($t:ty),+ $(,)?) => {$(
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    )+};
}

serde_as_text!(
    Quantity,
    SafetyCheck,
    BearingCheck,
    CapacityCheck,
    RatioCheck,
    InteractionCheck,
);

/// Flat record of every result a calculator can produce. Each calculator
/// fills only its own subset; the schedule and trace vectors are always
/// present (possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_volume: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concrete_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formwork_area: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_steel_weight: Option<Quantity>,

    // Column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitudinal_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transverse_steel_weight: Option<Quantity>,

    // Beam
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stirrup_steel_weight: Option<Quantity>,

    // Slab
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_dir_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_dir_steel_weight: Option<Quantity>,

    // Foundation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_reinforcement_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_reinforcement_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dowel_weight: Option<Quantity>,

    // Wall
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_steel_weight: Option<Quantity>,

    // Diaphragm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chord_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shrinkage_steel_weight: Option<Quantity>,

    // Bracket/corbel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_steel_area: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hanger_steel_area: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearing_plate_area: Option<Quantity>,

    // Beam-column joint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beam_column_depth_ratio: Option<RatioCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_shear_strength: Option<Quantity>,

    // Anchorage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension_capacity: Option<CapacityCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shear_capacity: Option<CapacityCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combined_check: Option<InteractionCheck>,

    // Retaining wall
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor_of_safety_overturning: Option<SafetyCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor_of_safety_sliding: Option<SafetyCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bearing_pressure: Option<BearingCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bearing_pressure: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_concrete_volume: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_concrete_volume: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_steel_weight: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footing_steel_weight: Option<Quantity>,

    /// Itemized schedule lines backing the steel weight subtotals
    pub detailed_reinforcement: Vec<ReinforcementBar>,
    /// Audit steps, populated only by calculators that trace their work
    pub calculation_trace: Vec<CalculationTrace>,
}
