//! # Unit Conversion
//!
//! Converts tagged input values to the canonical SI base units the engine
//! calculates in: meters for length, kg/m³ for density, MPa for stress,
//! kN for force, kPa for pressure, kN/m³ for soil unit weight.
//!
//! ## Design Philosophy
//!
//! Unit tags are small enums rather than free strings, so an unrecognized
//! tag cannot survive deserialization. The one lenient case kept from the
//! legacy contract is a *missing* tag on a present value: the raw value is
//! passed through unchanged with a warning, and callers must not rely on
//! that being correct.
//!
//! Every numeric input field is optional; an unset field converts to 0.0
//! (the calculation functions assume validation already ran).
//!
//! ## Example
//!
//! ```rust
//! use civilcalc_core::units::{length_m, LengthUnit};
//!
//! let width = length_m(Some(400.0), Some(LengthUnit::Millimeters));
//! assert!((width - 0.4).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Inches to millimeters
pub const IN_TO_MM: f64 = 25.4;
/// Feet to meters
pub const FT_TO_M: f64 = 0.3048;
/// Pounds per cubic foot to kilograms per cubic meter
pub const LB_FT3_TO_KG_M3: f64 = 16.0185;
/// Pounds per square inch to megapascals
pub const PSI_TO_MPA: f64 = 0.00689476;
/// Kips to kilonewtons
pub const KIP_TO_KN: f64 = 4.44822;
/// Pounds per square foot to kilopascals
pub const PSF_TO_KPA: f64 = 0.04788;
/// Pounds-force per cubic foot to kilonewtons per cubic meter
pub const PCF_TO_KN_M3: f64 = 0.157087;

// ============================================================================
// Unit Tags
// ============================================================================

/// Length unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "mm")]
    Millimeters,
    #[serde(rename = "in")]
    Inches,
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

impl LengthUnit {
    /// Convert a value in this unit to meters
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            LengthUnit::Millimeters => value / 1000.0,
            LengthUnit::Inches => value * IN_TO_MM / 1000.0,
            LengthUnit::Meters => value,
            LengthUnit::Feet => value * FT_TO_M,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Inches => "in",
            LengthUnit::Meters => "m",
            LengthUnit::Feet => "ft",
        }
    }
}

/// Density unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    #[serde(rename = "kg/m³")]
    KilogramsPerCubicMeter,
    #[serde(rename = "lb/ft³")]
    PoundsPerCubicFoot,
}

impl DensityUnit {
    /// Convert a value in this unit to kg/m³
    pub fn to_kg_per_m3(self, value: f64) -> f64 {
        match self {
            DensityUnit::KilogramsPerCubicMeter => value,
            DensityUnit::PoundsPerCubicFoot => value * LB_FT3_TO_KG_M3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KilogramsPerCubicMeter => "kg/m³",
            DensityUnit::PoundsPerCubicFoot => "lb/ft³",
        }
    }
}

/// Stress unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressUnit {
    #[serde(rename = "MPa")]
    Megapascals,
    #[serde(rename = "psi")]
    Psi,
    #[serde(rename = "ksi")]
    Ksi,
    #[serde(rename = "kPa")]
    Kilopascals,
}

impl StressUnit {
    /// Convert a value in this unit to MPa
    pub fn to_mpa(self, value: f64) -> f64 {
        match self {
            StressUnit::Megapascals => value,
            StressUnit::Psi => value * PSI_TO_MPA,
            StressUnit::Ksi => value * PSI_TO_MPA * 1000.0,
            StressUnit::Kilopascals => value / 1000.0,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            StressUnit::Megapascals => "MPa",
            StressUnit::Psi => "psi",
            StressUnit::Ksi => "ksi",
            StressUnit::Kilopascals => "kPa",
        }
    }
}

/// Force unit tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    #[serde(rename = "kN")]
    Kilonewtons,
    #[serde(rename = "kip")]
    Kips,
}

impl ForceUnit {
    /// Convert a value in this unit to kN
    pub fn to_kn(self, value: f64) -> f64 {
        match self {
            ForceUnit::Kilonewtons => value,
            ForceUnit::Kips => value * KIP_TO_KN,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Kilonewtons => "kN",
            ForceUnit::Kips => "kip",
        }
    }
}

/// Pressure unit tag (surcharge and soil bearing inputs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "kPa")]
    Kilopascals,
    #[serde(rename = "psf")]
    Psf,
}

impl PressureUnit {
    /// Convert a value in this unit to kPa
    pub fn to_kpa(self, value: f64) -> f64 {
        match self {
            PressureUnit::Kilopascals => value,
            PressureUnit::Psf => value * PSF_TO_KPA,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Kilopascals => "kPa",
            PressureUnit::Psf => "psf",
        }
    }
}

/// Soil unit weight tag (retaining wall backfill)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilUnitWeightUnit {
    #[serde(rename = "kN/m³")]
    KilonewtonsPerCubicMeter,
    #[serde(rename = "pcf")]
    Pcf,
}

impl SoilUnitWeightUnit {
    /// Convert a value in this unit to kN/m³
    pub fn to_kn_per_m3(self, value: f64) -> f64 {
        match self {
            SoilUnitWeightUnit::KilonewtonsPerCubicMeter => value,
            SoilUnitWeightUnit::Pcf => value * PCF_TO_KN_M3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SoilUnitWeightUnit::KilonewtonsPerCubicMeter => "kN/m³",
            SoilUnitWeightUnit::Pcf => "pcf",
        }
    }
}

// ============================================================================
// Conversion Helpers
// ============================================================================
//
// Each helper reads a (value, unit-tag) field pair: unset value converts to
// 0.0; a present value with a missing tag passes through with a warning.

/// Convert an optional tagged length to meters
pub fn length_m(value: Option<f64>, unit: Option<LengthUnit>) -> f64 {
    let v = value.unwrap_or(0.0);
    match unit {
        Some(u) => u.to_meters(v),
        None => {
            if value.is_some() {
                warn!("missing length unit tag, passing value through as meters");
            }
            v
        }
    }
}

/// Convert an optional tagged density to kg/m³
pub fn density_kg_m3(value: Option<f64>, unit: Option<DensityUnit>) -> f64 {
    let v = value.unwrap_or(0.0);
    match unit {
        Some(u) => u.to_kg_per_m3(v),
        None => {
            if value.is_some() {
                warn!("missing density unit tag, passing value through as kg/m³");
            }
            v
        }
    }
}

/// Convert an optional tagged stress to MPa
pub fn stress_mpa(value: Option<f64>, unit: Option<StressUnit>) -> f64 {
    let v = value.unwrap_or(0.0);
    match unit {
        Some(u) => u.to_mpa(v),
        None => {
            if value.is_some() {
                warn!("missing stress unit tag, passing value through as MPa");
            }
            v
        }
    }
}

/// Convert an optional tagged force to kN
pub fn force_kn(value: Option<f64>, unit: Option<ForceUnit>) -> f64 {
    let v = value.unwrap_or(0.0);
    match unit {
        Some(u) => u.to_kn(v),
        None => {
            if value.is_some() {
                warn!("missing force unit tag, passing value through as kN");
            }
            v
        }
    }
}

/// Convert an optional tagged pressure to kPa
pub fn pressure_kpa(value: Option<f64>, unit: Option<PressureUnit>) -> f64 {
    let v = value.unwrap_or(0.0);
    match unit {
        Some(u) => u.to_kpa(v),
        None => {
            if value.is_some() {
                warn!("missing pressure unit tag, passing value through as kPa");
            }
            v
        }
    }
}

/// Convert an optional tagged soil unit weight to kN/m³
pub fn soil_unit_weight_kn_m3(value: Option<f64>, unit: Option<SoilUnitWeightUnit>) -> f64 {
    let v = value.unwrap_or(0.0);
    match unit {
        Some(u) => u.to_kn_per_m3(v),
        None => {
            if value.is_some() {
                warn!("missing soil unit weight tag, passing value through as kN/m³");
            }
            v
        }
    }
}

/// Format a number with a fixed number of decimal places (default 2 at call
/// sites that follow the results contract).
pub fn format(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}
