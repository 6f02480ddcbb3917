//! # Reinforcement Reference Data
//!
//! Static lookup tables for deformed reinforcement bars and concrete
//! anchors, shared by every element function.
//!
//! Bar linear masses follow ACI 318 / standard manufacturer tables; anchor
//! areas and ultimate strengths cover common metric (property class 4.6
//! equivalent) and Grade 36 imperial sizes.
//!
//! A designation missing from a table is not an error at this layer: the
//! lookup returns `None` and the owning reinforcement group contributes
//! zero weight and no schedule line.
//!
//! ## Example
//!
//! ```rust
//! use civilcalc_core::materials::bar_data;
//!
//! let bar = bar_data("16mm").unwrap();
//! assert_eq!(bar.weight_kg_per_m, 1.578);
//! assert!(bar_data("14mm").is_none());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Reference row for a reinforcement bar size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarData {
    /// Outer (nominal) diameter in millimeters
    pub diameter_mm: f64,
    /// Linear mass in kg per meter of bar
    pub weight_kg_per_m: f64,
}

/// Reference row for an anchor size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorData {
    /// Effective cross-sectional (tensile stress) area in mm²
    pub area_mm2: f64,
    /// Ultimate tensile strength in MPa
    pub fut_mpa: f64,
}

/// Bar designations in display order (metric first, then imperial)
pub const BAR_SIZES: [&str; 10] = [
    "10mm", "12mm", "16mm", "20mm", "25mm", "32mm", "#3", "#4", "#5", "#6",
];

/// Anchor designations in display order
pub const ANCHOR_SIZES: [&str; 5] = ["M12", "M16", "M20", "1/2\"", "5/8\""];

static BAR_DATA: Lazy<HashMap<&'static str, BarData>> = Lazy::new(|| {
    HashMap::from([
        // Metric sizes
        ("10mm", BarData { diameter_mm: 10.0, weight_kg_per_m: 0.617 }),
        ("12mm", BarData { diameter_mm: 12.0, weight_kg_per_m: 0.888 }),
        ("16mm", BarData { diameter_mm: 16.0, weight_kg_per_m: 1.578 }),
        ("20mm", BarData { diameter_mm: 20.0, weight_kg_per_m: 2.466 }),
        ("25mm", BarData { diameter_mm: 25.0, weight_kg_per_m: 3.853 }),
        ("32mm", BarData { diameter_mm: 32.0, weight_kg_per_m: 6.313 }),
        // Imperial sizes (eighths of an inch)
        ("#3", BarData { diameter_mm: 9.5, weight_kg_per_m: 0.560 }),
        ("#4", BarData { diameter_mm: 12.7, weight_kg_per_m: 0.996 }),
        ("#5", BarData { diameter_mm: 15.9, weight_kg_per_m: 1.552 }),
        ("#6", BarData { diameter_mm: 19.1, weight_kg_per_m: 2.235 }),
    ])
});

static ANCHOR_DATA: Lazy<HashMap<&'static str, AnchorData>> = Lazy::new(|| {
    HashMap::from([
        ("M12", AnchorData { area_mm2: 84.3, fut_mpa: 400.0 }),
        ("M16", AnchorData { area_mm2: 157.0, fut_mpa: 400.0 }),
        ("M20", AnchorData { area_mm2: 245.0, fut_mpa: 400.0 }),
        // Grade 36
        ("1/2\"", AnchorData { area_mm2: 129.0, fut_mpa: 414.0 }),
        ("5/8\"", AnchorData { area_mm2: 199.0, fut_mpa: 414.0 }),
    ])
});

/// Look up a reinforcement bar by designation (e.g. `"16mm"`, `"#5"`).
pub fn bar_data(designation: &str) -> Option<&'static BarData> {
    BAR_DATA.get(designation)
}

/// Look up an anchor by designation (e.g. `"M16"`, `"5/8\""`).
pub fn anchor_data(designation: &str) -> Option<&'static AnchorData> {
    ANCHOR_DATA.get(designation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_bar_lookup() {
        let bar = bar_data("20mm").unwrap();
        assert_eq!(bar.diameter_mm, 20.0);
        assert_eq!(bar.weight_kg_per_m, 2.466);
    }

    #[test]
    fn test_imperial_bar_lookup() {
        let bar = bar_data("#5").unwrap();
        assert_eq!(bar.diameter_mm, 15.9);
        assert_eq!(bar.weight_kg_per_m, 1.552);
    }

    #[test]
    fn test_unknown_bar_is_none() {
        assert!(bar_data("14mm").is_none());
        assert!(bar_data("None").is_none());
        assert!(bar_data("").is_none());
    }

    #[test]
    fn test_anchor_lookup() {
        let anchor = anchor_data("5/8\"").unwrap();
        assert_eq!(anchor.area_mm2, 199.0);
        assert_eq!(anchor.fut_mpa, 414.0);
        assert!(anchor_data("M24").is_none());
    }

    #[test]
    fn test_all_listed_sizes_resolve() {
        for size in BAR_SIZES {
            assert!(bar_data(size).is_some(), "missing bar row for {size}");
        }
        for size in ANCHOR_SIZES {
            assert!(anchor_data(size).is_some(), "missing anchor row for {size}");
        }
    }
}
