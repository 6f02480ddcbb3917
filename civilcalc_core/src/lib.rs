//! # civilcalc_core - Concrete Quantity Calculation Engine
//!
//! `civilcalc_core` is the computational heart of CivilCalc: a catalog of
//! form-driven structural-element calculators that turn dimensions and
//! material properties into concrete volumes, formwork areas and itemized
//! reinforcement weights, with stability and capacity checks where the
//! element calls for them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every calculation is a pure function from an input
//!   record to a result record; nothing persists between calls
//! - **Tagged units in, typed quantities out**: inputs carry explicit unit
//!   tags and are normalized to SI before any formula runs; results are
//!   typed magnitudes that render (and serialize) as the number-plus-unit
//!   text the report layer consumes
//! - **Validation gates, calculation trusts**: each calculator pairs with a
//!   validation function returning field-keyed messages; the calculation
//!   function assumes it already ran
//!
//! ## Quick Start
//!
//! ```rust
//! use civilcalc_core::calculations::CalculatorKind;
//! use civilcalc_core::defaults::default_inputs;
//! use civilcalc_core::settings::UnitSystem;
//!
//! let kind = CalculatorKind::RectangularColumn;
//! let inputs = default_inputs(kind, UnitSystem::Metric);
//! let results = kind.run(&inputs).unwrap();
//!
//! println!("concrete: {}", results.concrete_volume.unwrap());
//! println!("steel:    {}", results.total_steel_weight.unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - one calculate/validate pair per element type
//! - [`units`] - unit tags and SI conversion
//! - [`materials`] - bar and anchor reference tables
//! - [`inputs`] / [`results`] - the flat input and result records
//! - [`schedule`] - reinforcement lines, audit trace, shared tally
//! - [`defaults`] / [`settings`] - form seeding and user preferences
//! - [`store`] - file-backed saved-calculation snapshots
//! - [`errors`] - structured error types

pub mod calculations;
pub mod defaults;
pub mod errors;
pub mod inputs;
pub mod materials;
pub mod results;
pub mod schedule;
pub mod settings;
pub mod store;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::CalculatorKind;
pub use errors::{CalcError, CalcResult};
pub use inputs::{CalculationInputs, ValidationErrors};
pub use results::CalculationResults;
pub use settings::{GlobalSettings, UnitSystem};
pub use store::{CalculationStore, SavedCalculationItem};
