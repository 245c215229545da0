//! Lifecycle GHG intensity calculator for hydrogen production.
//!
//! Computes well-to-gate greenhouse-gas intensity (kg CO2e per kg H2) under
//! pluggable certification methodologies and reports whether the result
//! qualifies under each methodology's tiered thresholds. Built-in rule-sets:
//!
//! - `india_ghci`: India MNRE Green Hydrogen Standard (single 2.0 threshold)
//! - `korea_clean_h2`: Korea CHPS Clean Hydrogen (Grade 1 / Grade 2 tiers)
//!
//! Every calculation yields a [`GhgResult`] carrying an itemized emission
//! breakdown, the certification outcome, the input assumptions, and an
//! ordered list of calculation notes suitable for third-party verification.
//!
//! ```
//! use ghg_h2_calc::{ElectrolysisInputs, GhgCalculator};
//!
//! let calc = GhgCalculator::new("korea_clean_h2")?;
//! let inputs = ElectrolysisInputs::new(55.0, 0.012)?;
//! let result = calc.calculate_electrolysis(&inputs);
//! println!("{}", result.summary());
//! # Ok::<(), ghg_h2_calc::GhgError>(())
//! ```

pub mod calculator;
pub mod error;
pub mod methodologies;
pub mod models;

// Re-export commonly used types
pub use calculator::{GhgCalculator, METHODOLOGY_IDS};
pub use error::GhgError;
pub use methodologies::{Classification, IndiaGhci, KoreaCleanH2, Methodology};
pub use models::{ElectrolysisInputs, GhgBreakdown, GhgResult, HydrogenPathway, SmrInputs};
