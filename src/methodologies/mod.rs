//! Certification methodology contract.
//!
//! Each methodology encapsulates a specific certification standard's system
//! boundary definition, emission factor requirements, tier structure, and
//! calculation formula with audit-trail generation. New standards implement
//! [`Methodology`] and can be passed to the calculator facade directly
//! without touching the built-in registry.

pub mod india_ghci;
pub mod korea_clean_h2;

pub use india_ghci::IndiaGhci;
pub use korea_clean_h2::KoreaCleanH2;

use crate::models::{ElectrolysisInputs, GhgResult, SmrInputs};

/// Outcome of mapping a total GHG intensity to a certification tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Human-readable tier label for this methodology.
    pub tier: String,
    /// The threshold the intensity was compared against [kg CO2e/kg H2].
    /// For a non-qualifying outcome this is the most lenient threshold the
    /// intensity failed to meet, not the strictest tier it missed.
    pub threshold_kg_co2e_per_kg_h2: f64,
    pub passes: bool,
}

/// A GHG certification methodology.
///
/// Calculations never fail: input records are validated at construction and
/// both `calculate_*` methods are total functions over valid inputs.
pub trait Methodology {
    /// Human-readable name (e.g. "India GHCI").
    fn name(&self) -> &'static str;

    /// Version or year string of the methodology document.
    fn version(&self) -> &'static str;

    /// Short URL or citation reference for the standard.
    fn reference(&self) -> &'static str;

    /// Calculate GHG intensity for electrolytic hydrogen.
    fn calculate_electrolysis(&self, inputs: &ElectrolysisInputs) -> GhgResult;

    /// Calculate GHG intensity for SMR/ATR hydrogen (with or without CCS).
    fn calculate_smr(&self, inputs: &SmrInputs) -> GhgResult;

    /// Map a total intensity [kg CO2e/kg H2] to this methodology's
    /// certification outcome.
    ///
    /// Threshold comparisons are inclusive: an intensity exactly at a tier
    /// threshold qualifies for that tier. All implementations must honor
    /// this, since certification schemes treat "at or below" as qualifying.
    fn classify(&self, intensity: f64) -> Classification;
}
