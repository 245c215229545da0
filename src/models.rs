//! Data models for GHG intensity inputs and results.
//!
//! All emission intensities are expressed in kg CO2e per kg H2. The
//! functional unit for every figure is 1 kg of hydrogen produced at the
//! plant gate.
//!
//! Units guide:
//! - Energy: kWh (electricity), MJ LHV (fuel)
//! - Volume: litres (water)
//! - Emission factor: kg CO2e/kWh or kg CO2e/MJ
//! - GHG intensity: kg CO2e/kg H2

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt;

use crate::error::GhgError;

/// Supported hydrogen production pathways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrogenPathway {
    Electrolysis,
    SmrWithCcs,
    SmrWithoutCcs,
    /// Reserved; no built-in methodology calculates this pathway yet.
    BiomassGasification,
}

impl HydrogenPathway {
    pub fn as_str(&self) -> &'static str {
        match self {
            HydrogenPathway::Electrolysis => "electrolysis",
            HydrogenPathway::SmrWithCcs => "smr_with_ccs",
            HydrogenPathway::SmrWithoutCcs => "smr_without_ccs",
            HydrogenPathway::BiomassGasification => "biomass_gasification",
        }
    }
}

impl fmt::Display for HydrogenPathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs for electrolytic hydrogen production (PEM, Alkaline, SOEC).
///
/// Validated at construction; every constructor and `with_*` setter
/// re-checks the documented bounds and fails fast on violation. Fields are
/// read through accessors so a validated instance stays valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectrolysisInputs {
    electricity_consumption_kwh_per_kg_h2: f64,
    grid_emission_factor_kg_co2e_per_kwh: f64,
    water_consumption_l_per_kg_h2: f64,
    water_treatment_energy_kwh_per_l: f64,
    transport_and_storage_kg_co2e_per_kg_h2: f64,
    upstream_electricity_losses_fraction: f64,
}

impl ElectrolysisInputs {
    /// Build an input record from the two required parameters.
    ///
    /// # Arguments
    /// * `electricity_kwh_per_kg_h2` - AC electricity consumed by the
    ///   electrolyser system, including balance-of-plant auxiliary loads
    ///   [kWh/kg H2]. Typical range 47-65. Must be positive.
    /// * `grid_emission_factor` - lifecycle emission factor of the
    ///   electricity supply [kg CO2e/kWh]. Must be non-negative.
    ///
    /// Remaining fields take their defaults: water consumption 9.0 L/kg H2,
    /// water treatment energy 0.001 kWh/L, transport & storage 0.0,
    /// upstream T&D losses 0.0.
    pub fn new(
        electricity_kwh_per_kg_h2: f64,
        grid_emission_factor: f64,
    ) -> Result<Self, GhgError> {
        let inputs = Self {
            electricity_consumption_kwh_per_kg_h2: electricity_kwh_per_kg_h2,
            grid_emission_factor_kg_co2e_per_kwh: grid_emission_factor,
            water_consumption_l_per_kg_h2: 9.0,
            water_treatment_energy_kwh_per_l: 0.001,
            transport_and_storage_kg_co2e_per_kg_h2: 0.0,
            upstream_electricity_losses_fraction: 0.0,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Purified water consumed per kg H2 produced [L/kg H2].
    pub fn with_water_consumption(mut self, l_per_kg_h2: f64) -> Result<Self, GhgError> {
        self.water_consumption_l_per_kg_h2 = l_per_kg_h2;
        self.validate()?;
        Ok(self)
    }

    /// Energy to demineralise feed water [kWh/L].
    pub fn with_water_treatment_energy(mut self, kwh_per_l: f64) -> Result<Self, GhgError> {
        self.water_treatment_energy_kwh_per_l = kwh_per_l;
        self.validate()?;
        Ok(self)
    }

    /// Downstream compression, storage, and transport emissions
    /// [kg CO2e/kg H2]. Leave at 0 for well-to-gate calculations.
    pub fn with_transport_and_storage(mut self, kg_co2e_per_kg_h2: f64) -> Result<Self, GhgError> {
        self.transport_and_storage_kg_co2e_per_kg_h2 = kg_co2e_per_kg_h2;
        self.validate()?;
        Ok(self)
    }

    /// Upstream transmission and distribution loss fraction added on top of
    /// site electricity consumption. E.g. 0.05 for 5% T&D losses.
    pub fn with_upstream_losses(mut self, fraction: f64) -> Result<Self, GhgError> {
        self.upstream_electricity_losses_fraction = fraction;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), GhgError> {
        if self.electricity_consumption_kwh_per_kg_h2 <= 0.0 {
            return Err(GhgError::invalid(
                "electricity_consumption_kwh_per_kg_h2",
                "must be positive",
            ));
        }
        if self.grid_emission_factor_kg_co2e_per_kwh < 0.0 {
            return Err(GhgError::invalid(
                "grid_emission_factor_kg_co2e_per_kwh",
                "cannot be negative",
            ));
        }
        if self.water_consumption_l_per_kg_h2 < 0.0 {
            return Err(GhgError::invalid(
                "water_consumption_l_per_kg_h2",
                "cannot be negative",
            ));
        }
        if self.water_treatment_energy_kwh_per_l < 0.0 {
            return Err(GhgError::invalid(
                "water_treatment_energy_kwh_per_l",
                "cannot be negative",
            ));
        }
        if self.transport_and_storage_kg_co2e_per_kg_h2 < 0.0 {
            return Err(GhgError::invalid(
                "transport_and_storage_kg_co2e_per_kg_h2",
                "cannot be negative",
            ));
        }
        if !(0.0..1.0).contains(&self.upstream_electricity_losses_fraction) {
            return Err(GhgError::invalid(
                "upstream_electricity_losses_fraction",
                "must be in [0, 1)",
            ));
        }
        Ok(())
    }

    pub fn electricity_consumption_kwh_per_kg_h2(&self) -> f64 {
        self.electricity_consumption_kwh_per_kg_h2
    }

    pub fn grid_emission_factor_kg_co2e_per_kwh(&self) -> f64 {
        self.grid_emission_factor_kg_co2e_per_kwh
    }

    pub fn water_consumption_l_per_kg_h2(&self) -> f64 {
        self.water_consumption_l_per_kg_h2
    }

    pub fn water_treatment_energy_kwh_per_l(&self) -> f64 {
        self.water_treatment_energy_kwh_per_l
    }

    pub fn transport_and_storage_kg_co2e_per_kg_h2(&self) -> f64 {
        self.transport_and_storage_kg_co2e_per_kg_h2
    }

    pub fn upstream_electricity_losses_fraction(&self) -> f64 {
        self.upstream_electricity_losses_fraction
    }
}

/// Inputs for Steam Methane Reforming (SMR / ATR) hydrogen production,
/// with or without carbon capture.
///
/// All fields have documented defaults, so `SmrInputs::new()` is infallible;
/// the `with_*` setters re-validate and fail fast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmrInputs {
    natural_gas_consumption_mj_per_kg_h2: f64,
    natural_gas_upstream_emission_factor_kg_co2e_per_mj: f64,
    process_co2_direct_kg_per_kg_h2: f64,
    ccs_capture_rate: f64,
    transport_and_storage_kg_co2e_per_kg_h2: f64,
    gwp100_ch4: f64,
}

impl Default for SmrInputs {
    fn default() -> Self {
        Self {
            // Typical SMR without pre-reforming: 170-200 MJ LHV/kg H2
            natural_gas_consumption_mj_per_kg_h2: 185.0,
            // Includes ~2% methane leakage at fossil CH4 GWP100 = 29.8 (AR6)
            natural_gas_upstream_emission_factor_kg_co2e_per_mj: 0.0053,
            // Conventional SMR releases ~8-10 kg CO2 per kg H2 at the plant
            process_co2_direct_kg_per_kg_h2: 9.0,
            ccs_capture_rate: 0.0,
            transport_and_storage_kg_co2e_per_kg_h2: 0.0,
            gwp100_ch4: 29.8,
        }
    }
}

impl SmrInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Natural gas consumed as feedstock + fuel [MJ LHV/kg H2].
    pub fn with_natural_gas_consumption(mut self, mj_per_kg_h2: f64) -> Result<Self, GhgError> {
        self.natural_gas_consumption_mj_per_kg_h2 = mj_per_kg_h2;
        self.validate()?;
        Ok(self)
    }

    /// Upstream (extraction, processing, transport) lifecycle emission
    /// factor for natural gas [kg CO2e/MJ LHV].
    pub fn with_upstream_emission_factor(mut self, kg_co2e_per_mj: f64) -> Result<Self, GhgError> {
        self.natural_gas_upstream_emission_factor_kg_co2e_per_mj = kg_co2e_per_mj;
        self.validate()?;
        Ok(self)
    }

    /// Direct CO2 released at the SMR/ATR plant per kg H2 produced
    /// [kg CO2/kg H2].
    pub fn with_process_co2(mut self, kg_per_kg_h2: f64) -> Result<Self, GhgError> {
        self.process_co2_direct_kg_per_kg_h2 = kg_per_kg_h2;
        self.validate()?;
        Ok(self)
    }

    /// Fraction of direct process CO2 captured and permanently stored
    /// [0-1]. 0 for SMR without CCS; 0.85-0.95 is typical for SMR+CCS.
    pub fn with_ccs_capture_rate(mut self, rate: f64) -> Result<Self, GhgError> {
        self.ccs_capture_rate = rate;
        self.validate()?;
        Ok(self)
    }

    /// Downstream compression, storage, and transport emissions
    /// [kg CO2e/kg H2].
    pub fn with_transport_and_storage(mut self, kg_co2e_per_kg_h2: f64) -> Result<Self, GhgError> {
        self.transport_and_storage_kg_co2e_per_kg_h2 = kg_co2e_per_kg_h2;
        self.validate()?;
        Ok(self)
    }

    /// GWP100 for methane. Carried into the assumptions of the result for
    /// audit purposes; not used in the arithmetic.
    pub fn with_gwp100_ch4(mut self, gwp: f64) -> Result<Self, GhgError> {
        self.gwp100_ch4 = gwp;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), GhgError> {
        if self.natural_gas_consumption_mj_per_kg_h2 <= 0.0 {
            return Err(GhgError::invalid(
                "natural_gas_consumption_mj_per_kg_h2",
                "must be positive",
            ));
        }
        if self.natural_gas_upstream_emission_factor_kg_co2e_per_mj < 0.0 {
            return Err(GhgError::invalid(
                "natural_gas_upstream_emission_factor_kg_co2e_per_mj",
                "cannot be negative",
            ));
        }
        if self.process_co2_direct_kg_per_kg_h2 < 0.0 {
            return Err(GhgError::invalid(
                "process_co2_direct_kg_per_kg_h2",
                "cannot be negative",
            ));
        }
        if !(0.0..=1.0).contains(&self.ccs_capture_rate) {
            return Err(GhgError::invalid("ccs_capture_rate", "must be in [0, 1]"));
        }
        if self.transport_and_storage_kg_co2e_per_kg_h2 < 0.0 {
            return Err(GhgError::invalid(
                "transport_and_storage_kg_co2e_per_kg_h2",
                "cannot be negative",
            ));
        }
        Ok(())
    }

    pub fn natural_gas_consumption_mj_per_kg_h2(&self) -> f64 {
        self.natural_gas_consumption_mj_per_kg_h2
    }

    pub fn natural_gas_upstream_emission_factor_kg_co2e_per_mj(&self) -> f64 {
        self.natural_gas_upstream_emission_factor_kg_co2e_per_mj
    }

    pub fn process_co2_direct_kg_per_kg_h2(&self) -> f64 {
        self.process_co2_direct_kg_per_kg_h2
    }

    pub fn ccs_capture_rate(&self) -> f64 {
        self.ccs_capture_rate
    }

    pub fn transport_and_storage_kg_co2e_per_kg_h2(&self) -> f64 {
        self.transport_and_storage_kg_co2e_per_kg_h2
    }

    pub fn gwp100_ch4(&self) -> f64 {
        self.gwp100_ch4
    }
}

/// Round to a fixed number of decimal places. Serialization only; internal
/// values keep full precision.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Per-stage breakdown of lifecycle GHG emissions [kg CO2e/kg H2].
///
/// `ccs_credit` is stored as a positive value and subtracted in `total`,
/// keeping production emissions gross for per-component auditability.
/// Serialization goes through [`GhgBreakdown::to_value`], which rounds the
/// components and includes the computed total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GhgBreakdown {
    /// Upstream feedstock extraction, processing, and energy supply.
    pub upstream_emissions: f64,
    /// Direct process emissions at the hydrogen production plant (gross).
    pub production_emissions: f64,
    /// Post-gate compression, storage, and transport.
    pub transport_and_storage_emissions: f64,
    /// CO2 sequestration credit (positive = emission reduction applied).
    pub ccs_credit: f64,
}

impl GhgBreakdown {
    /// Total lifecycle GHG intensity [kg CO2e/kg H2]. May be negative in
    /// theory (net-negative pathways); not specially handled.
    pub fn total(&self) -> f64 {
        self.upstream_emissions + self.production_emissions
            + self.transport_and_storage_emissions
            - self.ccs_credit
    }

    /// Serialize with components rounded to 6 decimal places.
    pub fn to_value(&self) -> Value {
        json!({
            "upstream_emissions": round_to(self.upstream_emissions, 6),
            "production_emissions": round_to(self.production_emissions, 6),
            "transport_and_storage_emissions": round_to(self.transport_and_storage_emissions, 6),
            "ccs_credit": round_to(self.ccs_credit, 6),
            "total": round_to(self.total(), 6),
        })
    }
}

/// Verification-ready result of a lifecycle GHG intensity calculation.
///
/// Constructed once per calculation call and never mutated afterward.
/// Carries the total intensity, the per-stage breakdown, the certification
/// outcome, and a full audit trail: the assumptions map (in insertion
/// order) and the ordered calculation notes. [`GhgResult::to_value`] is the
/// one serialization form; internal fields keep full precision.
#[derive(Debug, Clone)]
pub struct GhgResult {
    /// Short identifier for the certification methodology (e.g. "India GHCI").
    pub methodology: String,
    /// Version or year of the methodology document used.
    pub methodology_version: String,
    pub pathway: HydrogenPathway,
    /// Total well-to-gate lifecycle GHG intensity [kg CO2e/kg H2].
    pub total_intensity_kg_co2e_per_kg_h2: f64,
    pub breakdown: GhgBreakdown,
    /// Human-readable certification outcome label.
    pub certification_tier: String,
    /// The emission threshold associated with `certification_tier`.
    pub threshold_kg_co2e_per_kg_h2: f64,
    pub passes_certification: bool,
    /// Key input assumptions used in the calculation, in insertion order.
    pub assumptions: Map<String, Value>,
    /// Ordered calculation notes providing a full audit trail.
    pub notes: Vec<String>,
}

impl GhgResult {
    /// Serialize to a plain JSON object (suitable for machine output).
    ///
    /// The total is rounded to 4 decimal places and breakdown components to
    /// 6; all other fields are passed through verbatim.
    pub fn to_value(&self) -> Value {
        json!({
            "methodology": self.methodology,
            "methodology_version": self.methodology_version,
            "pathway": self.pathway.as_str(),
            "total_intensity_kg_co2e_per_kg_h2": round_to(self.total_intensity_kg_co2e_per_kg_h2, 4),
            "breakdown": self.breakdown.to_value(),
            "certification_tier": self.certification_tier,
            "threshold_kg_co2e_per_kg_h2": self.threshold_kg_co2e_per_kg_h2,
            "passes_certification": self.passes_certification,
            "assumptions": self.assumptions,
            "notes": self.notes,
        })
    }

    /// Render a human-readable one-page calculation summary.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "=".repeat(60),
            format!(
                "GHG Intensity Calculation — {} ({})",
                self.methodology, self.methodology_version
            ),
            "=".repeat(60),
            format!("Pathway           : {}", self.pathway),
            format!(
                "Total Intensity   : {:.4} kg CO2e/kg H2",
                self.total_intensity_kg_co2e_per_kg_h2
            ),
            String::new(),
            "Emission Breakdown (kg CO2e/kg H2):".to_string(),
            format!(
                "  Upstream                  : {:.4}",
                self.breakdown.upstream_emissions
            ),
            format!(
                "  Production (direct)       : {:.4}",
                self.breakdown.production_emissions
            ),
            format!(
                "  Transport & Storage       : {:.4}",
                self.breakdown.transport_and_storage_emissions
            ),
            format!(
                "  CCS Credit (deducted)     : {:.4}",
                self.breakdown.ccs_credit
            ),
            format!("  {}", "-".repeat(36)),
            format!("  TOTAL                     : {:.4}", self.breakdown.total()),
            String::new(),
            "Certification Outcome:".to_string(),
            format!("  Tier      : {}", self.certification_tier),
            format!(
                "  Threshold : <= {} kg CO2e/kg H2",
                self.threshold_kg_co2e_per_kg_h2
            ),
            format!(
                "  Result    : {}",
                if self.passes_certification {
                    "PASSES"
                } else {
                    "DOES NOT PASS"
                }
            ),
            String::new(),
            "Assumptions:".to_string(),
        ];
        for (key, value) in &self.assumptions {
            lines.push(format!("  {key}: {value}"));
        }
        lines.push(String::new());
        lines.push("Calculation Notes:".to_string());
        for note in &self.notes {
            lines.push(format!("  - {note}"));
        }
        lines.push("=".repeat(60));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn electrolysis_valid_inputs_and_defaults() {
        let inputs = ElectrolysisInputs::new(55.0, 0.05).unwrap();
        assert_eq!(inputs.electricity_consumption_kwh_per_kg_h2(), 55.0);
        assert_eq!(inputs.grid_emission_factor_kg_co2e_per_kwh(), 0.05);
        assert_eq!(inputs.water_consumption_l_per_kg_h2(), 9.0);
        assert_eq!(inputs.water_treatment_energy_kwh_per_l(), 0.001);
        assert_eq!(inputs.transport_and_storage_kg_co2e_per_kg_h2(), 0.0);
        assert_eq!(inputs.upstream_electricity_losses_fraction(), 0.0);
    }

    #[test]
    fn electrolysis_zero_emission_factor_is_valid() {
        let inputs = ElectrolysisInputs::new(55.0, 0.0).unwrap();
        assert_eq!(inputs.grid_emission_factor_kg_co2e_per_kwh(), 0.0);
    }

    #[test]
    fn electrolysis_negative_electricity_rejected() {
        let err = ElectrolysisInputs::new(-1.0, 0.05).unwrap_err();
        assert!(err
            .to_string()
            .contains("electricity_consumption_kwh_per_kg_h2"));
    }

    #[test]
    fn electrolysis_negative_emission_factor_rejected() {
        let err = ElectrolysisInputs::new(55.0, -0.01).unwrap_err();
        assert!(err.to_string().contains("grid_emission_factor"));
    }

    #[test]
    fn electrolysis_losses_fraction_of_one_rejected() {
        let err = ElectrolysisInputs::new(55.0, 0.05)
            .unwrap()
            .with_upstream_losses(1.0)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("upstream_electricity_losses_fraction"));
    }

    #[test]
    fn electrolysis_negative_transport_rejected() {
        let err = ElectrolysisInputs::new(55.0, 0.05)
            .unwrap()
            .with_transport_and_storage(-0.1)
            .unwrap_err();
        assert!(err.to_string().contains("transport_and_storage"));
    }

    #[test]
    fn smr_defaults() {
        let inputs = SmrInputs::new();
        assert_eq!(inputs.natural_gas_consumption_mj_per_kg_h2(), 185.0);
        assert_eq!(
            inputs.natural_gas_upstream_emission_factor_kg_co2e_per_mj(),
            0.0053
        );
        assert_eq!(inputs.process_co2_direct_kg_per_kg_h2(), 9.0);
        assert_eq!(inputs.ccs_capture_rate(), 0.0);
        assert_eq!(inputs.gwp100_ch4(), 29.8);
    }

    #[test]
    fn smr_ccs_rate_bounds() {
        assert!(SmrInputs::new().with_ccs_capture_rate(1.5).is_err());
        assert!(SmrInputs::new().with_ccs_capture_rate(0.0).is_ok());
        assert!(SmrInputs::new().with_ccs_capture_rate(1.0).is_ok());
    }

    #[test]
    fn smr_negative_ng_consumption_rejected() {
        let err = SmrInputs::new()
            .with_natural_gas_consumption(-10.0)
            .unwrap_err();
        assert!(err.to_string().contains("natural_gas_consumption"));
    }

    #[test]
    fn breakdown_total_is_additive() {
        let bd = GhgBreakdown {
            upstream_emissions: 1.0,
            production_emissions: 2.0,
            transport_and_storage_emissions: 0.5,
            ccs_credit: 0.8,
        };
        assert_relative_eq!(bd.total(), 1.0 + 2.0 + 0.5 - 0.8);
    }

    #[test]
    fn breakdown_negative_total_permitted() {
        let bd = GhgBreakdown {
            ccs_credit: 5.0,
            ..Default::default()
        };
        assert_relative_eq!(bd.total(), -5.0);
    }

    #[test]
    fn breakdown_to_value_rounds_and_includes_total() {
        let bd = GhgBreakdown {
            production_emissions: 3.000_000_4,
            ..Default::default()
        };
        let value = bd.to_value();
        assert_eq!(value["production_emissions"], json!(3.0));
        assert_eq!(value["total"], json!(3.0));
    }

    #[test]
    fn pathway_string_forms() {
        assert_eq!(HydrogenPathway::Electrolysis.as_str(), "electrolysis");
        assert_eq!(HydrogenPathway::SmrWithCcs.as_str(), "smr_with_ccs");
        assert_eq!(HydrogenPathway::SmrWithoutCcs.as_str(), "smr_without_ccs");
        assert_eq!(
            HydrogenPathway::BiomassGasification.as_str(),
            "biomass_gasification"
        );
    }

    fn make_result(total: f64, passes: bool) -> GhgResult {
        GhgResult {
            methodology: "Test".to_string(),
            methodology_version: "v1".to_string(),
            pathway: HydrogenPathway::Electrolysis,
            total_intensity_kg_co2e_per_kg_h2: total,
            breakdown: GhgBreakdown {
                production_emissions: total,
                ..Default::default()
            },
            certification_tier: "Green".to_string(),
            threshold_kg_co2e_per_kg_h2: 2.0,
            passes_certification: passes,
            assumptions: Map::new(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn result_to_value_has_contract_keys() {
        let value = make_result(1.5, true).to_value();
        for key in [
            "methodology",
            "methodology_version",
            "pathway",
            "total_intensity_kg_co2e_per_kg_h2",
            "breakdown",
            "certification_tier",
            "threshold_kg_co2e_per_kg_h2",
            "passes_certification",
            "assumptions",
            "notes",
        ] {
            assert!(value.get(key).is_some(), "missing key: {key}");
        }
        assert_eq!(value["pathway"], json!("electrolysis"));
    }

    #[test]
    fn result_to_value_rounds_total_to_4dp() {
        let value = make_result(1.234_56, true).to_value();
        assert_eq!(value["total_intensity_kg_co2e_per_kg_h2"], json!(1.2346));
    }

    #[test]
    fn summary_reports_intensity_and_outcome() {
        let summary = make_result(1.23, true).summary();
        assert!(summary.contains("1.2300"));
        assert!(summary.contains("PASSES"));

        let summary = make_result(3.5, false).summary();
        assert!(summary.contains("DOES NOT PASS"));
    }
}
