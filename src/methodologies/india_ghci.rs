//! India Green Hydrogen Certification of India (GHCI) methodology.
//!
//! Ministry of New and Renewable Energy (MNRE), Government of India,
//! "Green Hydrogen Standard for India", Notification S.O. 3769(E),
//! Gazette of India, 18 August 2023.
//!
//! System boundary: well-to-gate (raw material extraction through hydrogen
//! at the plant gate); end-use combustion excluded.
//!
//! Single certification threshold:
//!   <= 2 kg CO2e/kg H2  ->  "Green Hydrogen"
//!
//! Electrolysis accounting:
//!   CI = E_elec_total * EF_elec + E_water * EF_elec + transport_storage
//! where E_elec_total includes upstream T&D losses and the water treatment
//! energy draws the same grid emission factor.
//!
//! SMR accounting:
//!   CI = NG_consumption * NG_upstream_EF
//!        + (1 - CCS_rate) * process_CO2 + transport_storage
//! with production reported gross and the CCS credit held as a separate
//! breakdown component.

use serde_json::{json, Map};

use crate::methodologies::{Classification, Methodology};
use crate::models::{ElectrolysisInputs, GhgBreakdown, GhgResult, HydrogenPathway, SmrInputs};

/// India MNRE Green Hydrogen Standard (August 2023).
///
/// The MNRE notification requires all energy inputs to be accounted for, so
/// water demineralisation energy is included by default; construct with
/// [`IndiaGhci::new`] passing `false` to exclude it. The flag is captured at
/// construction and read-only afterward, so an instance is safe to reuse
/// across calls.
#[derive(Debug, Clone)]
pub struct IndiaGhci {
    include_water_treatment: bool,
}

impl Default for IndiaGhci {
    fn default() -> Self {
        Self {
            include_water_treatment: true,
        }
    }
}

impl IndiaGhci {
    /// MNRE Green Hydrogen threshold [kg CO2e/kg H2].
    pub const GREEN_HYDROGEN_THRESHOLD: f64 = 2.0;

    pub fn new(include_water_treatment: bool) -> Self {
        Self {
            include_water_treatment,
        }
    }

    pub fn include_water_treatment(&self) -> bool {
        self.include_water_treatment
    }

    fn header_notes() -> Vec<String> {
        vec![
            "Methodology: MNRE Green Hydrogen Standard, S.O. 3769(E), 18 Aug 2023.".to_string(),
            "System boundary: well-to-gate (excludes end-use combustion).".to_string(),
            "Functional unit: 1 kg H2 produced at the plant gate.".to_string(),
        ]
    }
}

impl Methodology for IndiaGhci {
    fn name(&self) -> &'static str {
        "India GHCI"
    }

    fn version(&self) -> &'static str {
        "MNRE Notification S.O. 3769(E), 18 Aug 2023"
    }

    fn reference(&self) -> &'static str {
        "https://mnre.gov.in/green-hydrogen-standard-for-india"
    }

    fn calculate_electrolysis(&self, inputs: &ElectrolysisInputs) -> GhgResult {
        let mut notes = Self::header_notes();

        // Step 1 - Effective electricity consumption (including T&D losses)
        let e_elec_effective = inputs.electricity_consumption_kwh_per_kg_h2()
            * (1.0 + inputs.upstream_electricity_losses_fraction());
        notes.push(format!(
            "Step 1 - Effective electricity: {} kWh/kg H2 x (1 + {}) = {:.4} kWh/kg H2",
            inputs.electricity_consumption_kwh_per_kg_h2(),
            inputs.upstream_electricity_losses_fraction(),
            e_elec_effective
        ));

        // Step 2 - Production emissions from electricity
        let production_elec =
            e_elec_effective * inputs.grid_emission_factor_kg_co2e_per_kwh();
        notes.push(format!(
            "Step 2 - Production (electricity): {:.4} kWh/kg H2 x {} kg CO2e/kWh = {:.4} kg CO2e/kg H2",
            e_elec_effective,
            inputs.grid_emission_factor_kg_co2e_per_kwh(),
            production_elec
        ));

        // Step 3 - Upstream emissions from water treatment (optional under
        // this methodology's boundary configuration)
        let upstream = if self.include_water_treatment {
            let water_energy = inputs.water_consumption_l_per_kg_h2()
                * inputs.water_treatment_energy_kwh_per_l();
            let upstream = water_energy * inputs.grid_emission_factor_kg_co2e_per_kwh();
            notes.push(format!(
                "Step 3 - Upstream (water treatment): {} L/kg H2 x {} kWh/L x {} kg CO2e/kWh = {:.6} kg CO2e/kg H2",
                inputs.water_consumption_l_per_kg_h2(),
                inputs.water_treatment_energy_kwh_per_l(),
                inputs.grid_emission_factor_kg_co2e_per_kwh(),
                upstream
            ));
            upstream
        } else {
            notes.push(
                "Step 3 - Water treatment upstream emissions: excluded (user choice).".to_string(),
            );
            0.0
        };

        // Step 4 - Transport & storage (zero under a well-to-gate boundary
        // unless the caller opts in)
        let t_s = inputs.transport_and_storage_kg_co2e_per_kg_h2();
        notes.push(format!(
            "Step 4 - Transport & storage: {:.4} kg CO2e/kg H2 ({}).",
            t_s,
            if t_s > 0.0 {
                "included per user input"
            } else {
                "zero - well-to-gate boundary"
            }
        ));

        let breakdown = GhgBreakdown {
            upstream_emissions: upstream,
            production_emissions: production_elec,
            transport_and_storage_emissions: t_s,
            ccs_credit: 0.0,
        };

        let outcome = self.classify(breakdown.total());

        let mut assumptions = Map::new();
        assumptions.insert(
            "electricity_consumption_kwh_per_kg_h2".to_string(),
            json!(inputs.electricity_consumption_kwh_per_kg_h2()),
        );
        assumptions.insert(
            "grid_emission_factor_kg_co2e_per_kwh".to_string(),
            json!(inputs.grid_emission_factor_kg_co2e_per_kwh()),
        );
        assumptions.insert(
            "water_consumption_l_per_kg_h2".to_string(),
            json!(inputs.water_consumption_l_per_kg_h2()),
        );
        assumptions.insert(
            "water_treatment_energy_kwh_per_l".to_string(),
            json!(inputs.water_treatment_energy_kwh_per_l()),
        );
        assumptions.insert(
            "upstream_electricity_losses_fraction".to_string(),
            json!(inputs.upstream_electricity_losses_fraction()),
        );
        assumptions.insert(
            "transport_and_storage_kg_co2e_per_kg_h2".to_string(),
            json!(t_s),
        );
        assumptions.insert(
            "include_water_treatment".to_string(),
            json!(self.include_water_treatment),
        );

        notes.push(format!(
            "Result: {:.4} kg CO2e/kg H2 -> tier '{}' (threshold <= {} kg CO2e/kg H2, {}).",
            breakdown.total(),
            outcome.tier,
            outcome.threshold_kg_co2e_per_kg_h2,
            if outcome.passes { "PASSES" } else { "DOES NOT PASS" }
        ));

        GhgResult {
            methodology: self.name().to_string(),
            methodology_version: self.version().to_string(),
            pathway: HydrogenPathway::Electrolysis,
            total_intensity_kg_co2e_per_kg_h2: breakdown.total(),
            breakdown,
            certification_tier: outcome.tier,
            threshold_kg_co2e_per_kg_h2: outcome.threshold_kg_co2e_per_kg_h2,
            passes_certification: outcome.passes,
            assumptions,
            notes,
        }
    }

    fn calculate_smr(&self, inputs: &SmrInputs) -> GhgResult {
        let mut notes = Self::header_notes();

        let pathway = if inputs.ccs_capture_rate() > 0.0 {
            HydrogenPathway::SmrWithCcs
        } else {
            HydrogenPathway::SmrWithoutCcs
        };

        // Step 1 - Upstream NG emissions
        let upstream = inputs.natural_gas_consumption_mj_per_kg_h2()
            * inputs.natural_gas_upstream_emission_factor_kg_co2e_per_mj();
        notes.push(format!(
            "Step 1 - Upstream (NG extraction & transport): {} MJ/kg H2 x {} kg CO2e/MJ = {:.4} kg CO2e/kg H2",
            inputs.natural_gas_consumption_mj_per_kg_h2(),
            inputs.natural_gas_upstream_emission_factor_kg_co2e_per_mj(),
            upstream
        ));

        // Step 2 - Gross direct process CO2 at the SMR plant (before CCS)
        let gross_process_co2 = inputs.process_co2_direct_kg_per_kg_h2();
        notes.push(format!(
            "Step 2 - Gross direct process CO2: {:.4} kg CO2/kg H2",
            gross_process_co2
        ));

        // Step 3 - CCS credit (amount sequestered)
        let ccs_credit = gross_process_co2 * inputs.ccs_capture_rate();
        let net_process_co2 = gross_process_co2 - ccs_credit;
        notes.push(format!(
            "Step 3 - CCS credit: {} x {} = {:.4} kg CO2/kg H2 sequestered; net process CO2 = {:.4} kg CO2e/kg H2",
            gross_process_co2,
            inputs.ccs_capture_rate(),
            ccs_credit,
            net_process_co2
        ));

        // Step 4 - Transport & storage
        let t_s = inputs.transport_and_storage_kg_co2e_per_kg_h2();
        notes.push(format!(
            "Step 4 - Transport & storage: {:.4} kg CO2e/kg H2.",
            t_s
        ));

        let breakdown = GhgBreakdown {
            upstream_emissions: upstream,
            production_emissions: gross_process_co2,
            transport_and_storage_emissions: t_s,
            ccs_credit,
        };

        let outcome = self.classify(breakdown.total());

        let mut assumptions = Map::new();
        assumptions.insert(
            "natural_gas_consumption_mj_per_kg_h2".to_string(),
            json!(inputs.natural_gas_consumption_mj_per_kg_h2()),
        );
        assumptions.insert(
            "natural_gas_upstream_emission_factor_kg_co2e_per_mj".to_string(),
            json!(inputs.natural_gas_upstream_emission_factor_kg_co2e_per_mj()),
        );
        assumptions.insert(
            "process_co2_direct_kg_per_kg_h2".to_string(),
            json!(inputs.process_co2_direct_kg_per_kg_h2()),
        );
        assumptions.insert(
            "ccs_capture_rate".to_string(),
            json!(inputs.ccs_capture_rate()),
        );
        assumptions.insert(
            "transport_and_storage_kg_co2e_per_kg_h2".to_string(),
            json!(t_s),
        );
        assumptions.insert("gwp100_ch4".to_string(), json!(inputs.gwp100_ch4()));

        notes.push(format!(
            "Result: {:.4} kg CO2e/kg H2 -> tier '{}' (threshold <= {} kg CO2e/kg H2, {}).",
            breakdown.total(),
            outcome.tier,
            outcome.threshold_kg_co2e_per_kg_h2,
            if outcome.passes { "PASSES" } else { "DOES NOT PASS" }
        ));

        GhgResult {
            methodology: self.name().to_string(),
            methodology_version: self.version().to_string(),
            pathway,
            total_intensity_kg_co2e_per_kg_h2: breakdown.total(),
            breakdown,
            certification_tier: outcome.tier,
            threshold_kg_co2e_per_kg_h2: outcome.threshold_kg_co2e_per_kg_h2,
            passes_certification: outcome.passes,
            assumptions,
            notes,
        }
    }

    fn classify(&self, intensity: f64) -> Classification {
        if intensity <= Self::GREEN_HYDROGEN_THRESHOLD {
            Classification {
                tier: "Green Hydrogen".to_string(),
                threshold_kg_co2e_per_kg_h2: Self::GREEN_HYDROGEN_THRESHOLD,
                passes: true,
            }
        } else {
            Classification {
                tier: "Not Certified (exceeds Green Hydrogen threshold)".to_string(),
                threshold_kg_co2e_per_kg_h2: Self::GREEN_HYDROGEN_THRESHOLD,
                passes: false,
            }
        }
    }
}
