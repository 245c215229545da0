//! Korea Clean Hydrogen (Clean Hydrogen Portfolio Standard, CHPS)
//! methodology.
//!
//! Republic of Korea, "Act on Promotion of Hydrogen Economy and Hydrogen
//! Safety Management", Law No. 16942, 05 Feb 2020, amended 2022. Enforced
//! by MOTIE and certified by the Korea New and Renewable Energy Center.
//!
//! Certification tiers (GHG intensity per kg H2 produced):
//!   Grade 1 (Very Clean Hydrogen) : <= 1.0 kg CO2e/kg H2
//!   Grade 2 (Clean Hydrogen)      : <= 4.0 kg CO2e/kg H2
//!   Not Certified                 : >  4.0 kg CO2e/kg H2
//!
//! System boundary: well-to-gate, consistent with ISO 14040/14044
//! cradle-to-gate LCA. End-use combustion is accounted for separately under
//! the power-sector rules. Water treatment energy is always included here,
//! unlike the India GHCI boundary option.

use serde_json::{json, Map};

use crate::methodologies::{Classification, Methodology};
use crate::models::{ElectrolysisInputs, GhgBreakdown, GhgResult, HydrogenPathway, SmrInputs};

/// Korea CHPS Clean Hydrogen certification methodology.
///
/// Stateless; tiers are scanned strictest first, and a non-certified outcome
/// reports the Grade 2 (most lenient) threshold as the bound that was
/// exceeded.
#[derive(Debug, Clone, Copy, Default)]
pub struct KoreaCleanH2;

impl KoreaCleanH2 {
    /// Grade 1 "Very Clean Hydrogen" threshold [kg CO2e/kg H2].
    pub const GRADE_1_THRESHOLD: f64 = 1.0;
    /// Grade 2 "Clean Hydrogen" threshold [kg CO2e/kg H2].
    pub const GRADE_2_THRESHOLD: f64 = 4.0;

    pub fn new() -> Self {
        Self
    }

    fn header_notes() -> Vec<String> {
        vec![
            "Methodology: Korea CHPS Clean Hydrogen, Law No. 16942 (amended 2022).".to_string(),
            "System boundary: well-to-gate (excludes end-use combustion).".to_string(),
            "Functional unit: 1 kg H2 produced at the plant gate.".to_string(),
            format!(
                "Certification tiers: Grade 1 <= {} kg CO2e/kg H2; Grade 2 <= {} kg CO2e/kg H2.",
                Self::GRADE_1_THRESHOLD,
                Self::GRADE_2_THRESHOLD
            ),
        ]
    }
}

impl Methodology for KoreaCleanH2 {
    fn name(&self) -> &'static str {
        "Korea Clean H2 (CHPS)"
    }

    fn version(&self) -> &'static str {
        "Korea Hydrogen Act (Law No. 16942, 2020 / amended 2022)"
    }

    fn reference(&self) -> &'static str {
        "https://www.knrec.or.kr/business/hydrogen_certification.do"
    }

    fn calculate_electrolysis(&self, inputs: &ElectrolysisInputs) -> GhgResult {
        let mut notes = Self::header_notes();

        // Step 1 - Effective electricity (with T&D losses)
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

        // Step 3 - Upstream from water treatment (always included under CHPS)
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

        // Step 4 - Transport & storage
        let t_s = inputs.transport_and_storage_kg_co2e_per_kg_h2();
        notes.push(format!(
            "Step 4 - Transport & storage: {:.4} kg CO2e/kg H2 ({}).",
            t_s,
            if t_s > 0.0 {
                "included"
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

        notes.push(format!(
            "Result: {:.4} kg CO2e/kg H2 -> '{}' (threshold <= {} kg CO2e/kg H2, {}).",
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
            "Result: {:.4} kg CO2e/kg H2 -> '{}' (threshold <= {} kg CO2e/kg H2, {}).",
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

    /// Tiers are checked strictest first; a non-qualifying intensity reports
    /// the Grade 2 threshold it exceeded, not the Grade 1 bound.
    fn classify(&self, intensity: f64) -> Classification {
        if intensity <= Self::GRADE_1_THRESHOLD {
            return Classification {
                tier: "Grade 1 — Very Clean Hydrogen".to_string(),
                threshold_kg_co2e_per_kg_h2: Self::GRADE_1_THRESHOLD,
                passes: true,
            };
        }
        if intensity <= Self::GRADE_2_THRESHOLD {
            return Classification {
                tier: "Grade 2 — Clean Hydrogen".to_string(),
                threshold_kg_co2e_per_kg_h2: Self::GRADE_2_THRESHOLD,
                passes: true,
            };
        }
        Classification {
            tier: "Not Certified (exceeds Grade 2 threshold)".to_string(),
            threshold_kg_co2e_per_kg_h2: Self::GRADE_2_THRESHOLD,
            passes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn renewable_electrolysis_reaches_grade_1() {
        let inputs = ElectrolysisInputs::new(55.0, 0.0).unwrap();
        let result = KoreaCleanH2::new().calculate_electrolysis(&inputs);

        assert_relative_eq!(
            result.total_intensity_kg_co2e_per_kg_h2,
            0.0,
            epsilon = 1e-9
        );
        assert!(result.passes_certification);
        assert_eq!(result.certification_tier, "Grade 1 — Very Clean Hydrogen");
        assert_eq!(result.threshold_kg_co2e_per_kg_h2, 1.0);
    }

    #[test]
    fn moderate_intensity_lands_in_grade_2() {
        // 55 kWh at EF 3/55 with zero water terms gives a total of 3.0,
        // above Grade 1 but within Grade 2
        let inputs = ElectrolysisInputs::new(55.0, 3.0 / 55.0)
            .unwrap()
            .with_water_consumption(0.0)
            .unwrap()
            .with_water_treatment_energy(0.0)
            .unwrap();
        let result = KoreaCleanH2::new().calculate_electrolysis(&inputs);

        assert_relative_eq!(
            result.total_intensity_kg_co2e_per_kg_h2,
            3.0,
            epsilon = 1e-9
        );
        assert!(result.passes_certification);
        assert_eq!(result.certification_tier, "Grade 2 — Clean Hydrogen");
        assert_eq!(result.threshold_kg_co2e_per_kg_h2, 4.0);
    }

    #[test]
    fn water_treatment_always_included() {
        let inputs = ElectrolysisInputs::new(55.0, 0.5).unwrap();
        let result = KoreaCleanH2::new().calculate_electrolysis(&inputs);

        assert_relative_eq!(
            result.breakdown.upstream_emissions,
            9.0 * 0.001 * 0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn default_smr_is_not_certified() {
        let result = KoreaCleanH2::new().calculate_smr(&SmrInputs::new());

        assert!(result.total_intensity_kg_co2e_per_kg_h2 > 4.0);
        assert!(!result.passes_certification);
        assert_eq!(
            result.certification_tier,
            "Not Certified (exceeds Grade 2 threshold)"
        );
        // failed bound is the most lenient tier, not the strictest
        assert_eq!(result.threshold_kg_co2e_per_kg_h2, 4.0);
    }

    #[test]
    fn high_capture_smr_reaches_grade_1() {
        let inputs = SmrInputs::new()
            .with_natural_gas_consumption(100.0)
            .unwrap()
            .with_upstream_emission_factor(0.003)
            .unwrap()
            .with_process_co2(5.0)
            .unwrap()
            .with_ccs_capture_rate(0.99)
            .unwrap();
        let result = KoreaCleanH2::new().calculate_smr(&inputs);

        // 100*0.003 + 5.0*(1 - 0.99) = 0.35
        assert_relative_eq!(
            result.total_intensity_kg_co2e_per_kg_h2,
            0.35,
            epsilon = 1e-9
        );
        assert!(result.passes_certification);
        assert_eq!(result.certification_tier, "Grade 1 — Very Clean Hydrogen");
        assert_eq!(result.pathway, HydrogenPathway::SmrWithCcs);
    }

    #[test]
    fn pathway_tag_requires_strictly_positive_capture_rate() {
        let method = KoreaCleanH2::new();

        let no_ccs = method.calculate_smr(&SmrInputs::new());
        assert_eq!(no_ccs.pathway, HydrogenPathway::SmrWithoutCcs);

        let explicit_zero = SmrInputs::new().with_ccs_capture_rate(0.0).unwrap();
        assert_eq!(
            method.calculate_smr(&explicit_zero).pathway,
            HydrogenPathway::SmrWithoutCcs
        );

        let tiny = SmrInputs::new().with_ccs_capture_rate(1e-9).unwrap();
        assert_eq!(
            method.calculate_smr(&tiny).pathway,
            HydrogenPathway::SmrWithCcs
        );
    }

    #[test]
    fn classify_boundaries_are_inclusive() {
        let method = KoreaCleanH2::new();

        assert!(method.classify(1.0).passes);
        assert_eq!(method.classify(1.0).threshold_kg_co2e_per_kg_h2, 1.0);

        let grade_2 = method.classify(4.0);
        assert!(grade_2.passes);
        assert_eq!(grade_2.tier, "Grade 2 — Clean Hydrogen");

        assert!(!method.classify(4.000_001).passes);
    }

    #[test]
    fn classify_is_monotonic_in_strictness() {
        let method = KoreaCleanH2::new();
        // increasing intensity never turns a failing result into a pass
        let mut last_passed = true;
        for intensity in [0.0, 0.5, 1.0, 1.5, 4.0, 4.5, 10.0] {
            let outcome = method.classify(intensity);
            assert!(
                !(outcome.passes && !last_passed),
                "pass regained at intensity {intensity}"
            );
            last_passed = outcome.passes;
        }
    }

    #[test]
    fn notes_include_tier_table_header() {
        let result = KoreaCleanH2::new().calculate_smr(&SmrInputs::new());
        assert!(result
            .notes
            .iter()
            .any(|n| n.starts_with("Certification tiers: Grade 1")));
    }
}
