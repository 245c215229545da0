//! Command-line interface for the hydrogen GHG intensity calculator.
//!
//! Usage:
//!   ghg-calc electrolysis --methodology india_ghci \
//!       --electricity-kwh 55 --emission-factor 0.0
//!
//!   ghg-calc smr --methodology korea_clean_h2 --ccs-rate 0.90
//!
//!   ghg-calc list-methodologies
//!
//! Add --json for machine-readable output instead of the text summary.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;

use ghg_h2_calc::{ElectrolysisInputs, GhgCalculator, GhgResult, SmrInputs};

const USAGE: &str = "\
ghg-calc - lifecycle GHG intensity calculator for hydrogen certification

Commands:
  list-methodologies    Print all available methodology identifiers.
  electrolysis          Calculate GHG intensity for electrolytic hydrogen.
  smr                   Calculate GHG intensity for SMR/ATR hydrogen.

Common options:
  --methodology ID      Certification methodology to apply (required).
  --json                Output JSON instead of human-readable text.

electrolysis options:
  --electricity-kwh X   AC electricity consumption [kWh/kg H2] (required).
  --emission-factor X   Grid lifecycle emission factor [kg CO2e/kWh] (required).
  --water-l X           Water consumption [L/kg H2]. Default: 9.0.
  --water-energy X      Water treatment energy [kWh/L]. Default: 0.001.
  --td-losses X         Upstream T&D loss fraction. Default: 0.
  --transport-storage X Transport & storage [kg CO2e/kg H2]. Default: 0.

smr options:
  --ng-consumption X    Natural gas consumption [MJ LHV/kg H2]. Default: 185.
  --ng-upstream-ef X    Upstream NG emission factor [kg CO2e/MJ]. Default: 0.0053.
  --process-co2 X       Direct process CO2 [kg CO2/kg H2]. Default: 9.0.
  --ccs-rate X          CCS capture rate [0-1]. Default: 0 (no CCS).
  --transport-storage X Transport & storage [kg CO2e/kg H2]. Default: 0.
";

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{USAGE}");
        bail!("missing command");
    };

    match command.as_str() {
        "list-methodologies" => list_methodologies(),
        "electrolysis" => run_electrolysis(&args[1..]),
        "smr" => run_smr(&args[1..]),
        "help" | "--help" | "-h" => {
            println!("{USAGE}");
            Ok(())
        }
        other => {
            println!("{USAGE}");
            bail!("unknown command '{other}'");
        }
    }
}

fn list_methodologies() -> Result<()> {
    for id in GhgCalculator::available_methodologies() {
        let calc = GhgCalculator::new(id)?;
        let method = calc.methodology();
        println!("  {:20}  {}  [{}]", id, method.name(), method.version());
    }
    Ok(())
}

fn run_electrolysis(args: &[String]) -> Result<()> {
    let flags = parse_flags(args)?;

    let inputs = ElectrolysisInputs::new(
        require_f64(&flags, "--electricity-kwh")?,
        require_f64(&flags, "--emission-factor")?,
    )?
    .with_water_consumption(optional_f64(&flags, "--water-l")?.unwrap_or(9.0))?
    .with_water_treatment_energy(optional_f64(&flags, "--water-energy")?.unwrap_or(0.001))?
    .with_upstream_losses(optional_f64(&flags, "--td-losses")?.unwrap_or(0.0))?
    .with_transport_and_storage(optional_f64(&flags, "--transport-storage")?.unwrap_or(0.0))?;

    let calc = GhgCalculator::new(require_str(&flags, "--methodology")?)?;
    emit(&calc.calculate_electrolysis(&inputs), flags.contains_key("--json"))
}

fn run_smr(args: &[String]) -> Result<()> {
    let flags = parse_flags(args)?;

    let mut inputs = SmrInputs::new();
    if let Some(value) = optional_f64(&flags, "--ng-consumption")? {
        inputs = inputs.with_natural_gas_consumption(value)?;
    }
    if let Some(value) = optional_f64(&flags, "--ng-upstream-ef")? {
        inputs = inputs.with_upstream_emission_factor(value)?;
    }
    if let Some(value) = optional_f64(&flags, "--process-co2")? {
        inputs = inputs.with_process_co2(value)?;
    }
    if let Some(value) = optional_f64(&flags, "--ccs-rate")? {
        inputs = inputs.with_ccs_capture_rate(value)?;
    }
    if let Some(value) = optional_f64(&flags, "--transport-storage")? {
        inputs = inputs.with_transport_and_storage(value)?;
    }

    let calc = GhgCalculator::new(require_str(&flags, "--methodology")?)?;
    emit(&calc.calculate_smr(&inputs), flags.contains_key("--json"))
}

fn emit(result: &GhgResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&result.to_value())?);
    } else {
        println!("{}", result.summary());
    }
    Ok(())
}

/// Parse `--flag value` pairs; `--json` is the only boolean flag.
fn parse_flags(args: &[String]) -> Result<HashMap<String, String>> {
    let mut flags = HashMap::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if !arg.starts_with("--") {
            bail!("unexpected argument '{arg}'");
        }
        if arg == "--json" {
            flags.insert(arg.clone(), String::new());
            continue;
        }
        let value = iter
            .next()
            .with_context(|| format!("flag '{arg}' expects a value"))?;
        flags.insert(arg.clone(), value.clone());
    }
    Ok(flags)
}

fn require_str<'a>(flags: &'a HashMap<String, String>, key: &str) -> Result<&'a str> {
    flags
        .get(key)
        .map(String::as_str)
        .with_context(|| format!("missing required flag '{key}'"))
}

fn require_f64(flags: &HashMap<String, String>, key: &str) -> Result<f64> {
    optional_f64(flags, key)?.with_context(|| format!("missing required flag '{key}'"))
}

fn optional_f64(flags: &HashMap<String, String>, key: &str) -> Result<Option<f64>> {
    flags
        .get(key)
        .map(|raw| {
            raw.parse::<f64>()
                .with_context(|| format!("flag '{key}' expects a number, got '{raw}'"))
        })
        .transpose()
}
