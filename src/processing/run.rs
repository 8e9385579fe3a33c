//! Per-input processing.
//!
//! Every input produces an [`InputReport`]; a rejected input is recorded and
//! the run moves on to the next one.

use crate::config::Config;
use crate::models::{BinaryBreakdown, SubnetFacts, SubnetSpec};
use crate::parsing::{parse_subnet, ParseError};

/// Everything computed for one accepted input.
#[derive(Debug, Clone, PartialEq)]
pub struct SubnetReport {
    pub spec: SubnetSpec,
    pub facts: SubnetFacts,
    pub breakdown: BinaryBreakdown,
}

impl SubnetReport {
    pub fn from_spec(spec: SubnetSpec) -> SubnetReport {
        SubnetReport {
            facts: SubnetFacts::from(&spec),
            breakdown: BinaryBreakdown::from_spec(&spec),
            spec,
        }
    }
}

/// Outcome of one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct InputReport {
    pub label: String,
    pub input: String,
    pub outcome: Result<SubnetReport, ParseError>,
}

impl InputReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Parse one input and derive its subnet facts.
pub fn explain_input(input: &str) -> Result<SubnetReport, ParseError> {
    let spec = parse_subnet(input)?;
    Ok(SubnetReport::from_spec(spec))
}

/// Process one input under a display label.
pub fn process_input(label: &str, input: &str) -> InputReport {
    log::info!("Processing {label} input={input:?}");
    let outcome = explain_input(input);
    match &outcome {
        Ok(report) => log::debug!("{label}: {} -> {}", input, report.facts.cidr()),
        Err(e) => log::warn!("{label}: rejected {input:?} ({}): {e}", e.kind()),
    }
    InputReport {
        label: label.to_string(),
        input: input.to_string(),
        outcome,
    }
}

/// Process the inputs selected by `config.run_mode`: the list first, then
/// the single input.
pub fn run(config: &Config) -> Vec<InputReport> {
    let mut reports = Vec::new();

    if config.run_mode.includes_list() {
        if config.inputs.is_empty() {
            log::warn!("Input list is empty, skipping list run.");
        }
        for (i, input) in config.inputs.iter().enumerate() {
            reports.push(process_input(&format!("TEST #{}", i + 1), input));
        }
    }

    if config.run_mode.includes_single() {
        match &config.single_input {
            Some(input) => reports.push(process_input("SINGLE INPUT", input)),
            None => log::warn!("No single IP/subnet input provided, skipping single run."),
        }
    }

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    log::info!("Processed {} input(s), {failed} rejected", reports.len());
    reports
}
