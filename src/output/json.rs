//! JSON output for subnet reports.

use crate::models::{BinaryBreakdown, SubnetFacts, SubnetSpec};
use crate::parsing::ErrorKind;
use crate::processing::InputReport;
use serde::Serialize;

#[derive(Serialize, Debug)]
struct JsonError {
    kind: ErrorKind,
    message: String,
}

#[derive(Serialize, Debug)]
struct JsonReport<'a> {
    label: &'a str,
    input: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    spec: Option<&'a SubnetSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facts: Option<&'a SubnetFacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a BinaryBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonError>,
}

impl<'a> From<&'a InputReport> for JsonReport<'a> {
    fn from(report: &'a InputReport) -> Self {
        let subnet = report.outcome.as_ref().ok();
        JsonReport {
            label: &report.label,
            input: &report.input,
            ok: report.is_ok(),
            spec: subnet.map(|s| &s.spec),
            cidr: subnet.map(|s| s.facts.cidr()),
            facts: subnet.map(|s| &s.facts),
            breakdown: subnet.map(|s| &s.breakdown),
            error: report.outcome.as_ref().err().map(|e| JsonError {
                kind: e.kind(),
                message: e.to_string(),
            }),
        }
    }
}

/// Serialize reports as a pretty-printed JSON array.
pub fn reports_to_json(reports: &[InputReport]) -> serde_json::Result<String> {
    let json: Vec<JsonReport> = reports.iter().map(JsonReport::from).collect();
    serde_json::to_string_pretty(&json)
}
