//! Aggregated save-time check report with extracted findings.

use serde::Serialize;

use crate::cycles::LogicResult;

/// Severity of a check finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FindingSeverity {
    Error,
    Warning,
}

impl FindingSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            FindingSeverity::Error => "error",
            FindingSeverity::Warning => "warning",
        }
    }
}

/// A notable finding from the field-list checks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub severity: FindingSeverity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Aggregated result of checking a candidate field list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub field_count: usize,
    pub edge_count: usize,
    pub logic: LogicResult,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// True when the field list is safe to persist. Only cycles block
    /// a save; warnings are surfaced to the author without gating.
    pub fn is_valid(&self) -> bool {
        self.logic.is_valid
    }

    /// Findings at error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == FindingSeverity::Error)
    }
}
