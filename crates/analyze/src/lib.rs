//! formlogic-analyze: save-time static checks for form field lists.
//!
//! Runs before a form create/update is persisted. The cycle check is
//! the gate: a field list whose visibility rules form a cycle is
//! rejected by the caller. The remaining checks produce warnings for
//! the form author (dangling rule references, duplicate ids) without
//! blocking the save.

pub mod cycles;
pub mod report;

pub use cycles::{validate_logic, LogicResult};
pub use report::{CheckReport, Finding, FindingSeverity};

use std::collections::BTreeSet;

use formlogic_core::Field;

/// Run every save-time check over a candidate field list.
pub fn check_fields(fields: &[Field]) -> CheckReport {
    let logic = cycles::validate_logic(fields);
    let mut findings = Vec::new();

    for field_id in &logic.circular_fields {
        findings.push(Finding {
            severity: FindingSeverity::Error,
            message: format!(
                "field '{}' is part of a circular visibility dependency",
                field_id
            ),
            field_id: Some(field_id.clone()),
            details: logic
                .dependencies
                .dependents_of(field_id)
                .map(|dependents| serde_json::json!({ "dependents": dependents })),
        });
    }

    // A rule pointing at an unknown field can never be satisfied: the
    // dependency is never answered, so the dependent field never shows.
    let known_ids: BTreeSet<&str> = fields.iter().map(|f| f.id.as_str()).collect();
    for field in fields {
        if let Some(rule) = &field.visible_if {
            if !known_ids.contains(rule.question_id.as_str()) {
                findings.push(Finding {
                    severity: FindingSeverity::Warning,
                    message: format!(
                        "field '{}' depends on unknown field '{}' and can never become visible",
                        field.id, rule.question_id
                    ),
                    field_id: Some(field.id.clone()),
                    details: Some(serde_json::json!({ "questionId": rule.question_id })),
                });
            }
        }
    }

    // Duplicate ids shadow each other in answer sets.
    let mut seen = BTreeSet::new();
    for field in fields {
        if !seen.insert(field.id.as_str()) {
            findings.push(Finding {
                severity: FindingSeverity::Warning,
                message: format!("duplicate field id '{}'", field.id),
                field_id: Some(field.id.clone()),
                details: None,
            });
        }
    }

    CheckReport {
        field_count: fields.len(),
        edge_count: logic.dependencies.edge_count(),
        logic,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formlogic_core::{Condition, ConditionValue, FieldType, RenderAs};

    fn field(id: &str, depends_on: Option<&str>) -> Field {
        Field {
            id: id.to_string(),
            airtable_field_id: None,
            label: String::new(),
            field_type: FieldType::ShortText,
            required: false,
            options: vec![],
            render_as: RenderAs::Dropdown,
            visible_if: depends_on.map(|q| Condition {
                question_id: q.to_string(),
                operator: "equals".to_string(),
                value: ConditionValue::Text("yes".to_string()),
            }),
        }
    }

    #[test]
    fn clean_field_list_has_no_findings() {
        let fields = vec![field("a", None), field("b", Some("a"))];
        let report = check_fields(&fields);
        assert!(report.is_valid());
        assert!(report.findings.is_empty());
        assert_eq!(report.field_count, 2);
        assert_eq!(report.edge_count, 1);
    }

    #[test]
    fn cycle_produces_error_findings_and_blocks() {
        let fields = vec![field("a", Some("b")), field("b", Some("a"))];
        let report = check_fields(&fields);
        assert!(!report.is_valid());
        assert!(report.errors().count() >= 1);
        let first = report.errors().next().unwrap();
        assert!(first.message.contains("circular"));
    }

    #[test]
    fn dangling_reference_warns_but_does_not_block() {
        let fields = vec![field("a", None), field("b", Some("ghost"))];
        let report = check_fields(&fields);
        assert!(report.is_valid());
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity, FindingSeverity::Warning);
        assert!(report.findings[0].message.contains("ghost"));
    }

    #[test]
    fn duplicate_id_warns_but_does_not_block() {
        let fields = vec![field("a", None), field("a", None)];
        let report = check_fields(&fields);
        assert!(report.is_valid());
        assert_eq!(report.findings.len(), 1);
        assert!(report.findings[0].message.contains("duplicate"));
    }

    #[test]
    fn report_is_serializable() {
        let fields = vec![field("a", Some("a"))];
        let report = check_fields(&fields);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["fieldCount"], serde_json::json!(1));
        assert_eq!(json["logic"]["isValid"], serde_json::json!(false));
        assert!(json["findings"].is_array());
    }
}
