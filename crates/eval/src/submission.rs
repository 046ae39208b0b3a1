//! Submission validation against the visible subset of a form.
//!
//! Hidden fields are exempt from every check: a required field whose
//! visibility rule is not satisfied does not block submission. All
//! violations are collected into one report; callers must not
//! short-circuit on the first error.

use formlogic_core::{
    form_from_json, AnswerSet, AnswerValue, Field, FieldType, Form, FormError,
};
use serde::Serialize;

use crate::coerce;
use crate::visibility::visible_fields;

/// Outcome of validating a submission. The counts are carried for
/// observability; they are absent on a structural failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_field_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_field_count: Option<usize>,
}

impl SubmissionReport {
    fn structural(message: String) -> SubmissionReport {
        SubmissionReport {
            is_valid: false,
            errors: vec![message],
            field_count: None,
            visible_field_count: None,
            submission_field_count: None,
        }
    }
}

/// Validate a raw submission payload against a stored form definition.
///
/// JSON boundary used by request handlers: a malformed definition
/// becomes a structural failure report, never an `Err` -- the caller
/// rejects the write and surfaces `errors` to the submitter either
/// way.
pub fn validate_submission_json(
    definition: &serde_json::Value,
    payload: &serde_json::Value,
) -> SubmissionReport {
    let form = match form_from_json(definition) {
        Ok(form) => form,
        Err(FormError::MissingField { .. }) | Err(FormError::InvalidDefinition(_)) => {
            return SubmissionReport::structural(
                "Form structure is invalid - no fields found".to_string(),
            );
        }
        Err(e) => return SubmissionReport::structural(format!("Validation error: {}", e)),
    };
    validate_submission(&form, &AnswerSet::from_json(payload))
}

/// Validate answers against the visible subset of the form's fields.
pub fn validate_submission(form: &Form, answers: &AnswerSet) -> SubmissionReport {
    let visible = visible_fields(&form.fields, answers);
    let mut errors = Vec::new();

    for &field in &visible {
        if field.required && is_missing(answers.get(&field.id)) {
            errors.push(format!("{} is required", field.display_name()));
        }

        if let Some(value) = answers.get(&field.id) {
            match field.field_type {
                FieldType::SingleSelect => validate_single_select(field, value, &mut errors),
                FieldType::MultiSelect => validate_multi_select(field, value, &mut errors),
                // Text fields carry no option constraints; attachment
                // presence arrives as a caller-provided placeholder.
                FieldType::ShortText | FieldType::LongText | FieldType::Attachment => {}
            }
        }
    }

    SubmissionReport {
        is_valid: errors.is_empty(),
        errors,
        field_count: Some(form.fields.len()),
        visible_field_count: Some(visible.len()),
        submission_field_count: Some(answers.len()),
    }
}

fn is_missing(value: Option<&AnswerValue>) -> bool {
    match value {
        None => true,
        Some(AnswerValue::Text(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn validate_single_select(field: &Field, value: &AnswerValue, errors: &mut Vec<String>) {
    let valid = match value {
        AnswerValue::Text(s) => field.options.iter().any(|opt| opt == s),
        // A list or number can never match a declared option.
        _ => false,
    };
    if !valid {
        errors.push(format!(
            "{} has an invalid option: {}",
            field.display_name(),
            coerce::answer_string(value)
        ));
    }
}

fn validate_multi_select(field: &Field, value: &AnswerValue, errors: &mut Vec<String>) {
    let values = normalize_multi_value(value);
    let invalid: Vec<&str> = values
        .iter()
        .filter(|v| !field.options.iter().any(|opt| opt == *v))
        .map(|v| v.as_str())
        .collect();
    if !invalid.is_empty() {
        errors.push(format!(
            "{} has invalid options: {}. Valid options are: {}",
            field.display_name(),
            invalid.join(", "),
            field.options.join(", ")
        ));
    }
}

/// Normalize a multi-select answer into its element list.
///
/// Clients submit either a real list or a serialized one (`'["red",
/// "blue"]'` or `"red,purple"`): bracket and quote characters are
/// stripped, the remainder splits on commas, parts are trimmed, and
/// empty parts drop out. Other value kinds normalize to an empty list.
pub fn normalize_multi_value(value: &AnswerValue) -> Vec<String> {
    match value {
        AnswerValue::List(items) => items.clone(),
        AnswerValue::Text(s) => {
            let stripped: String = s
                .chars()
                .filter(|c| !matches!(c, '[' | ']' | '"'))
                .collect();
            stripped
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        }
        AnswerValue::Number(_) => Vec::new(),
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use formlogic_core::{Condition, ConditionValue, RenderAs};

    fn field(id: &str, label: &str, field_type: FieldType, required: bool) -> Field {
        Field {
            id: id.to_string(),
            airtable_field_id: None,
            label: label.to_string(),
            field_type,
            required,
            options: vec![],
            render_as: RenderAs::Dropdown,
            visible_if: None,
        }
    }

    fn form(fields: Vec<Field>) -> Form {
        Form {
            id: None,
            title: None,
            slug: None,
            base_id: None,
            table_id: None,
            fields,
        }
    }

    fn answers(entries: &[(&str, AnswerValue)]) -> AnswerSet {
        let mut set = AnswerSet::new();
        for (id, value) in entries {
            set.insert(id.to_string(), value.clone());
        }
        set
    }

    fn text(s: &str) -> AnswerValue {
        AnswerValue::Text(s.to_string())
    }

    #[test]
    fn required_field_with_empty_answer_errors_once() {
        let f = form(vec![field("Q3", "", FieldType::ShortText, true)]);
        let report = validate_submission(&f, &answers(&[("Q3", text(""))]));
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Q3 is required".to_string()]);
    }

    #[test]
    fn required_error_prefers_label() {
        let f = form(vec![field("q1", "Full name", FieldType::ShortText, true)]);
        let report = validate_submission(&f, &AnswerSet::new());
        assert_eq!(report.errors, vec!["Full name is required".to_string()]);
    }

    #[test]
    fn hidden_required_field_is_exempt() {
        let mut gated = field("email", "Email", FieldType::ShortText, true);
        gated.visible_if = Some(Condition {
            question_id: "subscribe".to_string(),
            operator: "equals".to_string(),
            value: ConditionValue::Text("yes".to_string()),
        });
        let mut select = field("subscribe", "", FieldType::SingleSelect, true);
        select.options = vec!["yes".to_string(), "no".to_string()];

        let f = form(vec![select, gated]);
        let report = validate_submission(&f, &answers(&[("subscribe", text("no"))]));
        assert!(report.is_valid, "errors: {:?}", report.errors);
        assert_eq!(report.visible_field_count, Some(1));
        assert_eq!(report.field_count, Some(2));
    }

    #[test]
    fn single_select_rejects_unknown_option() {
        let mut select = field("color", "Color", FieldType::SingleSelect, false);
        select.options = vec!["red".to_string(), "green".to_string()];
        let f = form(vec![select]);

        let ok = validate_submission(&f, &answers(&[("color", text("red"))]));
        assert!(ok.is_valid);

        let bad = validate_submission(&f, &answers(&[("color", text("purple"))]));
        assert!(!bad.is_valid);
        assert_eq!(
            bad.errors,
            vec!["Color has an invalid option: purple".to_string()]
        );
    }

    #[test]
    fn multi_select_accepts_serialized_list_string() {
        let mut select = field("colors", "Colors", FieldType::MultiSelect, false);
        select.options = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        let f = form(vec![select]);

        let report = validate_submission(
            &f,
            &answers(&[("colors", text("[\"red\", \"blue\"]"))]),
        );
        assert!(report.is_valid, "errors: {:?}", report.errors);
    }

    #[test]
    fn multi_select_reports_all_invalid_values_and_valid_options() {
        let mut select = field("colors", "Colors", FieldType::MultiSelect, false);
        select.options = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        let f = form(vec![select]);

        let report = validate_submission(&f, &answers(&[("colors", text("red,purple"))]));
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec![
                "Colors has invalid options: purple. Valid options are: red, green, blue"
                    .to_string()
            ]
        );
    }

    #[test]
    fn multi_select_list_answer_is_used_as_is() {
        let mut select = field("colors", "", FieldType::MultiSelect, false);
        select.options = vec!["red".to_string(), "blue".to_string()];
        let f = form(vec![select]);

        let report = validate_submission(
            &f,
            &answers(&[(
                "colors",
                AnswerValue::List(vec!["red".to_string(), "blue".to_string()]),
            )]),
        );
        assert!(report.is_valid);
    }

    #[test]
    fn normalize_strips_brackets_quotes_and_blanks() {
        assert_eq!(
            normalize_multi_value(&text("[\"red\", \"blue\"]")),
            vec!["red".to_string(), "blue".to_string()]
        );
        assert_eq!(
            normalize_multi_value(&text(" red , , blue ")),
            vec!["red".to_string(), "blue".to_string()]
        );
        assert!(normalize_multi_value(&text("")).is_empty());
        assert!(normalize_multi_value(&AnswerValue::Number(1.into())).is_empty());
    }

    #[test]
    fn counts_reflect_form_and_submission() {
        let f = form(vec![
            field("a", "", FieldType::ShortText, false),
            field("b", "", FieldType::ShortText, false),
        ]);
        let report = validate_submission(&f, &answers(&[("a", text("x"))]));
        assert!(report.is_valid);
        assert_eq!(report.field_count, Some(2));
        assert_eq!(report.visible_field_count, Some(2));
        assert_eq!(report.submission_field_count, Some(1));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut select = field("color", "Color", FieldType::SingleSelect, false);
        select.options = vec!["red".to_string()];
        let f = form(vec![
            field("name", "Name", FieldType::ShortText, true),
            select,
        ]);
        let report = validate_submission(&f, &answers(&[("color", text("purple"))]));
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn structural_failure_from_malformed_definition() {
        let report = validate_submission_json(
            &serde_json::json!({ "title": "broken" }),
            &serde_json::json!({}),
        );
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Form structure is invalid - no fields found".to_string()]
        );
        assert!(report.field_count.is_none());

        let report = validate_submission_json(
            &serde_json::json!({ "fields": "oops" }),
            &serde_json::json!({}),
        );
        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Form structure is invalid - no fields found".to_string()]
        );
    }

    #[test]
    fn field_level_parse_failure_becomes_validation_error() {
        let report = validate_submission_json(
            &serde_json::json!({ "fields": [{ "id": "a", "type": "number" }] }),
            &serde_json::json!({}),
        );
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Validation error:"));
    }
}
