//! Deserialization of form definition JSON into the typed model.
//!
//! The main entry point is [`form_from_json`]. [`fields_from_json`]
//! accepts a bare field array, which the authoring flow validates
//! before a form record exists.

use crate::answers::decimal_from_number;
use crate::condition::{Condition, ConditionValue};
use crate::error::FormError;
use crate::field::{Field, FieldType, RenderAs};
use crate::form::Form;

/// Deserialize a full form definition.
///
/// Accepts either an object carrying a `fields` array or a bare field
/// array.
pub fn form_from_json(definition: &serde_json::Value) -> Result<Form, FormError> {
    if let Some(arr) = definition.as_array() {
        return Ok(Form {
            id: None,
            title: None,
            slug: None,
            base_id: None,
            table_id: None,
            fields: parse_fields(arr)?,
        });
    }

    if !definition.is_object() {
        return Err(FormError::InvalidDefinition(
            "definition must be an object or a field array".to_string(),
        ));
    }

    let fields_arr = definition
        .get("fields")
        .and_then(|f| f.as_array())
        .ok_or_else(|| FormError::MissingField {
            field: "fields".to_string(),
        })?;

    Ok(Form {
        id: optional_str(definition, "id"),
        title: optional_str(definition, "title"),
        slug: optional_str(definition, "slug"),
        base_id: optional_str(definition, "baseId"),
        table_id: optional_str(definition, "tableId"),
        fields: parse_fields(fields_arr)?,
    })
}

/// Deserialize a bare field array.
pub fn fields_from_json(fields: &serde_json::Value) -> Result<Vec<Field>, FormError> {
    let arr = fields.as_array().ok_or_else(|| {
        FormError::InvalidDefinition("fields must be an array".to_string())
    })?;
    parse_fields(arr)
}

fn parse_fields(arr: &[serde_json::Value]) -> Result<Vec<Field>, FormError> {
    let mut fields = Vec::with_capacity(arr.len());
    for obj in arr {
        fields.push(parse_field(obj)?);
    }
    Ok(fields)
}

fn parse_field(obj: &serde_json::Value) -> Result<Field, FormError> {
    let id = obj
        .get("id")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| FormError::InvalidDefinition("field missing 'id'".to_string()))?
        .to_string();

    let type_str = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| FormError::FieldError {
            id: id.clone(),
            message: "missing 'type'".to_string(),
        })?;
    let field_type = FieldType::parse(type_str).ok_or_else(|| FormError::FieldError {
        id: id.clone(),
        message: format!("unknown field type '{}'", type_str),
    })?;

    let render_as = match obj.get("renderAs").and_then(|v| v.as_str()) {
        None => RenderAs::default(),
        Some(s) => RenderAs::parse(s).ok_or_else(|| FormError::FieldError {
            id: id.clone(),
            message: format!("unknown renderAs '{}'", s),
        })?,
    };

    let options = obj
        .get("options")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(Field {
        airtable_field_id: optional_str(obj, "airtableFieldId"),
        label: obj
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string(),
        field_type,
        required: obj.get("required").and_then(|v| v.as_bool()).unwrap_or(false),
        options,
        render_as,
        visible_if: parse_condition(obj.get("visibleIf")),
        id,
    })
}

/// Parse a `visibleIf` rule.
///
/// The builder is known to persist degenerate rules (empty objects,
/// missing members, unsupported value types). Those degrade to "no
/// rule" — the field stays unconditionally visible — rather than
/// failing the whole definition, matching the evaluator's guard for
/// rules it cannot interpret.
pub fn parse_condition(value: Option<&serde_json::Value>) -> Option<Condition> {
    let obj = value?.as_object()?;

    let question_id = obj.get("questionId")?.as_str()?;
    if question_id.is_empty() {
        return None;
    }
    let operator = obj.get("operator")?.as_str()?;
    if operator.is_empty() {
        return None;
    }
    let cond_value = parse_condition_value(obj.get("value")?)?;

    Some(Condition {
        question_id: question_id.to_string(),
        operator: operator.to_string(),
        value: cond_value,
    })
}

fn parse_condition_value(value: &serde_json::Value) -> Option<ConditionValue> {
    match value {
        serde_json::Value::String(s) => Some(ConditionValue::Text(s.clone())),
        serde_json::Value::Number(n) => decimal_from_number(n).map(ConditionValue::Number),
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(s) => out.push(s.clone()),
                    serde_json::Value::Number(n) => out.push(n.to_string()),
                    _ => {}
                }
            }
            Some(ConditionValue::List(out))
        }
        _ => None,
    }
}

fn optional_str(obj: &serde_json::Value, field: &str) -> Option<String> {
    obj.get(field).and_then(|v| v.as_str()).map(|s| s.to_string())
}
