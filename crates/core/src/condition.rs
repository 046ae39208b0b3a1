//! Visibility rules: a predicate over another field's answer.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Comparison value carried by a visibility rule.
///
/// Rules are authored in the form builder and arrive as untyped JSON;
/// the value position holds a string, a number, or a list of strings.
/// Numbers are kept as `Decimal` so the ordering operators never touch
/// `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    Text(String),
    Number(Decimal),
    List(Vec<String>),
}

impl Serialize for ConditionValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ConditionValue::Text(s) => serializer.serialize_str(s),
            ConditionValue::Number(d) => {
                // Emit a JSON number so a serialized rule parses back to
                // the same variant.
                if d.fract().is_zero() {
                    match d.to_i64() {
                        Some(i) => serializer.serialize_i64(i),
                        None => serializer.serialize_f64(d.to_f64().unwrap_or(0.0)),
                    }
                } else {
                    serializer.serialize_f64(d.to_f64().unwrap_or(0.0))
                }
            }
            ConditionValue::List(items) => items.serialize(serializer),
        }
    }
}

/// A visibility rule: show the owning field when the referenced
/// question's answer satisfies `operator` against `value`.
///
/// `operator` is carried as the raw string from the definition. The
/// evaluator shows the field for operators it does not recognize, so
/// unknown operators must survive parsing untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Id of the field this rule depends on. Must not be the owning
    /// field's own id; the cycle check flags that as a self-loop.
    pub question_id: String,
    pub operator: String,
    pub value: ConditionValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let cond = Condition {
            question_id: "q1".to_string(),
            operator: "equals".to_string(),
            value: ConditionValue::Text("yes".to_string()),
        };
        let json = serde_json::to_value(&cond).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "questionId": "q1",
                "operator": "equals",
                "value": "yes",
            })
        );
    }

    #[test]
    fn serializes_integer_value_as_number() {
        let cond = Condition {
            question_id: "age".to_string(),
            operator: "greater_than".to_string(),
            value: ConditionValue::Number(Decimal::from(18)),
        };
        let json = serde_json::to_value(&cond).unwrap();
        assert_eq!(json["value"], serde_json::json!(18));
    }

    #[test]
    fn serializes_list_value_as_array() {
        let cond = Condition {
            question_id: "color".to_string(),
            operator: "in".to_string(),
            value: ConditionValue::List(vec!["red".to_string(), "blue".to_string()]),
        };
        let json = serde_json::to_value(&cond).unwrap();
        assert_eq!(json["value"], serde_json::json!(["red", "blue"]));
    }
}
