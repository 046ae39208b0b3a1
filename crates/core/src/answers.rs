//! Answer sets: per-request snapshots of submitted values.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

/// A submitted answer value.
///
/// Submissions arrive as JSON; only strings, numbers, and string lists
/// are meaningful to the engine. Anything else is dropped at
/// construction, so the field reads as unanswered.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    Text(String),
    Number(Decimal),
    List(Vec<String>),
}

/// Answers keyed by field id. Ephemeral; rebuilt per request and never
/// persisted by the engine.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet(pub BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        AnswerSet(BTreeMap::new())
    }

    pub fn get(&self, field_id: &str) -> Option<&AnswerValue> {
        self.0.get(field_id)
    }

    pub fn insert(&mut self, field_id: String, value: AnswerValue) {
        self.0.insert(field_id, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build an answer set from a JSON payload.
    ///
    /// `null` entries, booleans, and nested objects are skipped and the
    /// corresponding field reads as unanswered. List elements keep
    /// their string form (numbers included); non-scalar elements are
    /// dropped. A non-object root yields an empty set.
    pub fn from_json(payload: &serde_json::Value) -> AnswerSet {
        let mut answers = AnswerSet::new();
        let obj = match payload.as_object() {
            Some(obj) => obj,
            None => return answers,
        };
        for (field_id, value) in obj {
            if let Some(parsed) = parse_answer_value(value) {
                answers.insert(field_id.clone(), parsed);
            }
        }
        answers
    }
}

fn parse_answer_value(value: &serde_json::Value) -> Option<AnswerValue> {
    match value {
        serde_json::Value::String(s) => Some(AnswerValue::Text(s.clone())),
        serde_json::Value::Number(n) => decimal_from_number(n).map(AnswerValue::Number),
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(s) => out.push(s.clone()),
                    serde_json::Value::Number(n) => out.push(n.to_string()),
                    _ => {}
                }
            }
            Some(AnswerValue::List(out))
        }
        _ => None,
    }
}

/// Convert a JSON number to `Decimal`, handling scientific notation.
pub(crate) fn decimal_from_number(n: &serde_json::Number) -> Option<Decimal> {
    let text = n.to_string();
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
