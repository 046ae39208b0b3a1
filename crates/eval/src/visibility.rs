//! Visibility resolution: the rule evaluator applied across a field
//! list.

use formlogic_core::{AnswerSet, Field};

use crate::condition::evaluate_condition;

/// Resolve the visible subset of `fields` under `answers`, preserving
/// definition order.
///
/// No memoization: answers change per keystroke and the resolution is
/// linear in fields plus edges, so it is recomputed on every call.
pub fn visible_fields<'a>(fields: &'a [Field], answers: &AnswerSet) -> Vec<&'a Field> {
    fields
        .iter()
        .filter(|field| evaluate_condition(field.visible_if.as_ref(), answers))
        .collect()
}
