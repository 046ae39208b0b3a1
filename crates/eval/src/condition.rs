//! Visibility rule evaluator.
//!
//! Evaluates one rule against the current answer set. Pure; the same
//! rule and answers always produce the same verdict.

use std::cmp::Ordering;

use formlogic_core::{AnswerSet, AnswerValue, Condition, ConditionValue};

use crate::coerce;

/// Evaluate a visibility rule against the current answers.
///
/// No rule means the field is always visible. An unanswered dependency
/// hides the field regardless of operator -- including `not_equals` and
/// `not_in`, which stay fail-closed until the dependency is answered.
/// Unrecognized operators show the field: hiding on an operator the
/// engine does not understand would make fields silently disappear
/// from existing forms.
pub fn evaluate_condition(condition: Option<&Condition>, answers: &AnswerSet) -> bool {
    let rule = match condition {
        Some(rule) => rule,
        None => return true,
    };

    let actual = match answers.get(&rule.question_id) {
        Some(actual) => actual,
        None => return false,
    };
    let expected = &rule.value;

    match rule.operator.as_str() {
        "equals" => strictly_equal(actual, expected),
        "not_equals" => !strictly_equal(actual, expected),
        "contains" => contains(actual, expected),
        "not_contains" => !contains(actual, expected),
        "in" => in_expected_list(actual, expected),
        "not_in" => match expected {
            ConditionValue::List(_) => !in_expected_list(actual, expected),
            // Vacuously "not in" a non-list value.
            _ => true,
        },
        "starts_with" => {
            coerce::answer_string(actual).starts_with(&coerce::condition_string(expected))
        }
        "ends_with" => {
            coerce::answer_string(actual).ends_with(&coerce::condition_string(expected))
        }
        "greater_than" => ordering(actual, expected) == Some(Ordering::Greater),
        "less_than" => ordering(actual, expected) == Some(Ordering::Less),
        "greater_than_or_equal" => matches!(
            ordering(actual, expected),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        "less_than_or_equal" => matches!(
            ordering(actual, expected),
            Some(Ordering::Less | Ordering::Equal)
        ),
        _ => true,
    }
}

/// Strict equality: the answer and the expected value must be the same
/// scalar kind. `"1"` never equals `1`, and list answers never compare
/// equal (the source system compared lists by reference).
fn strictly_equal(actual: &AnswerValue, expected: &ConditionValue) -> bool {
    match (actual, expected) {
        (AnswerValue::Text(a), ConditionValue::Text(e)) => a == e,
        (AnswerValue::Number(a), ConditionValue::Number(e)) => a == e,
        _ => false,
    }
}

/// List answers test membership of the expected value; scalar answers
/// fall back to a substring test over string forms.
fn contains(actual: &AnswerValue, expected: &ConditionValue) -> bool {
    match actual {
        AnswerValue::List(items) => match expected {
            ConditionValue::Text(e) => items.iter().any(|item| item == e),
            // List elements are strings; a number or list never matches.
            _ => false,
        },
        _ => coerce::answer_string(actual).contains(&coerce::condition_string(expected)),
    }
}

/// Membership of the answer in an expected list. Only a text answer
/// can match the list's string elements; a non-list expected value
/// never matches.
fn in_expected_list(actual: &AnswerValue, expected: &ConditionValue) -> bool {
    match (expected, actual) {
        (ConditionValue::List(items), AnswerValue::Text(a)) => {
            items.iter().any(|item| item == a)
        }
        _ => false,
    }
}

fn ordering(actual: &AnswerValue, expected: &ConditionValue) -> Option<Ordering> {
    let left = coerce::answer_number(actual)?;
    let right = coerce::condition_number(expected)?;
    left.partial_cmp(&right)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
