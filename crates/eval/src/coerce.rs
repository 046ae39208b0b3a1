//! Scalar coercion shared by the comparison operators.
//!
//! String forms follow the submission wire format: numbers are
//! normalized (no trailing zeros), lists join their elements with `,`.
//! Numeric forms go through `rust_decimal::Decimal` -- never `f64`. A
//! value with no numeric form simply fails the coercion; the ordering
//! operators treat that as false rather than an error.

use formlogic_core::{AnswerValue, ConditionValue};
use rust_decimal::Decimal;

/// String form of an answer value.
pub fn answer_string(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) => s.clone(),
        AnswerValue::Number(d) => d.normalize().to_string(),
        AnswerValue::List(items) => items.join(","),
    }
}

/// String form of a rule's comparison value.
pub fn condition_string(value: &ConditionValue) -> String {
    match value {
        ConditionValue::Text(s) => s.clone(),
        ConditionValue::Number(d) => d.normalize().to_string(),
        ConditionValue::List(items) => items.join(","),
    }
}

/// Numeric form of an answer value, if it has one.
pub fn answer_number(value: &AnswerValue) -> Option<Decimal> {
    match value {
        AnswerValue::Number(d) => Some(*d),
        AnswerValue::Text(s) => parse_decimal(s),
        AnswerValue::List(_) => None,
    }
}

/// Numeric form of a rule's comparison value, if it has one.
pub fn condition_number(value: &ConditionValue) -> Option<Decimal> {
    match value {
        ConditionValue::Number(d) => Some(*d),
        ConditionValue::Text(s) => parse_decimal(s),
        ConditionValue::List(_) => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_strings_are_normalized() {
        let d: Decimal = "1.50".parse().unwrap();
        assert_eq!(answer_string(&AnswerValue::Number(d)), "1.5");
        assert_eq!(
            answer_string(&AnswerValue::Number(Decimal::from(7))),
            "7"
        );
    }

    #[test]
    fn lists_join_with_comma() {
        let value = AnswerValue::List(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(answer_string(&value), "a,b");
    }

    #[test]
    fn text_parses_to_number_or_fails() {
        assert_eq!(
            answer_number(&AnswerValue::Text(" 42 ".to_string())),
            Some(Decimal::from(42))
        );
        assert_eq!(answer_number(&AnswerValue::Text("abc".to_string())), None);
        assert_eq!(answer_number(&AnswerValue::Text("".to_string())), None);
        assert_eq!(
            answer_number(&AnswerValue::List(vec!["5".to_string()])),
            None
        );
    }

    #[test]
    fn scientific_notation_parses() {
        assert_eq!(
            answer_number(&AnswerValue::Text("1e3".to_string())),
            Some(Decimal::from(1000))
        );
    }
}
