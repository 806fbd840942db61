//! Loosely typed argument semantics over JSON values.

use crate::attribute::{Attribute, INNER_HTML, INNER_TEXT};
use itertools::Itertools;
use serde_json::{Number, Value};

const MAX_FIXED_EXPONENT: i32 = 21;
const MIN_FIXED_EXPONENT: i32 = -6;

/// Returns `true` if a value is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(string) => !string.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Converts a value into a string.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(value) => value.to_string(),
        Value::Number(number) => number_to_string(number),
        Value::String(string) => string.clone(),
        Value::Array(values) => values
            .iter()
            .map(|value| {
                if value.is_null() {
                    String::new()
                } else {
                    to_string(value)
                }
            })
            .join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}

fn number_to_string(number: &Number) -> String {
    // Integers beyond 2^53 round like any other double.
    let number = number.as_f64().unwrap_or_default();

    if number == 0.0 {
        return "0".into();
    }

    // Shortest round-trip digits and a decimal exponent, e.g. `1.5e-7`.
    let scientific = format!("{:e}", number.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits = mantissa.replace('.', "");
    let length = digits.len() as i32;
    let point = exponent.parse::<i32>().unwrap_or_default() + 1;
    let sign = if number < 0.0 { "-" } else { "" };

    let string = if length <= point && point <= MAX_FIXED_EXPONENT {
        format!("{digits}{}", "0".repeat((point - length) as usize))
    } else if 0 < point && point <= MAX_FIXED_EXPONENT {
        let (integer, fraction) = digits.split_at(point as usize);
        format!("{integer}.{fraction}")
    } else if MIN_FIXED_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(-point as usize))
    } else {
        let (head, tail) = digits.split_at(1);
        let exponent = point - 1;

        format!(
            "{head}{}{tail}e{}{exponent}",
            if tail.is_empty() { "" } else { "." },
            if exponent < 0 { "" } else { "+" }
        )
    };

    format!("{sign}{string}")
}

/// Returns key-value entries of an object-like value in enumeration order.
///
/// Arrays enumerate their indices. Index-like object keys come first in
/// ascending order followed by the other keys in insertion order.
pub fn entries(value: &Value) -> Option<Vec<(String, &Value)>> {
    match value {
        Value::Array(values) => Some(
            values
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect(),
        ),
        Value::Object(object) => {
            let (indices, keys): (Vec<_>, Vec<_>) =
                object.iter().partition(|(key, _)| array_index(key).is_some());

            Some(
                indices
                    .into_iter()
                    .sorted_by_key(|(key, _)| array_index(key))
                    .chain(keys)
                    .map(|(key, value)| (key.clone(), value))
                    .collect(),
            )
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => None,
    }
}

fn array_index(key: &str) -> Option<u32> {
    let index = key.parse::<u32>().ok()?;

    (index != u32::MAX && index.to_string() == key).then_some(index)
}

/// Converts an attribute entry into a directive.
pub fn attribute(name: String, value: &Value) -> Attribute {
    if matches!(name.as_str(), INNER_HTML | INNER_TEXT) && value.is_null() {
        Attribute::new(name, "")
    } else {
        Attribute::new(name, to_string(value))
    }
}
