use crate::error::{CipherdrillError, Result};
use log::debug;
use serde_json::Value;

/// Token that duplicates the element following it
pub const DOUBLE_NEXT: &str = "--double-next";

/// Token that drops the most recently emitted element
pub const DISCARD_PREV: &str = "--discard-prev";

/// One entry of a control sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element<T> {
    DoubleNext,
    DiscardPrev,
    Value(T),
}

impl<T> Element<T> {
    fn into_value(self) -> Option<T> {
        match self {
            Element::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl Element<String> {
    /// Classify a textual token, treating the two sentinel strings as controls
    pub fn from_token(token: &str) -> Self {
        match token {
            DOUBLE_NEXT => Element::DoubleNext,
            DISCARD_PREV => Element::DiscardPrev,
            other => Element::Value(other.to_string()),
        }
    }
}

impl From<Value> for Element<Value> {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some(DOUBLE_NEXT) => Element::DoubleNext,
            Some(DISCARD_PREV) => Element::DiscardPrev,
            _ => Element::Value(value),
        }
    }
}

/// Apply the control tokens of `sequence` in a single left-to-right pass.
///
/// `DoubleNext` emits one extra copy of whatever follows it; the successor is
/// still visited on its own turn, so a value ends up in the output twice.
/// `DiscardPrev` pops the last emitted entry, if any. A copied control token
/// is an entry too: it can be popped by a later `DiscardPrev`, and any copy
/// left at the end is dropped from the typed result.
pub fn transform<T: Clone>(sequence: &[Element<T>]) -> Vec<T> {
    apply_controls(sequence)
        .into_iter()
        .filter_map(Element::into_value)
        .collect()
}

/// Transform a dynamically typed sequence.
/// Fails with `InvalidArgument` when `input` is not an array.
/// A doubled control token is emitted as its sentinel string.
pub fn transform_value(input: &Value) -> Result<Vec<Value>> {
    let items = input.as_array().ok_or_else(|| {
        CipherdrillError::invalid(format!(
            "transform input must be an array, got {}",
            json_type_name(input)
        ))
    })?;

    let elements: Vec<Element<Value>> = items.iter().cloned().map(Element::from).collect();
    Ok(apply_controls(&elements)
        .into_iter()
        .map(|entry| match entry {
            Element::DoubleNext => Value::from(DOUBLE_NEXT),
            Element::DiscardPrev => Value::from(DISCARD_PREV),
            Element::Value(v) => v,
        })
        .collect())
}

fn apply_controls<T: Clone>(sequence: &[Element<T>]) -> Vec<Element<T>> {
    let mut output = Vec::with_capacity(sequence.len() * 2);

    for (i, element) in sequence.iter().enumerate() {
        match element {
            Element::DoubleNext => {
                if let Some(next) = sequence.get(i + 1) {
                    output.push(next.clone());
                }
            }
            Element::DiscardPrev => {
                output.pop();
            }
            Element::Value(_) => output.push(element.clone()),
        }
    }

    debug!(
        "transformed {} elements into {} entries",
        sequence.len(),
        output.len()
    );
    output
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
