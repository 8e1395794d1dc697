//! Ordering of token values for the files generator.
//!
//! Without a `sortBy` option values are ordered by name. With `sortBy` each value is
//! compared on the named field of its (object) value, or on the raw value when it is not
//! an object. Integers, floating-point numbers and strings compare naturally among
//! themselves; equal values, missing fields and values of any other type fall back to the
//! name.
//!
//! Integers and floating-point numbers compare with each other numerically. Otherwise
//! values of different types never compare by content: numbers sort before strings, and
//! everything without a comparable field comes last. This keeps the comparison a total
//! order for mixed collections.

use serde_json::Value;
use std::cmp::Ordering;

use crate::config::{ConfigEntry, keys};
use crate::token::TokenValue;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortKey<'a> {
    Int(i64),
    Double(f64),
    Text(&'a str),
    Unordered,
}

impl SortKey<'_> {
    const fn rank(&self) -> u8 {
        match self {
            Self::Int(_) | Self::Double(_) => 0,
            Self::Text(_) => 1,
            Self::Unordered => 2,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Double(a), Self::Double(b)) => a.total_cmp(b),
            #[allow(clippy::cast_precision_loss)]
            (Self::Int(a), Self::Double(b)) => (*a as f64).total_cmp(b),
            #[allow(clippy::cast_precision_loss)]
            (Self::Double(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn sort_key<'a>(value: &'a TokenValue, field: &str) -> SortKey<'a> {
    let subject = match &value.entry.value {
        Value::Object(map) => map.get(field),
        raw => Some(raw),
    };

    match subject {
        Some(Value::Number(number)) => number
            .as_i64()
            .map(SortKey::Int)
            .or_else(|| number.as_f64().map(SortKey::Double))
            .unwrap_or(SortKey::Unordered),
        Some(Value::String(text)) => SortKey::Text(text),
        _ => SortKey::Unordered,
    }
}

/// Sort stage for token values. Reads the optional `sortBy` option.
pub fn sort_values(mut values: Vec<TokenValue>, options: Option<&Value>) -> Vec<TokenValue> {
    match ConfigEntry::optional_option::<String>(options, &keys::SORT_BY) {
        None => values.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(field) => values.sort_by(|a, b| {
            sort_key(a, &field)
                .compare(&sort_key(b, &field))
                .then_with(|| a.name.cmp(&b.name))
        }),
    }
    values
}
