//! Custom Tera filters for generated source files.
//!
//! | Filter | Effect |
//! |---|---|
//! | `quote` | wraps strings in double quotes, other values pass through |
//! | `escape_leading_digit` | prefixes `_` to strings starting with a digit |
//! | `prefix_font` | disambiguates SwiftUI font style names |
//! | `prefix_color` | disambiguates SwiftUI color names |
//! | `prefix_image` | disambiguates UIKit system image names |
//!
//! The three `prefix_*` filters take a `prefix` argument. A value that collides with a
//! reserved name becomes `prefix + UpperFirst(value)`; anything else passes through:
//!
//! ```text
//! {{ "title" | prefix_font(prefix="token") }}   -> tokenTitle
//! {{ "heading" | prefix_font(prefix="token") }} -> heading
//! ```

use std::collections::HashMap;
use tera::{Tera, Value};

use crate::utils::naming::upper_first;

/// SwiftUI `Font` text styles
pub const FONT_STYLES: &[&str] = &[
    "largeTitle",
    "title",
    "title2",
    "title3",
    "headline",
    "subheadline",
    "body",
    "callout",
    "footnote",
    "caption",
    "caption2",
];

/// SwiftUI `Color` static members
pub const COLOR_NAMES: &[&str] = &[
    "black",
    "blue",
    "brown",
    "clear",
    "cyan",
    "gray",
    "green",
    "indigo",
    "mint",
    "orange",
    "pink",
    "purple",
    "red",
    "teal",
    "white",
    "yellow",
    "accentColor",
    "primary",
    "secondary",
    "description",
];

/// UIKit `UIImage` system members
pub const IMAGE_NAMES: &[&str] = &["checkmark", "add", "remove", "strokedCheckmark"];

/// Register every custom filter on `tera`.
pub fn register_filters(tera: &mut Tera) {
    tera.register_filter("quote", quote);
    tera.register_filter("escape_leading_digit", escape_leading_digit);
    tera.register_filter("prefix_font", |value: &Value, args: &HashMap<String, Value>| {
        prefix_reserved(value, args, FONT_STYLES, "prefix_font")
    });
    tera.register_filter("prefix_color", |value: &Value, args: &HashMap<String, Value>| {
        prefix_reserved(value, args, COLOR_NAMES, "prefix_color")
    });
    tera.register_filter("prefix_image", |value: &Value, args: &HashMap<String, Value>| {
        prefix_reserved(value, args, IMAGE_NAMES, "prefix_image")
    });
}

/// Wrap strings in double quotes. Booleans, numbers and null are returned unchanged.
pub fn quote(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(match value {
        Value::String(text) => Value::String(format!("\"{text}\"")),
        other => other.clone(),
    })
}

/// Prefix `_` to strings whose first character is numeric.
pub fn escape_leading_digit(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(match value {
        Value::String(text) if text.chars().next().is_some_and(char::is_numeric) => {
            Value::String(format!("_{text}"))
        }
        other => other.clone(),
    })
}

fn prefix_reserved(
    value: &Value,
    args: &HashMap<String, Value>,
    reserved: &[&str],
    filter: &str,
) -> tera::Result<Value> {
    let prefix = args
        .get("prefix")
        .and_then(Value::as_str)
        .ok_or_else(|| tera::Error::msg(format!("{filter} filter requires a string `prefix` argument")))?;

    Ok(match value {
        Value::String(text) if reserved.contains(&text.as_str()) => {
            Value::String(format!("{prefix}{}", upper_first(text)))
        }
        other => other.clone(),
    })
}
