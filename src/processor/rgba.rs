//! Hex color decomposition.
//!
//! A color map `{hex: "#RRGGBB[AA]"}` gains an `rgba` entry with the channels as `0x`
//! prefixed hex strings and the alpha normalised to three decimals:
//!
//! ```json
//! { "hex": "#FF8000CC", "rgba": { "red": "0xFF", "green": "0x80", "blue": "0x00", "alpha": "0.800", "hex": "#FF8000CC" } }
//! ```

use serde_json::{Map, Value};
use tracing::warn;

const DEFAULT_ALPHA: &str = "1.000";

/// Break a hex string into its components.
///
/// The leading `#` is optional. Returns `None` when fewer than six ASCII characters
/// follow it. The alpha channel is only read from an eight digit string; an alpha that is
/// not a hex byte is treated as opaque.
#[must_use]
pub fn rgba_components(hex: &str) -> Option<Map<String, Value>> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() < 6 || !digits.is_ascii() {
        return None;
    }

    let alpha = if digits.len() == 8 {
        u8::from_str_radix(&digits[6..8], 16)
            .map(|alpha| format!("{:.3}", f32::from(alpha) / 255.0))
            .unwrap_or_else(|_| DEFAULT_ALPHA.to_string())
    } else {
        DEFAULT_ALPHA.to_string()
    };

    let mut rgba = Map::new();
    rgba.insert("red".to_string(), Value::String(format!("0x{}", &digits[0..2])));
    rgba.insert("green".to_string(), Value::String(format!("0x{}", &digits[2..4])));
    rgba.insert("blue".to_string(), Value::String(format!("0x{}", &digits[4..6])));
    rgba.insert("alpha".to_string(), Value::String(alpha));
    rgba.insert("hex".to_string(), Value::String(hex.to_string()));
    Some(rgba)
}

/// Add an `rgba` entry to a color map that has a string `hex` field.
///
/// Maps without a usable `hex` are returned unchanged.
#[must_use]
pub fn with_rgba(mut color: Map<String, Value>) -> Map<String, Value> {
    let Some(hex) = color.get("hex").and_then(Value::as_str) else {
        return color;
    };

    match rgba_components(hex) {
        Some(rgba) => {
            color.insert("rgba".to_string(), Value::Object(rgba));
        }
        None => warn!("Ignoring malformed hex color '{}'", hex),
    }
    color
}
