//! Identifier normalisation shared by the generators.
//!
//! The camelCase rule turns free-form names ("20 Seconds Back filled", "hello-world.svg")
//! into identifiers suitable for asset names and generated code.

use std::path::Path;

const SEPARATORS: [&str; 7] = [" ", "-", "_", "/", "\\", ".", ","];

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn upper_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
#[must_use]
pub fn lower_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Apply the camelCase naming rule.
///
/// For each separator in turn the string is split, empty pieces are dropped, every piece
/// gets an uppercase first letter and the pieces are re-joined with a space. Finally all
/// whitespace is removed and the first character lowercased.
///
/// ```
/// use tokengen_cli::utils::naming::camel_case;
///
/// assert_eq!(camel_case("Add person-1"), "addPerson1");
/// assert_eq!(camel_case("Speed 1.0x"), "speed10x");
/// ```
#[must_use]
pub fn camel_case(value: &str) -> String {
    let mut result = value.to_string();
    for separator in SEPARATORS {
        result = result
            .split(separator)
            .filter(|piece| !piece.is_empty())
            .map(upper_first)
            .collect::<Vec<_>>()
            .join(" ");
    }

    let compact: String = result.chars().filter(|c| !c.is_whitespace()).collect();
    lower_first(&compact)
}

/// Derive the logical name of a file: its last path component without the final
/// extension, run through [`camel_case`].
///
/// A file name without any `.` is used whole.
#[must_use]
pub fn camel_case_file_name(path: &Path) -> String {
    let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

    let mut pieces: Vec<&str> = file_name.split('.').collect();
    if pieces.len() > 1 {
        pieces.pop();
    }

    camel_case(&pieces.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_upper_and_lower_first() {
        assert_eq!(upper_first("background"), "Background");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first("AppBackground"), "appBackground");
        assert_eq!(lower_first("20px"), "20px");
    }

    #[test]
    fn test_camel_case_rule() {
        assert_eq!(camel_case("20 Seconds Back filled"), "20SecondsBackFilled");
        assert_eq!(camel_case("A-Z"), "aZ");
        assert_eq!(camel_case("A-Z filled"), "aZFilled");
        assert_eq!(camel_case("Speed 1.0x"), "speed10x");
        assert_eq!(camel_case("Add person-1"), "addPerson1");
        assert_eq!(camel_case("snake_case_name"), "snakeCaseName");
        assert_eq!(camel_case("path/to\\thing,else"), "pathToThingElse");
        assert_eq!(camel_case("  padded  "), "padded");
    }

    #[test]
    fn test_camel_case_file_name() {
        assert_eq!(camel_case_file_name(&PathBuf::from("/icons/hello-world.svg")), "helloWorld");
        assert_eq!(camel_case_file_name(&PathBuf::from("Arrow Left.pdf")), "arrowLeft");
        assert_eq!(camel_case_file_name(&PathBuf::from("icon.dark.png")), "iconDark");
        assert_eq!(camel_case_file_name(&PathBuf::from("README")), "rEADME");
    }
}
