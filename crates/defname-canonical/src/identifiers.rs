use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Prefix of a JSON reference into the definitions section.
pub const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";

const CANONICAL_NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9_, \[\]]*$";

fn canonical_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CANONICAL_NAME_PATTERN).expect("invalid regex"))
}

/// Key of a schema definition.
///
/// Made of `[A-Za-z0-9_]`; a generic type anywhere in the name is followed by
/// its `[arg, arg]` list, e.g. `map_G1[G0]_to_string`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Creates a new instance without validation; callers are responsible for conformity.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Parses a validated name from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !canonical_name_regex().is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "CanonicalName",
                value: s,
            });
        }
        if let Some(position) = malformed_generics_at(&s) {
            return Err(ValidationError::MalformedGenerics { value: s, position });
        }
        Ok(Self(s))
    }

    /// JSON reference pointing at this definition, e.g. `#/definitions/G0`.
    pub fn reference(&self) -> String {
        format!("{}{}", DEFINITIONS_REF_PREFIX, self.0)
    }

    /// Borrows the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Byte offset of the first bracket or separator that cannot come from a
/// rendered generic argument list, if any.
fn malformed_generics_at(s: &str) -> Option<usize> {
    let mut depth: usize = 0;
    let mut prev: Option<char> = None;
    for (idx, c) in s.char_indices() {
        match c {
            '[' => {
                if !matches!(prev, Some(p) if p.is_ascii_alphanumeric() || p == '_') {
                    return Some(idx);
                }
                depth += 1;
            }
            ']' => {
                if prev == Some('[') {
                    return Some(idx);
                }
                match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return Some(idx),
                }
            }
            ',' | ' ' if depth == 0 => return Some(idx),
            _ => {}
        }
        prev = Some(c);
    }
    (depth != 0).then_some(s.len())
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_rendered_names() {
        for name in [
            "G0",
            "arr_4_G0",
            "map_G0_to_encoding__json_RawMessage",
            "pkgA_G2[pkgA_G0, pkgA_G1[string]]",
        ] {
            assert!(CanonicalName::parse(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_unsafe_characters() {
        for name in ["", "a.b", "a/b", "a-b", "[G0]"] {
            assert!(
                matches!(
                    CanonicalName::parse(name),
                    Err(ValidationError::PatternMismatch { .. })
                ),
                "{name}"
            );
        }
    }

    #[test]
    fn accepts_generics_in_the_middle_of_a_name() {
        for name in [
            "map_G1[G0]_to_string",
            "map_G1[string]_to_G2[int32, bool]",
            "ptr_G1[map_G1[G0]_to_arr_G0]",
        ] {
            assert!(CanonicalName::parse(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_malformed_generic_lists() {
        for (name, position) in [
            ("G1[", 3),
            ("G1]x", 2),
            ("G1[a]][", 5),
            ("G1[[a]]", 3),
            ("G1[]", 3),
            ("a, b", 1),
            ("G1[a] b", 5),
        ] {
            match CanonicalName::parse(name) {
                Err(ValidationError::MalformedGenerics { position: at, .. }) => {
                    assert_eq!(at, position, "{name}")
                }
                other => panic!("{name}: expected malformed generics, got {other:?}"),
            }
        }
    }

    #[test]
    fn reference_points_into_definitions() {
        let name = CanonicalName::parse("arr_G0").unwrap();
        assert_eq!(name.reference(), "#/definitions/arr_G0");
    }
}
