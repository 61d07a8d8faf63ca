//! Recursive-descent parser for type descriptor strings.
//!
//! ```text
//! Type        := MapType | SliceType | PointerType | NamedType
//! MapType     := "map[" Type "]" Type
//! SliceType   := "[" Digits? "]" Type
//! PointerType := "*" Type
//! NamedType   := PathSegment ("." PathSegment)* ("/" PathSegment)* Name GenericArgs?
//! GenericArgs := "[" Type ("," " "? Type)* "]"
//! ```

use tracing::trace;

use crate::errors::ParseError;
use crate::parsed::ParsedType;

const PACKAGE_SEPARATORS: &[char] = &['.', '/'];

/// Deepest nesting of composites and generic arguments a descriptor may have.
pub const MAX_DEPTH: usize = 256;

/// Parses one type from the front of `input`.
///
/// Returns the tree and whatever input follows it. A `,` or an unmatched `]`
/// ends the current type without being consumed.
///
/// # Example
///
/// ```rust
/// use defname_canonical::parser::parse;
/// use defname_canonical::ParsedType;
///
/// let (ty, rest) = parse("[]encoding/json.RawMessage, tail")?;
/// assert_eq!(ty, ParsedType::slice(ParsedType::qualified("encoding/json", "RawMessage")));
/// assert_eq!(rest, ", tail");
/// # Ok::<(), defname_canonical::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<(ParsedType, &str), ParseError> {
    parse_at(input, 0)
}

fn parse_at(input: &str, depth: usize) -> Result<(ParsedType, &str), ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep {
            limit: MAX_DEPTH,
            remainder: input.to_string(),
        });
    }

    if let Some(rest) = input.strip_prefix("map[") {
        let (key, rest) = parse_at(rest, depth + 1)?;
        let rest = rest
            .strip_prefix(']')
            .ok_or_else(|| ParseError::UnterminatedMap {
                remainder: rest.to_string(),
            })?;
        let (value, rest) = parse_at(rest, depth + 1)?;
        return Ok((ParsedType::map(key, value), rest));
    }

    if let Some(rest) = input.strip_prefix('[') {
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, rest) = rest.split_at(digits_end);
        let length = if digits.is_empty() {
            None
        } else {
            Some(
                digits
                    .parse::<u64>()
                    .map_err(|_| ParseError::InvalidLength {
                        digits: digits.to_string(),
                        remainder: rest.to_string(),
                    })?,
            )
        };
        let rest = rest
            .strip_prefix(']')
            .ok_or_else(|| ParseError::UnterminatedArray {
                remainder: rest.to_string(),
            })?;
        let (element, rest) = parse_at(rest, depth + 1)?;
        return Ok((
            ParsedType::Slice {
                length,
                element: Box::new(element),
            },
            rest,
        ));
    }

    if let Some(rest) = input.strip_prefix('*') {
        let (element, rest) = parse_at(rest, depth + 1)?;
        return Ok((ParsedType::pointer(element), rest));
    }

    parse_named(input, depth)
}

/// Parses `input` as exactly one type; leftover input is an error.
pub fn parse_complete(input: &str) -> Result<ParsedType, ParseError> {
    let (ty, rest) = parse(input)?;
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput {
            remainder: rest.to_string(),
        });
    }
    trace!(descriptor = input, depth = ty.depth(), "parsed type descriptor");
    Ok(ty)
}

fn parse_named(input: &str, depth: usize) -> Result<(ParsedType, &str), ParseError> {
    let mut package = String::new();
    let mut name = String::new();
    let mut generic_args = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        match c {
            '.' | '/' => {
                package.push_str(&name);
                package.push(c);
                name.clear();
                rest = &rest[1..];
            }
            '[' => {
                if name.is_empty() {
                    break;
                }
                let (args, after) = parse_generic_args(&rest[1..], depth + 1)?;
                generic_args = args;
                rest = after;
                break;
            }
            ',' | ']' => break,
            _ => {
                name.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if name.is_empty() {
        return Err(ParseError::MissingName {
            remainder: rest.to_string(),
        });
    }

    let package = package.trim_end_matches(PACKAGE_SEPARATORS).to_string();
    Ok((
        ParsedType::Named {
            package,
            name,
            generic_args,
        },
        rest,
    ))
}

fn parse_generic_args(input: &str, depth: usize) -> Result<(Vec<ParsedType>, &str), ParseError> {
    let mut args = Vec::new();
    let mut rest = input;
    loop {
        let (arg, after) = parse_at(rest, depth)?;
        args.push(arg);
        if let Some(after) = after.strip_prefix(',') {
            rest = after.strip_prefix(' ').unwrap_or(after);
            continue;
        }
        if let Some(after) = after.strip_prefix(']') {
            return Ok((args, after));
        }
        return Err(ParseError::UnterminatedGenericArgs {
            remainder: after.to_string(),
        });
    }
}
