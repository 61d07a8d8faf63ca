use thiserror::Error;

/// Errors raised while parsing a type descriptor.
///
/// Every variant carries the unconsumed input at the point of failure. A parse
/// error is terminal for the call; no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `map[` without the closing `]` after the key type.
    #[error("unterminated map key at '{remainder}'")]
    UnterminatedMap {
        /// Input left when the `]` was expected.
        remainder: String,
    },
    /// `[` or `[N` without the closing `]`.
    #[error("unterminated array length at '{remainder}'")]
    UnterminatedArray {
        /// Input left when the `]` was expected.
        remainder: String,
    },
    /// Generic argument list without a closing `]`.
    #[error("unterminated generic arguments at '{remainder}'")]
    UnterminatedGenericArgs {
        /// Input left when `,` or `]` was expected.
        remainder: String,
    },
    /// A named type with an empty short name.
    #[error("expected a type name at '{remainder}'")]
    MissingName {
        /// Input left where the name should start.
        remainder: String,
    },
    /// Fixed array length does not fit in a `u64`.
    #[error("invalid array length '{digits}' at '{remainder}'")]
    InvalidLength {
        /// The digit run that failed to parse.
        digits: String,
        /// Input left after the digits.
        remainder: String,
    },
    /// Composites and generic arguments nested deeper than the parser allows.
    #[error("type nested deeper than {limit} levels at '{remainder}'")]
    TooDeep {
        /// The nesting limit that was hit.
        limit: usize,
        /// Input left at the level that exceeded the limit.
        remainder: String,
    },
    /// Input left over after a complete top-level type.
    #[error("unexpected trailing input '{remainder}'")]
    TrailingInput {
        /// The unconsumed suffix.
        remainder: String,
    },
}

impl ParseError {
    /// The unconsumed input at the point of failure.
    pub fn remainder(&self) -> &str {
        match self {
            ParseError::UnterminatedMap { remainder }
            | ParseError::UnterminatedArray { remainder }
            | ParseError::UnterminatedGenericArgs { remainder }
            | ParseError::MissingName { remainder }
            | ParseError::InvalidLength { remainder, .. }
            | ParseError::TooDeep { remainder, .. }
            | ParseError::TrailingInput { remainder } => remainder,
        }
    }
}
