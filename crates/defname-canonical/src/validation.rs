use thiserror::Error;

/// Errors raised when an externally supplied name is not a canonical name.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The value is empty, starts with a bracket, or uses characters outside
    /// `[A-Za-z0-9_]`, `[`, `]`, `,` and space.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A generic argument list is unbalanced, empty, not attached to a name,
    /// or a separator appears outside of one.
    #[error("malformed generic arguments in '{value}' at byte {position}")]
    MalformedGenerics {
        /// Offending value.
        value: String,
        /// Byte offset of the first offending character.
        position: usize,
    },
}
