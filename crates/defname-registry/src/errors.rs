use defname_canonical::ParseError;
use thiserror::Error;

/// Errors that can occur while registering definitions.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The type descriptor could not be parsed into a name.
    #[error("cannot name type: {0}")]
    Name(#[from] ParseError),
    /// A different schema body is already registered under this name.
    #[error("definition '{name}' is already registered with a different schema")]
    Collision {
        /// The contested canonical name.
        name: String,
    },
    /// The schema body could not be canonicalized for fingerprinting.
    #[error("cannot canonicalize schema: {0}")]
    Canonicalization(String),
}
