//! Schema-definition registry keyed by canonical type names.
//!
//! This crate provides:
//! - An insertion-ordered registry of schema bodies keyed by [`CanonicalName`]
//! - Deduplication of identical bodies via content fingerprints
//! - Collision detection when two different bodies claim the same name
//!
//! Schema bodies are opaque JSON values; this crate never inspects them
//! beyond fingerprinting.
//!
//! [`CanonicalName`]: defname_canonical::CanonicalName

#![deny(missing_docs)]

/// Schema fingerprint computation.
pub mod digest;
/// Error types for registry operations.
pub mod errors;
/// Registry implementation.
pub mod registry;

pub use digest::{fingerprint, Digest, DigestAlg};
pub use errors::RegistryError;
pub use registry::{Definition, DefinitionRegistry, Registration};
