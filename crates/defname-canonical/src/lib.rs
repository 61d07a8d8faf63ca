//! Canonical schema-definition names for runtime type descriptors.
//!
//! A type descriptor (`[]encoding/json.RawMessage`, `map[K]V`, `*pkg.G1[pkg.G0]`,
//! or the structured [`TypeDescriptor`]) is parsed into a [`ParsedType`] tree,
//! its packages are rewritten according to a [`NamingPolicy`], and the tree is
//! rendered into a [`CanonicalName`] that is safe to use as a key in the
//! `definitions` section of an API document.
//!
//! ## Quick Start
//!
//! ```rust
//! use defname_canonical::{Namer, NamingPolicy, TypeDescriptor};
//!
//! let namer = Namer::new(
//!     NamingPolicy::new()
//!         .with_package_qualification(true)
//!         .strip_prefix("github.com/"),
//! );
//!
//! let name = namer.name_descriptor("[4]G0", "github.com/acme/api")?;
//! assert_eq!(name.as_str(), "arr_4_acme__api_G0");
//! assert_eq!(name.reference(), "#/definitions/arr_4_acme__api_G0");
//!
//! let raw = TypeDescriptor::named("encoding/json", "RawMessage");
//! assert_eq!(namer.name_type(&raw)?.as_str(), "encoding__json_RawMessage");
//! # Ok::<(), defname_canonical::ParseError>(())
//! ```
//!
#![deny(missing_docs)]

/// Primitive kind table.
pub mod builtin;
/// Structured descriptors and the `Describe` trait.
pub mod descriptor;
/// Parse errors.
pub mod errors;
/// Canonical name newtype and definition references.
pub mod identifiers;
/// Policy-bound naming engine.
pub mod namer;
/// Parsed type tree.
pub mod parsed;
/// Descriptor string parser.
pub mod parser;
/// Naming policy.
pub mod policy;
/// Package qualification pass.
pub mod qualifier;
/// Canonical rendering pass.
pub mod renderer;
/// Validation helpers for externally supplied names.
pub mod validation;

pub use builtin::{is_builtin, is_builtin_name};
pub use descriptor::{Describe, TypeDescriptor, TypeKind};
pub use errors::ParseError;
pub use identifiers::{CanonicalName, DEFINITIONS_REF_PREFIX};
pub use namer::Namer;
pub use parsed::ParsedType;
pub use policy::NamingPolicy;
pub use validation::ValidationError;
