use tracing::debug;

use crate::descriptor::{Describe, TypeDescriptor};
use crate::errors::ParseError;
use crate::identifiers::CanonicalName;
use crate::parsed::ParsedType;
use crate::parser;
use crate::policy::NamingPolicy;
use crate::qualifier::qualify;
use crate::renderer::render;

/// Naming engine bound to one immutable [`NamingPolicy`].
///
/// Build one per document-generation session. A `Namer` holds no mutable
/// state, so it can be shared across threads; a different policy needs a
/// different `Namer`.
///
/// # Example
///
/// ```rust
/// use defname_canonical::{Namer, NamingPolicy};
///
/// let local = Namer::new(NamingPolicy::new());
/// let qualified = Namer::new(NamingPolicy::new().with_package_qualification(true));
///
/// assert_eq!(local.name_descriptor("[]pkgA.G0", "pkgA")?.as_str(), "arr_G0");
/// assert_eq!(qualified.name_descriptor("G1[string]", "pkgA")?.as_str(), "pkgA_G1[string]");
/// # Ok::<(), defname_canonical::ParseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Namer {
    policy: NamingPolicy,
}

impl Namer {
    /// Creates a namer for `policy`.
    pub fn new(policy: NamingPolicy) -> Self {
        Self { policy }
    }

    /// The policy this namer applies.
    pub fn policy(&self) -> &NamingPolicy {
        &self.policy
    }

    /// Names a descriptor string whose top-level type is declared in `home`.
    ///
    /// Every named node in the descriptor, generic arguments included, is
    /// qualified relative to `home`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the descriptor is malformed or has trailing input.
    pub fn name_descriptor(&self, descriptor: &str, home: &str) -> Result<CanonicalName, ParseError> {
        let ty = parser::parse_complete(descriptor)?;
        Ok(self.name_parsed(ty, home))
    }

    /// Qualifies and renders an already parsed tree.
    pub fn name_parsed(&self, mut ty: ParsedType, home: &str) -> CanonicalName {
        qualify(&mut ty, home, &self.policy);
        let name = render(&ty);
        debug!(home, name = %name, "rendered canonical name");
        CanonicalName::new(name)
    }

    /// Names a structured descriptor.
    ///
    /// Each named descriptor reached through composites is qualified relative
    /// to its own package.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] only when a named descriptor carries a malformed
    /// textual instantiation.
    pub fn name_type(&self, descriptor: &TypeDescriptor) -> Result<CanonicalName, ParseError> {
        let ty = self.resolve(descriptor)?;
        let name = render(&ty);
        debug!(kind = ?descriptor.kind(), name = %name, "rendered canonical name");
        Ok(CanonicalName::new(name))
    }

    /// Names `T` through its [`Describe`] implementation.
    pub fn name_of<T: Describe + ?Sized>(&self) -> Result<CanonicalName, ParseError> {
        self.name_type(&T::describe())
    }

    fn resolve(&self, descriptor: &TypeDescriptor) -> Result<ParsedType, ParseError> {
        Ok(match descriptor {
            TypeDescriptor::Named { package, .. } => {
                let mut ty = descriptor.to_parsed()?;
                qualify(&mut ty, package, &self.policy);
                ty
            }
            TypeDescriptor::Pointer { element } => ParsedType::pointer(self.resolve(element)?),
            TypeDescriptor::Slice { element } => ParsedType::slice(self.resolve(element)?),
            TypeDescriptor::Array { length, element } => {
                ParsedType::array(*length, self.resolve(element)?)
            }
            TypeDescriptor::Map { key, value } => {
                ParsedType::map(self.resolve(key)?, self.resolve(value)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn namer_is_shareable() {
        assert_send_sync::<Namer>();
    }

    #[test]
    fn repeated_calls_are_identical() {
        let namer = Namer::new(NamingPolicy::new().with_package_qualification(true));
        let first = namer.name_descriptor("map[string][]pkgA.G1[pkgB.G0]", "pkgA").unwrap();
        for _ in 0..8 {
            assert_eq!(
                namer.name_descriptor("map[string][]pkgA.G1[pkgB.G0]", "pkgA").unwrap(),
                first
            );
        }
        assert_eq!(first.as_str(), "map_string_to_arr_pkgA_G1[pkgB_G0]");
    }

    #[test]
    fn composite_members_use_their_own_package() {
        let desc = TypeDescriptor::map(
            TypeDescriptor::named("pkgA", "G0"),
            TypeDescriptor::named("encoding/json", "RawMessage"),
        );
        let local = Namer::default();
        assert_eq!(local.name_type(&desc).unwrap().as_str(), "map_G0_to_RawMessage");

        let qualified = Namer::new(NamingPolicy::new().with_package_qualification(true));
        assert_eq!(
            qualified.name_type(&desc).unwrap().as_str(),
            "map_pkgA_G0_to_encoding__json_RawMessage"
        );
    }

    #[test]
    fn policy_is_kept_as_given() {
        let policy = NamingPolicy::new()
            .with_package_qualification(true)
            .strip_prefix("github.com/");
        let namer = Namer::new(policy.clone());
        assert_eq!(namer.policy(), &policy);
        assert_eq!(Namer::default().policy(), &NamingPolicy::new());
    }

    #[test]
    fn parse_errors_propagate() {
        let namer = Namer::default();
        assert!(matches!(
            namer.name_descriptor("map[G0", "pkgA"),
            Err(ParseError::UnterminatedMap { .. })
        ));
    }
}
