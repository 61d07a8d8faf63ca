use serde::{Deserialize, Serialize};

/// Controls how package paths appear in canonical names.
///
/// The policy is an immutable value: bind it into a [`Namer`](crate::Namer)
/// once per document-generation session instead of mutating shared state.
///
/// Loadable from JSON; missing fields take their defaults.
///
/// ```rust
/// use defname_canonical::NamingPolicy;
///
/// let policy = NamingPolicy::from_json_str(r#"{"qualify_with_package": true}"#)?;
/// assert!(policy.qualify_with_package);
/// assert!(policy.strip_prefixes.is_empty());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingPolicy {
    /// Stamp unqualified names with their home package when true; drop the
    /// home package from names when false.
    pub qualify_with_package: bool,
    /// Prefixes removed from package paths; only the first match applies.
    pub strip_prefixes: Vec<String>,
}

impl NamingPolicy {
    /// Policy that leaves home-package names unqualified and strips nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the qualification flag.
    pub fn with_package_qualification(mut self, qualify: bool) -> Self {
        self.qualify_with_package = qualify;
        self
    }

    /// Appends a prefix to the strip list.
    pub fn strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefixes.push(prefix.into());
        self
    }

    /// Parses a policy from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Removes the first configured prefix that `package` starts with.
    ///
    /// Empty prefixes are skipped rather than treated as a match.
    pub(crate) fn strip<'a>(&self, package: &'a str) -> &'a str {
        self.strip_prefixes
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .find_map(|prefix| package.strip_prefix(prefix.as_str()))
            .unwrap_or(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_prefix_wins() {
        let policy = NamingPolicy::new().strip_prefix("a/").strip_prefix("a/b/");
        assert_eq!(policy.strip("a/b/c"), "b/c");
    }

    #[test]
    fn non_matching_and_empty_prefixes_are_noops() {
        let policy = NamingPolicy::new().strip_prefix("").strip_prefix("x/");
        assert_eq!(policy.strip("a/b"), "a/b");

        let policy = NamingPolicy::new().strip_prefix("").strip_prefix("a/");
        assert_eq!(policy.strip("a/b"), "b");
    }

    #[test]
    fn deserializes_with_defaults() {
        let policy = NamingPolicy::from_json_str(r#"{"strip_prefixes": ["github.com/"]}"#)
            .unwrap();
        assert_eq!(
            policy,
            NamingPolicy::new().strip_prefix("github.com/")
        );
    }
}
