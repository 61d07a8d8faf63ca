use crate::parsed::ParsedType;
use crate::policy::NamingPolicy;

/// Rewrites the package of every named node in `ty` according to `policy`.
///
/// `home` is the package of the top-level type being named. It stays the
/// context for every nested node, generic arguments included, so a generic
/// argument declared next to its generic type loses its qualification along
/// with it while a foreign argument keeps its own package.
pub fn qualify(ty: &mut ParsedType, home: &str, policy: &NamingPolicy) {
    match ty {
        ParsedType::Named {
            package,
            name,
            generic_args,
        } => {
            if crate::builtin::is_builtin(package.as_str(), name.as_str()) {
                return;
            }
            if policy.qualify_with_package {
                if package.is_empty() {
                    *package = home.to_string();
                }
            } else if package.as_str() == home {
                package.clear();
            }
            if !package.is_empty() {
                let stripped = policy.strip(package.as_str());
                if stripped.len() != package.len() {
                    *package = stripped.to_string();
                }
            }
            for arg in generic_args {
                qualify(arg, home, policy);
            }
        }
        ParsedType::Pointer { element } | ParsedType::Slice { element, .. } => {
            qualify(element, home, policy)
        }
        ParsedType::Map { key, value } => {
            qualify(key, home, policy);
            qualify(value, home, policy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "github.com/acme/api";

    fn qualified(mut ty: ParsedType, policy: &NamingPolicy) -> ParsedType {
        qualify(&mut ty, HOME, policy);
        ty
    }

    #[test]
    fn stamps_home_package_when_qualifying() {
        let policy = NamingPolicy::new().with_package_qualification(true);
        assert_eq!(
            qualified(ParsedType::named("G0"), &policy),
            ParsedType::qualified(HOME, "G0")
        );
    }

    #[test]
    fn clears_home_package_when_not_qualifying() {
        assert_eq!(
            qualified(ParsedType::qualified(HOME, "G0"), &NamingPolicy::new()),
            ParsedType::named("G0")
        );
    }

    #[test]
    fn foreign_package_survives_either_way() {
        let foreign = ParsedType::qualified("encoding/json", "RawMessage");
        for qualify_flag in [false, true] {
            let policy = NamingPolicy::new().with_package_qualification(qualify_flag);
            assert_eq!(qualified(foreign.clone(), &policy), foreign);
        }
    }

    #[test]
    fn builtins_are_left_alone() {
        let policy = NamingPolicy::new()
            .with_package_qualification(true)
            .strip_prefix("");
        assert_eq!(
            qualified(ParsedType::named("string"), &policy),
            ParsedType::named("string")
        );
    }

    #[test]
    fn strips_after_stamping() {
        let policy = NamingPolicy::new()
            .with_package_qualification(true)
            .strip_prefix("github.com/");
        assert_eq!(
            qualified(ParsedType::named("G0"), &policy),
            ParsedType::qualified("acme/api", "G0")
        );
    }

    #[test]
    fn generic_args_use_the_root_home_package() {
        let ty = ParsedType::qualified(HOME, "G2").with_generic_args(vec![
            ParsedType::qualified(HOME, "G0"),
            ParsedType::qualified("encoding/json", "RawMessage"),
            ParsedType::named("uint64"),
        ]);
        let policy = NamingPolicy::new().strip_prefix("encoding/");
        assert_eq!(
            qualified(ty, &policy),
            ParsedType::named("G2").with_generic_args(vec![
                ParsedType::named("G0"),
                ParsedType::qualified("json", "RawMessage"),
                ParsedType::named("uint64"),
            ])
        );
    }

    #[test]
    fn recurses_through_composites() {
        let ty = ParsedType::pointer(ParsedType::map(
            ParsedType::named("G0"),
            ParsedType::array(2, ParsedType::named("G1")),
        ));
        let policy = NamingPolicy::new().with_package_qualification(true);
        assert_eq!(
            qualified(ty, &policy),
            ParsedType::pointer(ParsedType::map(
                ParsedType::qualified(HOME, "G0"),
                ParsedType::array(2, ParsedType::qualified(HOME, "G1")),
            ))
        );
    }
}
