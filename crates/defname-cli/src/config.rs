//! Naming policy assembly from a config file and flags.

use clap::Args;
use defname_canonical::NamingPolicy;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a naming policy.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The policy file could not be read.
    #[error("failed to read policy file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The policy file is not valid policy JSON.
    #[error("invalid policy file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Policy flags shared by the naming commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// JSON policy file (`qualify_with_package`, `strip_prefixes`)
    #[arg(long)]
    pub policy: Option<String>,
    /// Qualify names with their package
    #[arg(long)]
    pub qualify: bool,
    /// Package prefix to strip; repeat in priority order
    #[arg(long = "strip-prefix")]
    pub strip_prefixes: Vec<String>,
}

impl PolicyArgs {
    /// Loads the policy file, if any, then applies the flags on top.
    ///
    /// `--qualify` can only switch qualification on; `--strip-prefix` values
    /// are appended after the file's prefixes.
    pub fn load(&self) -> Result<NamingPolicy, ConfigError> {
        let mut policy = match &self.policy {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                NamingPolicy::from_json_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            None => NamingPolicy::new(),
        };

        if self.qualify {
            policy = policy.with_package_qualification(true);
        }
        for prefix in &self.strip_prefixes {
            policy = policy.strip_prefix(prefix.clone());
        }

        debug!(?policy, "loaded naming policy");
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flags_extend_the_file_policy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"strip_prefixes": ["github.com/"]}}"#).unwrap();

        let args = PolicyArgs {
            policy: Some(file.path().to_string_lossy().to_string()),
            qualify: true,
            strip_prefixes: vec!["encoding/".into()],
        };
        assert_eq!(
            args.load().unwrap(),
            NamingPolicy::new()
                .with_package_qualification(true)
                .strip_prefix("github.com/")
                .strip_prefix("encoding/")
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let args = PolicyArgs {
            policy: Some("/nonexistent/policy.json".into()),
            ..PolicyArgs::default()
        };
        assert!(matches!(args.load(), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let args = PolicyArgs {
            policy: Some(file.path().to_string_lossy().to_string()),
            ..PolicyArgs::default()
        };
        assert!(matches!(args.load(), Err(ConfigError::Parse { .. })));
    }
}
