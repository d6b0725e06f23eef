use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::policy::Policy;

/// Top-level configuration from `.appsafety.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: Policy,
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# appsafety configuration

[policy]
# Minimum severity to fail the rating
# (safe, probably-safe, potentially-unsafe, unsafe).
fail_on = "unsafe"

# Description keys to ignore entirely.
# ignore_keys = ["uses-a-legacy-windowing-system"]

# Per-key severity overrides.
# [policy.overrides]
# "uses-session-services" = "potentially-unsafe"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;
    use std::io::Write;

    #[test]
    fn missing_file_yields_default() {
        let config = Config::load(Path::new("/nonexistent/.appsafety.toml")).unwrap();
        assert_eq!(config.policy.fail_on, Severity::Unsafe);
        assert!(config.policy.ignore_keys.is_empty());
    }

    #[test]
    fn loads_policy_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[policy]
fail_on = "potentially-unsafe"
ignore_keys = ["has-network-access"]

[policy.overrides]
"uses-session-services" = "probably-safe"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.policy.fail_on, Severity::PotentiallyUnsafe);
        assert!(config.policy.ignore_keys.contains("has-network-access"));
        assert_eq!(
            config.policy.overrides.get("uses-session-services"),
            Some(&Severity::ProbablySafe)
        );
    }

    #[test]
    fn starter_toml_parses() {
        let config: Config = toml::from_str(Config::starter_toml()).unwrap();
        assert_eq!(config.policy.fail_on, Severity::Unsafe);
    }
}
