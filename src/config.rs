use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GitSemverError, Result};

/// File name looked up in the repository being versioned.
pub const REPO_CONFIG_FILE: &str = "gitsemver.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".gitsemver.toml";

/// Environment variable overriding the main branch list.
pub const MAIN_BRANCHES_ENV: &str = "MAIN_BRANCHES";

/// Represents the complete configuration for git-semver.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Branches treated as release lines. Matched against the sanitized
    /// branch name.
    #[serde(default = "default_main_branches")]
    pub main_branches: Vec<String>,
}

/// Returns the default list of main branches.
fn default_main_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            main_branches: default_main_branches(),
        }
    }
}

impl Config {
    /// Parse a comma-separated branch list, as found in `MAIN_BRANCHES`.
    ///
    /// Entries are trimmed and empty entries dropped.
    pub fn parse_branch_list(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Replace the main branches with the value of `MAIN_BRANCHES`.
    ///
    /// An unset or empty value keeps the current list, so an empty
    /// `MAIN_BRANCHES` does not leave every branch without a main line.
    pub fn with_main_branches_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            let branches = Self::parse_branch_list(raw);
            if !branches.is_empty() {
                self.main_branches = branches;
            }
        }
        self
    }
}

fn read_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        GitSemverError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| GitSemverError::config(format!("Cannot parse {}: {}", path.display(), e)))
}

/// Read a config file found by lookup rather than named on the command line.
///
/// Such a file never aborts the run: a bad one is logged and the defaults apply.
fn read_discovered_config(path: &Path) -> Config {
    match read_config_file(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring config file, using defaults");
            Config::default()
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitsemver.toml` in the repository directory
/// 3. `.gitsemver.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the explicitly given file cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, repo_path: &Path) -> Result<Config> {
    if let Some(path) = config_path {
        tracing::debug!(path = %path.display(), "loading explicit config");
        return read_config_file(path);
    }

    let repo_config = repo_path.join(REPO_CONFIG_FILE);
    if repo_config.is_file() {
        tracing::debug!(path = %repo_config.display(), "loading repository config");
        return Ok(read_discovered_config(&repo_config));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(USER_CONFIG_FILE);
        if user_config.is_file() {
            tracing::debug!(path = %user_config.display(), "loading user config");
            return Ok(read_discovered_config(&user_config));
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_main_branches() {
        let config = Config::default();
        assert_eq!(config.main_branches, vec!["main", "master"]);
    }

    #[test]
    fn test_parse_branch_list() {
        assert_eq!(
            Config::parse_branch_list("main, trunk ,release.1.x"),
            vec!["main", "trunk", "release.1.x"]
        );
        assert!(Config::parse_branch_list(" , ,").is_empty());
    }

    #[test]
    fn test_override_replaces_branches() {
        let config = Config::default().with_main_branches_override(Some("trunk"));
        assert_eq!(config.main_branches, vec!["trunk"]);
    }

    #[test]
    fn test_empty_override_keeps_branches() {
        let config = Config::default().with_main_branches_override(Some(""));
        assert_eq!(config, Config::default());

        let config = Config::default().with_main_branches_override(None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
