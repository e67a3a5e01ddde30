use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// City looked up at startup when none has been configured.
pub const DEFAULT_CITY: &str = "London";

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

/// Top-level configuration stored on disk.
///
/// A missing API key is not rejected here: requests are still sent and the
/// service's authentication error comes back through the normal error path.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// api_key = "..."
    /// default_city = "Reykjavik"
    pub api_key: Option<String>,
    pub default_city: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key to send with requests: environment first, then the stored key.
    pub fn resolved_api_key(&self) -> Option<String> {
        resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    /// Configured default city, falling back to [`DEFAULT_CITY`].
    pub fn default_city(&self) -> &str {
        self.default_city.as_deref().unwrap_or(DEFAULT_CITY)
    }
}

fn resolve_api_key(env_value: Option<String>, stored: Option<&str>) -> Option<String> {
    env_value
        .filter(|key| !key.is_empty())
        .or_else(|| stored.map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_key_and_falls_back_to_london() {
        let cfg = Config::default();
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.default_city(), DEFAULT_CITY);
    }

    #[test]
    fn toml_round_trip() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            default_city: Some("Reykjavik".into()),
        };

        let serialized = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&serialized).expect("config must parse back");

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.default_city(), "Reykjavik");
    }

    #[test]
    fn partial_file_leaves_missing_fields_empty() {
        let parsed: Config = toml::from_str(r#"api_key = "KEY""#).expect("must parse");
        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.default_city(), DEFAULT_CITY);
    }

    #[test]
    fn environment_key_wins_over_stored_key() {
        let resolved = resolve_api_key(Some("ENV_KEY".into()), Some("FILE_KEY"));
        assert_eq!(resolved.as_deref(), Some("ENV_KEY"));
    }

    #[test]
    fn empty_environment_key_is_ignored() {
        let resolved = resolve_api_key(Some(String::new()), Some("FILE_KEY"));
        assert_eq!(resolved.as_deref(), Some("FILE_KEY"));

        assert_eq!(resolve_api_key(Some(String::new()), None), None);
    }
}
