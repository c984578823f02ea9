//! Wayfinder configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main Wayfinder configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Travel service endpoints
    pub api: ApiConfig,

    /// Photo and map URL construction
    pub media: MediaConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Fails fast on an unusable base URL. The media API key is checked
    /// lazily: the workflow itself never requires it.
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.api.base_url)
            .context(format!("Invalid api base-url: {}", self.api.base_url))?;
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .wayfinder.yml
        let local_config = PathBuf::from(".wayfinder.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/wayfinder/wayfinder.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("wayfinder").join("wayfinder.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Travel service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the travel backend
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_ms: 120_000,
        }
    }
}

/// Photo and map URL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Environment variable containing the maps API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Width requested from the photo service
    #[serde(rename = "photo-max-width")]
    pub photo_max_width: u32,
}

impl MediaConfig {
    /// Read the maps API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!(
            "Maps API key not found. Set the {} environment variable.",
            self.api_key_env
        ))
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            api_key_env: "MAPS_API_KEY".to_string(),
            photo_max_width: 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_ms, 120_000);
        assert_eq!(config.media.api_key_env, "MAPS_API_KEY");
        assert_eq!(config.media.photo_max_width, 400);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
api:
  base-url: https://travel.example.com
  timeout-ms: 60000

media:
  api-key-env: MY_MAPS_KEY
  photo-max-width: 800
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.api.base_url, "https://travel.example.com");
        assert_eq!(config.api.timeout_ms, 60000);
        assert_eq!(config.media.api_key_env, "MY_MAPS_KEY");
        assert_eq!(config.media.photo_max_width, 800);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
api:
  base-url: https://travel.example.com
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.api.base_url, "https://travel.example.com");

        // Defaults for unspecified
        assert_eq!(config.api.timeout_ms, 120_000);
        assert_eq!(config.media.api_key_env, "MAPS_API_KEY");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("wayfinder.yml");
        std::fs::write(&path, "api:\n  base-url: https://travel.example.com\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.api.base_url, "https://travel.example.com");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load(Some(&PathBuf::from("/nonexistent/wayfinder.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();

        assert!(config.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }
}
