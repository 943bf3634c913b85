use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::export::EXPORT_FILENAME;

pub const DEFAULT_BASE_URL: &str = "https://kurs-kmk-api-production.up.railway.app";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportSettings {
    pub filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            filename: EXPORT_FILENAME.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub export: ExportSettings,
}

impl AppConfig {
    /// Loads the default config file, falling back to built-in defaults when
    /// no file exists.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}; using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "kursdb")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
provider:
  base_url: "http://example.com/kurs"
export:
  filename: "rates.xlsx"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://example.com/kurs");
        assert_eq!(config.export.filename, "rates.xlsx");
    }

    #[test]
    fn test_config_sections_default_when_absent() {
        let config: AppConfig = serde_yaml::from_str("provider:\n  base_url: \"http://x\"\n")
            .expect("Failed to deserialize");
        assert_eq!(config.provider.base_url, "http://x");
        assert_eq!(config.export.filename, EXPORT_FILENAME);

        let empty: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert_eq!(empty.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(empty.export.filename, EXPORT_FILENAME);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        assert!(AppConfig::load_from_path("/definitely/not/here.yaml").is_err());
    }
}
