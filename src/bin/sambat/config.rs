use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::MonthNames;

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default)]
    pub names: MonthNames,
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            names: MonthNames::default(),
            show_progress: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Loads the file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.display.names, MonthNames::English);
        assert!(config.display.show_progress);
    }

    #[test]
    fn parses_display_section() {
        let config: Config = toml::from_str(
            r#"
            [display]
            names = "nepali"
            show_progress = false
            "#,
        )
        .unwrap();
        assert_eq!(config.display.names, MonthNames::Nepali);
        assert!(!config.display.show_progress);
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config: Config = toml::from_str("[display]\nnames = \"nepali\"\n").unwrap();
        assert!(config.display.show_progress);

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.names, MonthNames::English);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<Config>("[display]\ncolour = \"red\"\n").is_err());
        assert!(toml::from_str::<Config>("[display]\nnames = \"klingon\"\n").is_err());
    }
}
