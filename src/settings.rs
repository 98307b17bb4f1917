//! Handles settings for the ledger views. Configuration is read from an
//! optional TOML file (`budget.toml` by default) and then from `BUDGET_*`
//! environment variables, e.g. `BUDGET_LAYOUT__HEADER_WIDTH=40`.
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::layout::{ChartLayout, Layout};

pub const DEFAULT_CONFIG_PATH: &str = "budget.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log level for the `budget_ledger` target
    pub log_level: String,
    pub layout: Layout,
    pub chart: ChartLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            layout: Layout::default(),
            chart: ChartLayout::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (required when given) or from the default
    /// file if it exists, then apply environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("BUDGET")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse settings from TOML text, without environment overrides
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DESCRIPTION_WIDTH, HEADER_WIDTH};

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.layout.header_width, HEADER_WIDTH);
        assert_eq!(settings.layout.description_width, DESCRIPTION_WIDTH);
        assert_eq!(settings.chart.title, "Percentage spent by category");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            log_level = "debug"

            [layout]
            header_width = 40

            [chart]
            title = "Spending"
            "#,
        )
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.layout.header_width, 40);
        assert_eq!(settings.layout.amount_width, Layout::default().amount_width);
        assert_eq!(settings.chart.title, "Spending");
        assert_eq!(settings.chart.step, ChartLayout::default().step);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Settings::load(Some("does/not/exist.toml")).is_err());
    }
}
