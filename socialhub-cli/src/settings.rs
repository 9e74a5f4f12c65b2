use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use socialhub_core::Tab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Человекочитаемый текст.
    #[default]
    Text,
    /// JSON-модель экрана.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) log_level: String,
    pub(crate) default_tab: Tab,
    pub(crate) format: OutputFormat,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_level = get_optional(&lookup, "LOG_LEVEL")
            .or_else(|| get_optional(&lookup, "RUST_LOG"))
            .unwrap_or_else(|| "warn".to_string());

        let default_tab = match get_optional(&lookup, "SOCIALHUB_DEFAULT_TAB") {
            Some(raw) => raw
                .parse::<Tab>()
                .context("Failed to parse SOCIALHUB_DEFAULT_TAB")?,
            None => Tab::default(),
        };

        let format = match get_optional(&lookup, "SOCIALHUB_FORMAT") {
            Some(raw) => OutputFormat::from_str(&raw, true)
                .map_err(|e| anyhow!("Failed to parse SOCIALHUB_FORMAT: {e}"))?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            log_level,
            default_tab,
            format,
        })
    }
}

// Пустое значение считается отсутствующим.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    let value = lookup(key)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let settings = settings_from(&[]).expect("defaults must parse");
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.default_tab, Tab::Feed);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn log_level_prefers_log_level_over_rust_log() {
        let settings = settings_from(&[("LOG_LEVEL", "debug"), ("RUST_LOG", "trace")])
            .expect("must parse");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn log_level_falls_back_to_rust_log() {
        let settings = settings_from(&[("RUST_LOG", "info")]).expect("must parse");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = settings_from(&[("SOCIALHUB_DEFAULT_TAB", "  "), ("SOCIALHUB_FORMAT", "")])
            .expect("must parse");
        assert_eq!(settings.default_tab, Tab::Feed);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn parses_tab_and_format() {
        let settings =
            settings_from(&[("SOCIALHUB_DEFAULT_TAB", "profile"), ("SOCIALHUB_FORMAT", "JSON")])
                .expect("must parse");
        assert_eq!(settings.default_tab, Tab::Profile);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_tab() {
        let err = settings_from(&[("SOCIALHUB_DEFAULT_TAB", "wall")]).expect_err("must fail");
        assert!(err.to_string().contains("SOCIALHUB_DEFAULT_TAB"));
    }

    #[test]
    fn rejects_unknown_format() {
        let err = settings_from(&[("SOCIALHUB_FORMAT", "yaml")]).expect_err("must fail");
        assert!(err.to_string().contains("SOCIALHUB_FORMAT"));
    }
}
