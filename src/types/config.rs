use crate::error::ReqscoreError;
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_STRATEGY_ORDER: [&str; 9] = [
    "Zero-shot",
    "Few-shot",
    "Chain-of-Thought",
    "Self-Consistency",
    "System Prompt",
    "Role Prompt",
    "Contextual",
    "Tree of Thoughts",
    "ReAct",
];

pub const DEFAULT_CONFIG_ORDER: [&str; 3] = ["precise", "default", "creative"];

pub const DEFAULT_EXTENSION: &str = "jsonl";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReqscoreConfig {
    pub output: Option<OutputConfig>,
    pub aggregate: Option<AggregateConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Json,
    Md,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<FormatSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AggregateConfig {
    pub strategy_order: Option<Vec<String>>,
    pub config_order: Option<Vec<String>>,
    pub extension: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSettings {
    pub strategy_order: Vec<String>,
    pub config_order: Vec<String>,
    pub extension: String,
}

impl Default for AggregateSettings {
    fn default() -> Self {
        Self {
            strategy_order: DEFAULT_STRATEGY_ORDER.iter().map(|s| s.to_string()).collect(),
            config_order: DEFAULT_CONFIG_ORDER.iter().map(|s| s.to_string()).collect(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ReqscoreConfig {
    pub fn output_format(&self) -> FormatSetting {
        self.output
            .as_ref()
            .and_then(|output| output.format)
            .unwrap_or(FormatSetting::Md)
    }

    pub fn aggregate_settings(&self) -> AggregateSettings {
        let defaults = AggregateSettings::default();
        match &self.aggregate {
            Some(aggregate) => AggregateSettings {
                strategy_order: aggregate
                    .strategy_order
                    .clone()
                    .unwrap_or(defaults.strategy_order),
                config_order: aggregate
                    .config_order
                    .clone()
                    .unwrap_or(defaults.config_order),
                extension: aggregate
                    .extension
                    .as_ref()
                    .map(|ext| ext.trim_start_matches('.').to_string())
                    .unwrap_or(defaults.extension),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), ReqscoreError> {
        let settings = self.aggregate_settings();
        if settings.extension.is_empty() {
            return Err(ReqscoreError::ConfigParse(
                "aggregate.extension must not be empty".to_string(),
            ));
        }
        for (key, order) in [
            ("aggregate.strategy_order", &settings.strategy_order),
            ("aggregate.config_order", &settings.config_order),
        ] {
            if order.iter().any(|entry| entry.trim().is_empty()) {
                return Err(ReqscoreError::ConfigParse(format!(
                    "{key} contains an empty entry"
                )));
            }
            let mut seen = HashSet::new();
            let duplicates = order
                .iter()
                .filter(|entry| !seen.insert(entry.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !duplicates.is_empty() {
                return Err(ReqscoreError::ConfigParse(format!(
                    "{key} lists entries more than once: {}",
                    duplicates.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: ReqscoreConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.output_format(), FormatSetting::Md);
        assert_eq!(cfg.aggregate_settings(), AggregateSettings::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let cfg: ReqscoreConfig = toml::from_str(
            r#"
[output]
format = "json"

[aggregate]
strategy_order = ["ReAct", "Zero-shot"]
config_order = ["creative"]
extension = ".ndjson"
"#,
        )
        .expect("full config should parse");

        assert_eq!(cfg.output_format(), FormatSetting::Json);
        let settings = cfg.aggregate_settings();
        assert_eq!(settings.strategy_order, vec!["ReAct", "Zero-shot"]);
        assert_eq!(settings.config_order, vec!["creative"]);
        assert_eq!(settings.extension, "ndjson");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_aggregate_section_keeps_remaining_defaults() {
        let cfg: ReqscoreConfig = toml::from_str(
            r#"
[aggregate]
config_order = ["default"]
"#,
        )
        .expect("config should parse");

        let settings = cfg.aggregate_settings();
        assert_eq!(settings.strategy_order.len(), DEFAULT_STRATEGY_ORDER.len());
        assert_eq!(settings.config_order, vec!["default"]);
        assert_eq!(settings.extension, DEFAULT_EXTENSION);
    }

    #[test]
    fn unknown_format_is_rejected_at_parse_time() {
        let parsed = toml::from_str::<ReqscoreConfig>(
            r#"
[output]
format = "sarif"
"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn validate_rejects_duplicate_order_entries() {
        let cfg: ReqscoreConfig = toml::from_str(
            r#"
[aggregate]
strategy_order = ["ReAct", "ReAct"]
"#,
        )
        .expect("config should parse");

        let err = cfg.validate().expect_err("duplicates should be rejected");
        assert!(err.to_string().contains("ReAct"));
    }

    #[test]
    fn validate_rejects_empty_extension() {
        let cfg: ReqscoreConfig = toml::from_str(
            r#"
[aggregate]
extension = "."
"#,
        )
        .expect("config should parse");

        assert!(cfg.validate().is_err());
    }
}
