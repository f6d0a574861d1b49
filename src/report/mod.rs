pub mod json;
pub mod md;

use crate::error::ReqscoreError;
use crate::types::config::FormatSetting;
use crate::types::report::{AggregateSummary, ScoreReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl From<FormatSetting> for OutputFormat {
    fn from(setting: FormatSetting) -> Self {
        match setting {
            FormatSetting::Json => OutputFormat::Json,
            FormatSetting::Md => OutputFormat::Md,
        }
    }
}

pub fn render_score(report: &ScoreReport, format: OutputFormat) -> Result<String, ReqscoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ReqscoreError::Json),
        OutputFormat::Md => Ok(md::score_markdown(report)),
    }
}

pub fn render_summary(
    summary: &AggregateSummary,
    format: OutputFormat,
) -> Result<String, ReqscoreError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(ReqscoreError::Json),
        OutputFormat::Md => Ok(md::summary_markdown(summary)),
    }
}
