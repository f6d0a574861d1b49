use super::scoring::{Evaluation, RequirementCounts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub evaluation: Evaluation,
    pub requirements: RequirementCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedRecord {
    pub strategy: String,
    pub config: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub strategy: String,
    pub config: String,
    pub response_length: usize,
    pub fr_count: usize,
    pub nfr_count: usize,
    pub specificity_score: u8,
    pub measurability_score: u8,
    pub testability_score: u8,
    pub text_sha256: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverage {
    pub strategy: String,
    pub config: String,
    pub samples: usize,
    pub avg_fr_count: f64,
    pub avg_nfr_count: f64,
    pub avg_specificity: f64,
    pub avg_measurability: f64,
    pub avg_testability: f64,
    pub avg_response_length: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateSummary {
    pub generated_at: String,
    pub files: usize,
    pub records: usize,
    pub skipped: usize,
    pub groups: Vec<GroupAverage>,
}
