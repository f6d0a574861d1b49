use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub specificity_score: u8,
    pub measurability_score: u8,
    pub testability_score: u8,
}

impl ScoreResult {
    pub fn fallback() -> Self {
        Self {
            specificity_score: 1,
            measurability_score: 1,
            testability_score: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentages {
    pub specificity: f64,
    pub measurability: f64,
    pub testability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub sentence_count: usize,
    pub scores: ScoreResult,
    pub percentages: Option<Percentages>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCounts {
    pub functional: usize,
    pub non_functional: usize,
}
