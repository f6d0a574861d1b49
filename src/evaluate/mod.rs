pub mod catalog;
pub mod level;
pub mod measurability;
pub mod segment;
pub mod specificity;
pub mod testability;

use crate::types::scoring::{Evaluation, Percentages, ScoreResult};
use catalog::Catalog;
use level::percentage_to_level;
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_EVALUATOR: LazyLock<Evaluator> = LazyLock::new(Evaluator::new);

pub fn evaluate(text: &str) -> ScoreResult {
    DEFAULT_EVALUATOR.evaluate(text)
}

#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    catalog: Catalog,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::new())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn evaluate(&self, text: &str) -> ScoreResult {
        self.evaluate_detailed(text).scores
    }

    // Scores plus the percentages they were mapped from. Empty input yields
    // the all-ones fallback with no percentages.
    pub fn evaluate_detailed(&self, text: &str) -> Evaluation {
        let sentences = segment::segment(text);
        if sentences.is_empty() {
            debug!("no sentences found, returning fallback scores");
            return Evaluation {
                sentence_count: 0,
                scores: ScoreResult::fallback(),
                percentages: None,
            };
        }

        let percentages = Percentages {
            specificity: specificity::specificity_percentage(
                &sentences,
                &self.catalog.specificity,
            ),
            measurability: measurability::measurability_percentage(
                &sentences,
                &self.catalog.measurability,
            ),
            testability: testability::testability_percentage(
                &sentences,
                &self.catalog.testability,
            ),
        };
        debug!(
            sentences = sentences.len(),
            specificity = percentages.specificity,
            measurability = percentages.measurability,
            testability = percentages.testability,
            "evaluated requirements text"
        );

        Evaluation {
            sentence_count: sentences.len(),
            scores: ScoreResult {
                specificity_score: percentage_to_level(percentages.specificity),
                measurability_score: percentage_to_level(percentages.measurability),
                testability_score: percentage_to_level(percentages.testability),
            },
            percentages: Some(percentages),
        }
    }
}
