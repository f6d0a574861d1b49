use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Evaluator;
    use crate::labels::count_requirements;
    use crate::types::report::ScoreReport;

    #[test]
    fn json_report_contains_score_fields() {
        let text = "FR-1: The system must verify uploads within 3 seconds.";
        let report = ScoreReport {
            evaluation: Evaluator::new().evaluate_detailed(text),
            requirements: count_requirements(text),
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"specificity_score\": 5"));
        assert!(rendered.contains("\"measurability_score\": 5"));
        assert!(rendered.contains("\"testability_score\": 5"));
        assert!(rendered.contains("\"functional\": 1"));
    }

    #[test]
    fn json_report_has_null_percentages_for_empty_text() {
        let report = ScoreReport {
            evaluation: Evaluator::new().evaluate_detailed(""),
            requirements: count_requirements(""),
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"percentages\": null"));
        assert!(rendered.contains("\"sentence_count\": 0"));
    }
}
