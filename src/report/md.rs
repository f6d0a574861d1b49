use crate::types::report::{AggregateSummary, ScoreReport};

pub fn score_markdown(report: &ScoreReport) -> String {
    let evaluation = &report.evaluation;
    let mut output = String::new();
    output.push_str("# Requirements Quality\n\n");
    output.push_str(&format!("Sentences: {}\n\n", evaluation.sentence_count));

    output.push_str("## Scores\n\n");
    let rows = [
        (
            "specificity",
            evaluation.scores.specificity_score,
            evaluation.percentages.map(|p| p.specificity),
        ),
        (
            "measurability",
            evaluation.scores.measurability_score,
            evaluation.percentages.map(|p| p.measurability),
        ),
        (
            "testability",
            evaluation.scores.testability_score,
            evaluation.percentages.map(|p| p.testability),
        ),
    ];
    for (name, score, percentage) in rows {
        match percentage {
            Some(percentage) => {
                output.push_str(&format!("- {name}: {score}/5 ({percentage:.1}%)\n"))
            }
            None => output.push_str(&format!("- {name}: {score}/5\n")),
        }
    }

    output.push_str("\n## Requirement Labels\n\n");
    output.push_str(&format!(
        "- functional: {}\n- non_functional: {}\n",
        report.requirements.functional, report.requirements.non_functional
    ));
    output
}

pub fn summary_markdown(summary: &AggregateSummary) -> String {
    let mut output = String::new();
    output.push_str("# Strategy Averages\n\n");
    output.push_str(&format!(
        "Files: {} | records: {} | skipped: {}\n\n",
        summary.files, summary.records, summary.skipped
    ));

    if summary.groups.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str(
        "| Strategy | Config | Samples | Specificity | Measurability | Testability | FR | NFR | Length |\n",
    );
    output.push_str("|---|---|---|---|---|---|---|---|---|\n");
    for group in &summary.groups {
        output.push_str(&format!(
            "| {} | {} | {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.0} |\n",
            group.strategy,
            group.config,
            group.samples,
            group.avg_specificity,
            group.avg_measurability,
            group.avg_testability,
            group.avg_fr_count,
            group.avg_nfr_count,
            group.avg_response_length
        ));
    }
    output
}
