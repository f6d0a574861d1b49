use crate::error::Result;
use crate::evaluate::Evaluator;
use crate::jsonl;
use crate::labels::count_requirements;
use crate::types::report::{GeneratedRecord, ScoredRecord};
use sha2::{Digest, Sha256};
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub records: Vec<ScoredRecord>,
    pub skipped: usize,
}

pub fn score_records<R: BufRead>(
    reader: R,
    source: &str,
    evaluator: &Evaluator,
) -> Result<BatchOutcome> {
    let parsed: jsonl::Parsed<GeneratedRecord> = jsonl::read_lines(reader, source)?;
    let records = parsed
        .items
        .iter()
        .map(|record| score_record(record, evaluator))
        .collect::<Vec<_>>();
    info!(
        scored = records.len(),
        skipped = parsed.skipped,
        "batch scoring finished for {source}"
    );
    Ok(BatchOutcome {
        records,
        skipped: parsed.skipped,
    })
}

pub fn score_record(record: &GeneratedRecord, evaluator: &Evaluator) -> ScoredRecord {
    let scores = evaluator.evaluate(&record.text);
    let labels = count_requirements(&record.text);
    ScoredRecord {
        strategy: record.strategy.clone(),
        config: record.config.clone(),
        response_length: record.text.chars().count(),
        fr_count: labels.functional,
        nfr_count: labels.non_functional,
        specificity_score: scores.specificity_score,
        measurability_score: scores.measurability_score,
        testability_score: scores.testability_score,
        text_sha256: sha256_hex(record.text.as_bytes()),
    }
}

pub fn write_records<W: Write>(writer: W, records: &[ScoredRecord]) -> Result<()> {
    jsonl::write_lines(writer, records)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
