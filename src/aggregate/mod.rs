pub mod discover;

use crate::error::Result;
use crate::jsonl;
use crate::types::config::AggregateSettings;
use crate::types::report::{AggregateSummary, GroupAverage, ScoredRecord};
use chrono::Utc;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};

pub fn collect(path: &Path, settings: &AggregateSettings) -> Result<AggregateSummary> {
    let files = discover::result_files(path, &settings.extension)?;
    let mut records = Vec::new();
    let mut skipped = 0;

    for file in &files {
        let source = file.display().to_string();
        let handle = match File::open(file) {
            Ok(handle) => handle,
            Err(err) => {
                warn!("skipping unreadable file {source}: {err}");
                skipped += 1;
                continue;
            }
        };
        match jsonl::read_lines::<ScoredRecord, _>(BufReader::new(handle), &source) {
            Ok(parsed) => {
                records.extend(parsed.items);
                skipped += parsed.skipped;
            }
            Err(err) => {
                warn!("skipping {source}: {err}");
                skipped += 1;
            }
        }
    }

    let groups = average_groups(&records, settings);
    info!(
        files = files.len(),
        records = records.len(),
        groups = groups.len(),
        skipped,
        "aggregation finished"
    );

    Ok(AggregateSummary {
        generated_at: Utc::now().to_rfc3339(),
        files: files.len(),
        records: records.len(),
        skipped,
        groups,
    })
}

#[derive(Debug, Default)]
struct Totals {
    samples: usize,
    fr_count: f64,
    nfr_count: f64,
    specificity: f64,
    measurability: f64,
    testability: f64,
    response_length: f64,
}

impl Totals {
    fn add(&mut self, record: &ScoredRecord) {
        self.samples += 1;
        self.fr_count += record.fr_count as f64;
        self.nfr_count += record.nfr_count as f64;
        self.specificity += f64::from(record.specificity_score);
        self.measurability += f64::from(record.measurability_score);
        self.testability += f64::from(record.testability_score);
        self.response_length += record.response_length as f64;
    }

    fn average(&self, strategy: &str, config: &str) -> GroupAverage {
        let n = self.samples as f64;
        GroupAverage {
            strategy: strategy.to_string(),
            config: config.to_string(),
            samples: self.samples,
            avg_fr_count: self.fr_count / n,
            avg_nfr_count: self.nfr_count / n,
            avg_specificity: self.specificity / n,
            avg_measurability: self.measurability / n,
            avg_testability: self.testability / n,
            avg_response_length: self.response_length / n,
        }
    }
}

// Means per (strategy, config), ordered by the configured strategy then
// config order. Unlisted names sort last in first-seen order.
pub fn average_groups(
    records: &[ScoredRecord],
    settings: &AggregateSettings,
) -> Vec<GroupAverage> {
    let mut order: Vec<(&str, &str)> = Vec::new();
    let mut totals: HashMap<(&str, &str), Totals> = HashMap::new();
    for record in records {
        let key = (record.strategy.as_str(), record.config.as_str());
        totals
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Totals::default()
            })
            .add(record);
    }

    order.sort_by_key(|&(strategy, config)| {
        (
            rank(&settings.strategy_order, strategy),
            rank(&settings.config_order, config),
        )
    });

    order
        .into_iter()
        .filter_map(|key| {
            totals
                .get(&key)
                .map(|group| group.average(key.0, key.1))
        })
        .collect()
}

fn rank(list: &[String], name: &str) -> usize {
    list.iter()
        .position(|entry| entry == name)
        .unwrap_or(list.len())
}
