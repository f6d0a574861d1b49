use super::catalog::PatternCatalog;
use super::segment::Sentence;

pub fn is_measurable(sentence: &Sentence, patterns: &PatternCatalog) -> bool {
    patterns.first_match(sentence.as_str()).is_some()
}

pub fn measurability_percentage(sentences: &[Sentence], patterns: &PatternCatalog) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let measurable = sentences
        .iter()
        .filter(|sentence| is_measurable(sentence, patterns))
        .count();
    measurable as f64 / sentences.len() as f64 * 100.0
}
