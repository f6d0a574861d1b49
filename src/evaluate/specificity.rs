use super::catalog::SpecificityTiers;
use super::segment::Sentence;

pub fn sentence_weight(sentence: &Sentence, tiers: &SpecificityTiers) -> f64 {
    let text = sentence.as_str();
    [&tiers.high, &tiers.medium, &tiers.low]
        .iter()
        .map(|tier| tier.matches(text) as f64 * tier.weight)
        .sum()
}

// Can exceed 100 when sentences carry several terms.
pub fn specificity_percentage(sentences: &[Sentence], tiers: &SpecificityTiers) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: f64 = sentences
        .iter()
        .map(|sentence| sentence_weight(sentence, tiers))
        .sum();
    total / sentences.len() as f64 * 100.0
}
