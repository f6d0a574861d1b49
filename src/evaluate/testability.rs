use super::catalog::TestabilityTiers;
use super::segment::Sentence;

// Strong verbs take precedence; the two tiers never add up within a sentence.
pub fn sentence_credit(sentence: &Sentence, tiers: &TestabilityTiers) -> f64 {
    let text = sentence.as_str();
    if tiers.strong.any_match(text) {
        tiers.strong.weight
    } else if tiers.action.any_match(text) {
        tiers.action.weight
    } else {
        0.0
    }
}

pub fn testability_percentage(sentences: &[Sentence], tiers: &TestabilityTiers) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let testable: f64 = sentences
        .iter()
        .map(|sentence| sentence_credit(sentence, tiers))
        .sum();
    testable / sentences.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::catalog::Catalog;
    use crate::evaluate::segment::segment;

    #[test]
    fn strong_and_action_verbs_are_mutually_exclusive() {
        let catalog = Catalog::new();
        let sentences = segment("verify and store every record");
        assert_eq!(sentence_credit(&sentences[0], &catalog.testability), 1.0);
    }

    #[test]
    fn action_verbs_alone_earn_partial_credit() {
        let catalog = Catalog::new();
        let sentences = segment("the service will send and receive messages");
        assert_eq!(sentence_credit(&sentences[0], &catalog.testability), 0.7);
    }

    #[test]
    fn verbs_match_whole_words_only() {
        let catalog = Catalog::new();
        let sentences = segment("the tests are testing logic");
        assert_eq!(sentence_credit(&sentences[0], &catalog.testability), 0.0);
    }

    #[test]
    fn percentage_averages_credit_over_sentences() {
        let catalog = Catalog::new();
        let sentences = segment("audit all access. display totals. be pleasant. be calm.");
        let percentage = testability_percentage(&sentences, &catalog.testability);
        assert!((percentage - 42.5).abs() < 1e-9);
    }
}
