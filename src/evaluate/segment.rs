use regex::Regex;
use std::sync::LazyLock;

static TERMINATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("terminator pattern must compile"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence(String);

impl Sentence {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn segment(text: &str) -> Vec<Sentence> {
    let lowered = text.to_lowercase();
    TERMINATORS
        .split(&lowered)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| Sentence(fragment.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(Sentence::as_str).collect()
    }

    #[test]
    fn segment_splits_on_terminator_runs() {
        let sentences = segment("First one... Second one?! Third");
        assert_eq!(texts(&sentences), vec!["first one", "second one", "third"]);
    }

    #[test]
    fn segment_lowercases_and_trims() {
        let sentences = segment("  The System SHALL log.\n\n  It MUST retry!  ");
        assert_eq!(texts(&sentences), vec!["the system shall log", "it must retry"]);
    }

    #[test]
    fn segment_drops_empty_fragments() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
        assert!(segment(".  .  !").is_empty());
    }

    #[test]
    fn decimal_points_split_sentences() {
        let sentences = segment("uptime of 99.9% is required");
        assert_eq!(texts(&sentences), vec!["uptime of 99", "9% is required"]);
    }
}
