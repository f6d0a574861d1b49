use crate::types::scoring::RequirementCounts;
use regex::Regex;
use std::sync::LazyLock;

static FR_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bFR-\d+:").expect("FR label pattern must compile"));
static NFR_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bNFR-\d+:").expect("NFR label pattern must compile"));

pub fn count_requirements(text: &str) -> RequirementCounts {
    RequirementCounts {
        functional: FR_LABEL.find_iter(text).count(),
        non_functional: NFR_LABEL.find_iter(text).count(),
    }
}
