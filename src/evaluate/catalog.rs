use regex::Regex;

pub const HIGH_VALUE_TERMS: &[&str] = &[
    "exactly",
    "precisely",
    "specifically",
    "equal to",
    "must be",
    "within",
    "between",
    "no more than",
    "no less than",
];

pub const MEDIUM_VALUE_TERMS: &[&str] = &[
    "at least",
    "at most",
    "maximum",
    "minimum",
    "less than",
    "greater than",
    "up to",
    "from",
    "to",
    "range",
];

pub const LOW_VALUE_TERMS: &[&str] = &[
    "during",
    "if",
    "unless",
    "when",
    "while",
    "only",
    "about",
    "approximately",
    "around",
    "estimated",
];

pub const STRONG_VERBS: &[&str] = &[
    "validate",
    "verify",
    "test",
    "measure",
    "confirm",
    "demonstrate",
    "check",
    "assert",
    "prove",
    "audit",
];

pub const ACTION_VERBS: &[&str] = &[
    "display",
    "calculate",
    "store",
    "retrieve",
    "send",
    "receive",
    "generate",
    "create",
    "update",
    "process",
    "execute",
    "run",
    "perform",
    "log",
    "monitor",
];

// Evaluated in order; the first hit decides a sentence. Not word-anchored,
// so `2 seconds` satisfies the `second` alternative.
pub const MEASURABILITY_PATTERNS: &[&str] = &[
    r"\d+\s*(?:second|minute|hour|day|percent|%)",
    r"\d+\s*(?:kb|mb|gb|tb|byte|bytes)",
    r"\d+\s*(?:kg|g|m|cm|km|meter|meters)",
    r"\d+\s*(?:hz|mhz|ghz)",
    r"(?:response time|latency)\s*(?:of|under|less than)?\s*\d+",
    r"(?:accuracy|precision|error rate)\s*(?:of|at)?\s*\d+(?:\.\d+)?\s*%",
    r"(?:availability|uptime)\s*(?:of|at)?\s*\d+(?:\.\d+)?\s*%",
    r"(?:capacity|throughput|bandwidth)\s*(?:of|at)?\s*\d+",
];

#[derive(Debug, Clone)]
pub struct TermTier {
    pub weight: f64,
    terms: Vec<Regex>,
}

impl TermTier {
    pub fn new(weight: f64, terms: &[&str]) -> Self {
        Self {
            weight,
            terms: terms.iter().map(|term| word_regex(term)).collect(),
        }
    }

    // No per-term cap: a term repeated in a sentence counts each time.
    pub fn matches(&self, sentence: &str) -> usize {
        self.terms
            .iter()
            .map(|term| term.find_iter(sentence).count())
            .sum()
    }

    pub fn any_match(&self, sentence: &str) -> bool {
        self.terms.iter().any(|term| term.is_match(sentence))
    }
}

#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<Regex>,
}

impl PatternCatalog {
    pub fn new(sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .map(|source| {
                Regex::new(source).expect("built-in measurability pattern must compile")
            })
            .collect();
        Self { patterns }
    }

    pub fn first_match(&self, sentence: &str) -> Option<usize> {
        self.patterns
            .iter()
            .position(|pattern| pattern.is_match(sentence))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SpecificityTiers {
    pub high: TermTier,
    pub medium: TermTier,
    pub low: TermTier,
}

#[derive(Debug, Clone)]
pub struct TestabilityTiers {
    pub strong: TermTier,
    pub action: TermTier,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub specificity: SpecificityTiers,
    pub measurability: PatternCatalog,
    pub testability: TestabilityTiers,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            specificity: SpecificityTiers {
                high: TermTier::new(1.0, HIGH_VALUE_TERMS),
                medium: TermTier::new(0.6, MEDIUM_VALUE_TERMS),
                low: TermTier::new(0.3, LOW_VALUE_TERMS),
            },
            measurability: PatternCatalog::new(MEASURABILITY_PATTERNS),
            testability: TestabilityTiers {
                strong: TermTier::new(1.0, STRONG_VERBS),
                action: TermTier::new(0.7, ACTION_VERBS),
            },
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn word_regex(term: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(term)))
        .expect("escaped vocabulary term must compile")
}
