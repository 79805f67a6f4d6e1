//! Weighted n-gram term extraction
//!
//! Ranks unigrams, bigrams, and trigrams by frequency, excluding stopwords
//! and short tokens. Trigram occurrences are weighted triple to favor
//! multi-word phrases over raw word counts.

use rustc_hash::FxHashMap;

use crate::nlp::StopwordFilter;
use crate::types::StudyConfig;

/// Frequency-based key-term extractor
#[derive(Debug, Clone)]
pub struct TermExtractor {
    filter: StopwordFilter,
}

impl Default for TermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TermExtractor {
    /// Create an extractor with the default English stopword filter
    pub fn new() -> Self {
        Self {
            filter: StopwordFilter::default(),
        }
    }

    /// Create an extractor for the language named in the config
    pub fn for_config(cfg: &StudyConfig) -> Self {
        Self {
            filter: StopwordFilter::new(&cfg.language),
        }
    }

    /// Create an extractor with a custom stopword filter
    pub fn with_filter(filter: StopwordFilter) -> Self {
        Self { filter }
    }

    /// Extract ranked key terms from raw text.
    ///
    /// Returns at most `cfg.top_terms` term strings in descending score
    /// order (scores are dropped). Texts with fewer than four qualifying
    /// words yield an empty or near-empty list; downstream stages handle
    /// zero key terms by producing empty outputs.
    pub fn extract(&self, text: &str, cfg: &StudyConfig) -> Vec<String> {
        let tokens = tokenize(text);
        let mut scores: FxHashMap<String, u32> = FxHashMap::default();

        // Unigrams
        for token in &tokens {
            if self.qualifies(token, cfg) {
                *scores.entry(token.clone()).or_insert(0) += 1;
            }
        }

        // Bigrams: both tokens must qualify. A repeated word is not a phrase.
        for pair in tokens.windows(2) {
            if self.qualifies(&pair[0], cfg)
                && self.qualifies(&pair[1], cfg)
                && pair[0] != pair[1]
            {
                let key = format!("{} {}", pair[0], pair[1]);
                *scores.entry(key).or_insert(0) += 1;
            }
        }

        // Trigrams: first and third must qualify; the middle token may be a
        // function word ("freedom of speech"). Weighted triple.
        for triple in tokens.windows(3) {
            if self.qualifies(&triple[0], cfg)
                && self.qualifies(&triple[2], cfg)
                && !(triple[0] == triple[1] && triple[1] == triple[2])
            {
                let key = format!("{} {} {}", triple[0], triple[1], triple[2]);
                *scores.entry(key).or_insert(0) += cfg.trigram_weight;
            }
        }

        let mut ranked: Vec<(String, u32)> = scores.into_iter().collect();
        // Descending score; term string breaks ties so ranking is deterministic.
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(cfg.top_terms);
        ranked.into_iter().map(|(term, _)| term).collect()
    }

    fn qualifies(&self, token: &str, cfg: &StudyConfig) -> bool {
        token.chars().count() >= cfg.min_token_len && !self.filter.is_stopword(token)
    }
}

/// Lowercase, strip non-word/non-space characters, and split on whitespace.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Convenience function to extract key terms with default settings
pub fn extract_key_terms(text: &str, cfg: &StudyConfig) -> Vec<String> {
    TermExtractor::for_config(cfg).extract(text, cfg)
}
