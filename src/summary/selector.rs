//! Position and term-density sentence selection
//!
//! Scores each sentence by document position (openings and endings weigh
//! more) multiplied by key-term density, then selects the top quarter of
//! sentences (minimum three) and reassembles them in original order.

use crate::nlp::segment::{join_sentences, split_sentences};
use crate::types::StudyConfig;

/// A sentence with its combined selection score
#[derive(Debug, Clone)]
struct ScoredSentence {
    index: usize,
    score: f64,
}

/// Extractive sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Create a new selector
    pub fn new() -> Self {
        Self
    }

    /// Summarize `text` using previously extracted key terms.
    ///
    /// Texts of three or fewer sentences are returned whole, joined with
    /// `". "` and a trailing period, without scoring.
    pub fn summarize(&self, text: &str, key_terms: &[String], cfg: &StudyConfig) -> String {
        let sentences = split_sentences(text);
        let n = sentences.len();

        if n <= cfg.min_summary_sentences {
            return join_sentences(&sentences);
        }

        let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
        let terms: Vec<String> = key_terms.iter().map(|t| t.to_lowercase()).collect();

        let mut scored: Vec<ScoredSentence> = (0..n)
            .map(|i| ScoredSentence {
                index: i,
                score: positional_score(i, n) * (term_score(&lowered[i], &terms) + 1.0),
            })
            .collect();

        // Descending score; original index breaks ties so equal-scoring
        // sentences keep document order.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.index.cmp(&b.index))
        });

        let take = ((n as f64) * cfg.summary_ratio)
            .ceil()
            .max(cfg.min_summary_sentences as f64) as usize;
        let mut selected: Vec<usize> = scored.iter().take(take).map(|s| s.index).collect();
        selected.sort_unstable();

        let picked: Vec<String> = selected.into_iter().map(|i| sentences[i].clone()).collect();
        join_sentences(&picked)
    }
}

/// Positional weight for sentence `i` of `n`.
///
/// The first three sentences weigh 3, the first decile 2, the last fifth
/// 1.5, everything else 1.
fn positional_score(i: usize, n: usize) -> f64 {
    if i < 3 {
        3.0
    } else if (i as f64) < 0.1 * n as f64 {
        2.0
    } else if (i as f64) > 0.8 * n as f64 {
        1.5
    } else {
        1.0
    }
}

/// Number of key terms present in a lowercased sentence.
fn term_score(sentence_lower: &str, terms_lower: &[String]) -> f64 {
    terms_lower
        .iter()
        .filter(|t| sentence_lower.contains(t.as_str()))
        .count() as f64
}

/// Convenience function to summarize with a fresh selector
pub fn summarize(text: &str, key_terms: &[String], cfg: &StudyConfig) -> String {
    SentenceSelector::new().summarize(text, key_terms, cfg)
}
