//! Core configuration and result types.
//!
//! [`StudyConfig`] carries the tuning knobs for every pipeline stage.
//! [`StudyAids`] is the single immutable result value produced by a full
//! pipeline run — stages never mutate shared output state.

use serde::{Deserialize, Serialize};

/// Configuration shared by all pipeline stages.
#[derive(Debug, Clone)]
pub struct StudyConfig {
    /// Number of top-ranked key terms to retain.
    pub top_terms: usize,
    /// Minimum token length for a word to qualify as a term candidate.
    /// Tokens of length below this are excluded from unigram and n-gram maps.
    pub min_token_len: usize,
    /// Score weight applied to each trigram occurrence.
    pub trigram_weight: u32,
    /// Fraction of sentences selected into the summary.
    pub summary_ratio: f64,
    /// Minimum number of sentences in a scored summary.
    pub min_summary_sentences: usize,
    /// Maximum number of multiple-choice questions to generate.
    pub max_mcq: usize,
    /// Number of leading key terms considered for Q&A pairs.
    pub max_qa_terms: usize,
    /// Sentences shorter than this terminate a pseudo-paragraph.
    pub min_paragraph_sentence_len: usize,
    /// Stopword language passed to the stopword filter.
    pub language: String,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            top_terms: 20,
            min_token_len: 4,
            trigram_weight: 3,
            summary_ratio: 0.25,
            min_summary_sentences: 3,
            max_mcq: 10,
            max_qa_terms: 8,
            min_paragraph_sentence_len: 20,
            language: "en".to_string(),
        }
    }
}

impl StudyConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of key terms to retain.
    pub fn with_top_terms(mut self, top_terms: usize) -> Self {
        self.top_terms = top_terms;
        self
    }

    /// Set the summary selection ratio (clamped to 0..=1).
    pub fn with_summary_ratio(mut self, ratio: f64) -> Self {
        self.summary_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Set the maximum number of MCQ items.
    pub fn with_max_mcq(mut self, max_mcq: usize) -> Self {
        self.max_mcq = max_mcq;
        self
    }

    /// Set the number of leading key terms considered for Q&A.
    pub fn with_max_qa_terms(mut self, max_qa_terms: usize) -> Self {
        self.max_qa_terms = max_qa_terms;
        self
    }

    /// Set the stopword language.
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }
}

/// A multiple-choice question with exactly four options.
///
/// Invariant: `options[correct_answer]` equals the pre-shuffle correct text
/// (the trimmed target sentence) for every generated item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McqItem {
    /// Sequential id, starting at 1 in term-processing order.
    pub id: usize,
    /// Question text.
    pub question: String,
    /// Four options in shuffled order.
    pub options: Vec<String>,
    /// Index of the correct option after shuffling.
    pub correct_answer: usize,
    /// Surrounding context (previous + target + next sentence when available).
    /// Stored for review views; not rendered in the question text.
    pub context: String,
}

/// A question/answer pair backed by a pseudo-paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QnaItem {
    /// Sequential id across term-based and generic items.
    pub id: usize,
    /// Question text.
    pub question: String,
    /// A paragraph's concatenated sentences.
    pub answer: String,
}

/// Immutable result of a full pipeline run.
///
/// Constructed once after all stages complete; recomputed from scratch on
/// every new document, with no cross-document state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyAids {
    /// Ranked key terms, descending score order.
    pub key_terms: Vec<String>,
    /// Extractive summary in original sentence order.
    pub summary: String,
    /// Multiple-choice questions.
    pub mcqs: Vec<McqItem>,
    /// Question/answer pairs.
    pub qna: Vec<QnaItem>,
}

impl StudyAids {
    /// True when every output is empty (e.g. an empty or trivial document).
    pub fn is_empty(&self) -> bool {
        self.key_terms.is_empty()
            && self.summary.is_empty()
            && self.mcqs.is_empty()
            && self.qna.is_empty()
    }
}
