//! Multiple-choice question generation
//!
//! For each key term with a matching sentence, builds one correct option
//! (the matching sentence itself) and three templated distractors, then
//! shuffles the four options with an injected random source so tests can
//! pin the shuffle with a seeded RNG.

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::nlp::segment::split_sentences;
use crate::types::{McqItem, StudyConfig};

/// Distractor-based MCQ generator
#[derive(Debug, Clone, Copy, Default)]
pub struct McqGenerator;

impl McqGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Generate up to `cfg.max_mcq` questions.
    ///
    /// Key terms without a case-insensitive substring match in any sentence
    /// are skipped and consume no question slot, so the output count is
    /// `min(terms with matches, cfg.max_mcq)`. Ids are sequential from 1 in
    /// term-processing order.
    pub fn generate(
        &self,
        text: &str,
        key_terms: &[String],
        cfg: &StudyConfig,
        rng: &mut dyn RngCore,
    ) -> Vec<McqItem> {
        let sentences = split_sentences(text);
        let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();

        let mut items = Vec::new();
        for term in key_terms {
            if items.len() >= cfg.max_mcq {
                break;
            }
            let needle = term.to_lowercase();
            let Some(idx) = lowered.iter().position(|s| s.contains(&needle)) else {
                continue;
            };

            let target = sentences[idx].trim().to_string();
            let context = build_context(&sentences, idx);
            let question = if term.contains(' ') {
                format!("Which of the following best describes {}?", term)
            } else {
                format!("What is true about {}?", term)
            };

            let mut options = vec![
                target.clone(),
                format!("{} is not mentioned anywhere in the document.", term),
                format!("The document argues against the idea of {}.", term),
                format!("{} appears only as a minor footnote detail.", term),
            ];
            options.shuffle(rng);
            // The correct text is unique among the options, so position after
            // shuffle identifies it.
            let correct_answer = options
                .iter()
                .position(|o| *o == target)
                .unwrap_or_default();

            items.push(McqItem {
                id: items.len() + 1,
                question,
                options,
                correct_answer,
                context,
            });
        }

        items
    }
}

/// Previous + target + next sentence when available, else the target alone.
fn build_context(sentences: &[String], idx: usize) -> String {
    let start = idx.saturating_sub(1);
    let end = (idx + 2).min(sentences.len());
    sentences[start..end].join(". ")
}
