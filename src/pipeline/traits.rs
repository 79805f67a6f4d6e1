//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; the shipped generators double as the default
//! implementations, so a standard pipeline carries no extra state.
//!
//! Every stage must tolerate empty inputs: zero key terms, an empty text, or
//! both yield empty outputs rather than errors.

use rand::RngCore;

use crate::questions::{McqGenerator, QnaGenerator};
use crate::summary::SentenceSelector;
use crate::terms::TermExtractor;
use crate::types::{McqItem, QnaItem, StudyConfig};

/// Key-term extraction stage (stage 0).
///
/// # Contract
///
/// - **Input**: raw document text.
/// - **Output**: ranked key terms, descending score, at most
///   `cfg.top_terms`, deterministic for identical input.
pub trait TermStage {
    /// Extract ranked key terms from raw text.
    fn extract_terms(&self, text: &str, cfg: &StudyConfig) -> Vec<String>;
}

impl TermStage for TermExtractor {
    fn extract_terms(&self, text: &str, cfg: &StudyConfig) -> Vec<String> {
        self.extract(text, cfg)
    }
}

/// Extractive summarization stage (stage 1).
pub trait SummaryStage {
    /// Produce a summary from text and previously extracted key terms.
    fn summarize(&self, text: &str, key_terms: &[String], cfg: &StudyConfig) -> String;
}

impl SummaryStage for SentenceSelector {
    fn summarize(&self, text: &str, key_terms: &[String], cfg: &StudyConfig) -> String {
        SentenceSelector::summarize(self, text, key_terms, cfg)
    }
}

/// Multiple-choice question stage (stage 2).
///
/// Takes `&mut dyn RngCore` so callers inject the random source; tests pass
/// a seeded `StdRng` to pin the option shuffle.
pub trait McqStage {
    /// Build MCQ items from text and key terms.
    fn build_mcqs(
        &self,
        text: &str,
        key_terms: &[String],
        cfg: &StudyConfig,
        rng: &mut dyn RngCore,
    ) -> Vec<McqItem>;
}

impl McqStage for McqGenerator {
    fn build_mcqs(
        &self,
        text: &str,
        key_terms: &[String],
        cfg: &StudyConfig,
        rng: &mut dyn RngCore,
    ) -> Vec<McqItem> {
        self.generate(text, key_terms, cfg, rng)
    }
}

/// Question/answer pair stage (stage 3).
pub trait QnaStage {
    /// Build Q&A items from text and key terms.
    fn build_qna(&self, text: &str, key_terms: &[String], cfg: &StudyConfig) -> Vec<QnaItem>;
}

impl QnaStage for QnaGenerator {
    fn build_qna(&self, text: &str, key_terms: &[String], cfg: &StudyConfig) -> Vec<QnaItem> {
        self.generate(text, key_terms, cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_stages_tolerate_empty_input() {
        let cfg = StudyConfig::default();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(TermExtractor::new().extract_terms("", &cfg).is_empty());
        assert!(SummaryStage::summarize(&SentenceSelector::new(), "", &[], &cfg).is_empty());
        assert!(McqGenerator::new()
            .build_mcqs("", &[], &cfg, &mut rng)
            .is_empty());
        assert!(QnaGenerator::new().build_qna("", &[], &cfg).is_empty());
    }

    /// A custom stage can replace the shipped extractor.
    #[test]
    fn test_custom_term_stage() {
        struct FixedTerms;

        impl TermStage for FixedTerms {
            fn extract_terms(&self, _text: &str, _cfg: &StudyConfig) -> Vec<String> {
                vec!["pinned".to_string()]
            }
        }

        let terms = FixedTerms.extract_terms("anything at all", &StudyConfig::default());
        assert_eq!(terms, vec!["pinned".to_string()]);
    }

    #[test]
    fn test_stage_trait_objects() {
        let term_stage: Box<dyn TermStage> = Box::new(TermExtractor::new());
        let terms = term_stage.extract_terms(
            "neurons neurons neurons fire together in patterns",
            &StudyConfig::default(),
        );
        assert!(terms.contains(&"neurons".to_string()));
    }
}
