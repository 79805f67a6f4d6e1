//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! The [`Pipeline`] struct holds a statically-composed set of analysis
//! stages. Calling [`Pipeline::run`] executes them in order — terms,
//! summary, MCQ, Q&A — threading the text and key terms between stages and
//! notifying an optional [`PipelineObserver`] at each boundary. The result
//! is a single immutable [`StudyAids`] value built after every stage has
//! completed; stages never mutate shared output state.
//!
//! # Static dispatch
//!
//! `Pipeline` is generic over all stage types, so the compiler monomorphizes
//! each combination into a unique concrete type. The default stages are
//! zero-sized apart from the term extractor's stopword set.

use rand::RngCore;

use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_MCQ, STAGE_QNA, STAGE_SUMMARY, STAGE_TERMS,
};
use crate::pipeline::traits::{McqStage, QnaStage, SummaryStage, TermStage};
use crate::questions::{McqGenerator, QnaGenerator};
use crate::summary::SentenceSelector;
use crate::terms::TermExtractor;
use crate::types::{StudyAids, StudyConfig};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline — statically-composed stage container
// ============================================================================

/// A pipeline composed of concrete stage implementations.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `T` | [`TermStage`] | [`TermExtractor`] |
/// | `S` | [`SummaryStage`] | [`SentenceSelector`] |
/// | `M` | [`McqStage`] | [`McqGenerator`] |
/// | `Q` | [`QnaStage`] | [`QnaGenerator`] |
#[derive(Debug, Clone)]
pub struct Pipeline<T, S, M, Q> {
    pub terms: T,
    pub summary: S,
    pub mcq: M,
    pub qna: Q,
}

/// Type alias for the default study-aid pipeline.
pub type StudyPipeline = Pipeline<TermExtractor, SentenceSelector, McqGenerator, QnaGenerator>;

impl StudyPipeline {
    /// Build the standard pipeline with all default stages.
    pub fn standard() -> Self {
        Pipeline {
            terms: TermExtractor::new(),
            summary: SentenceSelector::new(),
            mcq: McqGenerator::new(),
            qna: QnaGenerator::new(),
        }
    }

    /// Build the standard pipeline with a stopword filter matching the
    /// config's language.
    pub fn for_config(cfg: &StudyConfig) -> Self {
        Pipeline {
            terms: TermExtractor::for_config(cfg),
            summary: SentenceSelector::new(),
            mcq: McqGenerator::new(),
            qna: QnaGenerator::new(),
        }
    }
}

// ============================================================================
// Pipeline::run — execute stages in order
// ============================================================================

impl<T, S, M, Q> Pipeline<T, S, M, Q>
where
    T: TermStage,
    S: SummaryStage,
    M: McqStage,
    Q: QnaStage,
{
    /// Execute the pipeline, producing a [`StudyAids`].
    ///
    /// Stages run synchronously and strictly in order:
    /// 1. Extract key terms
    /// 2. Summarize
    /// 3. Build MCQs (consumes the injected `rng` for option shuffling)
    /// 4. Build Q&A pairs
    ///
    /// The summary, MCQ, and Q&A stages each consume the text and key terms
    /// independently. The `observer` receives callbacks at every stage
    /// boundary; pass [`NoopObserver`](super::observer::NoopObserver) for
    /// zero-overhead execution.
    pub fn run(
        &self,
        text: &str,
        cfg: &StudyConfig,
        rng: &mut dyn RngCore,
        observer: &mut impl PipelineObserver,
    ) -> StudyAids {
        // Stage 0: Key terms
        trace_stage!(STAGE_TERMS);
        observer.on_stage_start(STAGE_TERMS);
        let clock = StageClock::start();
        let key_terms = self.terms.extract_terms(text, cfg);
        let report = StageReport::new(clock.elapsed()).with_items(key_terms.len());
        observer.on_stage_end(STAGE_TERMS, &report);
        observer.on_terms(&key_terms);

        // Stage 1: Summary
        trace_stage!(STAGE_SUMMARY);
        observer.on_stage_start(STAGE_SUMMARY);
        let clock = StageClock::start();
        let summary = self.summary.summarize(text, &key_terms, cfg);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_SUMMARY, &report);
        observer.on_summary(&summary);

        // Stage 2: MCQs
        trace_stage!(STAGE_MCQ);
        observer.on_stage_start(STAGE_MCQ);
        let clock = StageClock::start();
        let mcqs = self.mcq.build_mcqs(text, &key_terms, cfg, rng);
        let report = StageReport::new(clock.elapsed()).with_items(mcqs.len());
        observer.on_stage_end(STAGE_MCQ, &report);
        observer.on_mcqs(&mcqs);

        // Stage 3: Q&A
        trace_stage!(STAGE_QNA);
        observer.on_stage_start(STAGE_QNA);
        let clock = StageClock::start();
        let qna = self.qna.build_qna(text, &key_terms, cfg);
        let report = StageReport::new(clock.elapsed()).with_items(qna.len());
        observer.on_stage_end(STAGE_QNA, &report);
        observer.on_qna(&qna);

        StudyAids {
            key_terms,
            summary,
            mcqs,
            qna,
        }
    }
}

// ============================================================================
// PipelineBuilder — fluent construction with custom stages
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom stages.
///
/// Starts from the standard configuration and allows overriding individual
/// stages.
///
/// ```
/// # use studygen::pipeline::runner::PipelineBuilder;
/// # use studygen::terms::TermExtractor;
/// # use studygen::nlp::StopwordFilter;
/// let pipeline = PipelineBuilder::new()
///     .terms(TermExtractor::with_filter(StopwordFilter::new("de")))
///     .build();
/// ```
pub struct PipelineBuilder<
    T = TermExtractor,
    S = SentenceSelector,
    M = McqGenerator,
    Q = QnaGenerator,
> {
    terms: T,
    summary: S,
    mcq: M,
    qna: Q,
}

impl PipelineBuilder {
    /// Start building from the standard stages.
    pub fn new() -> Self {
        PipelineBuilder {
            terms: TermExtractor::new(),
            summary: SentenceSelector::new(),
            mcq: McqGenerator::new(),
            qna: QnaGenerator::new(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, M, Q> PipelineBuilder<T, S, M, Q> {
    /// Override the term extraction stage.
    pub fn terms<T2: TermStage>(self, t: T2) -> PipelineBuilder<T2, S, M, Q> {
        PipelineBuilder {
            terms: t,
            summary: self.summary,
            mcq: self.mcq,
            qna: self.qna,
        }
    }

    /// Override the summarization stage.
    pub fn summary<S2: SummaryStage>(self, s: S2) -> PipelineBuilder<T, S2, M, Q> {
        PipelineBuilder {
            terms: self.terms,
            summary: s,
            mcq: self.mcq,
            qna: self.qna,
        }
    }

    /// Override the MCQ stage.
    pub fn mcq<M2: McqStage>(self, m: M2) -> PipelineBuilder<T, S, M2, Q> {
        PipelineBuilder {
            terms: self.terms,
            summary: self.summary,
            mcq: m,
            qna: self.qna,
        }
    }

    /// Override the Q&A stage.
    pub fn qna<Q2: QnaStage>(self, q: Q2) -> PipelineBuilder<T, S, M, Q2> {
        PipelineBuilder {
            terms: self.terms,
            summary: self.summary,
            mcq: self.mcq,
            qna: q,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<T, S, M, Q> {
        Pipeline {
            terms: self.terms,
            summary: self.summary,
            mcq: self.mcq,
            qna: self.qna,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::observer::{NoopObserver, StageTimingObserver};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TEXT: &str = "Mammals are warm blooded animals that nurse their young. \
        Cats are mammals with sharp retractable claws. \
        Dogs are mammals known for loyalty and pack behavior. \
        Mammals regulate their own body temperature internally. \
        Most mammals give birth to live offspring instead of eggs. \
        The fur of mammals provides insulation in cold climates. \
        Whales are marine mammals that breathe air through lungs.";

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_standard_pipeline_constructs() {
        let _pipeline = StudyPipeline::standard();
        let _pipeline = PipelineBuilder::new().build();
    }

    #[test]
    fn test_run_produces_all_outputs() {
        let pipeline = StudyPipeline::standard();
        let cfg = StudyConfig::default();
        let aids = pipeline.run(TEXT, &cfg, &mut rng(), &mut NoopObserver);

        assert!(aids.key_terms.contains(&"mammals".to_string()));
        assert!(!aids.summary.is_empty());
        assert!(!aids.mcqs.is_empty());
        assert!(!aids.qna.is_empty());
    }

    #[test]
    fn test_run_empty_text_yields_empty_aids() {
        let pipeline = StudyPipeline::standard();
        let cfg = StudyConfig::default();
        let aids = pipeline.run("", &cfg, &mut rng(), &mut NoopObserver);

        assert!(aids.is_empty());
    }

    #[test]
    fn test_observer_sees_all_four_stages_in_order() {
        let pipeline = StudyPipeline::standard();
        let cfg = StudyConfig::default();
        let mut obs = StageTimingObserver::new();

        pipeline.run(TEXT, &cfg, &mut rng(), &mut obs);

        let names: Vec<&str> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![STAGE_TERMS, STAGE_SUMMARY, STAGE_MCQ, STAGE_QNA]
        );
    }

    #[test]
    fn test_observer_receives_item_counts() {
        let pipeline = StudyPipeline::standard();
        let cfg = StudyConfig::default();
        let mut obs = StageTimingObserver::new();

        let aids = pipeline.run(TEXT, &cfg, &mut rng(), &mut obs);

        let (_, terms_report) = obs.reports()[0];
        assert_eq!(terms_report.items(), Some(aids.key_terms.len()));
        let (_, mcq_report) = obs.reports()[2];
        assert_eq!(mcq_report.items(), Some(aids.mcqs.len()));
    }

    #[test]
    fn test_fixed_seed_is_idempotent() {
        let pipeline = StudyPipeline::standard();
        let cfg = StudyConfig::default();

        let a = pipeline.run(TEXT, &cfg, &mut rng(), &mut NoopObserver);
        let b = pipeline.run(TEXT, &cfg, &mut rng(), &mut NoopObserver);

        assert_eq!(a, b);
    }

    #[test]
    fn test_correct_text_stable_across_shuffles() {
        let pipeline = StudyPipeline::standard();
        let cfg = StudyConfig::default();

        let baseline = pipeline.run(TEXT, &cfg, &mut rng(), &mut NoopObserver);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let aids = pipeline.run(TEXT, &cfg, &mut rng, &mut NoopObserver);
            assert_eq!(aids.summary, baseline.summary);
            assert_eq!(aids.qna, baseline.qna);
            for (item, base) in aids.mcqs.iter().zip(&baseline.mcqs) {
                // Option order may differ; the correct text never does.
                assert_eq!(
                    item.options[item.correct_answer],
                    base.options[base.correct_answer]
                );
            }
        }
    }

    #[test]
    fn test_builder_with_custom_stage() {
        use crate::pipeline::traits::TermStage;

        struct FixedTerms;
        impl TermStage for FixedTerms {
            fn extract_terms(&self, _text: &str, _cfg: &StudyConfig) -> Vec<String> {
                vec!["mammals".to_string()]
            }
        }

        let pipeline = PipelineBuilder::new().terms(FixedTerms).build();
        let cfg = StudyConfig::default();
        let aids = pipeline.run(TEXT, &cfg, &mut rng(), &mut NoopObserver);

        assert_eq!(aids.key_terms, vec!["mammals".to_string()]);
        assert_eq!(aids.mcqs.len(), 1);
    }

    /// Observer that captures artifact callbacks.
    #[derive(Default)]
    struct ArtifactObserver {
        saw_terms: bool,
        saw_summary: bool,
        saw_mcqs: bool,
        saw_qna: bool,
    }

    impl PipelineObserver for ArtifactObserver {
        fn on_terms(&mut self, _terms: &[String]) {
            self.saw_terms = true;
        }
        fn on_summary(&mut self, _summary: &str) {
            self.saw_summary = true;
        }
        fn on_mcqs(&mut self, _items: &[crate::types::McqItem]) {
            self.saw_mcqs = true;
        }
        fn on_qna(&mut self, _items: &[crate::types::QnaItem]) {
            self.saw_qna = true;
        }
    }

    #[test]
    fn test_all_artifact_callbacks_fire() {
        let pipeline = StudyPipeline::standard();
        let cfg = StudyConfig::default();
        let mut obs = ArtifactObserver::default();

        pipeline.run(TEXT, &cfg, &mut rng(), &mut obs);

        assert!(obs.saw_terms, "on_terms not called");
        assert!(obs.saw_summary, "on_summary not called");
        assert!(obs.saw_mcqs, "on_mcqs not called");
        assert!(obs.saw_qna, "on_qna not called");
    }
}
