//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::types::{McqItem, QnaItem};

/// Stage name: key-term extraction.
pub const STAGE_TERMS: &str = "terms";
/// Stage name: extractive summarization.
pub const STAGE_SUMMARY: &str = "summary";
/// Stage name: multiple-choice question synthesis.
pub const STAGE_MCQ: &str = "mcq";
/// Stage name: question/answer pair synthesis.
pub const STAGE_QNA: &str = "qna";

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time since `start`.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Metrics reported at a stage boundary.
#[derive(Debug, Clone, Copy)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    /// Report with timing only.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach the number of items the stage produced.
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    /// Stage wall-clock time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Items produced, when the stage counts its output.
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Callbacks invoked by the pipeline at stage boundaries.
///
/// All methods have no-op defaults; implement only what you need.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}
    /// A stage finished; `report` carries timing and output counts.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    /// Key terms were extracted.
    fn on_terms(&mut self, _terms: &[String]) {}
    /// The summary was assembled.
    fn on_summary(&mut self, _summary: &str) {}
    /// MCQ items were built.
    fn on_mcqs(&mut self, _items: &[McqItem]) {}
    /// Q&A items were built.
    fn on_qna(&mut self, _items: &[QnaItem]) {}
}

/// Observer that ignores everything — zero-overhead execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per stage, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded reports in stage execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
