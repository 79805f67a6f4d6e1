//! Pipeline composition and execution
//!
//! This module wires the four analysis stages (terms → summary → MCQ → Q&A)
//! into a statically-composed pipeline with observer hooks, result
//! validation, and an upload session that serializes concurrent uploads.

pub mod observer;
pub mod runner;
pub mod session;
pub mod traits;
pub mod validation;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{Pipeline, PipelineBuilder, StudyPipeline};
pub use session::{Session, UploadTicket};
