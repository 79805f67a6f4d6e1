//! Question synthesis components
//!
//! This module provides multiple-choice question generation with templated
//! distractors and paragraph-backed question/answer pairs.

pub mod mcq;
pub mod qna;

pub use mcq::McqGenerator;
pub use qna::QnaGenerator;
