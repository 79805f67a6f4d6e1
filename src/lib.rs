//! # studygen
//!
//! Heuristic study-aid generation from uploaded documents. Given the text of
//! a plain-text, CSV, Word, or PDF upload, the pipeline derives:
//!
//! - a ranked **key-term** list (weighted n-gram frequencies),
//! - an **extractive summary** (positional × term-density sentence scoring),
//! - **multiple-choice questions** with templated distractors, and
//! - **question/answer pairs** backed by pseudo-paragraphs.
//!
//! All four outputs are recomputed in full for every document; there is no
//! cross-document state. The analysis is purely heuristic — no part-of-speech
//! tagging, no semantic similarity.
//!
//! # Quick start
//!
//! ```
//! use studygen::pipeline::{NoopObserver, StudyPipeline};
//! use studygen::types::StudyConfig;
//!
//! let pipeline = StudyPipeline::standard();
//! let cfg = StudyConfig::default();
//! let mut rng = rand::thread_rng();
//!
//! let text = "Mammals are warm blooded. Cats are mammals. Dogs are mammals too.";
//! let aids = pipeline.run(text, &cfg, &mut rng, &mut NoopObserver);
//! assert!(aids.key_terms.contains(&"mammals".to_string()));
//! ```
//!
//! For end-to-end upload handling (MIME dispatch, extraction, last-write-wins
//! upload ordering) use [`pipeline::Session`].

pub mod error;
pub mod export;
pub mod nlp;
pub mod pipeline;
pub mod questions;
pub mod source;
pub mod summary;
pub mod terms;
pub mod types;

pub use error::StudyError;
pub use pipeline::{Session, StudyPipeline};
pub use source::DocumentKind;
pub use types::{McqItem, QnaItem, StudyAids, StudyConfig};
