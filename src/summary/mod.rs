//! Summarization components
//!
//! Provides extractive summarization using positional and key-term-density
//! sentence scoring, reassembled in original document order.

pub mod selector;

pub use selector::{summarize, SentenceSelector};
