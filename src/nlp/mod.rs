//! Text preparation components
//!
//! This module provides stopword filtering and sentence/paragraph
//! segmentation for the study-aid pipeline.

pub mod segment;
pub mod stopwords;

pub use segment::{group_paragraphs, split_sentences, Paragraph};
pub use stopwords::StopwordFilter;
