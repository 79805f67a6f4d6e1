//! Key-term extraction components
//!
//! This module provides weighted n-gram frequency ranking for deriving
//! key terms from raw document text.

pub mod extractor;

pub use extractor::{extract_key_terms, TermExtractor};
