//! Sentence splitting and pseudo-paragraph grouping
//!
//! Sentences are substrings split on `.`, `!`, `?`, trimmed, with empty
//! pieces discarded; original document order is preserved (index = position).
//!
//! Pseudo-paragraphs are heuristic groupings of consecutive sentences used
//! only as Q&A answer context, not true document structure. A sentence that
//! contains a line break or falls below the minimum length terminates the
//! paragraph it belongs to.

/// A group of consecutive sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Sentences in document order.
    pub sentences: Vec<String>,
}

impl Paragraph {
    /// Concatenate the paragraph's sentences into answer text.
    pub fn text(&self) -> String {
        join_sentences(&self.sentences)
    }

    /// True when any sentence contains `needle` case-insensitively.
    pub fn contains_term(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.sentences
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
    }
}

/// Split text into trimmed, non-empty sentences on `.`, `!`, `?`.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join sentences with `". "` and a trailing period.
pub fn join_sentences(sentences: &[String]) -> String {
    if sentences.is_empty() {
        return String::new();
    }
    format!("{}.", sentences.join(". "))
}

/// Group sentences into pseudo-paragraphs.
///
/// A paragraph breaks after any sentence that contains a line break or is
/// shorter than `min_sentence_len` characters; the breaking sentence stays
/// in the paragraph it closes. Empty paragraphs are never emitted.
pub fn group_paragraphs(sentences: &[String], min_sentence_len: usize) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for sentence in sentences {
        let breaks = sentence.contains('\n') || sentence.chars().count() < min_sentence_len;
        current.push(sentence.clone());
        if breaks {
            paragraphs.push(Paragraph {
                sentences: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        paragraphs.push(Paragraph { sentences: current });
    }

    paragraphs
}
