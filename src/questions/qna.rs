//! Question/answer pair generation
//!
//! Pairs key terms with the first pseudo-paragraph that mentions them; the
//! paragraph's concatenated sentences become the answer. Two generic
//! structural questions ("main topic", "conclusion") follow the term-based
//! items when the document is long enough.

use crate::nlp::segment::{group_paragraphs, join_sentences, split_sentences};
use crate::types::{QnaItem, StudyConfig};

/// Question templates cycled across term-based items.
const QUESTION_TEMPLATES: [&str; 4] = [
    "What does the document say about {}?",
    "How is {} described in the text?",
    "What role does {} play in the material?",
    "What information is provided about {}?",
];

/// Paragraph-backed Q&A generator
#[derive(Debug, Clone, Copy, Default)]
pub struct QnaGenerator;

impl QnaGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self
    }

    /// Generate Q&A pairs for the leading `cfg.max_qa_terms` key terms plus
    /// the generic structural items.
    ///
    /// The question template index cycles on the position among all processed
    /// terms, including terms skipped for lacking a matching paragraph; this
    /// mirrors the original generator's template variety.
    pub fn generate(&self, text: &str, key_terms: &[String], cfg: &StudyConfig) -> Vec<QnaItem> {
        let sentences = split_sentences(text);
        let paragraphs = group_paragraphs(&sentences, cfg.min_paragraph_sentence_len);

        let mut items = Vec::new();
        for (term_index, term) in key_terms.iter().take(cfg.max_qa_terms).enumerate() {
            let Some(paragraph) = paragraphs.iter().find(|p| p.contains_term(term)) else {
                continue;
            };
            let template = QUESTION_TEMPLATES[term_index % QUESTION_TEMPLATES.len()];
            items.push(QnaItem {
                id: items.len() + 1,
                question: template.replacen("{}", term, 1),
                answer: paragraph.text(),
            });
        }

        if sentences.len() > 5 {
            items.push(QnaItem {
                id: items.len() + 1,
                question: "What is the main topic of this document?".to_string(),
                answer: join_sentences(&sentences[..3]),
            });
        }
        if sentences.len() > 10 {
            let tail = &sentences[sentences.len() - 3..];
            items.push(QnaItem {
                id: items.len() + 1,
                question: "What conclusion does the document reach?".to_string(),
                answer: join_sentences(tail),
            });
        }

        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> StudyConfig {
        StudyConfig::default()
    }

    fn terms(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn long_text(n: usize) -> String {
        (0..n)
            .map(|i| format!("Sentence number {:02} discusses subject {:02}.", i, i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_term_answer_comes_from_matching_paragraph() {
        let text = "Mammals are warm blooded animals with fur. They nurse their young ones.";
        let items = QnaGenerator::new().generate(text, &terms(&["mammals"]), &cfg());

        assert_eq!(items.len(), 1);
        assert_eq!(
            items[0].answer,
            "Mammals are warm blooded animals with fur. They nurse their young ones."
        );
    }

    #[test]
    fn test_unmatched_term_silently_skipped() {
        let text = "Mammals are warm blooded animals with fur everywhere.";
        let items = QnaGenerator::new().generate(text, &terms(&["glaciers", "mammals"]), &cfg());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_template_cycles_on_term_position_including_skipped() {
        // "glaciers" (index 0) is skipped; "mammals" sits at term index 1, so
        // it gets the second template even though it is the first emitted item.
        let text = "Mammals are warm blooded animals with fur everywhere.";
        let items = QnaGenerator::new().generate(text, &terms(&["glaciers", "mammals"]), &cfg());

        assert_eq!(items[0].question, "How is mammals described in the text?");
    }

    #[test]
    fn test_only_first_eight_terms_considered() {
        let text: String = (0..12)
            .map(|i| format!("Subject{:02} gets an entire dedicated sentence here. ", i))
            .collect();
        let all_terms: Vec<String> = (0..12).map(|i| format!("subject{:02}", i)).collect();

        let items = QnaGenerator::new().generate(&text, &all_terms, &cfg());
        let term_items: Vec<_> = items
            .iter()
            .filter(|i| i.question.contains("subject"))
            .collect();
        assert_eq!(term_items.len(), 8);
    }

    #[test]
    fn test_main_topic_iff_more_than_five_sentences() {
        let five = long_text(5);
        let six = long_text(6);

        let items = QnaGenerator::new().generate(&five, &[], &cfg());
        assert!(!items.iter().any(|i| i.question.contains("main topic")));

        let items = QnaGenerator::new().generate(&six, &[], &cfg());
        assert!(items.iter().any(|i| i.question.contains("main topic")));
    }

    #[test]
    fn test_conclusion_iff_more_than_ten_sentences() {
        let ten = long_text(10);
        let eleven = long_text(11);

        let items = QnaGenerator::new().generate(&ten, &[], &cfg());
        assert!(!items.iter().any(|i| i.question.contains("conclusion")));

        let items = QnaGenerator::new().generate(&eleven, &[], &cfg());
        assert!(items.iter().any(|i| i.question.contains("conclusion")));
    }

    #[test]
    fn test_main_topic_answer_is_first_three_sentences() {
        let items = QnaGenerator::new().generate(&long_text(7), &[], &cfg());
        let main = items
            .iter()
            .find(|i| i.question.contains("main topic"))
            .unwrap();

        assert_eq!(
            main.answer,
            "Sentence number 00 discusses subject 00. \
             Sentence number 01 discusses subject 01. \
             Sentence number 02 discusses subject 02."
        );
    }

    #[test]
    fn test_conclusion_answer_is_last_three_sentences() {
        let items = QnaGenerator::new().generate(&long_text(12), &[], &cfg());
        let conclusion = items
            .iter()
            .find(|i| i.question.contains("conclusion"))
            .unwrap();

        assert!(conclusion.answer.contains("Sentence number 09"));
        assert!(conclusion.answer.contains("Sentence number 11"));
    }

    #[test]
    fn test_ids_sequential_across_generic_items() {
        let text = format!("Mammals have fur and stay warm in most climates. {}", long_text(11));
        let items = QnaGenerator::new().generate(&text, &terms(&["mammals"]), &cfg());

        let ids: Vec<usize> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=items.len()).collect::<Vec<_>>());
        // Term item first, then main topic, then conclusion.
        assert!(items[0].question.contains("mammals"));
        assert!(items.last().unwrap().question.contains("conclusion"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(QnaGenerator::new().generate("", &[], &cfg()).is_empty());
        assert!(QnaGenerator::new()
            .generate("Too short. Tiny.", &terms(&["anything"]), &cfg())
            .is_empty());
    }
}
