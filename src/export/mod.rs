//! Plain-text export serialization
//!
//! Renders the three result tabs into the downloadable plain-text formats:
//! a summary report (title, body, comma-joined key terms), an MCQ report
//! with lettered options, and a Q&A report. These strings are the only
//! persisted artifact; no other file format exists.

use crate::types::{McqItem, QnaItem, StudyAids};

/// Letter for an option index (`'A' + index`).
pub fn option_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

/// Summary report: title, summary body, and comma-joined key terms.
pub fn summary_report(aids: &StudyAids, title: &str) -> String {
    format!(
        "{}\n\nSUMMARY\n{}\n\nKEY TERMS\n{}\n",
        title,
        aids.summary,
        aids.key_terms.join(", ")
    )
}

/// MCQ report: each question with lettered options and the correct letter.
pub fn mcq_report(items: &[McqItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("{}. {}\n", item.id, item.question));
        for (i, option) in item.options.iter().enumerate() {
            out.push_str(&format!("   {}) {}\n", option_letter(i), option));
        }
        out.push_str(&format!(
            "   Answer: {}\n\n",
            option_letter(item.correct_answer)
        ));
    }
    out
}

/// Q&A report: each question followed by its answer.
pub fn qna_report(items: &[QnaItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&format!("Q{}: {}\nA{}: {}\n\n", item.id, item.question, item.id, item.answer));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_aids() -> StudyAids {
        StudyAids {
            key_terms: vec!["mammals".to_string(), "fur".to_string()],
            summary: "Cats are mammals. Mammals have fur.".to_string(),
            mcqs: vec![McqItem {
                id: 1,
                question: "What is true about mammals?".to_string(),
                options: vec![
                    "Wrong one".to_string(),
                    "Cats are mammals".to_string(),
                    "Wrong two".to_string(),
                    "Wrong three".to_string(),
                ],
                correct_answer: 1,
                context: String::new(),
            }],
            qna: vec![QnaItem {
                id: 1,
                question: "What does the document say about mammals?".to_string(),
                answer: "Cats are mammals.".to_string(),
            }],
        }
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(1), 'B');
        assert_eq!(option_letter(2), 'C');
        assert_eq!(option_letter(3), 'D');
    }

    #[test]
    fn test_summary_report_sections() {
        let report = summary_report(&sample_aids(), "Biology Notes");

        assert!(report.starts_with("Biology Notes\n"));
        assert!(report.contains("SUMMARY\nCats are mammals. Mammals have fur."));
        assert!(report.contains("KEY TERMS\nmammals, fur"));
    }

    #[test]
    fn test_mcq_report_letters_and_answer() {
        let report = mcq_report(&sample_aids().mcqs);

        assert!(report.contains("1. What is true about mammals?"));
        assert!(report.contains("A) Wrong one"));
        assert!(report.contains("B) Cats are mammals"));
        assert!(report.contains("D) Wrong three"));
        assert!(report.contains("Answer: B"));
    }

    #[test]
    fn test_qna_report_pairs() {
        let report = qna_report(&sample_aids().qna);

        assert!(report.contains("Q1: What does the document say about mammals?"));
        assert!(report.contains("A1: Cats are mammals."));
    }

    #[test]
    fn test_empty_reports() {
        assert_eq!(mcq_report(&[]), "");
        assert_eq!(qna_report(&[]), "");
    }
}
