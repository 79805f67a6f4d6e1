//! Result validation.
//!
//! Checks a finished [`StudyAids`] value against the structural invariants
//! the generators promise: four options per MCQ with a valid correct index,
//! and sequential ids in both question lists. The checks collect every
//! violation instead of short-circuiting, so a failing run reports all
//! problems at once. The session wraps violations into the user-visible
//! processing error.

use crate::types::StudyAids;

/// Number of options every MCQ item must carry.
pub const MCQ_OPTION_COUNT: usize = 4;

/// Validate a pipeline result, collecting every violation.
///
/// An empty vector means the result is structurally sound.
pub fn validate(aids: &StudyAids) -> Vec<String> {
    let mut violations = Vec::new();

    for (pos, item) in aids.mcqs.iter().enumerate() {
        if item.options.len() != MCQ_OPTION_COUNT {
            violations.push(format!(
                "MCQ {} has {} options, expected {}",
                item.id,
                item.options.len(),
                MCQ_OPTION_COUNT
            ));
        }
        if item.correct_answer >= item.options.len() {
            violations.push(format!(
                "MCQ {} correct answer index {} out of range",
                item.id, item.correct_answer
            ));
        }
        if item.id != pos + 1 {
            violations.push(format!("MCQ id {} at position {}", item.id, pos));
        }
    }

    for (pos, item) in aids.qna.iter().enumerate() {
        if item.id != pos + 1 {
            violations.push(format!("Q&A id {} at position {}", item.id, pos));
        }
        if item.answer.is_empty() {
            violations.push(format!("Q&A {} has an empty answer", item.id));
        }
    }

    violations
}
