//! Answer parsing and the pure verdict function.

use crate::practice_engine::models::{Evaluation, Question};

/// Parse a typed answer.
///
/// Returns `None` for empty or non-integer text. Surrounding whitespace is
/// tolerated; anything else is rejected at this boundary and never reaches
/// the comparison.
pub fn parse_answer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Compare a submission against the question's answer.
///
/// Pure function of `(question, raw)`: resubmitting the same input always
/// yields the same verdict. Streak bookkeeping lives in
/// [`PracticeSession`](crate::PracticeSession), not here.
pub fn evaluate(question: &Question, raw: &str) -> Evaluation {
    match parse_answer(raw) {
        None => Evaluation::rejected(),
        Some(value) => Evaluation {
            accepted: true,
            correct: value == i64::from(question.answer),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::models::Operator;

    fn q(num1: u8, num2: u8, op: Operator) -> Question {
        Question::build(num1, num2, op)
    }

    #[test]
    fn correct_answer_is_accepted() {
        let v = evaluate(&q(3, 5, Operator::Add), "8");
        assert!(v.accepted);
        assert!(v.correct);
    }

    #[test]
    fn wrong_answer_is_accepted_but_incorrect() {
        let v = evaluate(&q(3, 5, Operator::Add), "7");
        assert!(v.accepted);
        assert!(!v.correct);
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        for raw in ["", "   ", "abc", "1.5", "3a", "--2", "8 + 1"] {
            let v = evaluate(&q(3, 5, Operator::Add), raw);
            assert!(!v.accepted, "input {raw:?} should be rejected");
            assert!(!v.correct);
        }
    }

    #[test]
    fn whitespace_around_a_number_is_tolerated() {
        let v = evaluate(&q(3, 5, Operator::Add), " 8 ");
        assert!(v.accepted);
        assert!(v.correct);
    }

    #[test]
    fn negative_guesses_are_accepted_but_never_correct() {
        // Questions never have negative answers, so "-8" is a plain miss.
        let v = evaluate(&q(3, 5, Operator::Add), "-8");
        assert!(v.accepted);
        assert!(!v.correct);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let question = q(3, 5, Operator::Add);
        let first = evaluate(&question, "8");
        let second = evaluate(&question, "8");
        assert_eq!(first, second);
        assert!(second.correct);
    }
}
