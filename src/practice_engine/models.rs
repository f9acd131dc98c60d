use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Arithmetic primitives
// ---------------------------------------------------------------------------

/// The two operations a beginner drill uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
}

impl Operator {
    /// Apply the operation. `Sub` requires `lhs >= rhs` — [`Question::build`]
    /// orders the operands so this always holds for questions.
    pub fn apply(self, lhs: u8, rhs: u8) -> u8 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Sub => write!(f, "-"),
        }
    }
}

/// One arithmetic problem with a precomputed answer.
///
/// Built through [`Question::build`], which swaps the operands for
/// subtraction so the answer is never negative. Immutable once created:
/// a solved round discards it and draws a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub num1: u8,
    pub num2: u8,
    pub operator: Operator,
    pub answer: u8,
}

impl Question {
    /// Build a question from raw operand draws.
    ///
    /// For subtraction the larger operand ends up on the left; the operator
    /// itself is kept as drawn. `answer` is then plain `num1 op num2`.
    pub fn build(num1: u8, num2: u8, operator: Operator) -> Self {
        let (num1, num2) = match operator {
            Operator::Sub if num1 < num2 => (num2, num1),
            _ => (num1, num2),
        };
        Question {
            num1,
            num2,
            operator,
            answer: operator.apply(num1, num2),
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ?", self.num1, self.operator, self.num2)
    }
}

// ---------------------------------------------------------------------------
// Round state / verdicts
// ---------------------------------------------------------------------------

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameStatus {
    /// Awaiting input.
    Playing,
    /// Solved; the advance to a new question is pending.
    Correct,
    /// Last submission missed; cleared on the next keystroke or question.
    Wrong,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "PLAYING"),
            GameStatus::Correct => write!(f, "CORRECT"),
            GameStatus::Wrong => write!(f, "WRONG"),
        }
    }
}

/// Transient verdict for one submission. Produced by
/// [`evaluate`](crate::practice_engine::evaluate) and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// False when the input did not parse as an integer; nothing changed.
    pub accepted: bool,
    /// True when the parsed input equals the question's answer.
    pub correct: bool,
}

impl Evaluation {
    pub(crate) fn rejected() -> Self {
        Evaluation {
            accepted: false,
            correct: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// Parameters for question generation and session creation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PracticeRequest {
    /// Fixed RNG seed for a reproducible drill; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl PracticeRequest {
    /// Entropy-seeded request — every drill is different.
    pub fn new() -> Self {
        PracticeRequest::default()
    }

    /// Deterministic request: the same seed replays the same questions.
    pub fn seeded(seed: u64) -> Self {
        PracticeRequest {
            rng_seed: Some(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtraction_operands_are_swapped() {
        let q = Question::build(4, 9, Operator::Sub);
        assert_eq!((q.num1, q.num2), (9, 4));
        assert_eq!(q.answer, 5);
    }

    #[test]
    fn addition_operands_keep_their_order() {
        let q = Question::build(4, 9, Operator::Add);
        assert_eq!((q.num1, q.num2), (4, 9));
        assert_eq!(q.answer, 13);
    }

    #[test]
    fn operator_serializes_as_symbol() {
        let q = Question::build(3, 5, Operator::Add);
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json["operator"], "+");
        assert_eq!(json["answer"], 8);

        let q = Question::build(5, 3, Operator::Sub);
        let json = serde_json::to_value(q).unwrap();
        assert_eq!(json["operator"], "-");
    }

    #[test]
    fn question_displays_without_the_answer() {
        let q = Question::build(3, 5, Operator::Add);
        assert_eq!(q.to_string(), "3 + 5 = ?");
    }
}
