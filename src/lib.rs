//! # math_drill_gen
//!
//! A practice-math drill core for young students.
//!
//! This library generates simple addition/subtraction questions with
//! operands in 1–20, evaluates typed answers, tracks a consecutive-correct
//! streak, and optionally asks a generative tutor for a short explanation or
//! a milestone congratulation. Everything a screen would render — question
//! card, streak counter, encouragement toast, tutor panel — is exposed as
//! plain state; presentation stays outside the crate.
//!
//! ## How it works
//!
//! 1. Create a [`PracticeRequest`] (optionally with a fixed `rng_seed`).
//! 2. Start a [`PracticeSession`] — it draws the first [`Question`] and
//!    enters the `Playing` state.
//! 3. Feed typed input with [`PracticeSession::set_input`] and call
//!    [`PracticeSession::submit`]. A correct verdict bumps the streak and
//!    issues a one-shot [`AdvanceToken`]; fire it after your display delay
//!    to move to the next question. A wrong verdict resets the streak and
//!    re-arms the input.
//! 4. Every fifth consecutive correct answer queues a [`MilestoneRequest`];
//!    hand its streak snapshot to a [`TutorClient`] and apply the reply —
//!    stale replies are discarded automatically.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to replay the exact same
//!   question sequence — useful for tests and scripted demos.
//! - **Never-negative subtraction**: operands are swapped at construction,
//!   so beginners never see a result below zero.
//! - **Fallback-first tutor**: every tutor failure maps to a fixed friendly
//!   line; the drill loop keeps working with the collaborator unreachable.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate_question, PracticeRequest, PracticeSession};
//!
//! // One-shot question:
//! let q = generate_question(PracticeRequest::seeded(42));
//! println!("{} {} {} = ?", q.num1, q.operator, q.num2);
//!
//! // A full session round:
//! let mut session = PracticeSession::new(PracticeRequest::seeded(42));
//! let answer = session.question().answer.to_string();
//! session.set_input(answer);
//! let verdict = session.submit();
//! assert!(verdict.correct);
//! assert_eq!(session.streak(), 1);
//!
//! let token = session.take_advance().unwrap();
//! assert!(session.advance(token));   // fresh question, back to Playing
//! assert!(!session.advance(token));  // stale token: no double advance
//! ```

pub mod card_adapter;
pub mod practice_engine;
pub mod tutor;

// Convenience re-exports so callers can use `math_drill_gen::generate_question`
// directly without reaching into `practice_engine::`.
pub use card_adapter::to_card_state;
pub use practice_engine::{
    evaluate, generate_question, parse_answer, AdvanceToken, BannerToken, Evaluation,
    ExplainRequest, GameStatus, MilestoneRequest, Operator, PracticeRequest, PracticeSession,
    Question, BANNER_TICKS, MILESTONE_INTERVAL,
};
pub use tutor::{GeminiTutor, MockTutor, OfflineTutor, TutorClient, TutorError};
