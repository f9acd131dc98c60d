//! Core practice engine — question generation, evaluation, session state.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: operator, question, verdict, round status |
//! | `generator` | Seedable question generation with the subtraction swap |
//! | `evaluator` | Input parsing and the pure answer verdict |
//! | `session`   | Streak, round state machine, advance/milestone tokens |

pub mod evaluator;
pub mod generator;
pub mod models;
pub mod session;

// Re-export the public API surface so callers can use
// `practice_engine::generate_question` without reaching into sub-modules.
pub use evaluator::{evaluate, parse_answer};
pub use generator::{draw_question, generate_question, OPERAND_RANGE};
pub use models::{Evaluation, GameStatus, Operator, PracticeRequest, Question};
pub use session::{
    AdvanceToken, BannerToken, ExplainRequest, MilestoneRequest, PracticeSession, BANNER_TICKS,
    MILESTONE_INTERVAL,
};
