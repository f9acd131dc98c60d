//! AI tutor integration — the generative collaborator behind the
//! "Explain This!" button and the streak-milestone toast.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `gemini`  | Gemini `generateContent` client, single attempt, no retries |
//! | `offline` | Missing-credentials stand-in with canned replies |
//! | `mock`    | Scripted test double with call counting |
//! | `error`   | Transport error taxonomy (internal to the clients) |

pub mod error;
pub mod gemini;
pub mod mock;
pub mod offline;

pub use error::TutorError;
pub use gemini::GeminiTutor;
pub use mock::MockTutor;
pub use offline::OfflineTutor;

use async_trait::async_trait;

use crate::practice_engine::models::Question;

// Lines shown when the collaborator cannot help. The drill stays fully
// usable on every one of these paths.
pub const EXPLAIN_UNAVAILABLE: &str = "I couldn't reach the AI tutor right now, but you can do it!";
pub const EXPLAIN_EMPTY: &str = "Let's try counting together!";
pub const EXPLAIN_OFFLINE: &str = "AI Tutor is currently offline (Missing API Key).";
pub const ENCOURAGE_UNAVAILABLE: &str = "Keep up the great work!";
pub const ENCOURAGE_EMPTY: &str = "You are doing amazing!";
pub const ENCOURAGE_OFFLINE: &str = "Great job!";

/// A generative collaborator that talks to young students.
///
/// Implementations never surface errors: any failure — missing credentials,
/// network trouble, an empty completion — maps to one of the fixed fallback
/// lines above, so the caller always gets a displayable string.
#[async_trait]
pub trait TutorClient: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// A short explanation of how to solve `question`.
    async fn explain(&self, question: &Question) -> String;

    /// A one-line congratulation for `streak` correct answers in a row.
    async fn encourage(&self, streak: u32) -> String;
}

pub(crate) fn explain_prompt(question: &Question) -> String {
    format!(
        "Explain how to solve {} {} {} to a 6-year-old student. \
         Keep it very short, encouraging, and simple (under 40 words).",
        question.num1, question.operator, question.num2
    )
}

pub(crate) fn encourage_prompt(streak: u32) -> String {
    format!(
        "Give a short, enthusiastic one-sentence congratulation to a child \
         who just got {streak} math questions right in a row."
    )
}
