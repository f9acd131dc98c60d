//! Mock tutor for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::practice_engine::models::Question;
use crate::tutor::TutorClient;

/// A scripted tutor for exercising session wiring without real API calls.
///
/// Records how often each operation was invoked and the last streak it was
/// asked to congratulate.
pub struct MockTutor {
    reply: String,
    explain_calls: AtomicU32,
    encourage_calls: AtomicU32,
    last_streak: Mutex<Option<u32>>,
}

impl MockTutor {
    /// A mock that always answers with the same line.
    pub fn with_fixed_reply(reply: &str) -> Self {
        MockTutor {
            reply: reply.to_string(),
            explain_calls: AtomicU32::new(0),
            encourage_calls: AtomicU32::new(0),
            last_streak: Mutex::new(None),
        }
    }

    pub fn explain_calls(&self) -> u32 {
        self.explain_calls.load(Ordering::Relaxed)
    }

    pub fn encourage_calls(&self) -> u32 {
        self.encourage_calls.load(Ordering::Relaxed)
    }

    /// The streak value passed to the most recent `encourage` call.
    pub fn last_streak(&self) -> Option<u32> {
        *self.last_streak.lock().unwrap()
    }
}

#[async_trait]
impl TutorClient for MockTutor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn explain(&self, _question: &Question) -> String {
        self.explain_calls.fetch_add(1, Ordering::Relaxed);
        self.reply.clone()
    }

    async fn encourage(&self, streak: u32) -> String {
        self.encourage_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_streak.lock().unwrap() = Some(streak);
        self.reply.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::models::Operator;

    #[tokio::test]
    async fn counts_calls_and_captures_the_streak() {
        let tutor = MockTutor::with_fixed_reply("Nice work!");
        let q = Question::build(10, 4, Operator::Sub);

        assert_eq!(tutor.explain(&q).await, "Nice work!");
        assert_eq!(tutor.encourage(5).await, "Nice work!");
        assert_eq!(tutor.explain_calls(), 1);
        assert_eq!(tutor.encourage_calls(), 1);
        assert_eq!(tutor.last_streak(), Some(5));
    }
}
