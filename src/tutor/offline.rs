//! Offline tutor — the missing-credentials path.

use async_trait::async_trait;

use crate::practice_engine::models::Question;
use crate::tutor::{TutorClient, ENCOURAGE_OFFLINE, EXPLAIN_OFFLINE};

/// Stand-in used when no API key is configured.
///
/// Every request answers instantly with the canned offline lines, so the
/// question/answer loop works identically with or without credentials.
pub struct OfflineTutor;

#[async_trait]
impl TutorClient for OfflineTutor {
    fn name(&self) -> &str {
        "offline"
    }

    async fn explain(&self, _question: &Question) -> String {
        EXPLAIN_OFFLINE.to_string()
    }

    async fn encourage(&self, _streak: u32) -> String {
        ENCOURAGE_OFFLINE.to_string()
    }
}
