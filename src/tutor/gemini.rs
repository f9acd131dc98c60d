//! Gemini API tutor implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::practice_engine::models::Question;
use crate::tutor::error::TutorError;
use crate::tutor::{
    encourage_prompt, explain_prompt, TutorClient, ENCOURAGE_EMPTY, ENCOURAGE_UNAVAILABLE,
    EXPLAIN_EMPTY, EXPLAIN_UNAVAILABLE,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Gemini `generateContent` tutor.
///
/// One attempt per request, no retries: the player is mid-drill, so a miss
/// falls back to a canned line instead of making them wait.
pub struct GeminiTutor {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiTutor {
    pub fn new(api_key: &str, base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        GeminiTutor {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: DEFAULT_MODEL.to_string(),
            client,
        }
    }

    async fn generate(&self, prompt: String) -> Result<String, TutorError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TutorError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    TutorError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::AuthenticationFailed(body));
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(TutorError::ApiError { status, message });
        }

        let api_response: GenerateContentResponse =
            response.json().await.map_err(|e| TutorError::ApiError {
                status: 0,
                message: format!("failed to parse response: {e}"),
            })?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(TutorError::EmptyCompletion);
        }
        Ok(text.trim().to_string())
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    message: String,
}

#[async_trait]
impl TutorClient for GeminiTutor {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, question), fields(model = %self.model))]
    async fn explain(&self, question: &Question) -> String {
        match self.generate(explain_prompt(question)).await {
            Ok(text) => text,
            Err(TutorError::EmptyCompletion) => EXPLAIN_EMPTY.to_string(),
            Err(err) => {
                warn!(error = %err, "explanation request failed");
                EXPLAIN_UNAVAILABLE.to_string()
            }
        }
    }

    #[instrument(skip(self), fields(model = %self.model))]
    async fn encourage(&self, streak: u32) -> String {
        match self.generate(encourage_prompt(streak)).await {
            Ok(text) => text,
            Err(TutorError::EmptyCompletion) => ENCOURAGE_EMPTY.to_string(),
            Err(err) => {
                warn!(error = %err, "encouragement request failed");
                ENCOURAGE_UNAVAILABLE.to_string()
            }
        }
    }
}
