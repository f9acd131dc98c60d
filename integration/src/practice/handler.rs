use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use math_drill_gen::tutor::TutorClient;
use math_drill_gen::{to_card_state, PracticeRequest, PracticeSession};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

/// Visual pause before the next question appears; the card shows its
/// "Correct!" state meanwhile.
const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// How long an encouragement toast stays on screen.
const BANNER_DURATION: Duration = Duration::from_secs(4);

// ---------------------------------------------------------------------------
// Shared state: in-memory session cache keyed by session_id
// ---------------------------------------------------------------------------

pub type SessionCache = Arc<Mutex<HashMap<String, PracticeSession>>>;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionCache,
    pub tutor: Arc<dyn TutorClient>,
}

impl AppState {
    pub fn new(tutor: Arc<dyn TutorClient>) -> Self {
        AppState {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            tutor,
        }
    }
}

// ---------------------------------------------------------------------------
// Query / body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct CreateSessionBody {
    /// Optional fixed seed; scripted clients use it for reproducible drills.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

#[derive(Deserialize)]
pub struct StateQuery {
    pub session_id: String,
}

#[derive(Deserialize)]
pub struct AnswerBody {
    pub session_id: String,
    pub answer: String,
}

#[derive(Deserialize)]
pub struct ExplainBody {
    pub session_id: String,
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Session not found or expired" })),
    )
}

// ---------------------------------------------------------------------------
// POST /api/practice/session   body: { rng_seed? }
// ---------------------------------------------------------------------------

pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<CreateSessionBody>,
) -> Json<Value> {
    let session = PracticeSession::new(PracticeRequest {
        rng_seed: body.rng_seed,
    });
    let session_id = format!("PS-{:08X}", rand::random::<u32>());
    debug!(%session_id, "session created");

    let card = {
        let mut map = state.sessions.lock().unwrap();
        // Evict oldest entries if the cache grows too large (simple cap at 1000).
        if map.len() >= 1000 {
            if let Some(first_key) = map.keys().next().cloned() {
                map.remove(&first_key);
            }
        }
        let card = to_card_state(&session);
        map.insert(session_id.clone(), session);
        card
    };

    Json(json!({ "session_id": session_id, "card": card }))
}

// ---------------------------------------------------------------------------
// GET /api/practice/state?session_id=...
// ---------------------------------------------------------------------------

pub async fn get_state(
    State(state): State<AppState>,
    Query(params): Query<StateQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let map = state.sessions.lock().unwrap();
    let session = map.get(&params.session_id).ok_or_else(not_found)?;
    Ok(Json(json!({
        "session_id": params.session_id,
        "card": to_card_state(session),
    })))
}

// ---------------------------------------------------------------------------
// POST /api/practice/answer   body: { session_id, answer }
// ---------------------------------------------------------------------------

pub async fn submit_answer(
    State(state): State<AppState>,
    Json(body): Json<AnswerBody>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let (verdict, card, advance, milestone) = {
        let mut map = state.sessions.lock().unwrap();
        let session = map.get_mut(&body.session_id).ok_or_else(not_found)?;
        session.set_input(body.answer.as_str());
        let verdict = session.submit();
        let advance = session.take_advance();
        let milestone = session.take_milestone_request();
        (verdict, to_card_state(session), advance, milestone)
    };

    // One-shot delayed advance; the token keeps a late callback from ever
    // advancing a round it no longer belongs to.
    if let Some(token) = advance {
        let sessions = state.sessions.clone();
        let session_id = body.session_id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ADVANCE_DELAY).await;
            if let Some(session) = sessions.lock().unwrap().get_mut(&session_id) {
                session.advance(token);
            }
        });
    }

    // Fire-and-forget encouragement; the session applies the reply only if
    // the streak snapshot is still current when it lands.
    if let Some(milestone) = milestone {
        let sessions = state.sessions.clone();
        let tutor = state.tutor.clone();
        let session_id = body.session_id.clone();
        tokio::spawn(async move {
            debug!(streak = milestone.streak, "requesting encouragement");
            let text = tutor.encourage(milestone.streak).await;
            let banner = sessions
                .lock()
                .unwrap()
                .get_mut(&session_id)
                .and_then(|s| s.apply_encouragement(&milestone, text));
            if let Some(banner) = banner {
                tokio::time::sleep(BANNER_DURATION).await;
                if let Some(session) = sessions.lock().unwrap().get_mut(&session_id) {
                    session.expire_banner(banner);
                }
            }
        });
    }

    Ok(Json(json!({
        "accepted": verdict.accepted,
        "correct": verdict.correct,
        "card": card,
    })))
}

// ---------------------------------------------------------------------------
// POST /api/practice/explain   body: { session_id }
// ---------------------------------------------------------------------------

pub async fn explain_question(
    State(state): State<AppState>,
    Json(body): Json<ExplainBody>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request = {
        let map = state.sessions.lock().unwrap();
        let session = map.get(&body.session_id).ok_or_else(not_found)?;
        session.explain_request()
    };

    // The tutor call happens outside the lock; the drill stays responsive.
    let text = state.tutor.explain(&request.question).await;

    let applied = state
        .sessions
        .lock()
        .unwrap()
        .get_mut(&body.session_id)
        .map(|s| s.apply_explanation(&request, text.clone()))
        .unwrap_or(false);

    Ok(Json(json!({ "explanation": text, "applied": applied })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use math_drill_gen::tutor::MockTutor;

    fn test_state() -> AppState {
        AppState::new(Arc::new(MockTutor::with_fixed_reply("Way to go!")))
    }

    async fn seeded_session(state: &AppState, seed: u64) -> String {
        let Json(created) = create_session(
            State(state.clone()),
            Json(CreateSessionBody {
                rng_seed: Some(seed),
            }),
        )
        .await;
        created["session_id"].as_str().unwrap().to_string()
    }

    fn current_answer(state: &AppState, session_id: &str) -> u8 {
        let map = state.sessions.lock().unwrap();
        map.get(session_id).unwrap().question().answer
    }

    #[tokio::test]
    async fn create_then_fetch_state() {
        let state = test_state();
        let session_id = seeded_session(&state, 7).await;

        let Json(fetched) = get_state(
            State(state.clone()),
            Query(StateQuery {
                session_id: session_id.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(fetched["session_id"], session_id.as_str());
        assert_eq!(fetched["card"]["status"], "PLAYING");
        assert!(fetched["card"]["question"].get("answer").is_none());
    }

    #[tokio::test]
    async fn correct_answer_reports_the_new_streak() {
        let state = test_state();
        let session_id = seeded_session(&state, 7).await;
        let answer = current_answer(&state, &session_id);

        let Json(result) = submit_answer(
            State(state.clone()),
            Json(AnswerBody {
                session_id,
                answer: answer.to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(result["accepted"], true);
        assert_eq!(result["correct"], true);
        assert_eq!(result["card"]["streak"], 1);
        assert_eq!(result["card"]["status"], "CORRECT");
    }

    #[tokio::test]
    async fn garbage_input_is_rejected_not_an_error() {
        let state = test_state();
        let session_id = seeded_session(&state, 7).await;

        let Json(result) = submit_answer(
            State(state.clone()),
            Json(AnswerBody {
                session_id,
                answer: "banana".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(result["accepted"], false);
        assert_eq!(result["card"]["streak"], 0);
    }

    #[tokio::test]
    async fn unknown_session_is_a_404() {
        let state = test_state();
        let err = get_state(
            State(state),
            Query(StateQuery {
                session_id: "PS-DOESNOTEXIST".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn explain_returns_the_tutor_text_and_stores_it() {
        let state = test_state();
        let session_id = seeded_session(&state, 7).await;

        let Json(result) = explain_question(
            State(state.clone()),
            Json(ExplainBody {
                session_id: session_id.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(result["explanation"], "Way to go!");
        assert_eq!(result["applied"], true);

        let map = state.sessions.lock().unwrap();
        assert_eq!(
            map.get(&session_id).unwrap().explanation(),
            Some("Way to go!")
        );
    }
}
