use axum::{
    routing::{get, post},
    Router,
};

use super::handler::{create_session, explain_question, get_state, submit_answer, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/practice/session", post(create_session))
        .route("/api/practice/state", get(get_state))
        .route("/api/practice/answer", post(submit_answer))
        .route("/api/practice/explain", post(explain_question))
        .with_state(state)
}
