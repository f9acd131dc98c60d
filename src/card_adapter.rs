use serde_json::{json, Value};

use crate::practice_engine::models::{GameStatus, Question};
use crate::practice_engine::session::PracticeSession;

/// Public view of a question: operands and operator only.
///
/// The precomputed `answer` must never reach the client — the browser is
/// where the player types their guess.
fn public_question(q: &Question) -> Value {
    json!({
        "num1": q.num1,
        "num2": q.num2,
        "operator": q.operator.to_string(),
    })
}

/// The status string the card component switches its rendering on.
fn status_str(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "PLAYING",
        GameStatus::Correct => "CORRECT",
        GameStatus::Wrong   => "WRONG",
    }
}

/// Map a [`PracticeSession`] to the card-state JSON the web client renders.
///
/// One payload covers the whole page: question card, streak counter,
/// encouragement toast, and tutor panel.
pub fn to_card_state(session: &PracticeSession) -> Value {
    json!({
        "question":      public_question(session.question()),
        "status":        status_str(session.status()),
        "streak":        session.streak(),
        "round":         session.round(),
        "encouragement": session.encouragement(),
        "explanation":   session.explanation(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::models::PracticeRequest;

    #[test]
    fn card_state_never_leaks_the_answer() {
        let session = PracticeSession::new(PracticeRequest::seeded(42));
        let state = to_card_state(&session);
        assert!(state["question"].get("answer").is_none());
        assert_eq!(state["status"], "PLAYING");
        assert_eq!(state["streak"], 0);
    }

    #[test]
    fn card_state_tracks_the_session() {
        let mut session = PracticeSession::new(PracticeRequest::seeded(42));
        let answer = session.question().answer.to_string();
        session.set_input(answer);
        session.submit();

        let state = to_card_state(&session);
        assert_eq!(state["status"], "CORRECT");
        assert_eq!(state["streak"], 1);
        assert!(state["encouragement"].is_null());
    }
}
