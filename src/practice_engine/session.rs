//! Round state machine — streak, auto-advance, and milestone plumbing.
//!
//! A [`PracticeSession`] owns one live [`Question`] at a time and cycles
//! `Playing → Correct → Playing` (or `Playing → Wrong → Playing`) for the
//! lifetime of the session. The pieces that look asynchronous from the
//! outside are surfaced as tokens the caller schedules however it likes:
//!
//! - a correct verdict issues an [`AdvanceToken`]; the caller fires it after
//!   its display delay, and a token from an earlier round is rejected, so a
//!   late callback can never advance twice;
//! - a streak milestone issues a [`MilestoneRequest`] snapshot; an
//!   encouragement reply applied after the streak has moved on is discarded;
//! - an explanation reply is keyed to the round it was asked about and is
//!   discarded once a new question has superseded it.
//!
//! The session itself never waits on any of this — evaluation is fully
//! synchronous and the tutor traffic is fire-and-forget.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::practice_engine::evaluator::evaluate;
use crate::practice_engine::generator::draw_question;
use crate::practice_engine::models::{Evaluation, GameStatus, PracticeRequest, Question};

/// A streak milestone fires every this many consecutive correct answers.
pub const MILESTONE_INTERVAL: u32 = 5;

/// How many display ticks an encouragement banner stays up.
pub const BANNER_TICKS: u8 = 4;

/// One-shot permission to move to the next question.
///
/// Issued when a round is solved, consumed by [`PracticeSession::advance`].
/// Carries the round it was issued for: exactly one advance per correct
/// verdict, never a second one from a stale callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    round: u64,
}

/// Snapshot of the streak at the moment a milestone was hit.
///
/// Hand `streak` to the tutor; hand the whole request back to
/// [`PracticeSession::apply_encouragement`] with the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneRequest {
    /// Streak value to congratulate.
    pub streak: u32,
    serial: u64,
}

/// Handle for an explanation request about the live question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplainRequest {
    /// The question to explain.
    pub question: Question,
    round: u64,
}

/// Identifies one displayed encouragement banner, for timer-based expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerToken {
    serial: u64,
}

#[derive(Debug, Clone)]
struct Banner {
    text: String,
    ticks_left: u8,
    serial: u64,
}

/// One player's practice run: the live question, the streak, and the
/// transient round state the surrounding UI renders.
pub struct PracticeSession {
    rng: StdRng,
    question: Question,
    status: GameStatus,
    input: String,
    streak: u32,
    round: u64,
    // Bumps on every accepted submission; pending encouragement replies
    // snapshot it and are discarded on mismatch.
    streak_serial: u64,
    pending_advance: Option<AdvanceToken>,
    pending_milestone: Option<MilestoneRequest>,
    banner: Option<Banner>,
    banner_serial: u64,
    explanation: Option<String>,
}

impl PracticeSession {
    /// Start a session and present its first question.
    pub fn new(request: PracticeRequest) -> Self {
        let mut rng: StdRng = match request.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let question = draw_question(&mut rng);
        PracticeSession {
            rng,
            question,
            status: GameStatus::Playing,
            input: String::new(),
            streak: 0,
            round: 0,
            streak_serial: 0,
            pending_advance: None,
            pending_milestone: None,
            banner: None,
            banner_serial: 0,
            explanation: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Consecutive correct answers so far. Never negative; reset by a wrong
    /// verdict, untouched by rejected input.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// How many questions this session has moved past.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The active encouragement banner, if a milestone reply is on display.
    pub fn encouragement(&self) -> Option<&str> {
        self.banner.as_ref().map(|b| b.text.as_str())
    }

    /// The tutor explanation for the live question, if one was applied.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Replace the typed input. A keystroke after a wrong verdict re-arms
    /// the round for another attempt.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if self.status == GameStatus::Wrong {
            self.status = GameStatus::Playing;
        }
    }

    /// Submit the current input against the live question.
    ///
    /// Rejected input (empty or non-integer) changes nothing. A correct
    /// verdict bumps the streak, schedules the one-shot advance, and — at
    /// every [`MILESTONE_INTERVAL`] — queues a [`MilestoneRequest`]. A wrong
    /// verdict resets the streak and clears the input for another try.
    pub fn submit(&mut self) -> Evaluation {
        if self.status == GameStatus::Correct {
            // Round already solved; input stays closed until the advance.
            return Evaluation::rejected();
        }

        let verdict = evaluate(&self.question, &self.input);
        if !verdict.accepted {
            return verdict;
        }

        self.streak_serial += 1;
        if verdict.correct {
            self.status = GameStatus::Correct;
            self.streak += 1;
            self.pending_advance = Some(AdvanceToken { round: self.round });
            if self.streak % MILESTONE_INTERVAL == 0 {
                self.pending_milestone = Some(MilestoneRequest {
                    streak: self.streak,
                    serial: self.streak_serial,
                });
            }
        } else {
            self.status = GameStatus::Wrong;
            self.streak = 0;
            self.input.clear();
        }
        verdict
    }

    /// Take the one-shot advance scheduled by a correct verdict.
    pub fn take_advance(&mut self) -> Option<AdvanceToken> {
        self.pending_advance.take()
    }

    /// Move to a fresh question.
    ///
    /// Returns `false` — and changes nothing — when the token belongs to an
    /// earlier round. Otherwise the round counter bumps, a new question is
    /// drawn, input and explanation are cleared, and the status returns to
    /// `Playing`.
    pub fn advance(&mut self, token: AdvanceToken) -> bool {
        if token.round != self.round || self.status != GameStatus::Correct {
            return false;
        }
        self.round += 1;
        self.question = draw_question(&mut self.rng);
        self.status = GameStatus::Playing;
        self.input.clear();
        self.explanation = None;
        true
    }

    /// Take the pending encouragement request, if a milestone was just hit.
    ///
    /// Fire-and-forget: the session never waits for the reply, and question
    /// progression does not depend on it.
    pub fn take_milestone_request(&mut self) -> Option<MilestoneRequest> {
        self.pending_milestone.take()
    }

    /// Apply an encouragement reply.
    ///
    /// Returns a [`BannerToken`] when the reply is still current. A reply
    /// that arrives after the streak has moved on — another correct answer
    /// or a reset — is discarded and `None` is returned.
    pub fn apply_encouragement(
        &mut self,
        request: &MilestoneRequest,
        text: impl Into<String>,
    ) -> Option<BannerToken> {
        if request.serial != self.streak_serial {
            return None;
        }
        self.banner_serial += 1;
        self.banner = Some(Banner {
            text: text.into(),
            ticks_left: BANNER_TICKS,
            serial: self.banner_serial,
        });
        Some(BannerToken {
            serial: self.banner_serial,
        })
    }

    /// Count the encouragement banner down by one display tick; it clears
    /// itself after [`BANNER_TICKS`] ticks.
    pub fn tick(&mut self) {
        if let Some(banner) = &mut self.banner {
            banner.ticks_left -= 1;
            if banner.ticks_left == 0 {
                self.banner = None;
            }
        }
    }

    /// Clear the banner a timer was started for. A stale token (the banner
    /// was already replaced or expired) is a no-op.
    pub fn expire_banner(&mut self, token: BannerToken) {
        if self.banner.as_ref().is_some_and(|b| b.serial == token.serial) {
            self.banner = None;
        }
    }

    /// Handle for asking the tutor about the live question.
    pub fn explain_request(&self) -> ExplainRequest {
        ExplainRequest {
            question: self.question,
            round: self.round,
        }
    }

    /// Store a tutor explanation.
    ///
    /// Returns `false` — and stores nothing — when a new question has
    /// superseded the one the explanation was asked about.
    pub fn apply_explanation(&mut self, request: &ExplainRequest, text: impl Into<String>) -> bool {
        if request.round != self.round {
            return false;
        }
        self.explanation = Some(text.into());
        true
    }

    /// Dismiss the explanation panel.
    pub fn clear_explanation(&mut self) {
        self.explanation = None;
    }
}
