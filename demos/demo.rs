//! Scripted walk-through of a practice session.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `math_drill_gen` works end to end:
//!
//! 1. **A seeded session** — `rng_seed: Some(u64)` makes the whole question
//!    sequence deterministic and reproducible.
//! 2. **The round loop** — correct answers bump the streak and schedule the
//!    one-shot advance; a wrong answer resets the streak and re-arms the
//!    input.
//! 3. **Milestones** — the fifth consecutive correct answer queues an
//!    encouragement request; here it is answered by the offline tutor, so
//!    the demo needs no network or API key.
//!
//! ## Key concepts demonstrated
//!
//! - `PracticeRequest::seeded(u64)` for reproducible drills.
//! - `take_advance()` / `advance(token)` — exactly one advance per correct
//!   verdict, stale tokens rejected.
//! - `take_milestone_request()` / `apply_encouragement()` — fire-and-forget
//!   tutor traffic with snapshot-guarded replies.
//! - `tick()` — the banner clears itself after four display ticks.

use math_drill_gen::{OfflineTutor, PracticeRequest, PracticeSession, TutorClient};

#[tokio::main]
async fn main() {
    let tutor = OfflineTutor;
    let mut session = PracticeSession::new(PracticeRequest::seeded(42));

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  math_drill_gen demo — seeded session (42)");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // One deliberate miss first, to show the streak reset.
    let q = *session.question();
    let wrong = q.answer + 1;
    session.set_input(wrong.to_string());
    session.submit();
    println!("\n  Q1: {q}   typed {wrong} → WRONG, streak back to {}", session.streak());

    // An explanation from the tutor for the same question.
    let request = session.explain_request();
    let text = tutor.explain(&request.question).await;
    session.apply_explanation(&request, text);
    println!("  Tutor says: {}", session.explanation().unwrap());

    // Now solve six rounds in a row; the fifth correct answer is a milestone.
    for _ in 0..6 {
        let q = *session.question();
        session.set_input(q.answer.to_string());
        session.submit();
        println!("\n  {q}   typed {} → CORRECT, streak {}", q.answer, session.streak());

        if let Some(milestone) = session.take_milestone_request() {
            let text = tutor.encourage(milestone.streak).await;
            session.apply_encouragement(&milestone, text);
            println!("  🎉 milestone at streak {}: {}", milestone.streak, session.encouragement().unwrap());
        }

        let token = session.take_advance().expect("correct verdict schedules an advance");
        session.advance(token);
    }

    // The banner counts down and clears itself.
    let mut ticks = 0;
    while session.encouragement().is_some() {
        session.tick();
        ticks += 1;
    }
    println!("\n  banner cleared after {ticks} display ticks");
    println!("  final streak: {}", session.streak());
}
