use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::practice_engine::models::{Operator, PracticeRequest, Question};

/// Inclusive operand range for beginner drills.
pub const OPERAND_RANGE: std::ops::RangeInclusive<u8> = 1..=20;

/// Draw one question from the given RNG.
///
/// Both operands are uniform over [`OPERAND_RANGE`] and the operator is a
/// fair coin. [`Question::build`] fixes the operand order for subtraction,
/// so the result is never negative.
pub fn draw_question<R: Rng>(rng: &mut R) -> Question {
    let num1 = rng.gen_range(OPERAND_RANGE);
    let num2 = rng.gen_range(OPERAND_RANGE);
    let operator = if rng.gen_bool(0.5) {
        Operator::Add
    } else {
        Operator::Sub
    };
    Question::build(num1, num2, operator)
}

/// Generate a single question on demand.
///
/// Generation cannot fail and touches no external state; callers wanting a
/// whole drill should use [`PracticeSession`](crate::PracticeSession), which
/// keeps one RNG across rounds.
pub fn generate_question(request: PracticeRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    draw_question(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn operands_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let q = draw_question(&mut rng);
            assert!(OPERAND_RANGE.contains(&q.num1), "num1 out of range: {}", q.num1);
            assert!(OPERAND_RANGE.contains(&q.num2), "num2 out of range: {}", q.num2);
        }
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let q = draw_question(&mut rng);
            if q.operator == Operator::Sub {
                assert!(q.num1 >= q.num2, "unswapped subtraction: {q}");
                assert_eq!(q.answer, q.num1 - q.num2);
            } else {
                assert_eq!(q.answer, q.num1 + q.num2);
            }
        }
    }

    #[test]
    fn both_operators_show_up() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut adds = 0usize;
        let mut subs = 0usize;
        for _ in 0..200 {
            match draw_question(&mut rng).operator {
                Operator::Add => adds += 1,
                Operator::Sub => subs += 1,
            }
        }
        assert!(adds > 0 && subs > 0, "operator draw is not 50/50 (adds={adds}, subs={subs})");
    }

    #[test]
    fn generation_is_deterministic_with_seed() {
        let a = generate_question(PracticeRequest::seeded(99));
        let b = generate_question(PracticeRequest::seeded(99));
        assert_eq!(a, b);
    }
}
