//! SM-2-derived review scheduling. `next_state` is the whole surface: a pure
//! transition over one word's statistics, with no I/O and no failure modes.

use crate::core::WordProgress;

/// The inference collaborator only reports pass or fail, so passes are always
/// graded 4 on the 0..=5 SM-2 quality scale.
const PASS_QUALITY: f64 = 4.0;

/// Hard floor for the ease factor on every update branch.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease penalty applied when a sign is judged incorrect.
const FAIL_EASE_PENALTY: f64 = 0.2;

/// Compute the state a word moves to after one judgment at time `now_ms`.
///
/// A pass bumps the correct count, nudges the ease factor by the SM-2 quality
/// formula, and grows the interval along 0 -> 1 -> 6 -> round(interval * ease).
/// A fail bumps the incorrect count, drops the interval back to 0, and
/// penalizes the ease factor. Both branches stamp `last_seen`.
pub fn next_state(current: &WordProgress, correct: bool, now_ms: i64) -> WordProgress {
    let mut next = current.clone();
    next.last_seen = now_ms;

    if correct {
        next.correct_count = current.correct_count + 1;
        next.ease_factor = (current.ease_factor
            + (0.1 - (5.0 - PASS_QUALITY) * (0.08 + (5.0 - PASS_QUALITY) * 0.02)))
            .max(MIN_EASE_FACTOR);
        next.interval = match current.interval {
            0 => 1,
            1 => 6,
            interval => (f64::from(interval) * next.ease_factor).round() as u32,
        };
    } else {
        next.incorrect_count = current.incorrect_count + 1;
        next.interval = 0;
        next.ease_factor = (current.ease_factor - FAIL_EASE_PENALTY).max(MIN_EASE_FACTOR);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn pass_progression_follows_one_six_then_ease() {
        let start = WordProgress::new("hi");

        let first = next_state(&start, true, NOW);
        assert_eq!(first.interval, 1);
        assert_eq!(first.correct_count, 1);
        assert_eq!(first.last_seen, NOW);

        let second = next_state(&first, true, NOW + 1);
        assert_eq!(second.interval, 6);

        // Third pass: round(6 * ease). Ease has drifted down 0.02 per pass.
        let third = next_state(&second, true, NOW + 2);
        let expected = (6.0 * third.ease_factor).round() as u32;
        assert_eq!(third.interval, expected);
        assert_eq!(third.correct_count, 3);
    }

    #[test]
    fn fail_resets_interval_regardless_of_prior_state() {
        for prior_interval in [0, 1, 6, 15, 240] {
            let mut current = WordProgress::new("meet");
            current.interval = prior_interval;

            let next = next_state(&current, false, NOW);
            assert_eq!(next.interval, 0);
            assert_eq!(next.incorrect_count, 1);
        }
    }

    #[test]
    fn ease_factor_never_drops_below_floor() {
        let mut state = WordProgress::new("study");
        for step in 0..50 {
            state = next_state(&state, step % 3 != 0, NOW + step);
            assert!(state.ease_factor >= MIN_EASE_FACTOR);
        }

        // Pure fail streak hits the floor and stays there.
        let mut failing = WordProgress::new("study");
        for step in 0..20 {
            failing = next_state(&failing, false, NOW + step);
        }
        assert_eq!(failing.ease_factor, MIN_EASE_FACTOR);
    }

    #[test]
    fn pass_applies_fixed_quality_ease_drift() {
        let start = WordProgress::new("name");
        let next = next_state(&start, true, NOW);
        // Quality fixed at 4 simplifies the SM-2 delta to -0.02.
        assert!((next.ease_factor - 2.48).abs() < 1e-9);
    }

    #[test]
    fn counts_only_move_on_their_own_branch() {
        let start = WordProgress::new("food");

        let passed = next_state(&start, true, NOW);
        assert_eq!((passed.correct_count, passed.incorrect_count), (1, 0));

        let failed = next_state(&start, false, NOW);
        assert_eq!((failed.correct_count, failed.incorrect_count), (0, 1));
    }
}
