//! Quiz question selection.
//!
//! The client keeps the ids it has already been served and sends them back
//! on every request. A round draws a random candidate that is not in that
//! list, or reports the quiz as exhausted once the list is as long as the
//! candidate set.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

/// Random draws allowed per candidate before falling back to a scan.
pub const QUIZ_DRAW_ATTEMPTS_PER_CANDIDATE: usize = 8;

/// Anything that can be offered as a quiz question.
pub trait QuizCandidate {
    fn candidate_id(&self) -> DbId;
}

/// Pick the next quiz question, or `None` when the quiz is exhausted.
///
/// Exhaustion is decided by count alone: once `previous` holds at least as
/// many ids as there are candidates, no draw is attempted. Otherwise
/// candidates are drawn uniformly until an unseen one turns up. The draw
/// loop is capped at [`QUIZ_DRAW_ATTEMPTS_PER_CANDIDATE`] times the
/// candidate count, after which the unseen candidates are collected and one
/// of them is chosen directly.
pub fn select_question<'a, T, R>(
    candidates: &'a [T],
    previous: &[DbId],
    rng: &mut R,
) -> Option<&'a T>
where
    T: QuizCandidate,
    R: Rng + ?Sized,
{
    if previous.len() >= candidates.len() {
        return None;
    }

    let seen: HashSet<DbId> = previous.iter().copied().collect();
    let max_draws = candidates
        .len()
        .saturating_mul(QUIZ_DRAW_ATTEMPTS_PER_CANDIDATE);

    for _ in 0..max_draws {
        let candidate = &candidates[rng.random_range(0..candidates.len())];
        if !seen.contains(&candidate.candidate_id()) {
            return Some(candidate);
        }
    }

    let unseen: Vec<&T> = candidates
        .iter()
        .filter(|c| !seen.contains(&c.candidate_id()))
        .collect();
    unseen.choose(rng).copied()
}
