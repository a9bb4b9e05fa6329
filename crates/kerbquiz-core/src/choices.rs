//! Candidate pool construction.
//!
//! Every ground-truth term becomes one candidate, `decoy_count` extra
//! candidates are drawn from the vocabulary with replacement, and the
//! result is shuffled. Randomness is always injected so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{Candidate, CandidateId};

/// Fresh candidate with an identity drawn from `rng`.
pub fn new_candidate<R: Rng + ?Sized>(term: impl Into<String>, rng: &mut R) -> Candidate {
    Candidate {
        id: CandidateId::from_random_bytes(rng.gen()),
        term: term.into(),
    }
}

/// Build the shuffled candidate pool for one question.
///
/// The result always holds `ground_truth.len() + decoy_count` candidates.
/// Decoys may repeat each other or a ground-truth term.
pub fn build_choices<S, R>(
    ground_truth: &[S],
    vocabulary: &[S],
    decoy_count: usize,
    rng: &mut R,
) -> Result<Vec<Candidate>, QuizError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if decoy_count > 0 && vocabulary.is_empty() {
        return Err(QuizError::EmptyVocabularyForDecoys(decoy_count));
    }

    let mut choices = Vec::with_capacity(ground_truth.len() + decoy_count);
    for term in ground_truth {
        choices.push(new_candidate(term.as_ref(), rng));
    }
    for _ in 0..decoy_count {
        if let Some(term) = vocabulary.choose(rng) {
            choices.push(new_candidate(term.as_ref(), rng));
        }
    }
    choices.shuffle(rng);

    tracing::debug!(
        answers = ground_truth.len(),
        decoys = decoy_count,
        "built candidate pool"
    );
    Ok(choices)
}
