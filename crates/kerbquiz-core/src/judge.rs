//! Judging placements against the ground truth.
//!
//! [`evaluate`] is a pure function of the segmented quote, the current
//! store and the reveal flag.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::BlankId;
use crate::placement::PlacementStore;
use crate::segmenter::SegmentedQuote;

/// State of a single blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankStatus {
    Correct,
    Wrong,
    Empty,
}

/// Per-blank verdicts plus overall completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Judgment {
    pub per_blank: BTreeMap<BlankId, BlankStatus>,
    pub complete: bool,
    pub revealed: bool,
}

impl Judgment {
    pub fn status(&self, blank: BlankId) -> Option<BlankStatus> {
        self.per_blank.get(&blank).copied()
    }

    pub fn correct_count(&self) -> usize {
        self.count(BlankStatus::Correct)
    }

    /// Blanks holding any candidate, right or wrong.
    pub fn filled_count(&self) -> usize {
        self.per_blank.len() - self.count(BlankStatus::Empty)
    }

    fn count(&self, status: BlankStatus) -> usize {
        self.per_blank.values().filter(|s| **s == status).count()
    }
}

/// Case-insensitive term comparison.
pub fn terms_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Judge every blank of `quote` against what `store` holds.
///
/// With `revealed` set every blank counts as correct and the question is
/// complete regardless of placements.
pub fn evaluate(quote: &SegmentedQuote, store: &PlacementStore, revealed: bool) -> Judgment {
    let per_blank: BTreeMap<BlankId, BlankStatus> = quote
        .blanks()
        .into_iter()
        .map(|(id, expected)| {
            let status = if revealed {
                BlankStatus::Correct
            } else {
                match store.occupant(id) {
                    None => BlankStatus::Empty,
                    Some(c) if terms_match(&c.term, expected) => BlankStatus::Correct,
                    Some(_) => BlankStatus::Wrong,
                }
            };
            (id, status)
        })
        .collect();

    let complete = revealed || per_blank.values().all(|s| *s == BlankStatus::Correct);

    Judgment {
        per_blank,
        complete,
        revealed,
    }
}
