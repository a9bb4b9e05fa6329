//! A single fill-in-the-blank question.
//!
//! Owns the segmented quote and its placement store for as long as the
//! quote is on screen. Changing quotes or revealing throws the store away
//! and seeds a fresh one.

use rand::Rng;

use crate::choices::build_choices;
use crate::error::QuizError;
use crate::judge::{evaluate, Judgment};
use crate::model::{Location, Quote};
use crate::placement::{MoveOutcome, PlacementStore};
use crate::segmenter::{segment, SegmentedQuote, TermMatcher};

#[derive(Debug, Clone)]
pub struct Question {
    quote: Quote,
    segmented: SegmentedQuote,
    store: PlacementStore,
    decoy_count: usize,
    revealed: bool,
}

impl Question {
    /// Segment `quote` and seed a store with a fresh candidate pool.
    pub fn new<R: Rng + ?Sized>(
        quote: Quote,
        matcher: &TermMatcher,
        vocabulary: &[String],
        decoy_count: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let segmented = segment(&quote.text, matcher);
        if segmented.ground_truth_terms.is_empty() {
            return Err(QuizError::NoTermsInQuote(quote.text));
        }
        let store = fresh_store(&segmented, vocabulary, decoy_count, rng)?;

        Ok(Self {
            quote,
            segmented,
            store,
            decoy_count,
            revealed: false,
        })
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn segmented(&self) -> &SegmentedQuote {
        &self.segmented
    }

    pub fn store(&self) -> &PlacementStore {
        &self.store
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Apply one drag-and-drop move.
    pub fn apply_move(&mut self, origin: Location, dest: Option<Location>) -> MoveOutcome {
        self.store.apply(origin, dest)
    }

    /// Discard all placements and start over with a new candidate pool.
    /// A revealed question is hidden again.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        vocabulary: &[String],
        rng: &mut R,
    ) -> Result<(), QuizError> {
        self.store = fresh_store(&self.segmented, vocabulary, self.decoy_count, rng)?;
        self.revealed = false;
        Ok(())
    }

    /// Show the answers. The store is reseeded and the question counts as complete.
    pub fn reveal<R: Rng + ?Sized>(
        &mut self,
        vocabulary: &[String],
        rng: &mut R,
    ) -> Result<(), QuizError> {
        self.reset(vocabulary, rng)?;
        self.revealed = true;
        Ok(())
    }

    pub fn judge(&self) -> Judgment {
        evaluate(&self.segmented, &self.store, self.revealed)
    }
}

fn fresh_store<R: Rng + ?Sized>(
    segmented: &SegmentedQuote,
    vocabulary: &[String],
    decoy_count: usize,
    rng: &mut R,
) -> Result<PlacementStore, QuizError> {
    let candidates = build_choices(&segmented.ground_truth_terms, vocabulary, decoy_count, rng)?;
    Ok(PlacementStore::new(candidates, segmented.blank_ids()))
}
