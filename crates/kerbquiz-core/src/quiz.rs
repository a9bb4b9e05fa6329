//! Quiz session: walks through the corpus one question at a time.

use rand::Rng;

use crate::corpus::Corpus;
use crate::error::QuizError;
use crate::judge::Judgment;
use crate::model::Location;
use crate::placement::MoveOutcome;
use crate::question::Question;

/// Session settings.
#[derive(Debug, Clone)]
pub struct QuizOptions {
    /// Extra random candidates per question.
    pub decoy_count: usize,
    /// Randomize quote order when the session starts.
    pub shuffle_quotes: bool,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            decoy_count: 3,
            shuffle_quotes: true,
        }
    }
}

/// A running quiz over a validated corpus.
pub struct Quiz<R> {
    corpus: Corpus,
    options: QuizOptions,
    rng: R,
    index: usize,
    question: Question,
}

impl<R: Rng> Quiz<R> {
    /// Start a session on the first quote.
    pub fn new(mut corpus: Corpus, options: QuizOptions, mut rng: R) -> Result<Self, QuizError> {
        if options.shuffle_quotes {
            corpus.shuffle(&mut rng);
        }
        let question = build_question(&corpus, 0, &options, &mut rng)?;
        tracing::debug!(quotes = corpus.len(), "quiz started");

        Ok(Self {
            corpus,
            options,
            rng,
            index: 0,
            question,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn options(&self) -> &QuizOptions {
        &self.options
    }

    /// Position of the current quote in the (possibly shuffled) corpus.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Advance to the next quote, wrapping at the end. Placements are discarded.
    pub fn next_quote(&mut self) -> Result<&Question, QuizError> {
        let next = (self.index + 1) % self.corpus.len();
        self.select(next)
    }

    /// Jump to a specific quote. Placements are discarded.
    pub fn select(&mut self, index: usize) -> Result<&Question, QuizError> {
        self.question = build_question(&self.corpus, index, &self.options, &mut self.rng)?;
        self.index = index;
        Ok(&self.question)
    }

    pub fn reveal(&mut self) -> Result<(), QuizError> {
        self.question
            .reveal(self.corpus.vocabulary(), &mut self.rng)
    }

    /// Start the current quote over with a fresh candidate pool.
    pub fn reset(&mut self) -> Result<(), QuizError> {
        self.question.reset(self.corpus.vocabulary(), &mut self.rng)
    }

    pub fn apply_move(&mut self, origin: Location, dest: Option<Location>) -> MoveOutcome {
        self.question.apply_move(origin, dest)
    }

    pub fn judge(&self) -> Judgment {
        self.question.judge()
    }
}

fn build_question<R: Rng + ?Sized>(
    corpus: &Corpus,
    index: usize,
    options: &QuizOptions,
    rng: &mut R,
) -> Result<Question, QuizError> {
    let quote = corpus
        .get(index)
        .cloned()
        .ok_or(QuizError::QuoteOutOfRange {
            index,
            len: corpus.len(),
        })?;
    Question::new(
        quote,
        corpus.matcher(),
        corpus.vocabulary(),
        options.decoy_count,
        rng,
    )
}
