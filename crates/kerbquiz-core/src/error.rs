//! Error types for corpus loading and question setup.
//!
//! Move events never produce errors: a gesture that lands somewhere
//! invalid is reported as an ignored move instead (see [`crate::placement`]).

use thiserror::Error;

/// Load-time validation failures for a quote corpus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    /// The vocabulary list was empty.
    #[error("corpus vocabulary is empty")]
    EmptyVocabulary,

    /// A vocabulary entry was empty or whitespace only.
    #[error("vocabulary term #{0} is blank")]
    BlankTerm(usize),

    /// The corpus contains no quotes at all.
    #[error("corpus contains no quotes")]
    NoQuotes,

    /// None of the quotes mention a vocabulary term.
    #[error("none of the {0} quotes contain a vocabulary term")]
    NoPlayableQuotes(usize),
}

/// Errors raised while setting up a question.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// Decoys were requested but there is nothing to draw them from.
    #[error("cannot draw {0} decoys from an empty vocabulary")]
    EmptyVocabularyForDecoys(usize),

    /// The quote has no vocabulary term, so there would be nothing to blank.
    #[error("quote has no vocabulary terms: {0:?}")]
    NoTermsInQuote(String),

    /// A quote index outside the corpus was requested.
    #[error("quote index {index} out of range (corpus has {len} quotes)")]
    QuoteOutOfRange { index: usize, len: usize },
}
