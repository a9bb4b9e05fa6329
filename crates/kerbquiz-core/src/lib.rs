//! kerbquiz-core: quote blanking, placement and judging.
//!
//! This crate turns quotes into fill-in-the-blank questions: it segments
//! quotes around glossary terms, builds candidate pools with decoys, tracks
//! where each candidate has been dragged, and judges the result.

pub mod choices;
pub mod config;
pub mod corpus;
pub mod error;
pub mod judge;
pub mod model;
pub mod placement;
pub mod question;
pub mod quiz;
pub mod segmenter;

pub use corpus::{load_corpus, Corpus, CorpusFile, QuoteGroup};
pub use error::{CorpusError, QuizError};
pub use judge::{evaluate, BlankStatus, Judgment};
pub use placement::{IgnoreReason, MoveOutcome, PlacementStore};
pub use question::Question;
pub use quiz::{Quiz, QuizOptions};
pub use segmenter::{segment, SegmentedQuote, TermMatcher};
