//! Corpus loading and validation.
//!
//! Loads the static JSON corpus (vocabulary plus quotes grouped by topic),
//! rejects malformed data up front, and keeps only quotes that contain at
//! least one vocabulary term.

use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::model::Quote;
use crate::segmenter::TermMatcher;

/// On-disk corpus layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusFile {
    /// Vocabulary terms.
    #[serde(default)]
    pub kerberoi: Vec<String>,
    /// Quotes grouped by topic.
    #[serde(default)]
    pub quotes: Vec<QuoteGroup>,
}

/// Quotes collected under one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteGroup {
    pub term: String,
    #[serde(default)]
    pub quotes: Vec<String>,
}

/// A validated, playable corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    vocabulary: Vec<String>,
    matcher: TermMatcher,
    quotes: Vec<Quote>,
    dropped: usize,
}

impl Corpus {
    /// Validate a parsed corpus file and drop quotes without any term.
    pub fn from_file(file: CorpusFile) -> Result<Self, CorpusError> {
        let matcher = TermMatcher::new(&file.kerberoi)?;
        let vocabulary: Vec<String> = file
            .kerberoi
            .into_iter()
            .map(|t| t.trim().to_string())
            .collect();

        let all: Vec<Quote> = file
            .quotes
            .into_iter()
            .flat_map(|group| {
                let topic = group.term;
                group.quotes.into_iter().map(move |text| Quote {
                    topic: topic.clone(),
                    text,
                })
            })
            .collect();
        if all.is_empty() {
            return Err(CorpusError::NoQuotes);
        }

        let total = all.len();
        let quotes: Vec<Quote> = all
            .into_iter()
            .filter(|q| matcher.contains_term(&q.text))
            .collect();
        if quotes.is_empty() {
            return Err(CorpusError::NoPlayableQuotes(total));
        }

        let dropped = total - quotes.len();
        if dropped > 0 {
            tracing::warn!("dropped {dropped} of {total} quotes with no vocabulary term");
        }

        Ok(Self {
            vocabulary,
            matcher,
            quotes,
            dropped,
        })
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn matcher(&self) -> &TermMatcher {
        &self.matcher
    }

    /// Playable quotes in current order.
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Number of quotes filtered out at load time.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Playable quote count per topic, in first-seen order.
    pub fn topic_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for quote in &self.quotes {
            match counts.iter_mut().find(|(topic, _)| *topic == quote.topic) {
                Some((_, n)) => *n += 1,
                None => counts.push((quote.topic.clone(), 1)),
            }
        }
        counts
    }

    /// Randomize quote order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.quotes.shuffle(rng);
    }
}

/// Load and validate a corpus JSON file.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus file: {}", path.display()))?;

    parse_corpus_str(&content, path)
}

/// Parse and validate corpus JSON (useful for testing).
pub fn parse_corpus_str(content: &str, source_path: &Path) -> Result<Corpus> {
    let file: CorpusFile = serde_json::from_str(content)
        .with_context(|| format!("failed to parse corpus JSON: {}", source_path.display()))?;

    let corpus = Corpus::from_file(file)
        .with_context(|| format!("invalid corpus: {}", source_path.display()))?;

    tracing::info!(
        quotes = corpus.len(),
        vocabulary = corpus.vocabulary().len(),
        "loaded corpus from {}",
        source_path.display()
    );
    Ok(corpus)
}
