//! kerbquiz-import: corpus preprocessing.
//!
//! Turns the plain-text glossary (`kerbs.txt`) and quoteboard
//! (`quoteboard.txt`) into the JSON corpus that `kerbquiz-core` loads.

pub mod error;
pub mod glossary;
pub mod quoteboard;

use std::path::Path;

use anyhow::{Context, Result};

use kerbquiz_core::corpus::CorpusFile;

pub use error::ImportError;
pub use glossary::parse_glossary;
pub use quoteboard::parse_quoteboard;

/// Settings for an import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Quoteboard sections older than this year are skipped.
    pub min_year: u32,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { min_year: 2018 }
    }
}

/// Build a corpus from in-memory glossary and quoteboard text.
pub fn import_corpus_str(
    glossary: &str,
    quoteboard: &str,
    options: &ImportOptions,
) -> Result<CorpusFile, ImportError> {
    let kerberoi = parse_glossary(glossary);
    if kerberoi.is_empty() {
        return Err(ImportError::EmptyGlossary);
    }

    let quotes = parse_quoteboard(quoteboard, options.min_year);
    if quotes.is_empty() {
        return Err(ImportError::NoQuotes {
            min_year: options.min_year,
        });
    }

    for group in &quotes {
        tracing::info!("{}: {} quotes", group.term, group.quotes.len());
    }
    Ok(CorpusFile { kerberoi, quotes })
}

/// Read both source files and build a corpus.
pub fn import_corpus(
    glossary_path: &Path,
    quoteboard_path: &Path,
    options: &ImportOptions,
) -> Result<CorpusFile> {
    let glossary = std::fs::read_to_string(glossary_path)
        .with_context(|| format!("failed to read glossary: {}", glossary_path.display()))?;
    let quoteboard = std::fs::read_to_string(quoteboard_path)
        .with_context(|| format!("failed to read quoteboard: {}", quoteboard_path.display()))?;

    let corpus = import_corpus_str(&glossary, &quoteboard, options)?;
    tracing::info!(
        terms = corpus.kerberoi.len(),
        sections = corpus.quotes.len(),
        "imported corpus"
    );
    Ok(corpus)
}

/// Write a corpus as pretty-printed JSON, creating parent directories.
pub fn write_corpus(path: &Path, corpus: &CorpusFile) -> Result<()> {
    let json = serde_json::to_string_pretty(corpus).context("failed to serialize corpus")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write corpus to {}", path.display()))?;
    Ok(())
}
