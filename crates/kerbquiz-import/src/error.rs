//! Import error types.

use thiserror::Error;

/// Problems with the raw text sources.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// No line of the glossary carried a `(term)` token.
    #[error("glossary contains no (term) entries")]
    EmptyGlossary,

    /// No quoteboard section at or after the cut-off year had any quotes.
    #[error("no quotes found in sections from {min_year} onwards")]
    NoQuotes { min_year: u32 },
}
