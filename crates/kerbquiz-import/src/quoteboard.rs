//! Quoteboard parsing.
//!
//! The quoteboard is a list of sections, each opened by a header such as
//! `=== Fall 2019 ===`, containing one quote per `*` bullet line.

use std::sync::LazyLock;

use regex::Regex;

use kerbquiz_core::corpus::QuoteGroup;

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^===\s?(.*?(\d+))\s?===").expect("quoteboard header pattern is valid")
});

/// A parsed section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub name: String,
    pub year: u32,
}

/// Parse a header line, e.g. `=== Spring 2020 ===`.
pub fn parse_header(line: &str) -> Option<SectionHeader> {
    let caps = HEADER_RE.captures(line)?;
    let name = caps.get(1)?.as_str().to_string();
    let year = match caps.get(2)?.as_str().parse() {
        Ok(year) => year,
        Err(_) => {
            tracing::warn!("ignoring header with unreadable year: {line}");
            return None;
        }
    };
    Some(SectionHeader { name, year })
}

/// Collect quotes from every section dated `min_year` or later.
///
/// Bullets before the first accepted header, or inside an older section,
/// are ignored. Sections with no quotes are left out.
pub fn parse_quoteboard(text: &str, min_year: u32) -> Vec<QuoteGroup> {
    let mut groups = Vec::new();
    let mut current: Option<QuoteGroup> = None;

    for line in text.lines() {
        if let Some(header) = parse_header(line) {
            groups.extend(current.take().filter(|g| !g.quotes.is_empty()));
            if header.year >= min_year {
                current = Some(QuoteGroup {
                    term: header.name,
                    quotes: Vec::new(),
                });
            } else {
                tracing::debug!("skipping section {} (before {min_year})", header.name);
            }
            continue;
        }

        if let (Some(group), Some(quote)) = (current.as_mut(), line.strip_prefix('*')) {
            let quote = quote.trim();
            if !quote.is_empty() {
                group.quotes.push(quote.to_string());
            }
        }
    }
    groups.extend(current.filter(|g| !g.quotes.is_empty()));

    groups
}
