//! Glossary parsing.
//!
//! Each line may carry one parenthesized handle such as
//! `Sherlock Holmes (holmes)`; that handle is the vocabulary term.

use std::sync::LazyLock;

use regex::Regex;

static TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\S+)\)").expect("glossary pattern is valid"));

/// Extract vocabulary terms from glossary text, in file order.
pub fn parse_glossary(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| TERM_RE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
