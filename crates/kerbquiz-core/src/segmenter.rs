//! Quote segmentation.
//!
//! Splits a quote into alternating speaker / saying segments and each
//! segment into `term` and `plain` bits. Matching is done by an explicit
//! scanner rather than a regex so the boundary rules can be tested on
//! their own:
//!
//! - a term matches case-insensitively and only as a whole word, so
//!   "rat" never matches inside "grateful";
//! - a speaker label is a run of non-delimiter characters ending in `:`;
//!   any whitespace right after the `:` belongs to the label.
//!
//! Concatenating every bit of every segment reproduces the quote exactly.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;
use crate::model::{Bit, BlankId, Segment, SegmentKind};

/// Separator between a speaker label and what was said.
pub const SPEAKER_SEPARATOR: char = ':';

/// Punctuation that cannot appear inside a speaker label.
const LABEL_DELIMITERS: &[char] = &[
    '.', '!', '?', ';', ',', '"', '\u{201C}', '\u{201D}', '(', ')', '[', ']', SPEAKER_SEPARATOR,
];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A term occurrence inside a quote, as a byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermMatch {
    pub start: usize,
    pub end: usize,
}

/// Compiled vocabulary used to find whole-word, case-insensitive term matches.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    /// Lower-cased terms, longest first so overlapping terms prefer the longer one.
    terms: Vec<Vec<char>>,
}

impl TermMatcher {
    /// Compile a vocabulary. Terms are deduplicated case-insensitively.
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self, CorpusError> {
        if vocabulary.is_empty() {
            return Err(CorpusError::EmptyVocabulary);
        }

        let mut terms: Vec<Vec<char>> = Vec::with_capacity(vocabulary.len());
        for (i, term) in vocabulary.iter().enumerate() {
            let term = term.as_ref().trim();
            if term.is_empty() {
                return Err(CorpusError::BlankTerm(i));
            }
            terms.push(term.chars().flat_map(char::to_lowercase).collect());
        }
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        terms.dedup();

        Ok(Self { terms })
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Find the leftmost whole-word match starting at or after `from` and
    /// ending at or before `limit`.
    pub fn find_in(&self, text: &str, from: usize, limit: usize) -> Option<TermMatch> {
        let limit = limit.min(text.len());
        let mut prev = text[..from].chars().next_back();

        for (offset, ch) in text[from..limit].char_indices() {
            let start = from + offset;
            if !prev.is_some_and(is_word_char) {
                if let Some(end) = self.longest_at(text, start, limit) {
                    return Some(TermMatch { start, end });
                }
            }
            prev = Some(ch);
        }
        None
    }

    /// Find every non-overlapping match in `text`.
    pub fn find_all(&self, text: &str) -> Vec<TermMatch> {
        let mut found = Vec::new();
        let mut cursor = 0;
        while let Some(m) = self.find_in(text, cursor, text.len()) {
            cursor = m.end;
            found.push(m);
        }
        found
    }

    /// Whether the text contains at least one term.
    pub fn contains_term(&self, text: &str) -> bool {
        self.find_in(text, 0, text.len()).is_some()
    }

    fn longest_at(&self, text: &str, start: usize, limit: usize) -> Option<usize> {
        let rest = &text[start..limit];
        self.terms.iter().find_map(|term| {
            let len = prefix_match_len(rest, term)?;
            let end = start + len;
            let next = text[end..].chars().next();
            (!next.is_some_and(is_word_char)).then_some(end)
        })
    }
}

/// Byte length of the prefix of `haystack` whose lower-cased form equals `term`.
fn prefix_match_len(haystack: &str, term: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (offset, ch) in haystack.char_indices() {
        if pos == term.len() {
            return Some(offset);
        }
        for lower in ch.to_lowercase() {
            if term.get(pos) != Some(&lower) {
                return None;
            }
            pos += 1;
        }
    }
    (pos == term.len()).then_some(haystack.len())
}

/// Byte ranges of every speaker label, in order. A label owns its
/// separator and the whitespace that follows it.
pub fn find_speaker_labels(text: &str) -> Vec<Range<usize>> {
    let mut labels = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch == SPEAKER_SEPARATOR {
            if let Some(start) = run_start {
                let mut end = i + ch.len_utf8();
                while let Some(&(j, ws)) = chars.peek() {
                    if !ws.is_whitespace() {
                        break;
                    }
                    end = j + ws.len_utf8();
                    chars.next();
                }
                labels.push(start..end);
            }
            run_start = None;
        } else if LABEL_DELIMITERS.contains(&ch) {
            run_start = None;
        } else if run_start.is_none() && !ch.is_whitespace() {
            run_start = Some(i);
        }
    }

    labels
}

/// A quote broken into segments, plus the terms its blanks expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedQuote {
    /// Matched terms in reading order, original casing preserved.
    pub ground_truth_terms: Vec<String>,
    /// Speaker / saying segments; even indices are speakers.
    pub segments: Vec<Segment>,
}

impl SegmentedQuote {
    /// Every blank with the term it expects, in reading order.
    pub fn blanks(&self) -> Vec<(BlankId, &str)> {
        self.segments
            .iter()
            .enumerate()
            .flat_map(|(s, segment)| {
                segment
                    .bits
                    .iter()
                    .enumerate()
                    .filter(|(_, bit)| bit.is_term())
                    .map(move |(b, bit)| (BlankId::new(s, b), bit.text.as_str()))
            })
            .collect()
    }

    pub fn blank_ids(&self) -> Vec<BlankId> {
        self.blanks().into_iter().map(|(id, _)| id).collect()
    }

    /// The term a blank expects, if `id` addresses a term bit.
    pub fn expected(&self, id: BlankId) -> Option<&str> {
        self.segments
            .get(id.segment)?
            .bits
            .get(id.bit)
            .filter(|bit| bit.is_term())
            .map(|bit| bit.text.as_str())
    }

    /// Reassemble the original quote.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

/// Segment a quote against a compiled vocabulary.
pub fn segment(quote: &str, matcher: &TermMatcher) -> SegmentedQuote {
    let labels = find_speaker_labels(quote);
    let mut ground_truth_terms = Vec::new();
    let mut segments = Vec::with_capacity(labels.len() * 2 + 2);

    let first_label = labels.first().map_or(quote.len(), |l| l.start);
    if !quote.is_empty() && first_label > 0 {
        segments.push(Segment::new(SegmentKind::Speaker));
        segments.push(split_bits(
            quote,
            0..first_label,
            SegmentKind::Saying,
            matcher,
            &mut ground_truth_terms,
        ));
    }

    for (i, label) in labels.iter().enumerate() {
        let saying_end = labels.get(i + 1).map_or(quote.len(), |next| next.start);
        segments.push(split_bits(
            quote,
            label.clone(),
            SegmentKind::Speaker,
            matcher,
            &mut ground_truth_terms,
        ));
        segments.push(split_bits(
            quote,
            label.end..saying_end,
            SegmentKind::Saying,
            matcher,
            &mut ground_truth_terms,
        ));
    }

    tracing::debug!(
        segments = segments.len(),
        terms = ground_truth_terms.len(),
        "segmented quote"
    );

    SegmentedQuote {
        ground_truth_terms,
        segments,
    }
}

fn split_bits(
    text: &str,
    range: Range<usize>,
    kind: SegmentKind,
    matcher: &TermMatcher,
    ground_truth: &mut Vec<String>,
) -> Segment {
    let mut segment = Segment::new(kind);
    let mut cursor = range.start;

    while let Some(m) = matcher.find_in(text, cursor, range.end) {
        if m.start > cursor {
            segment.bits.push(Bit::plain(&text[cursor..m.start]));
        }
        let matched = &text[m.start..m.end];
        ground_truth.push(matched.to_string());
        segment.bits.push(Bit::term(matched));
        cursor = m.end;
    }
    if cursor < range.end {
        segment.bits.push(Bit::plain(&text[cursor..range.end]));
    }

    segment
}
