//! Core data model types for kerbquiz.
//!
//! These are the fundamental types shared by the segmenter, the move
//! engine and the judge: quotes, bits, segments, candidates and the
//! identifiers used to address blanks and collections.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A single quote from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Topic or section the quote was collected under (e.g. "Fall 2019").
    pub topic: String,
    /// Full quote text, speaker labels included.
    pub text: String,
}

/// What a bit of quote text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitKind {
    /// A vocabulary term that becomes a blank.
    Term,
    /// Literal surrounding text.
    Plain,
}

/// The atomic unit of a segmented quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bit {
    pub kind: BitKind,
    /// Text exactly as it appears in the quote.
    pub text: String,
}

impl Bit {
    pub fn term(text: impl Into<String>) -> Self {
        Self {
            kind: BitKind::Term,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: BitKind::Plain,
            text: text.into(),
        }
    }

    pub fn is_term(&self) -> bool {
        self.kind == BitKind::Term
    }
}

/// Whether a segment is a speaker label or what the speaker said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Speaker,
    Saying,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Speaker => write!(f, "speaker"),
            SegmentKind::Saying => write!(f, "saying"),
        }
    }
}

/// An ordered run of bits forming one speaker label or one saying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub bits: Vec<Bit>,
}

impl Segment {
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            bits: Vec::new(),
        }
    }

    /// Concatenated text of all bits.
    pub fn text(&self) -> String {
        self.bits.iter().map(|b| b.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

/// Address of a blank: the term bit it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId {
    pub segment: usize,
    pub bit: usize,
}

impl BlankId {
    pub fn new(segment: usize, bit: usize) -> Self {
        Self { segment, bit }
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.segment, self.bit)
    }
}

impl FromStr for BlankId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (segment, bit) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("invalid blank id: {s} (expected <segment>.<bit>)"))?;
        let segment = segment
            .parse()
            .map_err(|_| format!("invalid segment index in blank id: {s}"))?;
        let bit = bit
            .parse()
            .map_err(|_| format!("invalid bit index in blank id: {s}"))?;
        Ok(Self { segment, bit })
    }
}

impl Serialize for BlankId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlankId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A collection that can hold candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionId {
    /// The pool of unplaced candidates.
    Tray,
    /// A single blank (capacity one).
    Blank(BlankId),
}

impl CollectionId {
    /// Maximum number of candidates this collection may hold.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            CollectionId::Tray => None,
            CollectionId::Blank(_) => Some(1),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CollectionId::Blank(_))
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionId::Tray => write!(f, "tray"),
            CollectionId::Blank(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for CollectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tray" | "choices" => Ok(CollectionId::Tray),
            other => other.parse().map(CollectionId::Blank),
        }
    }
}

impl Serialize for CollectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CollectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Opaque identity of a candidate, unique within a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(Uuid);

impl CandidateId {
    /// Build an identity from 16 random bytes.
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// A draggable instance of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub term: String,
}

/// One end of a move event: a collection and a position inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub collection: CollectionId,
    pub index: usize,
}

impl Location {
    pub fn new(collection: CollectionId, index: usize) -> Self {
        Self { collection, index }
    }

    pub fn tray(index: usize) -> Self {
        Self::new(CollectionId::Tray, index)
    }

    pub fn blank(id: BlankId) -> Self {
        Self::new(CollectionId::Blank(id), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_id_display_and_parse() {
        let id = BlankId::new(1, 3);
        assert_eq!(id.to_string(), "1.3");
        assert_eq!("1.3".parse::<BlankId>().unwrap(), id);
        assert!("13".parse::<BlankId>().is_err());
        assert!("a.b".parse::<BlankId>().is_err());
    }

    #[test]
    fn collection_id_parse() {
        assert_eq!("tray".parse::<CollectionId>().unwrap(), CollectionId::Tray);
        assert_eq!("TRAY".parse::<CollectionId>().unwrap(), CollectionId::Tray);
        assert_eq!(
            "0.2".parse::<CollectionId>().unwrap(),
            CollectionId::Blank(BlankId::new(0, 2))
        );
        assert!("shelf".parse::<CollectionId>().is_err());
    }

    #[test]
    fn collection_id_serializes_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(CollectionId::Tray, 2);
        map.insert(CollectionId::Blank(BlankId::new(1, 1)), 0);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"tray":2,"1.1":0}"#);
        let back: std::collections::BTreeMap<CollectionId, i32> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn capacity() {
        assert_eq!(CollectionId::Tray.capacity(), None);
        assert_eq!(
            CollectionId::Blank(BlankId::new(0, 0)).capacity(),
            Some(1)
        );
    }

    #[test]
    fn segment_text_concatenates_bits() {
        let seg = Segment {
            kind: SegmentKind::Saying,
            bits: vec![Bit::plain("my dear "), Bit::term("Watson"), Bit::plain(".")],
        };
        assert_eq!(seg.text(), "my dear Watson.");
    }
}
