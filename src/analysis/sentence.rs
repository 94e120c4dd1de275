//! Sentence segmentation for text analysis.
//!
//! Splits text into sentence segments on terminal punctuation (`.`, `!`,
//! `?`). Segments are trimmed and empty pieces are dropped, so consecutive
//! delimiters never produce extra segments.

use serde::{Deserialize, Serialize};

/// A single sentence segment extracted from text.
///
/// Carries the trimmed segment text and its index among the retained
/// segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSegment {
    /// The trimmed text of the segment
    pub text: String,

    /// The index of the segment among retained segments (0-based)
    pub index: usize,
}

impl SentenceSegment {
    /// Create a new sentence segment.
    pub fn new<S: Into<String>>(text: S, index: usize) -> Self {
        SentenceSegment {
            text: text.into(),
            index,
        }
    }
}

/// Splits text into sentence segments.
///
/// # Examples
///
/// ```
/// use textalyzer::analysis::sentence::SentenceSplitter;
///
/// let splitter = SentenceSplitter::new();
/// assert_eq!(splitter.count("Hello. World! How?"), 3);
/// assert_eq!(splitter.count("Hello..."), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new sentence splitter.
    pub fn new() -> Self {
        SentenceSplitter
    }

    /// Split the given text into retained sentence segments.
    ///
    /// Each piece between delimiters is trimmed; only non-empty pieces are
    /// kept. Deterministic and total: empty text yields no segments.
    pub fn split(&self, text: &str) -> Vec<SentenceSegment> {
        text.split(['.', '!', '?'])
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .enumerate()
            .map(|(index, piece)| SentenceSegment::new(piece, index))
            .collect()
    }

    /// Count the retained sentence segments in the given text.
    pub fn count(&self, text: &str) -> usize {
        self.split(text).len()
    }
}
