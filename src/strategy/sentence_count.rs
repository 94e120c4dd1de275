//! Sentence count strategy.

use crate::analysis::sentence::SentenceSplitter;
use crate::error::Result;
use crate::strategy::AnalysisStrategy;
use crate::strategy::report::AnalysisReport;

/// Counts the retained sentence segments in the text.
///
/// # Examples
///
/// ```
/// use textalyzer::strategy::{AnalysisReport, AnalysisStrategy, SentenceCountStrategy};
///
/// let strategy = SentenceCountStrategy::new();
/// let report = strategy.analyze("Hello. World! How?").unwrap();
///
/// assert_eq!(report, AnalysisReport::SentenceCount(3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SentenceCountStrategy {
    splitter: SentenceSplitter,
}

impl SentenceCountStrategy {
    /// Create a new sentence count strategy.
    pub fn new() -> Self {
        SentenceCountStrategy {
            splitter: SentenceSplitter::new(),
        }
    }
}

impl AnalysisStrategy for SentenceCountStrategy {
    fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        Ok(AnalysisReport::SentenceCount(self.splitter.count(text)))
    }

    fn name(&self) -> &'static str {
        "sentence_count"
    }
}
