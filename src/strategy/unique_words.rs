//! Unique word count strategy.

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::Result;
use crate::strategy::AnalysisStrategy;
use crate::strategy::report::AnalysisReport;

/// Counts the distinct tokens in the text.
///
/// # Examples
///
/// ```
/// use textalyzer::strategy::{AnalysisReport, AnalysisStrategy, UniqueWordCountStrategy};
///
/// let strategy = UniqueWordCountStrategy::new().unwrap();
/// let report = strategy.analyze("the cat and the dog").unwrap();
///
/// assert_eq!(report, AnalysisReport::UniqueWordCount(4));
/// ```
#[derive(Clone)]
pub struct UniqueWordCountStrategy {
    tokenizer: Arc<dyn Tokenizer>,
}

impl UniqueWordCountStrategy {
    /// Create a new strategy with the default word tokenizer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(WordTokenizer::new()?)))
    }

    /// Create a new strategy with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        UniqueWordCountStrategy { tokenizer }
    }
}

impl AnalysisStrategy for UniqueWordCountStrategy {
    fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let unique: AHashSet<String> = self
            .tokenizer
            .tokenize(text)?
            .map(|token| token.text)
            .collect();

        Ok(AnalysisReport::UniqueWordCount(unique.len()))
    }

    fn name(&self) -> &'static str {
        "unique_word_count"
    }
}
