//! Absolute word frequency strategy.

use std::sync::Arc;

use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::Result;
use crate::strategy::AnalysisStrategy;
use crate::strategy::report::{AnalysisReport, FrequencyTable};

/// Counts the occurrences of each distinct token in the text.
///
/// # Examples
///
/// ```
/// use textalyzer::strategy::{AbsoluteFrequencyStrategy, AnalysisReport, AnalysisStrategy};
///
/// let strategy = AbsoluteFrequencyStrategy::new().unwrap();
/// let report = strategy.analyze("the cat sat on the mat").unwrap();
///
/// match report {
///     AnalysisReport::Frequencies(table) => {
///         assert_eq!(table.get("the"), 2);
///         assert_eq!(table.get("cat"), 1);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone)]
pub struct AbsoluteFrequencyStrategy {
    tokenizer: Arc<dyn Tokenizer>,
}

impl AbsoluteFrequencyStrategy {
    /// Create a new strategy with the default word tokenizer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(WordTokenizer::new()?)))
    }

    /// Create a new strategy with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        AbsoluteFrequencyStrategy { tokenizer }
    }
}

impl AnalysisStrategy for AbsoluteFrequencyStrategy {
    fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let mut table = FrequencyTable::new();
        for token in self.tokenizer.tokenize(text)? {
            table.increment(token.text);
        }

        Ok(AnalysisReport::Frequencies(table))
    }

    fn name(&self) -> &'static str {
        "absolute_frequency"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(text: &str) -> FrequencyTable {
        let strategy = AbsoluteFrequencyStrategy::new().unwrap();
        match strategy.analyze(text).unwrap() {
            AnalysisReport::Frequencies(table) => table,
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn test_absolute_frequency() {
        let table = frequencies("the cat sat on the mat");

        assert_eq!(table.get("the"), 2);
        assert_eq!(table.get("cat"), 1);
        assert_eq!(table.get("sat"), 1);
        assert_eq!(table.get("on"), 1);
        assert_eq!(table.get("mat"), 1);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_counts_sum_to_token_count() {
        let table = frequencies("one two two three three three");
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_case_folding_merges_counts() {
        let table = frequencies("The the THE");
        assert_eq!(table.get("the"), 3);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_text() {
        let table = frequencies("");
        assert!(table.is_empty());
    }

    #[test]
    fn test_strategy_name() {
        let strategy = AbsoluteFrequencyStrategy::new().unwrap();
        assert_eq!(strategy.name(), "absolute_frequency");
    }
}
