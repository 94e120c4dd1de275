//! Relative word frequency strategy.

use std::sync::Arc;

use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::Result;
use crate::strategy::AnalysisStrategy;
use crate::strategy::report::{AnalysisReport, FrequencyTable, RelativeFrequencyTable};

/// Computes each distinct token's share of all tokens as a percentage.
///
/// Zero-token text yields an empty table by policy rather than a division
/// error.
///
/// # Examples
///
/// ```
/// use textalyzer::strategy::{AnalysisReport, AnalysisStrategy, RelativeFrequencyStrategy};
///
/// let strategy = RelativeFrequencyStrategy::new().unwrap();
/// let report = strategy.analyze("yes yes no").unwrap();
///
/// match report {
///     AnalysisReport::RelativeFrequencies(table) => {
///         assert!((table.get("yes") - 66.666).abs() < 0.01);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone)]
pub struct RelativeFrequencyStrategy {
    tokenizer: Arc<dyn Tokenizer>,
}

impl RelativeFrequencyStrategy {
    /// Create a new strategy with the default word tokenizer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_tokenizer(Arc::new(WordTokenizer::new()?)))
    }

    /// Create a new strategy with a custom tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        RelativeFrequencyStrategy { tokenizer }
    }
}

impl AnalysisStrategy for RelativeFrequencyStrategy {
    fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let mut counts = FrequencyTable::new();
        for token in self.tokenizer.tokenize(text)? {
            counts.increment(token.text);
        }

        let mut table = RelativeFrequencyTable::new();
        let total = counts.total();
        if total > 0 {
            for (token, count) in counts.iter() {
                table.insert(token, (count as f64 / total as f64) * 100.0);
            }
        }

        Ok(AnalysisReport::RelativeFrequencies(table))
    }

    fn name(&self) -> &'static str {
        "relative_frequency"
    }
}
