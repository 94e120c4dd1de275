//! Analysis engine that dispatches to a selected strategy.

use std::sync::Arc;

use crate::error::Result;
use crate::strategy::AnalysisStrategy;
use crate::strategy::report::AnalysisReport;

/// Orchestrator that runs analysis strategies against text.
///
/// The primary contract is the pure [`TextAnalyzer::run`] call, which
/// dispatches to the given strategy and returns its result unchanged. For
/// callers that prefer mutable-selection style, an analyzer can also hold a
/// current strategy, swappable per call with [`set_strategy`].
///
/// No errors originate in the engine itself; failures propagate from the
/// chosen strategy or its capabilities.
///
/// [`set_strategy`]: TextAnalyzer::set_strategy
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use textalyzer::engine::TextAnalyzer;
/// use textalyzer::strategy::{
///     AnalysisReport, SentenceCountStrategy, UniqueWordCountStrategy,
/// };
///
/// // Pure dispatch
/// let report = TextAnalyzer::run(&SentenceCountStrategy::new(), "One. Two.").unwrap();
/// assert_eq!(report, AnalysisReport::SentenceCount(2));
///
/// // Mutable-selection sugar
/// let mut analyzer = TextAnalyzer::new(Arc::new(SentenceCountStrategy::new()));
/// assert_eq!(analyzer.analyze("One. Two.").unwrap(), AnalysisReport::SentenceCount(2));
///
/// analyzer.set_strategy(Arc::new(UniqueWordCountStrategy::new().unwrap()));
/// assert_eq!(analyzer.analyze("One. Two.").unwrap(), AnalysisReport::UniqueWordCount(2));
/// ```
#[derive(Clone)]
pub struct TextAnalyzer {
    strategy: Arc<dyn AnalysisStrategy>,
}

impl TextAnalyzer {
    /// Create an analyzer with the given current strategy.
    pub fn new(strategy: Arc<dyn AnalysisStrategy>) -> Self {
        TextAnalyzer { strategy }
    }

    /// Replace the current strategy.
    pub fn set_strategy(&mut self, strategy: Arc<dyn AnalysisStrategy>) {
        self.strategy = strategy;
    }

    /// The name of the current strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Run the current strategy against the given text.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        Self::run(self.strategy.as_ref(), text)
    }

    /// Run the given strategy against the given text.
    ///
    /// Pure dispatch: returns the strategy's result unchanged.
    pub fn run(strategy: &dyn AnalysisStrategy, text: &str) -> Result<AnalysisReport> {
        strategy.analyze(text)
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer")
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{AbsoluteFrequencyStrategy, SentenceCountStrategy};

    #[test]
    fn test_run_is_pure_dispatch() {
        let strategy = SentenceCountStrategy::new();

        let first = TextAnalyzer::run(&strategy, "One. Two!").unwrap();
        let second = TextAnalyzer::run(&strategy, "One. Two!").unwrap();

        assert_eq!(first, AnalysisReport::SentenceCount(2));
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_strategy_swaps_behavior() {
        let mut analyzer = TextAnalyzer::new(Arc::new(SentenceCountStrategy::new()));
        assert_eq!(analyzer.strategy_name(), "sentence_count");

        analyzer.set_strategy(Arc::new(AbsoluteFrequencyStrategy::new().unwrap()));
        assert_eq!(analyzer.strategy_name(), "absolute_frequency");

        match analyzer.analyze("word word").unwrap() {
            AnalysisReport::Frequencies(table) => assert_eq!(table.get("word"), 2),
            other => panic!("unexpected report: {other:?}"),
        }
    }
}
