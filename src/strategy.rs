//! Analysis strategy implementations.
//!
//! Each strategy is one selectable analysis algorithm: it consumes
//! tokenizer (and, for inflection grouping, lemmatizer) output and produces
//! one typed [`report::AnalysisReport`] variant. Strategies are pure given
//! their inputs and capabilities, so repeated runs over the same text yield
//! identical results.

use crate::error::Result;

/// Trait for analysis strategies that turn text into a typed report.
///
/// The trait requires `Send + Sync` so a strategy can be shared across
/// threads; analyses over different texts are independent and safe to run
/// in parallel.
pub trait AnalysisStrategy: Send + Sync {
    /// Run this strategy against the given text.
    ///
    /// Empty text yields an empty or zero-valued report, never an error.
    /// Failures of an injected capability propagate as typed errors.
    fn analyze(&self, text: &str) -> Result<AnalysisReport>;

    /// Get the name of this strategy (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual strategy modules
pub mod absolute_frequency;
pub mod inflection_groups;
pub mod relative_frequency;
pub mod report;
pub mod sentence_count;
pub mod unique_words;

// Re-export all strategies and report types for convenient access
pub use absolute_frequency::AbsoluteFrequencyStrategy;
pub use inflection_groups::InflectionGroupsStrategy;
pub use relative_frequency::RelativeFrequencyStrategy;
pub use report::{AnalysisReport, FrequencyTable, InflectionGroups, RelativeFrequencyTable};
pub use sentence_count::SentenceCountStrategy;
pub use unique_words::UniqueWordCountStrategy;
