//! Typed analysis results.
//!
//! Every strategy produces one [`AnalysisReport`] variant. Reports are
//! structured values: hosts render them as they see fit, and each report
//! also has a canonical string rendering (map keys sorted) so it can be
//! embedded in display output or audit lines.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::morphology::lemmatizer::Lemma;

/// Mapping from token to occurrence count.
///
/// Keys are unique; iteration order is not semantically meaningful. The
/// `Display` rendering sorts keys so that equal tables always render
/// identically.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: HashMap<String, u64, ahash::RandomState>,
}

impl FrequencyTable {
    /// Create an empty frequency table.
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Increment the count for the given token.
    pub fn increment<S: Into<String>>(&mut self, token: S) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Get the count for the given token (zero if absent).
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the total token count of the text.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over (token, count) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(token, count)| (token.as_str(), *count))
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "{{")?;
        for (i, (token, count)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{token}: {count}")?;
        }
        write!(f, "}}")
    }
}

/// Mapping from token to its share of all tokens, as a percentage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelativeFrequencyTable {
    percentages: HashMap<String, f64, ahash::RandomState>,
}

impl RelativeFrequencyTable {
    /// Create an empty relative frequency table.
    pub fn new() -> Self {
        RelativeFrequencyTable::default()
    }

    /// Set the percentage for the given token.
    pub fn insert<S: Into<String>>(&mut self, token: S, percentage: f64) {
        self.percentages.insert(token.into(), percentage);
    }

    /// Get the percentage for the given token (zero if absent).
    pub fn get(&self, token: &str) -> f64 {
        self.percentages.get(token).copied().unwrap_or(0.0)
    }

    /// Number of distinct tokens in the table.
    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }

    /// Sum of all percentages (approximately 100 for non-empty text).
    pub fn total(&self) -> f64 {
        self.percentages.values().sum()
    }

    /// Iterate over (token, percentage) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.percentages
            .iter()
            .map(|(token, percentage)| (token.as_str(), *percentage))
    }
}

impl fmt::Display for RelativeFrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.percentages.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "{{")?;
        for (i, (token, percentage)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{token}: {percentage:.2}%")?;
        }
        write!(f, "}}")
    }
}

/// Mapping from lemma to the residual suffixes of its inflected forms.
///
/// Each group holds one suffix per matching surface token, in text order.
/// Suffixes may be empty (the surface form equals the lemma) or degenerate
/// when the lemma is not a literal prefix of the surface form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InflectionGroups {
    groups: HashMap<Lemma, Vec<String>, ahash::RandomState>,
}

impl InflectionGroups {
    /// Create an empty set of inflection groups.
    pub fn new() -> Self {
        InflectionGroups::default()
    }

    /// Set the suffix sequence for the given lemma, replacing any previous
    /// group with the same key.
    pub fn set_group(&mut self, lemma: Lemma, suffixes: Vec<String>) {
        self.groups.insert(lemma, suffixes);
    }

    /// Get the suffix sequence for the given lemma.
    pub fn get(&self, lemma: &Lemma) -> Option<&[String]> {
        self.groups.get(lemma).map(Vec::as_slice)
    }

    /// Number of lemma groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over (lemma, suffixes) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Lemma, &[String])> {
        self.groups
            .iter()
            .map(|(lemma, suffixes)| (lemma, suffixes.as_slice()))
    }
}

impl fmt::Display for InflectionGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.groups.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        write!(f, "{{")?;
        for (i, (lemma, suffixes)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lemma}: [")?;
            for (j, suffix) in suffixes.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "\"{suffix}\"")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

/// The result of running one analysis strategy.
///
/// A tagged variant per strategy, matched exhaustively by hosts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnalysisReport {
    /// Count of each distinct token
    Frequencies(FrequencyTable),
    /// Percentage share of each distinct token
    RelativeFrequencies(RelativeFrequencyTable),
    /// Number of retained sentence segments
    SentenceCount(usize),
    /// Number of distinct tokens
    UniqueWordCount(usize),
    /// Residual suffixes of inflected forms, grouped by seed lemma
    InflectionGroups(InflectionGroups),
}

impl AnalysisReport {
    /// Serialize this report to a JSON string for host consumption.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisReport::Frequencies(table) => write!(f, "{table}"),
            AnalysisReport::RelativeFrequencies(table) => write!(f, "{table}"),
            AnalysisReport::SentenceCount(count) => write!(f, "{count}"),
            AnalysisReport::UniqueWordCount(count) => write!(f, "{count}"),
            AnalysisReport::InflectionGroups(groups) => write!(f, "{groups}"),
        }
    }
}
