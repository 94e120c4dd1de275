//! Inflection grouping strategy.
//!
//! For each seed word, finds every token in the text whose lemma matches
//! the seed's lemma and records its residual suffix, in text order. This is
//! the only strategy that depends on the injected morphological capability.
//!
//! Every token is lemmatized against every seed word, so the cost is
//! O(tokens x seeds); hosts analyzing very large texts with many seeds
//! should impose their own timeout.

use std::sync::Arc;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};
use crate::error::Result;
use crate::morphology::lemmatizer::Lemmatizer;
use crate::strategy::AnalysisStrategy;
use crate::strategy::report::{AnalysisReport, InflectionGroups};

/// Groups the inflected forms of seed words found in the text.
///
/// Seed words are normalized to lowercase at construction. Duplicate seeds
/// that share a lemma collapse to a single group: each seed rebuilds its
/// lemma's suffix sequence from scratch, so the last one processed wins.
/// The outcome is identical for identical text either way.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use textalyzer::morphology::dictionary::DictionaryLemmatizer;
/// use textalyzer::morphology::lemmatizer::Lemma;
/// use textalyzer::strategy::{AnalysisReport, AnalysisStrategy, InflectionGroupsStrategy};
///
/// let lemmatizer = DictionaryLemmatizer::from_json_str(
///     r#"[["run", "runs", "ran", "running"]]"#,
/// ).unwrap();
/// let strategy =
///     InflectionGroupsStrategy::new(Arc::new(lemmatizer), ["run"]).unwrap();
///
/// let report = strategy.analyze("he runs and ran and running").unwrap();
/// match report {
///     AnalysisReport::InflectionGroups(groups) => {
///         assert_eq!(
///             groups.get(&Lemma::new("run")),
///             Some(&["s".to_string(), "".to_string(), "ning".to_string()][..])
///         );
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone)]
pub struct InflectionGroupsStrategy {
    tokenizer: Arc<dyn Tokenizer>,
    lemmatizer: Arc<dyn Lemmatizer>,
    seeds: Vec<String>,
}

impl InflectionGroupsStrategy {
    /// Create a new strategy with the default word tokenizer.
    ///
    /// Seed words are trimmed and lowercased; empty seeds are dropped. An
    /// empty seed collection is allowed and yields an empty report.
    pub fn new<I, S>(lemmatizer: Arc<dyn Lemmatizer>, seeds: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_tokenizer(
            Arc::new(WordTokenizer::new()?),
            lemmatizer,
            seeds,
        ))
    }

    /// Create a new strategy with a custom tokenizer.
    pub fn with_tokenizer<I, S>(
        tokenizer: Arc<dyn Tokenizer>,
        lemmatizer: Arc<dyn Lemmatizer>,
        seeds: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let seeds = seeds
            .into_iter()
            .map(|seed| seed.as_ref().trim().to_lowercase())
            .filter(|seed| !seed.is_empty())
            .collect();

        InflectionGroupsStrategy {
            tokenizer,
            lemmatizer,
            seeds,
        }
    }

    /// The normalized seed words this strategy searches for.
    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }
}

impl AnalysisStrategy for InflectionGroupsStrategy {
    fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();

        let mut groups = InflectionGroups::new();
        for seed in &self.seeds {
            let lemma = self.lemmatizer.lemmatize(seed)?;

            let mut suffixes = Vec::new();
            for token in &tokens {
                if self.lemmatizer.lemmatize(&token.text)? == lemma {
                    suffixes.push(lemma.residual_suffix(&token.text));
                }
            }

            // A later seed with the same lemma replaces the whole group.
            groups.set_group(lemma, suffixes);
        }

        Ok(AnalysisReport::InflectionGroups(groups))
    }

    fn name(&self) -> &'static str {
        "inflection_groups"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextalyzerError;
    use crate::morphology::dictionary::DictionaryLemmatizer;
    use crate::morphology::lemmatizer::Lemma;

    fn english_lemmatizer() -> Arc<DictionaryLemmatizer> {
        Arc::new(
            DictionaryLemmatizer::from_lemma_groups(vec![
                vec![
                    "run".to_string(),
                    "runs".to_string(),
                    "ran".to_string(),
                    "running".to_string(),
                ],
                vec!["cat".to_string(), "cats".to_string()],
            ])
            .unwrap(),
        )
    }

    fn groups_for(seeds: &[&str], text: &str) -> InflectionGroups {
        let strategy =
            InflectionGroupsStrategy::new(english_lemmatizer(), seeds.iter().copied()).unwrap();
        match strategy.analyze(text).unwrap() {
            AnalysisReport::InflectionGroups(groups) => groups,
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn test_inflection_groups() {
        let groups = groups_for(&["run"], "he runs and ran and running");

        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups.get(&Lemma::new("run")),
            Some(&["s".to_string(), "".to_string(), "ning".to_string()][..])
        );
    }

    #[test]
    fn test_suffixes_in_text_order() {
        let groups = groups_for(&["run"], "running ran runs");

        assert_eq!(
            groups.get(&Lemma::new("run")),
            Some(&["ning".to_string(), "".to_string(), "s".to_string()][..])
        );
    }

    #[test]
    fn test_seed_case_is_folded() {
        let groups = groups_for(&["RUN"], "she runs");

        assert_eq!(groups.get(&Lemma::new("run")), Some(&["s".to_string()][..]));
    }

    #[test]
    fn test_non_matching_tokens_excluded() {
        let groups = groups_for(&["cat"], "cats chase rats");

        assert_eq!(groups.get(&Lemma::new("cat")), Some(&["s".to_string()][..]));
    }

    #[test]
    fn test_duplicate_seeds_collapse() {
        let groups = groups_for(&["runs", "running"], "he ran");

        // Both seeds lemmatize to "run"; one group survives.
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get(&Lemma::new("run")), Some(&["".to_string()][..]));
    }

    #[test]
    fn test_empty_text_maps_seeds_to_empty_groups() {
        let groups = groups_for(&["run", "cat"], "");

        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get(&Lemma::new("run")), Some(&[][..]));
        assert_eq!(groups.get(&Lemma::new("cat")), Some(&[][..]));
    }

    #[test]
    fn test_empty_seed_collection() {
        let groups = groups_for(&[], "he runs and runs");
        assert!(groups.is_empty());
    }

    #[test]
    fn test_lemmatizer_failure_propagates() {
        struct FailingLemmatizer;

        impl Lemmatizer for FailingLemmatizer {
            fn lemmatize(&self, word: &str) -> crate::error::Result<Lemma> {
                Err(TextalyzerError::morphology(word, "unsupported characters"))
            }

            fn name(&self) -> &'static str {
                "failing"
            }
        }

        let strategy =
            InflectionGroupsStrategy::new(Arc::new(FailingLemmatizer), ["run"]).unwrap();
        let error = strategy.analyze("he runs").unwrap_err();

        match error {
            TextalyzerError::Morphology { word, .. } => assert_eq!(word, "run"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strategy_name() {
        let strategy = InflectionGroupsStrategy::new(english_lemmatizer(), ["run"]).unwrap();
        assert_eq!(strategy.name(), "inflection_groups");
    }
}
