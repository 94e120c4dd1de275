//! Dictionary-backed lemmatizer implementation.
//!
//! Maps exact surface forms to their lemmas using an in-memory table. This
//! is the bundled implementation of the [`Lemmatizer`] capability; hosts
//! with a real morphological model inject their own implementation instead.
//!
//! The table is built from lemma groups, where each group lists the lemma
//! first followed by its inflected forms:
//!
//! ```json
//! [
//!   ["run", "runs", "ran", "running"],
//!   ["cat", "cats"]
//! ]
//! ```
//!
//! Words absent from the table lemmatize to themselves, matching the
//! behavior of dictionary tools that guess the base form of unknown words.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, TextalyzerError};
use crate::morphology::lemmatizer::{Lemma, Lemmatizer};

/// A lemmatizer backed by an exact surface-form lookup table.
///
/// The table is read-only after construction, so a single instance can be
/// shared across threads behind an `Arc` and used by concurrent analyses.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    /// Surface form -> lemma
    entries: Arc<HashMap<String, Lemma, ahash::RandomState>>,
}

impl DictionaryLemmatizer {
    /// Create an empty dictionary lemmatizer.
    ///
    /// Every word lemmatizes to itself until entries are provided.
    pub fn new() -> Self {
        DictionaryLemmatizer {
            entries: Arc::new(HashMap::default()),
        }
    }

    /// Build a dictionary lemmatizer from lemma groups.
    ///
    /// Each group lists the lemma first, followed by its inflected surface
    /// forms. All entries are lowercased. The lemma itself is also inserted
    /// as a surface form, so it lemmatizes to itself.
    pub fn from_lemma_groups<G, W>(groups: G) -> Result<Self>
    where
        G: IntoIterator<Item = W>,
        W: IntoIterator<Item = String>,
    {
        let mut entries: HashMap<String, Lemma, ahash::RandomState> = HashMap::default();

        for group in groups {
            let mut forms = group.into_iter();

            let Some(base_form) = forms.next() else {
                continue;
            };
            let base_form = base_form.trim().to_lowercase();
            if base_form.is_empty() {
                return Err(TextalyzerError::dictionary(
                    "lemma group starts with an empty base form",
                ));
            }

            let lemma = Lemma::new(base_form.clone());
            entries.insert(base_form, lemma.clone());

            for form in forms {
                let form = form.trim().to_lowercase();
                if form.is_empty() {
                    return Err(TextalyzerError::dictionary(format!(
                        "empty surface form in group for lemma '{lemma}'"
                    )));
                }
                entries.insert(form, lemma.clone());
            }
        }

        Ok(DictionaryLemmatizer {
            entries: Arc::new(entries),
        })
    }

    /// Build a dictionary lemmatizer from a JSON string of lemma groups.
    ///
    /// The JSON document is an array of string arrays, each group listing
    /// the lemma first followed by its inflected forms.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let groups: Vec<Vec<String>> = serde_json::from_str(json)?;
        Self::from_lemma_groups(groups)
    }

    /// Load a dictionary lemmatizer from a JSON file of lemma groups.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            TextalyzerError::dictionary(format!(
                "Failed to read dictionary file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Number of surface forms in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> Result<Lemma> {
        let word = word.trim();
        if word.is_empty() {
            return Err(TextalyzerError::morphology(
                word,
                "cannot lemmatize an empty word",
            ));
        }

        let folded = word.to_lowercase();
        match self.entries.get(&folded) {
            Some(lemma) => Ok(lemma.clone()),
            // Unknown words are their own base form.
            None => Ok(Lemma::new(folded)),
        }
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn english_dictionary() -> DictionaryLemmatizer {
        DictionaryLemmatizer::from_lemma_groups(vec![
            vec![
                "run".to_string(),
                "runs".to_string(),
                "ran".to_string(),
                "running".to_string(),
            ],
            vec!["cat".to_string(), "cats".to_string()],
        ])
        .unwrap()
    }

    #[test]
    fn test_lemmatize_known_forms() {
        let lemmatizer = english_dictionary();

        assert_eq!(lemmatizer.lemmatize("runs").unwrap(), Lemma::new("run"));
        assert_eq!(lemmatizer.lemmatize("ran").unwrap(), Lemma::new("run"));
        assert_eq!(lemmatizer.lemmatize("run").unwrap(), Lemma::new("run"));
        assert_eq!(lemmatizer.lemmatize("cats").unwrap(), Lemma::new("cat"));
    }

    #[test]
    fn test_lemmatize_is_case_insensitive() {
        let lemmatizer = english_dictionary();

        assert_eq!(lemmatizer.lemmatize("Running").unwrap(), Lemma::new("run"));
        assert_eq!(lemmatizer.lemmatize("RAN").unwrap(), Lemma::new("run"));
    }

    #[test]
    fn test_lemmatize_unknown_word_is_identity() {
        let lemmatizer = english_dictionary();

        assert_eq!(lemmatizer.lemmatize("table").unwrap(), Lemma::new("table"));
    }

    #[test]
    fn test_lemmatize_empty_word_fails() {
        let lemmatizer = english_dictionary();

        let error = lemmatizer.lemmatize("  ").unwrap_err();
        assert!(matches!(error, TextalyzerError::Morphology { .. }));
    }

    #[test]
    fn test_empty_group_is_skipped() {
        let lemmatizer =
            DictionaryLemmatizer::from_lemma_groups(Vec::<Vec<String>>::from([vec![]])).unwrap();

        assert!(lemmatizer.is_empty());
    }

    #[test]
    fn test_empty_form_is_rejected() {
        let result = DictionaryLemmatizer::from_lemma_groups(vec![vec![
            "run".to_string(),
            "  ".to_string(),
        ]]);

        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_str() {
        let lemmatizer =
            DictionaryLemmatizer::from_json_str(r#"[["go", "goes", "went", "going"]]"#).unwrap();

        assert_eq!(lemmatizer.lemmatize("went").unwrap(), Lemma::new("go"));
        assert_eq!(lemmatizer.len(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[["run", "runs", "ran"]]"#).unwrap();

        let lemmatizer = DictionaryLemmatizer::load_from_file(file.path()).unwrap();
        assert_eq!(lemmatizer.lemmatize("ran").unwrap(), Lemma::new("run"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = DictionaryLemmatizer::load_from_file("/no/such/dictionary.json");
        assert!(matches!(result, Err(TextalyzerError::Dictionary(_))));
    }

    #[test]
    fn test_lemmatizer_name() {
        assert_eq!(DictionaryLemmatizer::new().name(), "dictionary");
    }
}
