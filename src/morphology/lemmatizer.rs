//! Lemmatizer trait and lemma types.
//!
//! This module defines [`Lemmatizer`], the injected morphological
//! capability: given a lowercase surface word, produce its canonical
//! dictionary base form. The capability is expected to be long-lived,
//! initialized once, and read-only thereafter, so implementations must be
//! `Send + Sync` and deterministic for a fixed dictionary version.
//!
//! # Residual suffixes
//!
//! [`Lemma::residual_suffix`] computes the substring of a surface form after
//! removing a lemma-length character prefix. This is an approximation, not
//! true morphological decomposition: when the lemma is not a literal prefix
//! of the surface form the result can be nonsensical, and callers must
//! tolerate that.
//!
//! # Examples
//!
//! ```
//! use textalyzer::morphology::lemmatizer::Lemma;
//!
//! let lemma = Lemma::new("run");
//! assert_eq!(lemma.residual_suffix("running"), "ning");
//! assert_eq!(lemma.residual_suffix("run"), "");
//! assert_eq!(lemma.residual_suffix("ran"), "");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The canonical dictionary base form of a word.
///
/// Lemmas are produced by a [`Lemmatizer`] and used as grouping keys when
/// collecting inflected forms.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lemma(String);

impl Lemma {
    /// Create a new lemma from the given base form.
    pub fn new<S: Into<String>>(base_form: S) -> Self {
        Lemma(base_form.into())
    }

    /// Get the lemma text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the lemma length in characters.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Compute the residual suffix of a surface form against this lemma.
    ///
    /// Removes the first `char_len()` characters of `surface` and returns
    /// the rest. The stripping is by character count, not by linguistic
    /// analysis: the result is empty when the surface form is no longer
    /// than the lemma, and may be a meaningless fragment when the lemma is
    /// not a literal prefix of the surface form.
    pub fn residual_suffix(&self, surface: &str) -> String {
        surface.chars().skip(self.char_len()).collect()
    }
}

impl fmt::Display for Lemma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Lemma {
    fn from(base_form: &str) -> Self {
        Lemma::new(base_form)
    }
}

impl From<String> for Lemma {
    fn from(base_form: String) -> Self {
        Lemma::new(base_form)
    }
}

/// Trait for the injected morphological analysis capability.
///
/// Implementations map a lowercase surface word to its most likely
/// dictionary base form. Lemmatization must be deterministic for a fixed
/// dictionary version; a word the capability cannot handle is reported as a
/// typed error naming the offending word, never silently substituted.
pub trait Lemmatizer: Send + Sync {
    /// Produce the canonical lemma for the given lowercase word.
    fn lemmatize(&self, word: &str) -> Result<Lemma>;

    /// Get the name of this lemmatizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
