//! Morphological normalization module for Textalyzer.
//!
//! Maps surface word forms to canonical lemmas through an injected
//! capability, and computes residual inflectional suffixes. The crate does
//! not define how lemmas are computed internally; [`lemmatizer::Lemmatizer`]
//! is the capability boundary, and [`dictionary::DictionaryLemmatizer`] is
//! the bundled table-backed implementation.

pub mod dictionary;
pub mod lemmatizer;
