//! # Textalyzer
//!
//! A pluggable text-analysis toolkit for Rust.
//!
//! Given raw document text, Textalyzer computes word-frequency statistics,
//! sentence counts, unique-word counts, and morphological inflection
//! groupings for a user-selected set of base words.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic word and sentence tokenization
//! - Swappable analysis strategies behind a single trait
//! - Injected morphological capability (dictionary-backed lemmatization)
//! - Structured, serializable results with a canonical string rendering
//!
//! ## Example
//!
//! ```
//! use textalyzer::engine::TextAnalyzer;
//! use textalyzer::strategy::AbsoluteFrequencyStrategy;
//!
//! let strategy = AbsoluteFrequencyStrategy::new().unwrap();
//! let report = TextAnalyzer::run(&strategy, "the cat sat on the mat").unwrap();
//! println!("{report}");
//! ```

pub mod analysis;
pub mod audit;
pub mod engine;
pub mod error;
pub mod morphology;
pub mod strategy;

pub mod prelude {
    //! Convenient re-exports of the most commonly used types.

    pub use crate::analysis::sentence::{SentenceSegment, SentenceSplitter};
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer, WordTokenizer};
    pub use crate::engine::TextAnalyzer;
    pub use crate::error::{Result, TextalyzerError};
    pub use crate::morphology::dictionary::DictionaryLemmatizer;
    pub use crate::morphology::lemmatizer::{Lemma, Lemmatizer};
    pub use crate::strategy::{
        AbsoluteFrequencyStrategy, AnalysisReport, AnalysisStrategy, InflectionGroupsStrategy,
        RelativeFrequencyStrategy, SentenceCountStrategy, UniqueWordCountStrategy,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
