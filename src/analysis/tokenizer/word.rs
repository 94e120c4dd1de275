//! Word-character tokenizer implementation.
//!
//! This is the default tokenizer. It extracts maximal runs of word
//! characters (letters, digits, underscore) and case-folds every token to
//! lowercase, so pure punctuation and whitespace never produce tokens.
//!
//! # Examples
//!
//! ```
//! use textalyzer::analysis::token::Token;
//! use textalyzer::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<Token> = tokenizer.tokenize("Hello, World!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{Result, TextalyzerError};

/// A tokenizer that extracts maximal word-character runs.
///
/// Uses the regex word-character class, so Unicode letters and digits are
/// included in tokens. All token text is lowercased; byte offsets refer to
/// the original, non-folded text.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default pattern.
    ///
    /// The default pattern `r"\w+"` matches sequences of word characters.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new word tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TextalyzerError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(
                    mat.as_str().to_lowercase(),
                    position,
                    mat.start(),
                    mat.end(),
                )
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}
