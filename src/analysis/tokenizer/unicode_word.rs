//! Unicode word tokenizer implementation.
//!
//! This module provides an alternative tokenizer that splits text using
//! Unicode word boundary rules (UAX #29). It properly handles international
//! text and filters out non-word segments like punctuation and whitespace.
//!
//! # Examples
//!
//! ```
//! use textalyzer::analysis::token::Token;
//! use textalyzer::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<Token> = tokenizer.tokenize("Café, résumé!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "café");
//! assert_eq!(tokens[1].text, "résumé");
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Uses the Unicode Text Segmentation algorithm (UAX #29) to identify word
/// boundaries, keeping only segments that contain at least one alphanumeric
/// character. Token text is lowercased like the default tokenizer's.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .enumerate()
            .map(|(position, (start, word))| {
                Token::with_offsets(word.to_lowercase(), position, start, start + word.len())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
