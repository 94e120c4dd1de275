//! Tokenizer implementations for text analysis.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into word tokens.
///
/// Tokenization is deterministic and total: every text produces the same
/// token sequence on repeated calls, and empty text produces an empty
/// stream rather than an error.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of lowercased word tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod unicode_word;
pub mod word;

// Re-export all tokenizers for convenient access
pub use unicode_word::UnicodeWordTokenizer;
pub use word::WordTokenizer;
