//! Text analysis module for Textalyzer.
//!
//! This module provides the tokenization layer: word tokens, word
//! tokenizers, and sentence segmentation.

pub mod sentence;
pub mod token;
pub mod tokenizer;
