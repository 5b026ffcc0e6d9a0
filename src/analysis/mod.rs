//! Text analysis module for Jargon.
//!
//! This module provides tokenization, phrase matching, and the filters and
//! analyzers that combine them. Every stage is a lazy, pull-based
//! [`TokenStream`](token::TokenStream).

pub mod analyzer;
pub mod synonym;
pub mod token;
pub mod token_filter;
pub mod token_queue;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use synonym::*;
pub use token::*;
pub use token_filter::*;
pub use token_queue::TokenQueue;
pub use tokenizer::*;
