//! Token filter implementations for token transformation.
//!
//! A filter wraps an upstream [`TokenStream`] and returns a new stream, so
//! filters compose by nesting: the first filter applied is the first to see
//! the tokenizer's output.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// Filters must not pull from upstream until their own stream is pulled.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod distinct;
pub mod lemmas;
pub mod synonym;

// Re-export all filters for convenient access
pub use distinct::DistinctFilter;
pub use lemmas::LemmasFilter;
pub use synonym::{SynonymFilter, SynonymTokens};
