//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the leaf producers of the analysis pipeline: they turn a
//! text or byte source into a lazy [`TokenStream`].
//!
//! # Available Tokenizers
//!
//! - [`text::TextTokenizer`] - Prose with technical terms, lossless
//! - [`html::HtmlTokenizer`] - Verbatim markup, text nodes via `TextTokenizer`
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::tokenizer::{TextTokenizer, Tokenizer};
//!
//! let tokenizer = TextTokenizer::new();
//! let count = tokenizer.tokenize("Hello world").unwrap().token_count().unwrap();
//! assert_eq!(count, 3);
//! ```

use std::io::BufRead;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared across
/// threads; every stream it produces is independent.
pub trait Tokenizer: Send + Sync {
    /// Tokenize in-memory text.
    fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Tokenize a buffered byte source, which must hold UTF-8.
    fn tokenize_reader<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod html;
pub mod policy;
pub mod text;

// Re-export all tokenizers for convenient access
pub use html::HtmlTokenizer;
pub use policy::PunctPolicy;
pub use text::{TextTokenizer, TextTokens};
