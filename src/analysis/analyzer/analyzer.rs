//! Core analyzer trait definition.
//!
//! An analyzer is the complete processing pipeline from raw input to tokens:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use std::io::BufRead;
//!
//! use jargon::analysis::analyzer::Analyzer;
//! use jargon::analysis::token::TokenStream;
//! use jargon::analysis::tokenizer::{TextTokenizer, Tokenizer};
//! use jargon::error::Result;
//!
//! struct WordsOnly;
//!
//! impl Analyzer for WordsOnly {
//!     fn analyze<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
//!         let tokens = TextTokenizer::new().tokenize(text)?;
//!         Ok(TokenStream::new(tokens.filter(|t| {
//!             t.as_ref().map_or(true, |t| t.kind().is_wordlike())
//!         })))
//!     }
//!
//!     fn analyze_reader<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>> {
//!         TextTokenizer::new().tokenize_reader(reader)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "words_only"
//!     }
//! }
//!
//! assert_eq!(WordsOnly.analyze("a, b").unwrap().token_count().unwrap(), 2);
//! ```

use std::io::BufRead;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so one analyzer can serve streams on
/// several threads at once.
pub trait Analyzer: Send + Sync {
    /// Analyze in-memory text.
    fn analyze<'a>(&self, text: &'a str) -> Result<TokenStream<'a>>;

    /// Analyze a buffered byte source lazily.
    ///
    /// The source is only read as the returned stream is pulled.
    fn analyze_reader<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
