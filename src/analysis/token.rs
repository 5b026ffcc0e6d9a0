//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text tokens,
//! which are the fundamental units that flow through the analysis pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - An immutable lexical unit: its text and its [`TokenKind`]
//! - [`TokenKind`] - The closed classification `Space | Punct | Word | Canonical`
//! - [`TokenStream`] - A lazy, pull-based, fused sequence of `Result<Token>`
//!
//! # Lossless round trip
//!
//! Tokenizers emit every code point of their input, white space included, so
//! concatenating the values of an unfiltered stream reproduces the input:
//!
//! ```
//! use jargon::analysis::tokenizer::{TextTokenizer, Tokenizer};
//!
//! let text = "Hi.  I like node.js, C++ and #hashtags!";
//! let tokens = TextTokenizer::new().tokenize(text).unwrap();
//! assert_eq!(tokens.into_string().unwrap(), text);
//! ```
//!
//! # Combinators
//!
//! Every combinator pulls until the stream is exhausted and stops at the first
//! error, keeping whatever was already delivered:
//!
//! ```
//! use jargon::analysis::token::{Token, TokenStream};
//!
//! let stream = TokenStream::from_tokens(vec![
//!     Token::word("hello"),
//!     Token::space(' '),
//!     Token::canonical("ruby-on-rails"),
//! ]);
//! assert_eq!(stream.token_count().unwrap(), 3);
//! ```

use std::fmt;
use std::io::Write;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Classification of a token.
///
/// Exactly one kind applies to every token. `Space` and `Punct` tokens
/// produced by the text tokenizer hold exactly one code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// A single white space code point
    Space,
    /// A single punctuation or symbol code point, or an opaque markup unit
    Punct,
    /// A run of letters, digits and word-internal punctuation
    Word,
    /// The replacement produced for a recognized phrase; never re-split
    Canonical,
}

impl TokenKind {
    /// Words and canonical terms are the units phrases are made of.
    pub fn is_wordlike(self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Canonical)
    }
}

/// A token represents a single unit of text after tokenization.
///
/// Tokens are immutable once created and are moved by value through the
/// pipeline.
///
/// # Examples
///
/// ```
/// use jargon::analysis::token::{Token, TokenKind};
///
/// let token = Token::word("node.js");
/// assert_eq!(token.text(), "node.js");
/// assert_eq!(token.kind(), TokenKind::Word);
/// assert!(!token.is_punct());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    /// Create a new token with the given text and kind.
    pub fn new<S: Into<String>>(text: S, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            kind,
        }
    }

    /// Create a word token.
    pub fn word<S: Into<String>>(text: S) -> Self {
        Token::new(text, TokenKind::Word)
    }

    /// Create a canonical token, the result of a phrase replacement.
    pub fn canonical<S: Into<String>>(text: S) -> Self {
        Token::new(text, TokenKind::Canonical)
    }

    /// Create a single code point space token.
    pub fn space(c: char) -> Self {
        Token::new(c, TokenKind::Space)
    }

    /// Create a single code point punctuation token.
    pub fn punct(c: char) -> Self {
        Token::new(c, TokenKind::Punct)
    }

    /// Get the token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the token kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Check if this is a space token.
    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }

    /// Check if this is a punctuation token.
    pub fn is_punct(&self) -> bool {
        self.kind == TokenKind::Punct
    }

    /// Check if this is a word token.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if this token was produced by a phrase replacement.
    pub fn is_canonical(&self) -> bool {
        self.kind == TokenKind::Canonical
    }

    /// Consume the token, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a lazy sequence of tokens from the analysis pipeline.
///
/// A stream only advances when its consumer pulls. Each pull produces a
/// token, an error, or the end of the stream; end and error are terminal, and
/// once either has been observed the stream yields `None` forever.
pub struct TokenStream<'a> {
    inner: Box<dyn Iterator<Item = Result<Token>> + 'a>,
    done: bool,
}

impl<'a> TokenStream<'a> {
    /// Wrap an iterator of token results as a stream.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<Token>> + 'a,
    {
        TokenStream {
            inner: Box::new(iter),
            done: false,
        }
    }

    /// Create a stream over already materialized tokens.
    pub fn from_tokens(tokens: Vec<Token>) -> TokenStream<'static> {
        TokenStream::new(tokens.into_iter().map(Ok))
    }

    /// Count the tokens, exhausting the stream.
    pub fn token_count(self) -> Result<usize> {
        let mut count = 0;
        for token in self {
            token?;
            count += 1;
        }
        Ok(count)
    }

    /// Materialize the stream into a vector.
    pub fn to_vec(self) -> Result<Vec<Token>> {
        self.collect()
    }

    /// Concatenate the values of every token.
    pub fn into_string(self) -> Result<String> {
        let mut text = String::new();
        for token in self {
            text.push_str(token?.text());
        }
        Ok(text)
    }

    /// Write every token value to `writer`, each followed by `separator`.
    ///
    /// Tokens written before an error stay written.
    pub fn write_to<W: Write>(self, writer: &mut W, separator: &str) -> Result<()> {
        for token in self {
            writer.write_all(token?.text().as_bytes())?;
            if !separator.is_empty() {
                writer.write_all(separator.as_bytes())?;
            }
        }
        Ok(())
    }

    /// Keep only tokens that a filter replaced (`Canonical` tokens).
    pub fn lemmas(self) -> TokenStream<'a> {
        TokenStream::new(self.filter(|token| match token {
            Ok(token) => token.is_canonical(),
            Err(_) => true,
        }))
    }

    /// Keep only the first occurrence of each distinct token value.
    pub fn distinct(self) -> TokenStream<'a> {
        let mut seen = AHashSet::new();
        TokenStream::new(self.filter(move |token| match token {
            Ok(token) => seen.insert(token.text().to_string()),
            Err(_) => true,
        }))
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.next() {
            Some(Ok(token)) => Some(Ok(token)),
            Some(Err(err)) => {
                self.done = true;
                Some(Err(err))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl fmt::Debug for TokenStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStream")
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream<'static>;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream<'static> {
        TokenStream::from_tokens(self)
    }
}
