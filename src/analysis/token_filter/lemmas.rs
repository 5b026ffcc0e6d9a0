//! Lemmas filter implementation.
//!
//! Keeps only the tokens an upstream filter replaced, i.e. the canonical
//! terms. Useful for extracting the set of recognized terms from a document.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::token::Token;
//! use jargon::analysis::token::TokenStream;
//! use jargon::analysis::token_filter::Filter;
//! use jargon::analysis::token_filter::lemmas::LemmasFilter;
//!
//! let tokens = TokenStream::from_tokens(vec![
//!     Token::word("I"),
//!     Token::space(' '),
//!     Token::canonical("ruby-on-rails"),
//! ]);
//! let lemmas = LemmasFilter::new().filter(tokens).unwrap().to_vec().unwrap();
//!
//! assert_eq!(lemmas, vec![Token::canonical("ruby-on-rails")]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only `Canonical` tokens.
#[derive(Clone, Debug, Default)]
pub struct LemmasFilter;

impl LemmasFilter {
    /// Create a new lemmas filter.
    pub fn new() -> Self {
        LemmasFilter
    }
}

impl Filter for LemmasFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(tokens.lemmas())
    }

    fn name(&self) -> &'static str {
        "lemmas"
    }
}
