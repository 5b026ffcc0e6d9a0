//! Distinct filter implementation.
//!
//! Drops every token whose value has been seen earlier in the stream. The
//! set of seen values grows with the number of distinct values, so this
//! filter is meant for term extraction (after [`LemmasFilter`]) rather than
//! for rewriting whole documents.
//!
//! [`LemmasFilter`]: super::lemmas::LemmasFilter

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps the first occurrence of each token value.
#[derive(Clone, Debug, Default)]
pub struct DistinctFilter;

impl DistinctFilter {
    /// Create a new distinct filter.
    pub fn new() -> Self {
        DistinctFilter
    }
}

impl Filter for DistinctFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(tokens.distinct())
    }

    fn name(&self) -> &'static str {
        "distinct"
    }
}
