//! Pipeline analyzer that combines a tokenizer and filters.
//!
//! Filters are applied in the order they were added: the first filter sees
//! the tokenizer's output, and each later filter sees the previous filter's
//! output.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use jargon::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use jargon::analysis::synonym::{MatcherConfig, SynonymDictionary};
//! use jargon::analysis::token_filter::{LemmasFilter, SynonymFilter};
//! use jargon::analysis::tokenizer::TextTokenizer;
//!
//! let dict = SynonymDictionary::from_pairs([
//!     ("Ruby on Rails", "ruby-on-rails"),
//!     ("nodeJS", "node.js"),
//! ]);
//! let synonyms = SynonymFilter::from_dictionary(&dict, MatcherConfig::tech_terms()).unwrap();
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(TextTokenizer::new()))
//!     .add_filter(Arc::new(synonyms))
//!     .add_filter(Arc::new(LemmasFilter::new()));
//!
//! let lemmas: Vec<String> = analyzer
//!     .analyze("We use Ruby on Rails and NodeJS.")
//!     .unwrap()
//!     .map(|t| t.unwrap().into_text())
//!     .collect();
//!
//! assert_eq!(lemmas, vec!["ruby-on-rails", "node.js"]);
//! ```

use std::fmt;
use std::io::BufRead;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    fn apply_filters<'a>(&self, mut tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        self.apply_filters(self.tokenizer.tokenize(text)?)
    }

    fn analyze_reader<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>> {
        self.apply_filters(self.tokenizer.tokenize_reader(reader)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
