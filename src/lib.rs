//! # Jargon
//!
//! Recognizes technical terms in text and HTML and rewrites them to a
//! canonical form, e.g. `Ruby on Rails` → `ruby-on-rails`.
//!
//! ## Features
//!
//! - Lossless tokenizer aware of terms like `C++`, `node.js` and `#hashtag`
//! - HTML tokenizer that leaves markup untouched
//! - Longest-match phrase replacement with bounded lookahead
//! - Case and punctuation insensitive matching
//!
//! ## Example
//!
//! ```
//! use jargon::analysis::synonym::{MatcherConfig, SynonymDictionary};
//! use jargon::analysis::token_filter::{Filter, SynonymFilter};
//! use jargon::analysis::tokenizer::{TextTokenizer, Tokenizer};
//!
//! let dict = SynonymDictionary::from_pairs([
//!     ("developer, engineer, programmer", "boffin"),
//!     ("rock star, 10x developer", "cliché"),
//! ]);
//! let filter = SynonymFilter::from_dictionary(&dict, MatcherConfig::tech_terms()).unwrap();
//!
//! let tokens = TextTokenizer::new().tokenize("a rockstar, 10x developer, or engineer").unwrap();
//! let text = filter.filter(tokens).unwrap().into_string().unwrap();
//! assert_eq!(text, "a cliché, cliché, or boffin");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
