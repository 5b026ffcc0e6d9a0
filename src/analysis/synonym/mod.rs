//! Phrase dictionaries and the trie matcher built from them.
//!
//! This module provides the building blocks for term canonicalization:
//! - Dictionary management
//! - Key normalization settings
//! - Longest-match phrase lookup

pub mod config;
pub mod dictionary;
pub mod trie;

pub use config::MatcherConfig;
pub use dictionary::SynonymDictionary;
pub use trie::{TrieMatch, TrieMatcher};
