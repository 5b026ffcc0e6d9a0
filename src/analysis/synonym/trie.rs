//! Trie matcher for longest-match phrase lookup over token sequences.
//!
//! The trie is keyed by normalized code points. Each phrase of a
//! [`SynonymDictionary`] is tokenized, normalized according to a
//! [`MatcherConfig`], and inserted with its canonical term at the end of the
//! path. Lookups walk the trie over a prefix of tokens and report the longest
//! phrase that ends on a token boundary.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::synonym::{MatcherConfig, SynonymDictionary, TrieMatcher};
//! use jargon::analysis::tokenizer::{TextTokenizer, Tokenizer};
//!
//! let dict = SynonymDictionary::from_pairs([("Ruby on Rails, rails", "ruby-on-rails")]);
//! let matcher = TrieMatcher::build(&dict, MatcherConfig::tech_terms()).unwrap();
//! assert_eq!(matcher.max_words(), 3);
//!
//! let tokens = TextTokenizer::new()
//!     .tokenize("ruby on rails rocks")
//!     .unwrap()
//!     .to_vec()
//!     .unwrap();
//! let found = matcher.search(&tokens).unwrap();
//! assert_eq!(found.canonical, "ruby-on-rails");
//! assert_eq!(found.consumed, 5);
//! ```

use ahash::AHashMap;
use log::{debug, warn};

use crate::analysis::synonym::config::MatcherConfig;
use crate::analysis::synonym::dictionary::SynonymDictionary;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{TextTokenizer, Tokenizer};
use crate::error::{JargonError, Result};

#[derive(Debug, Default)]
struct TrieNode {
    children: AHashMap<char, TrieNode>,
    canonical: Option<String>,
}

/// A successful lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrieMatch<'m> {
    /// The replacement term; empty for a suppression entry.
    pub canonical: &'m str,
    /// Number of leading tokens the match covers.
    pub consumed: usize,
}

/// Immutable phrase trie built once from a dictionary.
///
/// A built matcher is read-only, so one instance can be shared by reference
/// (or `Arc`) across any number of concurrent streams.
#[derive(Debug)]
pub struct TrieMatcher {
    root: TrieNode,
    config: MatcherConfig,
    max_words: usize,
    max_key_chars: usize,
    phrases: usize,
}

impl TrieMatcher {
    /// Build a matcher, tokenizing phrases with the default text tokenizer.
    pub fn build(dictionary: &SynonymDictionary, config: MatcherConfig) -> Result<Self> {
        Self::build_with_tokenizer(dictionary, config, &TextTokenizer::new())
    }

    /// Build a matcher, tokenizing phrases with `tokenizer`.
    ///
    /// Fails if any phrase contains no words. Phrases that are empty (such as
    /// after a trailing comma) are skipped.
    pub fn build_with_tokenizer(
        dictionary: &SynonymDictionary,
        config: MatcherConfig,
        tokenizer: &dyn Tokenizer,
    ) -> Result<Self> {
        let mut matcher = TrieMatcher {
            root: TrieNode::default(),
            config,
            max_words: 0,
            max_key_chars: 0,
            phrases: 0,
        };

        for (synonyms, canonical) in dictionary.entries() {
            let tokens = tokenizer.tokenize(synonyms)?.to_vec()?;

            for phrase in tokens.split(|t| t.is_punct() && t.text() == ",") {
                if phrase.iter().all(Token::is_space) {
                    continue;
                }

                let words = matcher.count_words(phrase);
                if words == 0 {
                    return Err(JargonError::dictionary(format!(
                        "phrase {:?} in entry {synonyms:?} contains no words",
                        phrase_text(phrase)
                    )));
                }

                if (0..phrase.len()).any(|i| phrase[i].is_punct() && !matcher.joins_at(phrase, i)) {
                    warn!(
                        "phrase {:?} contains punctuation and can never match",
                        phrase_text(phrase)
                    );
                }

                matcher.insert(phrase, canonical);
                matcher.max_words = matcher.max_words.max(words);
            }
        }

        debug!(
            "built trie matcher: {} phrases, max_words={}, max_key_chars={}",
            matcher.phrases, matcher.max_words, matcher.max_key_chars
        );

        Ok(matcher)
    }

    fn insert(&mut self, phrase: &[Token], canonical: &str) {
        let mut key = Vec::new();
        let mut writer = KeyWriter::new(&self.config);
        for token in phrase {
            writer.write(token, &mut key);
        }
        self.max_key_chars = self.max_key_chars.max(key.len());

        let mut node = &mut self.root;
        for c in key {
            node = node.children.entry(c).or_default();
        }

        match node.canonical.replace(canonical.to_string()) {
            Some(previous) if previous != canonical => {
                debug!(
                    "phrase {:?} remapped from {previous:?} to {canonical:?}",
                    phrase_text(phrase)
                );
            }
            Some(_) => {}
            None => self.phrases += 1,
        }
    }

    /// Find the longest phrase matching a prefix of `tokens`.
    ///
    /// A phrase only matches when it ends exactly at the end of a word token:
    /// `Rub` never matches an entry for `Ruby`, and `Ruby` never matches an
    /// entry for `Rub`.
    pub fn search(&self, tokens: &[Token]) -> Option<TrieMatch<'_>> {
        let mut node = &self.root;
        let mut best = None;
        let mut writer = KeyWriter::new(&self.config);
        let mut chars = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            chars.clear();
            writer.write(token, &mut chars);

            for c in &chars {
                match node.children.get(c) {
                    Some(child) => node = child,
                    None => return best,
                }
            }

            if token.kind().is_wordlike() {
                if let Some(canonical) = &node.canonical {
                    best = Some(TrieMatch {
                        canonical,
                        consumed: i + 1,
                    });
                }
            }
        }

        best
    }

    /// Check whether a token is a single ignored punctuation code point.
    ///
    /// Such a token joins the words on either side of it (`node-js`), and
    /// the joined words count as one word.
    pub fn is_joiner(&self, token: &Token) -> bool {
        let mut chars = token.text().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => token.is_punct() && self.config.is_ignored(c),
            _ => false,
        }
    }

    /// Whether `tokens[index]` is a joiner sitting directly between two words.
    fn joins_at(&self, tokens: &[Token], index: usize) -> bool {
        let wordlike = |i: usize| tokens.get(i).is_some_and(|t| t.kind().is_wordlike());
        index >= 1 && self.is_joiner(&tokens[index]) && wordlike(index - 1) && wordlike(index + 1)
    }

    fn count_words(&self, phrase: &[Token]) -> usize {
        (0..phrase.len())
            .filter(|&i| {
                phrase[i].kind().is_wordlike() && !(i >= 1 && self.joins_at(phrase, i - 1))
            })
            .count()
    }

    /// The largest number of words in any inserted phrase.
    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// The length in code points of the longest normalized key.
    ///
    /// Every word of the input adds at least one code point to a key, so no
    /// phrase can match more than this many words joined together.
    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    /// The normalization settings.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Number of distinct phrase keys.
    pub fn len(&self) -> usize {
        self.phrases
    }

    /// Check if no phrase was inserted.
    pub fn is_empty(&self) -> bool {
        self.phrases == 0
    }
}

/// Writes the normalized key code points of successive tokens.
///
/// A run of space tokens becomes one `' '` separator, written only between
/// non-space tokens.
struct KeyWriter<'c> {
    config: &'c MatcherConfig,
    started: bool,
    pending_space: bool,
}

impl<'c> KeyWriter<'c> {
    fn new(config: &'c MatcherConfig) -> Self {
        KeyWriter {
            config,
            started: false,
            pending_space: false,
        }
    }

    fn write(&mut self, token: &Token, out: &mut Vec<char>) {
        if token.is_space() {
            self.pending_space = true;
            return;
        }

        if self.pending_space && self.started && !self.config.is_ignored(' ') {
            out.push(' ');
        }
        self.pending_space = false;
        self.started = true;

        for c in token.text().chars() {
            if self.config.is_ignored(c) {
                continue;
            }
            if self.config.ignore_case {
                out.extend(c.to_lowercase().filter(|f| !self.config.is_ignored(*f)));
            } else {
                out.push(c);
            }
        }
    }
}

fn phrase_text(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
