//! Key normalization settings for the trie matcher.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How phrases and input are normalized into trie keys.
///
/// Normalization only affects matching; emitted text is never altered by it.
///
/// # Examples
///
/// ```
/// use jargon::analysis::synonym::MatcherConfig;
///
/// let config = MatcherConfig::default()
///     .with_ignore_case(true)
///     .ignore(['.', '-']);
///
/// assert!(config.ignore_case);
/// assert!(config.is_ignored('-'));
/// assert!(!config.is_ignored(' '));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Fold case before comparing keys.
    pub ignore_case: bool,

    /// Code points elided from keys. A run of white space is normalized to a
    /// single `' '` before this set applies.
    pub ignored: BTreeSet<char>,
}

impl MatcherConfig {
    /// Settings for technical terms: case-insensitive, and insensitive to
    /// spaces, hyphens, dots and slashes, so `react js`, `reactjs` and
    /// `react.js` collide.
    pub fn tech_terms() -> Self {
        MatcherConfig::default()
            .with_ignore_case(true)
            .ignore([' ', '-', '.', '/'])
    }

    /// Set whether case is folded.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Add code points to the ignore-set.
    pub fn ignore<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.ignored.extend(chars);
        self
    }

    /// Check whether a code point is elided from keys.
    pub fn is_ignored(&self, c: char) -> bool {
        self.ignored.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_terms() {
        let config = MatcherConfig::tech_terms();
        assert!(config.ignore_case);
        for c in [' ', '-', '.', '/'] {
            assert!(config.is_ignored(c));
        }
        assert!(!config.is_ignored('#'));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: MatcherConfig = serde_json::from_str(r#"{"ignored": ["-"]}"#).unwrap();
        assert!(!config.ignore_case);
        assert!(config.is_ignored('-'));
    }
}
