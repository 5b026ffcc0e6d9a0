//! Punctuation policy for the text tokenizer.
//!
//! Which punctuation may start, continue, or close a word is a policy table,
//! not tokenizer logic. [`PunctPolicy::default`] is tuned for English prose
//! containing technical terms:
//!
//! | Set        | Members                              | Makes whole            |
//! |------------|--------------------------------------|------------------------|
//! | `leading`  | `# @ . $ + ' ’`                      | `#tag @me .net $5 '90s` |
//! | `mid`      | `' ’ . , / @ # & _ ״ ׳`              | `node.js 1,000 TCP/IP`  |
//! | `trailing` | `# +`                                | `C# F# C++ Notepad++`   |
//!
//! The hyphen is deliberately in none of the sets, so `wishy-washy` splits
//! into `wishy`, `-`, `washy`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Check whether a code point is punctuation or a symbol (Unicode `P*`/`S*`).
pub fn is_punct(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_punctuation();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Check whether a code point ends a word: white space or punctuation.
pub fn is_terminator(c: char) -> bool {
    c.is_whitespace() || is_punct(c)
}

/// Membership tables deciding how punctuation interacts with words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunctPolicy {
    /// May begin a word when the next code point is not a terminator.
    pub leading: BTreeSet<char>,
    /// Swallowed inside a word when the next code point is not a terminator.
    pub mid: BTreeSet<char>,
    /// Swallowed at the end of a word even when a terminator follows.
    pub trailing: BTreeSet<char>,
}

impl PunctPolicy {
    /// A policy where no punctuation ever joins a word.
    pub fn strict() -> Self {
        PunctPolicy {
            leading: BTreeSet::new(),
            mid: BTreeSet::new(),
            trailing: BTreeSet::new(),
        }
    }

    /// Replace the leading set.
    pub fn with_leading<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.leading = chars.into_iter().collect();
        self
    }

    /// Replace the mid-word set.
    pub fn with_mid<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.mid = chars.into_iter().collect();
        self
    }

    /// Replace the trailing set.
    pub fn with_trailing<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.trailing = chars.into_iter().collect();
        self
    }

    pub fn is_leading(&self, c: char) -> bool {
        self.leading.contains(&c)
    }

    pub fn is_mid(&self, c: char) -> bool {
        self.mid.contains(&c)
    }

    pub fn is_trailing(&self, c: char) -> bool {
        self.trailing.contains(&c)
    }
}

impl Default for PunctPolicy {
    fn default() -> Self {
        PunctPolicy::strict()
            .with_leading(['#', '@', '.', '$', '+', '\'', '’'])
            .with_mid([
                '\'', '’', '.', ',', '/', '@', '#', '&', '_', '\u{05F4}', '\u{05F3}',
            ])
            .with_trailing(['#', '+'])
    }
}
