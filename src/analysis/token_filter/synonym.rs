//! Synonym filter replacing recognized phrases with canonical terms.
//!
//! The filter keeps a small lookahead buffer of upstream tokens. Each step it
//! extracts the run of words at the front of the buffer, asks the
//! [`TrieMatcher`] for the longest phrase matching a prefix of that run, and
//! either emits one [`TokenKind::Canonical`] token for the phrase or passes a
//! single token through and slides forward. There is no backtracking, so the
//! work done is linear in the input.
//!
//! Punctuation bounds a run, except for a single ignored code point sitting
//! directly between two words (`node-js`), which joins them.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::synonym::{MatcherConfig, SynonymDictionary};
//! use jargon::analysis::token_filter::{Filter, SynonymFilter};
//! use jargon::analysis::tokenizer::{TextTokenizer, Tokenizer};
//!
//! let dict = SynonymDictionary::from_pairs([("Ruby on Rails, rails", "ruby-on-rails")]);
//! let filter = SynonymFilter::from_dictionary(&dict, MatcherConfig::tech_terms()).unwrap();
//!
//! let tokens = TextTokenizer::new().tokenize("I know Ruby on Rails.").unwrap();
//! let text = filter.filter(tokens).unwrap().into_string().unwrap();
//! assert_eq!(text, "I know ruby-on-rails.");
//! ```
//!
//! [`TokenKind::Canonical`]: crate::analysis::token::TokenKind::Canonical

use std::path::Path;
use std::sync::Arc;

use log::trace;

use crate::analysis::synonym::{MatcherConfig, SynonymDictionary, TrieMatcher};
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_queue::TokenQueue;
use crate::error::{JargonError, Result};

/// Longest run of white space kept in the lookahead buffer before the run is
/// treated as a boundary.
pub const MAX_SPACE_RUN: usize = 64;

/// A filter that replaces dictionary phrases with their canonical terms.
///
/// The matcher is shared; every stream the filter produces owns its own
/// buffers, so one filter can serve many concurrent streams.
#[derive(Clone, Debug)]
pub struct SynonymFilter {
    matcher: Arc<TrieMatcher>,
}

impl SynonymFilter {
    /// Create a synonym filter over a built matcher.
    pub fn new(matcher: Arc<TrieMatcher>) -> Self {
        SynonymFilter { matcher }
    }

    /// Build the matcher for `dictionary` and wrap it in a filter.
    pub fn from_dictionary(dictionary: &SynonymDictionary, config: MatcherConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(TrieMatcher::build(dictionary, config)?)))
    }

    /// Create a synonym filter from a JSON dictionary file.
    pub fn from_file<P: AsRef<Path>>(path: P, config: MatcherConfig) -> Result<Self> {
        let dictionary = SynonymDictionary::load_from_file(path)?;
        Self::from_dictionary(&dictionary, config)
    }

    /// Get the shared matcher.
    pub fn matcher(&self) -> &Arc<TrieMatcher> {
        &self.matcher
    }

    /// Wrap `tokens` in the concrete filtering iterator.
    ///
    /// [`Filter::filter`] returns the same iterator boxed as a stream; use this
    /// when the buffer occupancy needs to be observed.
    pub fn stream<'a>(&self, tokens: TokenStream<'a>) -> SynonymTokens<'a> {
        SynonymTokens {
            upstream: tokens,
            matcher: Arc::clone(&self.matcher),
            max_words: self.matcher.max_words().max(1),
            max_joined: self.matcher.max_key_chars().max(1),
            buffer: TokenQueue::with_capacity(8),
            outgoing: TokenQueue::with_capacity(8),
            exhausted: false,
            error: None,
        }
    }
}

impl Filter for SynonymFilter {
    fn filter<'a>(&self, tokens: TokenStream<'a>) -> Result<TokenStream<'a>> {
        Ok(TokenStream::new(self.stream(tokens)))
    }

    fn name(&self) -> &'static str {
        "synonyms"
    }
}

/// Iterator produced by [`SynonymFilter::stream`].
///
/// The filter holds at most `max_words` words of lookahead, each made of at
/// most [`TrieMatcher::max_key_chars`] joined words, plus bounded runs of
/// white space between them.
///
/// An upstream error does not abort the stream on the spot: tokens pulled
/// before it are still matched and emitted, then the error is returned as
/// the final item.
pub struct SynonymTokens<'a> {
    upstream: TokenStream<'a>,
    matcher: Arc<TrieMatcher>,
    max_words: usize,
    max_joined: usize,
    // lookahead, not yet decided
    buffer: TokenQueue,
    // decided, waiting to be pulled
    outgoing: TokenQueue,
    exhausted: bool,
    error: Option<JargonError>,
}

/// Progress of a scan over the lookahead buffer.
///
/// A scan resumes where it stopped as tokens are pushed, so each token is
/// examined once per fill.
#[derive(Debug, Default)]
struct Scan {
    // next buffer index to examine
    next: usize,
    words: usize,
    // words in the current joined group
    joined: usize,
    spaces: usize,
    // the previous punctuation joins the next word to the group
    joining: bool,
    // end of the word-run: the last word within `max_words`
    run_end: usize,
    filled: bool,
}

impl SynonymTokens<'_> {
    /// Number of tokens currently held by the filter.
    pub fn buffered(&self) -> usize {
        self.buffer.len() + self.outgoing.len()
    }

    fn step(&mut self) {
        let mut run = self.fill();

        while self
            .buffer
            .front()
            .is_some_and(|token| !token.kind().is_wordlike())
        {
            self.buffer.pop_to(&mut self.outgoing);
            run = run.saturating_sub(1);
        }

        if run == 0 {
            return;
        }

        match self.matcher.search(self.buffer.front_slice(run)) {
            Some(found) => {
                trace!(
                    "replacing {} tokens with {:?}",
                    found.consumed, found.canonical
                );
                self.buffer.drop_front(found.consumed);
                if !found.canonical.is_empty() {
                    self.outgoing.push(Token::canonical(found.canonical));
                }
            }
            None => self.buffer.pop_to(&mut self.outgoing),
        }
    }

    /// Pull from upstream until the buffer reaches a boundary, and return the
    /// length of the word-run at its front: words with the spaces and joiners
    /// between them, up to `max_words` words.
    fn fill(&mut self) -> usize {
        let mut scan = Scan::default();

        loop {
            self.advance(&mut scan);
            if scan.filled || self.exhausted {
                break;
            }

            match self.upstream.next() {
                Some(Ok(token)) => self.buffer.push(token),
                Some(Err(err)) => {
                    self.error = Some(err);
                    self.exhausted = true;
                }
                None => self.exhausted = true,
            }
        }

        scan.run_end
    }

    /// Examine the tokens pushed since the last call.
    ///
    /// The buffer is filled once it holds `max_words` words followed by a
    /// token that cannot extend the last of them, or once it reaches a
    /// boundary: punctuation that does not join, a joiner after `max_joined`
    /// joined words, or a space run longer than [`MAX_SPACE_RUN`].
    fn advance(&self, scan: &mut Scan) {
        while !scan.filled {
            let Some(token) = self.buffer.get(scan.next) else {
                return;
            };

            match token.kind() {
                TokenKind::Word | TokenKind::Canonical => {
                    scan.spaces = 0;
                    if scan.joining {
                        scan.joining = false;
                        scan.joined += 1;
                    } else {
                        scan.words += 1;
                        scan.joined = 1;
                        if scan.words > self.max_words {
                            scan.filled = true;
                            return;
                        }
                    }
                    scan.run_end = scan.next + 1;
                }
                TokenKind::Space => {
                    scan.joined = 0;
                    if scan.words >= self.max_words {
                        scan.filled = true;
                        return;
                    }
                    scan.spaces += 1;
                    if scan.spaces > MAX_SPACE_RUN {
                        scan.filled = true;
                        return;
                    }
                }
                TokenKind::Punct => {
                    scan.spaces = 0;
                    let joins = scan.joined > 0
                        && scan.joined < self.max_joined
                        && self.matcher.is_joiner(token);
                    if !joins {
                        scan.filled = true;
                        return;
                    }
                    match self.buffer.get(scan.next + 1) {
                        Some(next) if next.kind().is_wordlike() => scan.joining = true,
                        Some(_) => {
                            scan.filled = true;
                            return;
                        }
                        None if self.exhausted => {
                            scan.filled = true;
                            return;
                        }
                        // the token after it decides
                        None => return,
                    }
                }
            }

            scan.next += 1;
        }
    }
}

impl Iterator for SynonymTokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.outgoing.pop() {
                return Some(Ok(token));
            }
            if self.exhausted && self.buffer.is_empty() {
                return self.error.take().map(Err);
            }
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{TextTokenizer, Tokenizer};

    fn filter(pairs: &[(&str, &str)]) -> SynonymFilter {
        let dict = SynonymDictionary::from_pairs(pairs.iter().copied());
        SynonymFilter::from_dictionary(&dict, MatcherConfig::tech_terms()).unwrap()
    }

    fn apply(filter: &SynonymFilter, text: &str) -> Vec<Token> {
        let tokens = TextTokenizer::new().tokenize(text).unwrap();
        filter.filter(tokens).unwrap().to_vec().unwrap()
    }

    fn render(filter: &SynonymFilter, text: &str) -> String {
        apply(filter, text).iter().map(Token::text).collect()
    }

    #[test]
    fn test_longest_match_example() {
        let filter = filter(&[
            ("developer, engineer, programmer", "boffin"),
            ("rock star, 10x developer", "cliché"),
        ]);
        assert_eq!(
            render(&filter, "a rockstar, 10x developer, or engineer"),
            "a cliché, cliché, or boffin"
        );
    }

    #[test]
    fn test_canonical_tokens_are_marked() {
        let filter = filter(&[("Ruby on Rails", "ruby-on-rails")]);
        let tokens = apply(&filter, "Ruby on Rails!");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].is_canonical());
        assert_eq!(tokens[0].text(), "ruby-on-rails");
        assert!(tokens[1].is_punct());
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let filter = filter(&[("Ruby on Rails", "ruby-on-rails")]);
        assert_eq!(render(&filter, "Ruby. on Rails"), "Ruby. on Rails");
        assert_eq!(render(&filter, "Ruby, on Rails"), "Ruby, on Rails");
    }

    #[test]
    fn test_joiner_between_words() {
        let filter = filter(&[("nodeJS, iojs", "node.js")]);
        for input in ["nodeJS", "node.js", "node-js", "NODE/JS", "io.js"] {
            assert_eq!(render(&filter, input), "node.js", "input {input:?}");
        }
        // a hyphen next to a space joins nothing
        assert_eq!(render(&filter, "node- js"), "node- js");
        assert_eq!(render(&filter, "node -js"), "node -js");
        // joined words count as one, so one-word phrases still match
        assert_eq!(render(&filter, "use node-js."), "use node.js.");
    }

    #[test]
    fn test_no_substring_match() {
        let filter = filter(&[("Ruby", "ruby")]);
        assert_eq!(render(&filter, "Rub Rubyist"), "Rub Rubyist");
    }

    #[test]
    fn test_suppression_entry() {
        let filter = filter(&[("synergy", "")]);
        assert_eq!(render(&filter, "big synergy here"), "big  here");
    }

    #[test]
    fn test_greedy_slide_without_backtracking() {
        let filter = filter(&[("a b c", "abc"), ("b c d", "bcd")]);
        // "a b c" wins at the first word, "d" is left alone
        assert_eq!(render(&filter, "a b c d"), "abc d");
        assert_eq!(render(&filter, "a b x b c d"), "a b x bcd");
    }

    #[test]
    fn test_empty_dictionary_passes_through() {
        let filter = filter(&[]);
        let input = "Some text, with punctuation... and  spaces!";
        let expected = TextTokenizer::new().tokenize(input).unwrap().to_vec().unwrap();
        assert_eq!(apply(&filter, input), expected);
    }

    #[test]
    fn test_buffer_stays_bounded() {
        let filter = filter(&[("rock star", "cliché")]);
        let input = "word ".repeat(10_000);
        let mut stream = filter.stream(TextTokenizer::new().tokenize(&input).unwrap());

        let mut count = 0;
        while let Some(token) = stream.next() {
            token.unwrap();
            assert!(stream.buffered() <= 8, "buffered {}", stream.buffered());
            count += 1;
        }
        assert_eq!(count, 20_000);
    }

    #[test]
    fn test_long_whitespace_run_is_bounded() {
        let filter = filter(&[("rock star", "cliché")]);
        let input = format!("rock{}star", " ".repeat(10_000));
        let mut stream = filter.stream(TextTokenizer::new().tokenize(&input).unwrap());

        let mut text = String::new();
        while let Some(token) = stream.next() {
            text.push_str(token.unwrap().text());
            assert!(stream.buffered() <= 2 * (MAX_SPACE_RUN + 2));
        }
        assert_eq!(text, input);
    }

    #[test]
    fn test_long_joined_chain_is_bounded() {
        let filter = filter(&[("rock star", "cliché")]);
        let max_joined = filter.matcher().max_key_chars();
        let input = format!("{}a", "a-".repeat(5_000));
        let mut stream = filter.stream(TextTokenizer::new().tokenize(&input).unwrap());

        let mut text = String::new();
        let mut peak = 0;
        while let Some(token) = stream.next() {
            text.push_str(token.unwrap().text());
            peak = peak.max(stream.buffered());
        }
        assert_eq!(text, input);
        assert!(peak <= 2 * max_joined + 2, "buffered grew to {peak}");
    }

    #[test]
    fn test_match_inside_joined_chain() {
        let filter = filter(&[("nodeJS", "node.js")]);
        let chain = "x-".repeat(100);
        assert_eq!(
            render(&filter, &format!("{chain}node-js")),
            format!("{chain}node.js")
        );
    }

    #[test]
    fn test_upstream_error_after_buffered_tokens() {
        let filter = filter(&[("rock star", "cliché")]);
        let upstream = TokenStream::new(
            vec![
                Ok(Token::word("rock")),
                Ok(Token::space(' ')),
                Ok(Token::word("star")),
                Ok(Token::space(' ')),
                Ok(Token::word("x")),
                Err(JargonError::decode(9)),
            ]
            .into_iter(),
        );

        let items: Vec<_> = filter.filter(upstream).unwrap().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].as_ref().unwrap().text(), "cliché");
        assert_eq!(items[2].as_ref().unwrap().text(), "x");
        assert!(matches!(items[3], Err(JargonError::Decode { offset: 9 })));
    }

    #[test]
    fn test_filters_chain_over_canonical_tokens() {
        let first = filter(&[("ruby on rails", "rails")]);
        let second = filter(&[("rails developer", "rails-dev")]);
        let tokens = TextTokenizer::new()
            .tokenize("ruby on rails developer")
            .unwrap();
        let text = second
            .filter(first.filter(tokens).unwrap())
            .unwrap()
            .into_string()
            .unwrap();
        assert_eq!(text, "rails-dev");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(filter(&[]).name(), "synonyms");
    }
}
