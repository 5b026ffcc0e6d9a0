//! Text tokenizer implementation.
//!
//! Segments prose into space, punctuation and word tokens in a single pass
//! with one code point of lookahead. Nothing is discarded: concatenating the
//! emitted tokens reproduces the input exactly.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::tokenizer::{TextTokenizer, Tokenizer};
//!
//! let tokenizer = TextTokenizer::new();
//! let tokens: Vec<String> = tokenizer
//!     .tokenize("I like C++ and node.js.")
//!     .unwrap()
//!     .map(|t| t.unwrap().into_text())
//!     .collect();
//!
//! assert_eq!(
//!     tokens,
//!     vec!["I", " ", "like", " ", "C++", " ", "and", " ", "node.js", "."]
//! );
//! ```

use std::io::BufRead;
use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::policy::{PunctPolicy, is_punct, is_terminator};
use crate::error::{JargonError, Result};

/// A tokenizer for English prose containing technical terms.
///
/// Terms such as `C++`, `.net`, `node.js`, `#hashtag`, `@handle`, `$200.13`
/// and `1,000` come out as single word tokens. How punctuation attaches to
/// words is decided by a [`PunctPolicy`].
#[derive(Clone, Debug, Default)]
pub struct TextTokenizer {
    policy: Arc<PunctPolicy>,
}

impl TextTokenizer {
    /// Create a text tokenizer with the default punctuation policy.
    pub fn new() -> Self {
        TextTokenizer::default()
    }

    /// Create a text tokenizer with a custom punctuation policy.
    pub fn with_policy(policy: PunctPolicy) -> Self {
        TextTokenizer {
            policy: Arc::new(policy),
        }
    }

    /// Get the punctuation policy.
    pub fn policy(&self) -> &PunctPolicy {
        &self.policy
    }

    /// Lazily tokenize a buffered byte source.
    pub fn tokens<R: BufRead>(&self, reader: R) -> TextTokens<R> {
        TextTokens {
            chars: CharReader::new(reader),
            policy: Arc::clone(&self.policy),
            pending: None,
        }
    }
}

impl Tokenizer for TextTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        Ok(TokenStream::new(self.tokens(text.as_bytes())))
    }

    fn tokenize_reader<'a>(&self, reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>> {
        Ok(TokenStream::new(self.tokens(reader)))
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Iterator of tokens read from a byte source.
///
/// Produced by [`TextTokenizer::tokens`]. The only errors are I/O failures of
/// the source and invalid UTF-8.
pub struct TextTokens<R> {
    chars: CharReader<R>,
    policy: Arc<PunctPolicy>,
    // punctuation split off the end of the previous word
    pending: Option<Token>,
}

impl<R: BufRead> TextTokens<R> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if let Some(token) = self.pending.take() {
            return Ok(Some(token));
        }

        let Some(c) = self.chars.read_char()? else {
            return Ok(None);
        };

        if c.is_whitespace() {
            return Ok(Some(Token::space(c)));
        }

        if is_punct(c) {
            if self.policy.is_leading(c) && !self.peek_terminator()? {
                return self.read_word(c).map(Some);
            }
            return Ok(Some(Token::punct(c)));
        }

        self.read_word(c).map(Some)
    }

    // Only entered once `first` has been judged to start a word.
    fn read_word(&mut self, first: char) -> Result<Token> {
        let mut word = String::new();
        word.push(first);

        while let Some(c) = self.chars.read_char()? {
            if c.is_whitespace() {
                self.chars.unread(c);
                break;
            }

            if is_punct(c) {
                let mid = self.policy.is_mid(c);
                if mid && !self.peek_terminator()? {
                    word.push(c);
                    continue;
                }
                if self.policy.is_trailing(c) {
                    word.push(c);
                    continue;
                }
                if mid {
                    // followed by a terminator: plain punctuation after all
                    self.pending = Some(Token::punct(c));
                } else {
                    self.chars.unread(c);
                }
                break;
            }

            word.push(c);
        }

        Ok(Token::word(word))
    }

    /// Look at the next code point without consuming it. End of input counts
    /// as a terminator.
    fn peek_terminator(&mut self) -> Result<bool> {
        Ok(self.chars.peek()?.is_none_or(is_terminator))
    }
}

impl<R: BufRead> Iterator for TextTokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Decodes UTF-8 code points from a buffered reader, with a single slot of
/// pushback for lookahead.
struct CharReader<R> {
    inner: R,
    offset: u64,
    pushback: Option<char>,
}

impl<R: BufRead> CharReader<R> {
    fn new(inner: R) -> Self {
        CharReader {
            inner,
            offset: 0,
            pushback: None,
        }
    }

    fn read_char(&mut self) -> Result<Option<char>> {
        if let Some(c) = self.pushback.take() {
            return Ok(Some(c));
        }
        self.decode()
    }

    fn peek(&mut self) -> Result<Option<char>> {
        if self.pushback.is_none() {
            self.pushback = self.decode()?;
        }
        Ok(self.pushback)
    }

    fn unread(&mut self, c: char) {
        debug_assert!(self.pushback.is_none(), "pushback slot already full");
        self.pushback = Some(c);
    }

    fn decode(&mut self) -> Result<Option<char>> {
        let start = self.offset;
        let buf = self.inner.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }

        let width = utf8_width(buf[0]).ok_or(JargonError::decode(start))?;
        if buf.len() >= width {
            let c = decode_char(&buf[..width], start)?;
            self.inner.consume(width);
            self.offset += width as u64;
            return Ok(Some(c));
        }

        // The code point straddles the reader's buffer boundary.
        let mut bytes = [0u8; 4];
        let mut have = 0;
        while have < width {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                return Err(JargonError::decode(start));
            }
            let n = (width - have).min(buf.len());
            bytes[have..have + n].copy_from_slice(&buf[..n]);
            self.inner.consume(n);
            have += n;
        }
        self.offset += width as u64;
        decode_char(&bytes[..width], start).map(Some)
    }
}

fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn decode_char(bytes: &[u8], offset: u64) -> Result<char> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.chars().next())
        .ok_or(JargonError::decode(offset))
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Read};

    use super::*;
    use crate::analysis::token::TokenKind;

    fn texts(input: &str) -> Vec<String> {
        TextTokenizer::new()
            .tokenize(input)
            .unwrap()
            .map(|t| t.unwrap().into_text())
            .collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        TextTokenizer::new()
            .tokenize(input)
            .unwrap()
            .map(|t| t.unwrap().kind())
            .collect()
    }

    #[test]
    fn test_tech_terms_are_single_words() {
        for term in [
            "C++",
            ".net",
            "node.js",
            "#hashtag",
            "@handle",
            "$200.13",
            "1,000",
            "C#",
            "F#",
            "TCP/IP",
            "first_last",
            "Let's",
            "Let’s",
            "AT&T",
            "a16z",
            "ש״ח",
            "ウィキペディア",
        ] {
            assert_eq!(texts(term), vec![term.to_string()], "{term}");
            assert_eq!(kinds(term), vec![TokenKind::Word], "{term}");
        }
    }

    #[test]
    fn test_hyphen_splits() {
        assert_eq!(texts("wishy-washy"), vec!["wishy", "-", "washy"]);
        assert_eq!(
            kinds("wishy-washy"),
            vec![TokenKind::Word, TokenKind::Punct, TokenKind::Word]
        );
    }

    #[test]
    fn test_trailing_mid_punct_is_split_off() {
        assert_eq!(texts("Hi."), vec!["Hi", "."]);
        assert_eq!(texts("node.js, yes"), vec!["node.js", ",", " ", "yes"]);
        assert_eq!(texts("$200.13."), vec!["$200.13", "."]);
        assert_eq!(texts("1,000,"), vec!["1,000", ","]);
        assert_eq!(texts("possessive' x"), vec!["possessive", "'", " ", "x"]);
        assert_eq!(texts("C#."), vec!["C#", "."]);
    }

    #[test]
    fn test_leading_punct_followed_by_terminator() {
        assert_eq!(texts("1 + 1"), vec!["1", " ", "+", " ", "1"]);
        assert_eq!(texts("..."), vec![".", ".", "."]);
        assert_eq!(texts("# "), vec!["#", " "]);
        assert_eq!(kinds("..."), vec![TokenKind::Punct; 3]);
    }

    #[test]
    fn test_non_mid_punct_is_reconsidered() {
        // '(' ends the word without being consumed, then stands alone
        assert_eq!(texts("foo(bar)"), vec!["foo", "(", "bar", ")"]);
        // '$' ends "price" but then starts "$5"
        assert_eq!(texts("price$5"), vec!["price", "$5"]);
    }

    #[test]
    fn test_whitespace_is_one_token_per_code_point() {
        assert_eq!(texts("a \r\n\tb"), vec!["a", " ", "\r", "\n", "\t", "b"]);
        assert_eq!(
            kinds(" \u{3000}"),
            vec![TokenKind::Space, TokenKind::Space]
        );
    }

    #[test]
    fn test_round_trip() {
        let original = "Hi.    \n\tnode.js, first_last, my.name@domain.com\n\
            123.456, 789, .234, 1,000, a16z, 3G and $200.13.\n\
            wishy-washy and C++ and F# and .net\n\
            Let’s Let's possessive' possessive’\n\
            ש״ח א\"ב ב' \"אא\"בב\"abc\n\
            Then ウィキペディア and 象形.crlf is \r\n";
        let roundtrip = TextTokenizer::new()
            .tokenize(original)
            .unwrap()
            .into_string()
            .unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_empty_input() {
        assert!(texts("").is_empty());
    }

    #[test]
    fn test_code_points_straddling_buffer_boundary() {
        let original = "café ウィキ 象形 𝄞 done";
        // A one-byte buffer forces every multi-byte code point to straddle.
        let reader = BufReader::with_capacity(1, original.as_bytes());
        let roundtrip = TextTokenizer::new()
            .tokenize_reader(Box::new(reader))
            .unwrap()
            .into_string()
            .unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let bytes: &[u8] = b"ok \xFF bad";
        let mut tokens = TextTokenizer::new().tokens(bytes);

        assert_eq!(tokens.next().unwrap().unwrap().text(), "ok");
        assert_eq!(tokens.next().unwrap().unwrap().text(), " ");
        match tokens.next() {
            Some(Err(JargonError::Decode { offset })) => assert_eq!(offset, 3),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_code_point_is_a_decode_error() {
        let bytes: &[u8] = b"ok \xE3\x82";
        let result = TextTokenizer::new()
            .tokenize_reader(Box::new(bytes))
            .unwrap()
            .to_vec();
        assert!(matches!(result, Err(JargonError::Decode { offset: 3 })));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("source went away"))
        }
    }

    #[test]
    fn test_source_errors_propagate() {
        let reader = BufReader::new(FailingReader);
        let mut stream = TextTokenizer::new()
            .tokenize_reader(Box::new(reader))
            .unwrap();
        assert!(matches!(stream.next(), Some(Err(JargonError::Io(_)))));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_strict_policy() {
        let tokenizer = TextTokenizer::with_policy(PunctPolicy::strict());
        let tokens: Vec<String> = tokenizer
            .tokenize("node.js #tag")
            .unwrap()
            .map(|t| t.unwrap().into_text())
            .collect();
        assert_eq!(tokens, vec!["node", ".", "js", " ", "#", "tag"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(TextTokenizer::new().name(), "text");
    }
}
