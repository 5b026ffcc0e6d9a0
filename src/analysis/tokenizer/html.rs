//! HTML tokenizer implementation.
//!
//! Markup starts where HTML starts a tag: a `<` followed by a letter, `/`,
//! `!` or `?`. Any other `<` is text. Each markup unit (tag, comment,
//! doctype, processing instruction) is parsed by `quick-xml` and passes
//! through verbatim as one `Punct` token. Text between markup is re-fed to a
//! [`TextTokenizer`], so terms are only recognized inside text nodes. The
//! content of raw text elements such as `<script>` runs to the matching end
//! tag and is never parsed as markup.
//!
//! # Examples
//!
//! ```
//! use jargon::analysis::tokenizer::{HtmlTokenizer, Tokenizer};
//!
//! let html = r#"<p class="x">Ruby on Rails</p>"#;
//! let tokens: Vec<String> = HtmlTokenizer::new()
//!     .tokenize(html)
//!     .unwrap()
//!     .map(|t| t.unwrap().into_text())
//!     .collect();
//!
//! assert_eq!(
//!     tokens,
//!     vec![r#"<p class="x">"#, "Ruby", " ", "on", " ", "Rails", "</p>"]
//! );
//! ```

use std::borrow::Cow;
use std::io::{BufRead, Cursor, Read};
use std::ops::Range;

use lazy_static::lazy_static;
use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;

use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::text::{TextTokenizer, TextTokens};
use crate::error::{JargonError, Result};

/// A tokenizer that keeps HTML markup whole and tokenizes text nodes.
#[derive(Clone, Debug, Default)]
pub struct HtmlTokenizer {
    text: TextTokenizer,
}

impl HtmlTokenizer {
    /// Create an HTML tokenizer whose text nodes use the default text tokenizer.
    pub fn new() -> Self {
        HtmlTokenizer::default()
    }

    /// Create an HTML tokenizer with a custom text tokenizer for text nodes.
    pub fn with_text_tokenizer(text: TextTokenizer) -> Self {
        HtmlTokenizer { text }
    }

    fn stream<'a>(&self, source: Cow<'a, str>) -> Result<TokenStream<'a>> {
        let segments = segment(&source)?;
        Ok(TokenStream::new(HtmlTokens {
            source,
            segments: segments.into_iter(),
            text: self.text.clone(),
            current: None,
        }))
    }
}

impl Tokenizer for HtmlTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Result<TokenStream<'a>> {
        self.stream(Cow::Borrowed(text))
    }

    fn tokenize_reader<'a>(&self, mut reader: Box<dyn BufRead + 'a>) -> Result<TokenStream<'a>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let source = String::from_utf8(bytes)
            .map_err(|e| JargonError::decode(e.utf8_error().valid_up_to() as u64))?;
        self.stream(Cow::Owned(source))
    }

    fn name(&self) -> &'static str {
        "html"
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment {
    Text(Range<usize>),
    Markup(Range<usize>),
}

lazy_static! {
    static ref MARKUP_START: Regex =
        Regex::new(r"<[A-Za-z/!?]").expect("markup start is a valid regex");
}

/// Elements whose content is text up to their end tag.
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

/// Split `html` into alternating text and markup byte ranges covering the
/// whole input.
fn segment(html: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    // start of the pending text segment
    let mut text = 0;
    // where to look for the next markup unit
    let mut pos = 0;

    while let Some(found) = MARKUP_START.find_at(html, pos) {
        let start = found.start();
        let (len, raw_text) = markup_unit(html, start)?;

        if start > text {
            segments.push(Segment::Text(text..start));
        }
        let end = start + len;
        segments.push(Segment::Markup(start..end));
        text = end;
        pos = match raw_text {
            Some(name) => end_tag_position(html, end, name),
            None => end,
        };
    }

    if text < html.len() {
        segments.push(Segment::Text(text..html.len()));
    }

    Ok(segments)
}

/// Parse the markup unit at byte `start`, returning its length and, for the
/// start tag of a raw text element, the element name.
fn markup_unit(html: &str, start: usize) -> Result<(usize, Option<&'static str>)> {
    let mut reader = Reader::from_str(&html[start..]);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let event = reader
        .read_event()
        .map_err(|e| JargonError::markup(format!("{e} (near byte {start})")))?;
    let raw_text = match &event {
        Event::Eof => {
            return Err(JargonError::markup(format!(
                "unexpected end of input (near byte {start})"
            )));
        }
        Event::Start(tag) => RAW_TEXT_ELEMENTS
            .iter()
            .find(|name| tag.name().as_ref().eq_ignore_ascii_case(name.as_bytes()))
            .copied(),
        _ => None,
    };

    let len = usize::try_from(reader.buffer_position())
        .map_err(|e| JargonError::markup(e.to_string()))?;
    Ok((len, raw_text))
}

/// Byte position of the end tag closing raw text element `name`, searching
/// from `from`, or the end of input if it is never closed.
fn end_tag_position(html: &str, from: usize, name: &str) -> usize {
    let rest = html[from..].to_ascii_lowercase();
    rest.find(&format!("</{name}"))
        .map_or(html.len(), |i| from + i)
}

struct HtmlTokens<'a> {
    source: Cow<'a, str>,
    segments: std::vec::IntoIter<Segment>,
    text: TextTokenizer,
    current: Option<TextTokens<Cursor<Vec<u8>>>>,
}

impl Iterator for HtmlTokens<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tokens) = self.current.as_mut() {
                match tokens.next() {
                    Some(item) => return Some(item),
                    None => self.current = None,
                }
            }

            match self.segments.next()? {
                Segment::Markup(range) => {
                    return Some(Ok(Token::new(&self.source[range], TokenKind::Punct)));
                }
                Segment::Text(range) => {
                    let bytes = self.source[range].as_bytes().to_vec();
                    self.current = Some(self.text.tokens(Cursor::new(bytes)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(html: &str) -> Vec<Token> {
        HtmlTokenizer::new().tokenize(html).unwrap().to_vec().unwrap()
    }

    #[test]
    fn test_markup_is_verbatim_punct() {
        let html = "<div><!-- note: C++ --><br/>C++</div>";
        let tokens = tokens(html);

        let markup: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_punct())
            .map(Token::text)
            .collect();
        assert_eq!(markup, vec!["<div>", "<!-- note: C++ -->", "<br/>", "</div>"]);

        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_word())
            .map(Token::text)
            .collect();
        assert_eq!(words, vec!["C++"]);
    }

    #[test]
    fn test_round_trip() {
        let html = "<!DOCTYPE html>\n<html><head><title>Jobs</title></head>\n\
            <body><p class=\"lead\">We want a Ruby on Rails dev &amp; more.</p>\n\
            <p>Unclosed paragraph<br>\n</body></html>\n";
        let roundtrip = HtmlTokenizer::new()
            .tokenize(html)
            .unwrap()
            .into_string()
            .unwrap();
        assert_eq!(roundtrip, html);
    }

    #[test]
    fn test_plain_text_without_markup() {
        let tokens = tokens("just text.");
        let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
        assert_eq!(texts, vec!["just", " ", "text", "."]);
    }

    #[test]
    fn test_segments_cover_input() {
        let html = "a<b>c</b>d";
        assert_eq!(
            segment(html).unwrap(),
            vec![
                Segment::Text(0..1),
                Segment::Markup(1..4),
                Segment::Text(4..5),
                Segment::Markup(5..9),
                Segment::Text(9..10),
            ]
        );
    }

    #[test]
    fn test_bare_less_than_is_text() {
        let tokens = tokens("<p>if a < b then</p>");
        let texts: Vec<&str> = tokens.iter().map(Token::text).collect();
        assert_eq!(
            texts,
            vec!["<p>", "if", " ", "a", " ", "<", " ", "b", " ", "then", "</p>"]
        );
        assert!(tokens[5].is_punct());
        assert!(tokens[7].is_word());
    }

    #[test]
    fn test_script_content_is_text() {
        let html = "<script>if (a<b) { x(); }</script><p>done</p>";
        let tokens = tokens(html);

        let markup: Vec<&str> = tokens
            .iter()
            .filter(|t| t.text().starts_with('<') && t.text().len() > 1)
            .map(Token::text)
            .collect();
        assert_eq!(markup, vec!["<script>", "</script>", "<p>", "</p>"]);

        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_word())
            .map(Token::text)
            .collect();
        assert_eq!(words, vec!["if", "a", "b", "x", "done"]);

        let roundtrip: String = tokens.iter().map(Token::text).collect();
        assert_eq!(roundtrip, html);
    }

    #[test]
    fn test_unclosed_script_runs_to_end() {
        let html = "<SCRIPT>a <b";
        assert_eq!(
            segment(html).unwrap(),
            vec![Segment::Markup(0..8), Segment::Text(8..12)]
        );
    }

    #[test]
    fn test_less_than_at_end_of_input() {
        assert_eq!(segment("a <").unwrap(), vec![Segment::Text(0..3)]);
    }

    #[test]
    fn test_unterminated_tag_is_markup_error() {
        let result = HtmlTokenizer::new().tokenize("text <p class=");
        assert!(matches!(result, Err(JargonError::Markup(_))));
    }

    #[test]
    fn test_reader_decode_error() {
        let bytes: &[u8] = b"<p>\xFF</p>";
        let result = HtmlTokenizer::new().tokenize_reader(Box::new(bytes));
        assert!(matches!(result, Err(JargonError::Decode { offset: 3 })));
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(HtmlTokenizer::new().name(), "html");
    }
}
