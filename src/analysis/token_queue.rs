//! An ordered, ephemeral buffer of tokens private to one filter invocation.

use std::collections::VecDeque;
use std::fmt;

use crate::analysis::token::Token;

/// FIFO queue of tokens used as lookahead and outgoing buffers by filters.
///
/// Tokens moved with [`pop_to`](TokenQueue::pop_to) or
/// [`flush_to`](TokenQueue::flush_to) keep their relative order; tokens
/// removed with [`drop_front`](TokenQueue::drop_front) are discarded.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
}

impl TokenQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        TokenQueue {
            tokens: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        TokenQueue {
            tokens: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a token at the back.
    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    /// Remove and return the token at the front.
    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Peek at the token at `index` from the front.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Peek at the front token.
    pub fn front(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Discard `n` tokens from the front.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` tokens are buffered.
    pub fn drop_front(&mut self, n: usize) {
        assert!(
            n <= self.tokens.len(),
            "cannot drop {n} tokens from a queue of {}",
            self.tokens.len()
        );
        self.tokens.drain(..n);
    }

    /// Move the front token to the back of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop_to(&mut self, other: &mut TokenQueue) {
        let token = self
            .tokens
            .pop_front()
            .expect("pop_to called on an empty queue");
        other.push(token);
    }

    /// Move every token to the back of `other`, preserving order.
    pub fn flush_to(&mut self, other: &mut TokenQueue) {
        other.tokens.append(&mut self.tokens);
    }

    /// Number of buffered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the buffered tokens from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Borrow the first `n` tokens as a contiguous slice.
    pub fn front_slice(&mut self, n: usize) -> &[Token] {
        &self.tokens.make_contiguous()[..n]
    }
}

impl FromIterator<Token> for TokenQueue {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenQueue {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for TokenQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.tokens.iter().map(Token::text))
            .finish()
    }
}
