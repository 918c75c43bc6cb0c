//! Ordered token buffer consumed destructively by the decoders
//!
//! Every decoder searches the buffer, then removes what it claims in the same
//! step, so a token is never interpreted twice.

use std::ops::Range;

/// Ordered, indexable sequence of report tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<String>,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Split text on whitespace
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }

    /// Index of the first occurrence of `token`
    pub fn position(&self, token: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t == token)
    }

    /// Index of the first target present, checking targets in priority order
    /// rather than by position in the buffer
    pub fn first_index(&self, targets: &[&str]) -> Option<usize> {
        targets.iter().find_map(|target| self.position(target))
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.tokens.len()).then(|| self.tokens.remove(index))
    }

    /// Remove the first occurrence of `token`, returning whether it was present
    pub fn remove_token(&mut self, token: &str) -> bool {
        match self.position(token) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn pop(&mut self) -> Option<String> {
        self.tokens.pop()
    }

    /// Remove and return the tokens in `range`, clamped to the buffer
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<String> {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        self.tokens.drain(start..end).collect()
    }

    /// Remove and return the first `count` tokens
    pub fn take_prefix(&mut self, count: usize) -> Vec<String> {
        self.remove_range(0..count)
    }

    pub fn truncate(&mut self, len: usize) {
        self.tokens.truncate(len);
    }

    /// Split into `[0, at)` and `[at, len)`
    pub fn split_at(self, at: usize) -> (TokenBuffer, TokenBuffer) {
        let mut head = self.tokens;
        let tail = head.split_off(at.min(head.len()));
        (Self::new(head), Self::new(tail))
    }

    /// Tokens rejoined with single spaces
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }
}

impl From<Vec<&str>> for TokenBuffer {
    fn from(tokens: Vec<&str>) -> Self {
        Self::new(tokens.into_iter().map(str::to_string).collect())
    }
}
