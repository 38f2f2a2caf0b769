//! Token model tying a `TokenKind` and display text to its source span.
//!
//! `text` is what the renderer shows. For every kind except `Keyword` it is
//! byte-for-byte the source slice `[start, end)`; keywords carry their
//! uppercase spelling instead. `source` always returns the original slice, so
//! callers that need to rebuild the input exactly should go through it.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `[start, end)` is a valid slice range for the original input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    /// Byte length of the source span (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The exact slice of `sql` this token was lexed from.
    ///
    /// `sql` must be the string passed to `tokenize`.
    pub fn source<'a>(&self, sql: &'a str) -> &'a str {
        &sql[self.start..self.end]
    }

    /// The reserved word this token stands for, if it is a keyword.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_upper(&self.text),
            _ => None,
        }
    }

    /// True if this token represents the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_and_empty() {
        let t = Token::new(TokenKind::Dot, ".", 5, 6);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
    }

    #[test]
    fn keyword_text_differs_from_source() {
        let sql = "select 1";
        let t = Token::new(TokenKind::Keyword, "SELECT", 0, 6);
        assert_eq!(t.source(sql), "select");
        assert_eq!(t.keyword(), Some(Keyword::Select));
        assert!(t.is_keyword(Keyword::Select));
        assert!(!t.is_keyword(Keyword::From));
    }

    #[test]
    fn non_keyword_has_no_keyword() {
        let t = Token::new(TokenKind::Plain, "SELECT", 0, 6);
        assert_eq!(t.keyword(), None);
    }
}
