//! Token kind definitions for the highlighting lexer.
//!
//! The set is closed: every slice of input text falls into exactly one of
//! these nine kinds. Anything the lexer does not recognize becomes `Plain`.
//!
//! See `keyword.rs` for the reserved word list and `tokenizer.rs` for the
//! scanning rules.

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// Reserved word; token text is displayed uppercased.
    #[display("keyword")]
    Keyword,
    /// Known table, or the left side of a `table.column` reference.
    #[display("table")]
    Table,
    /// Right side of a `table.column` reference.
    #[display("column")]
    Column,
    /// Quoted literal, delimiters included when present.
    #[display("string")]
    StringLiteral,
    #[display("number")]
    NumberLiteral,
    #[display("operator")]
    Operator,
    /// `--` line comment, newline excluded.
    #[display("comment")]
    Comment,
    /// The `.` of a qualified reference.
    #[display("dot")]
    Dot,
    /// Whitespace, punctuation and unclassified identifiers.
    #[display("plain")]
    Plain,
}

impl TokenKind {
    /// Style class the renderer wraps this kind in; `None` for unstyled kinds.
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some("sql-keyword"),
            TokenKind::Table => Some("sql-table"),
            TokenKind::Column => Some("sql-column"),
            TokenKind::StringLiteral => Some("sql-string"),
            TokenKind::NumberLiteral => Some("sql-number"),
            TokenKind::Operator => Some("sql-operator"),
            TokenKind::Comment => Some("sql-comment"),
            TokenKind::Dot | TokenKind::Plain => None,
        }
    }
}
