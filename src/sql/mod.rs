//! Schema-aware SQL lexing for live syntax highlighting.
//!
//! This module turns the raw text of an editor into a flat stream of
//! classified tokens. It is not a parser: it never builds a tree and never
//! reports syntax errors. It runs on every keystroke, so it must accept any
//! input, however incomplete, and always cover it completely.
//!
//! Modules:
//! - `keyword`    : The closed list of reserved words, matched case-insensitively.
//! - `token_kind` : The nine token classifications and their style classes.
//! - `token`      : Token struct pairing a kind and display text with a source span.
//! - `tokenizer`  : Single pass O(n) lexer producing a `Vec<Token>` from raw SQL.
//!
//! Design Principles:
//! 1. Lossless: token spans partition the input exactly.
//! 2. Total: no input makes the lexer fail; unknown characters become `Plain`.
//! 3. Pure: the output depends only on the text and the `SchemaMap` snapshot.
//!
//! Example:
//! ```rust
//! use querylens::{Keyword, SchemaMap, TokenKind, tokenize};
//!
//! let schema = SchemaMap::from_iter([("orders", ["id", "total"])]);
//! let tokens = tokenize("select orders.total", &schema);
//! assert!(tokens[0].is_keyword(Keyword::Select));
//! assert_eq!(tokens[0].text, "SELECT");
//! assert_eq!(tokens[4].kind, TokenKind::Column);
//! ```

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// Convenience prelude re‑exporting the most commonly used items.
///
/// Import with:
/// `use querylens::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, Token, TokenKind, tokenize};
}
