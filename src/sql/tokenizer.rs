use crate::metadata::SchemaMap;
use crate::trace;
use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind};

/// Fixed operator set. Compound forms come first so a single-character prefix
/// never shadows them.
const OPERATORS: [&str; 12] = [
    "<=", ">=", "<>", "!=", "=", ">", "<", "+", "-", "*", "/", "%",
];

/// Lenient SQL lexer producing the token stream for live highlighting.
///
/// Scope / Intent:
/// - Re-run from scratch on every keystroke, against whatever the user has
///   typed so far (incomplete, invalid, or empty).
/// - Classifies identifiers using the reserved word list and the table names
///   of `schema`; never validates grammar.
///
/// Rules, tried in order at each position (first match wins):
/// 1. `--` line comment up to, not including, the newline.
/// 2. `'` or `"` string literal; `\x` is an escape unit; unterminated
///    literals run to the end of input.
/// 3. Maximal run of digits and `.` as a number (`1.2.3` is accepted).
/// 4. Operator from the fixed list.
/// 5. `[A-Za-z_][A-Za-z0-9_]*` identifier: `word.` is a table followed by a dot
///    and, when present, a column; otherwise keyword, known table, or plain.
/// 6. Any other character is a one-character `Plain` token.
///
/// Guarantees:
/// - Never panics and never returns an error.
/// - Token spans are contiguous and cover the whole input, so concatenating
///   `Token::source` of every token yields `sql` again.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn tokenize(sql: &str, schema: &SchemaMap) -> Vec<Token> {
    let mut lexer = Lexer {
        sql,
        bytes: sql.as_bytes(),
        pos: 0,
        schema,
        out: Vec::new(),
    };
    while lexer.pos < lexer.bytes.len() {
        lexer.step();
    }
    trace!("Lexed {} bytes into {} tokens", sql.len(), lexer.out.len());
    lexer.out
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

struct Lexer<'a> {
    sql: &'a str,
    bytes: &'a [u8],
    pos: usize,
    schema: &'a SchemaMap,
    out: Vec<Token>,
}

impl Lexer<'_> {
    fn step(&mut self) {
        let b = self.bytes[self.pos];

        if b == b'-' && self.bytes.get(self.pos + 1) == Some(&b'-') {
            return self.comment();
        }
        if b == b'\'' || b == b'"' {
            return self.string(b);
        }
        if b.is_ascii_digit() {
            return self.number();
        }
        if self.operator() {
            return;
        }
        if is_ident_start(b) {
            return self.identifier();
        }

        let start = self.pos;
        self.pos += self.char_len(start);
        self.emit(TokenKind::Plain, start);
    }

    /// Byte length of the character starting at `at`, which is always a char boundary.
    fn char_len(&self, at: usize) -> usize {
        match self.bytes[at] {
            b if b.is_ascii() => 1,
            _ => self.sql[at..].chars().next().map_or(1, char::len_utf8),
        }
    }

    fn emit(&mut self, kind: TokenKind, start: usize) {
        let text = &self.sql[start..self.pos];
        self.out.push(Token::new(kind, text, start, self.pos));
    }

    fn comment(&mut self) {
        let start = self.pos;
        self.pos = self.bytes[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.bytes.len(), |n| start + n);
        self.emit(TokenKind::Comment, start);
    }

    fn string(&mut self, quote: u8) {
        let start = self.pos;
        self.pos += 1;
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b == quote {
                self.pos += 1;
                break;
            }
            if b == b'\\' && self.pos + 1 < self.bytes.len() {
                self.pos += 1 + self.char_len(self.pos + 1);
            } else {
                self.pos += self.char_len(self.pos);
            }
        }
        self.emit(TokenKind::StringLiteral, start);
    }

    fn number(&mut self) {
        let start = self.pos;
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'.')
        {
            self.pos += 1;
        }
        self.emit(TokenKind::NumberLiteral, start);
    }

    fn operator(&mut self) -> bool {
        let rest = &self.sql[self.pos..];
        let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(*op)) else {
            return false;
        };
        let start = self.pos;
        self.pos += op.len();
        self.emit(TokenKind::Operator, start);
        true
    }

    fn word_end(&self, from: usize) -> usize {
        self.bytes[from..]
            .iter()
            .position(|&b| !is_ident_continue(b))
            .map_or(self.bytes.len(), |n| from + n)
    }

    fn identifier(&mut self) {
        let start = self.pos;
        self.pos = self.word_end(start);

        // Qualified reference: classified by shape alone, the schema is not consulted.
        if self.bytes.get(self.pos) == Some(&b'.') {
            self.emit(TokenKind::Table, start);
            let dot = self.pos;
            self.pos += 1;
            self.emit(TokenKind::Dot, dot);
            if self.bytes.get(self.pos).copied().is_some_and(is_ident_start) {
                let column = self.pos;
                self.pos = self.word_end(column);
                self.emit(TokenKind::Column, column);
            }
            return;
        }

        let word = &self.sql[start..self.pos];
        let upper = word.to_ascii_uppercase();
        if Keyword::from_upper(&upper).is_some() {
            self.out
                .push(Token::new(TokenKind::Keyword, upper, start, self.pos));
        } else if self.schema.contains_table(word) {
            self.emit(TokenKind::Table, start);
        } else {
            self.emit(TokenKind::Plain, start);
        }
    }
}
