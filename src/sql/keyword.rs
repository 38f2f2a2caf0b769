//! Reserved words recognized by the highlighting lexer.
//!
//! The list is closed: only these words are ever classified as keywords, no
//! matter what the surrounding SQL dialect would reserve. Matching is
//! case‑insensitive; the canonical form is uppercase, which is also what the
//! lexer displays.
//!
//! Design notes:
//! - `from_upper` expects the caller to have uppercased the word already, so a
//!   single `to_ascii_uppercase` per identifier serves both the lookup and the
//!   display text.
//! - `as_str` / `Display` return the uppercase spelling.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(rename_all = "UPPERCASE")]
pub enum Keyword {
    Select,
    From,
    Where,
    Join,
    Inner,
    Left,
    Right,
    Outer,
    On,
    And,
    Or,
    Not,
    In,
    Like,
    Between,
    Order,
    By,
    Group,
    Having,
    Distinct,
    As,
    Null,
    Is,
    Exists,
    Union,
    All,
    Limit,
    Offset,
    Asc,
    Desc,
}

impl Keyword {
    /// Every reserved word, in declaration order.
    pub const ALL: [Self; 30] = [
        Keyword::Select,
        Keyword::From,
        Keyword::Where,
        Keyword::Join,
        Keyword::Inner,
        Keyword::Left,
        Keyword::Right,
        Keyword::Outer,
        Keyword::On,
        Keyword::And,
        Keyword::Or,
        Keyword::Not,
        Keyword::In,
        Keyword::Like,
        Keyword::Between,
        Keyword::Order,
        Keyword::By,
        Keyword::Group,
        Keyword::Having,
        Keyword::Distinct,
        Keyword::As,
        Keyword::Null,
        Keyword::Is,
        Keyword::Exists,
        Keyword::Union,
        Keyword::All,
        Keyword::Limit,
        Keyword::Offset,
        Keyword::Asc,
        Keyword::Desc,
    ];

    /// Attempt to classify an *upper‑cased* word slice into a `Keyword`.
    ///
    /// NOTE: The caller is responsible for upper‑casing the input.
    pub fn from_upper(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == word)
    }

    /// Canonical uppercase string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Select => "SELECT",
            From => "FROM",
            Where => "WHERE",
            Join => "JOIN",
            Inner => "INNER",
            Left => "LEFT",
            Right => "RIGHT",
            Outer => "OUTER",
            On => "ON",
            And => "AND",
            Or => "OR",
            Not => "NOT",
            In => "IN",
            Like => "LIKE",
            Between => "BETWEEN",
            Order => "ORDER",
            By => "BY",
            Group => "GROUP",
            Having => "HAVING",
            Distinct => "DISTINCT",
            As => "AS",
            Null => "NULL",
            Is => "IS",
            Exists => "EXISTS",
            Union => "UNION",
            All => "ALL",
            Limit => "LIMIT",
            Offset => "OFFSET",
            Asc => "ASC",
            Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_round_trips_through_from_upper() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_upper(kw.as_str()), Some(kw), "{kw}");
        }
    }

    #[test]
    fn rejects_unknown_words() {
        for w in ["FOO", "CROSS", "INSERT", "WITH", "EXCEPT", "CASE"] {
            assert!(
                Keyword::from_upper(w).is_none(),
                "{w} should NOT be recognized"
            );
        }
    }

    #[test]
    fn lowercase_is_not_matched_directly() {
        assert!(Keyword::from_upper("select").is_none());
        assert_eq!(Keyword::from_upper("SELECT"), Some(Keyword::Select));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Keyword::Between.to_string(), "BETWEEN");
        for kw in Keyword::ALL {
            assert_eq!(kw.to_string(), kw.as_str());
        }
    }
}
