use super::*;

/// Error reported for input with no statement in it.
pub const EMPTY_QUERY: &str = "empty query";

/// Warning attached when there is no schema to check references against.
pub const NO_SCHEMA: &str = "no schema loaded, table and column checks skipped";

/// Comparison operators a query may use.
const COMPARISONS: [&str; 7] = ["=", "<", ">", "<=", ">=", "<>", "!="];

/// Outcome of validating one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    /// Normalized form of the query.
    pub query: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Distinct tables named in FROM / JOIN, first-seen order.
    pub tables_found: Vec<String>,
    /// Distinct `qualifier.column` references as written, first-seen order.
    pub attributes_found: Vec<String>,
    /// `(alias, table)` pairs declared in FROM / JOIN.
    pub aliases: Vec<(String, String)>,
}

impl ValidationReport {
    /// Report for `sql` with the given normalized form.
    ///
    /// `syntax_errors` come from whoever parsed the query. When there are none,
    /// the references are checked against `schema` and the comparison
    /// operators against the allowed set. Valid iff no errors remain.
    pub fn new(sql: &str, schema: &SchemaMap, query: String, syntax_errors: Vec<String>) -> Self {
        let tokens = tokenize(sql, schema);
        let refs = References::collect(&tokens);
        let mut errors = syntax_errors;
        let mut warnings = Vec::new();
        if errors.is_empty() {
            if schema.is_empty() {
                warnings.push(NO_SCHEMA.to_string());
            } else {
                errors.extend(refs.schema_errors(schema));
            }
            errors.extend(operator_errors(&tokens));
        }
        Self {
            valid: errors.is_empty(),
            query,
            errors,
            warnings,
            tables_found: refs.tables,
            attributes_found: refs
                .attributes
                .iter()
                .map(|(qualifier, column)| format!("{qualifier}.{column}"))
                .collect(),
            aliases: refs.aliases,
        }
    }

    pub fn empty(sql: &str) -> Self {
        Self {
            valid: false,
            query: normalize_whitespace(sql),
            errors: vec![EMPTY_QUERY.to_string()],
            ..Self::default()
        }
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(sql: &str) -> String {
    sql.split_whitespace().join(" ")
}

/// Tables, aliases and qualified column references of a lexed query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    pub tables: Vec<String>,
    pub aliases: Vec<(String, String)>,
    pub attributes: Vec<(String, String)>,
}

impl References {
    /// Walk the FROM / JOIN lists of `tokens`.
    ///
    /// Rules (lenient, like the lexer):
    /// - `FROM` and `JOIN` open a table list; `,` expects another table.
    /// - A word in table position is a table; the next word (after an optional
    ///   `AS`) is its alias.
    /// - `schema.table` in table position names `table`.
    /// - Any other keyword closes the list; anything else (e.g. `(`) resets it.
    pub fn collect(tokens: &[Token]) -> Self {
        let sig: Vec<&Token> = tokens.iter().filter(|t| is_significant(t)).collect();
        let mut refs = Self::default();
        let mut relation_starts = Vec::new();
        let mut in_list = false;
        let mut expect_table = false;
        let mut last_table: Option<String> = None;

        let mut i = 0;
        while let Some(t) = sig.get(i) {
            i += 1;

            if let Some(kw) = t.keyword() {
                match kw {
                    Keyword::From | Keyword::Join => {
                        in_list = true;
                        expect_table = true;
                        last_table = None;
                    }
                    Keyword::As => {}
                    _ => {
                        in_list = false;
                        last_table = None;
                    }
                }
                continue;
            }
            if !in_list {
                continue;
            }
            if t.text == "," {
                expect_table = true;
                last_table = None;
                continue;
            }

            let qualified = t.kind == TokenKind::Table
                && sig.get(i).is_some_and(|d| d.kind == TokenKind::Dot);
            let name = if qualified {
                let column = sig.get(i + 1).filter(|c| c.kind == TokenKind::Column);
                i += 1 + usize::from(column.is_some());
                relation_starts.push(t.start);
                column.map(|c| c.text.clone())
            } else if is_word(t) {
                Some(t.text.clone())
            } else {
                None
            };

            match name {
                Some(table) if expect_table => {
                    if !refs.tables.contains(&table) {
                        refs.tables.push(table.clone());
                    }
                    last_table = Some(table);
                    expect_table = false;
                }
                Some(alias) => match last_table.take() {
                    Some(table) if !refs.aliases.iter().any(|(a, _)| *a == alias) => {
                        refs.aliases.push((alias, table));
                    }
                    _ => {}
                },
                None => {
                    expect_table = false;
                    last_table = None;
                }
            }
        }

        refs.attributes = tokens
            .iter()
            .tuple_windows()
            .filter(|(t, d, c)| {
                t.kind == TokenKind::Table
                    && d.kind == TokenKind::Dot
                    && c.kind == TokenKind::Column
                    && !relation_starts.contains(&t.start)
            })
            .map(|(t, _, c)| (t.text.clone(), c.text.clone()))
            .unique()
            .collect();
        refs
    }

    /// The table an alias stands for, or `name` itself.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(alias, _)| alias == name)
            .map_or(name, |(_, table)| table.as_str())
    }

    /// Unknown tables and unknown qualified columns.
    pub fn schema_errors(&self, schema: &SchemaMap) -> Vec<String> {
        let mut errors: Vec<String> = self
            .tables
            .iter()
            .filter(|table| !schema.contains_table(table))
            .map(|table| format!("table '{table}' does not exist in the schema"))
            .collect();
        for (qualifier, column) in &self.attributes {
            let table = self.resolve(qualifier);
            match schema.fields(table) {
                Some(fields) if fields.contains(column) => {}
                Some(_) => errors.push(format!(
                    "column '{column}' does not exist in table '{table}'"
                )),
                None => errors.push(format!(
                    "table '{table}' not found for column '{column}'"
                )),
            }
        }
        errors
    }
}

fn is_significant(token: &Token) -> bool {
    match token.kind {
        TokenKind::Comment => false,
        TokenKind::Plain => !token.text.trim().is_empty(),
        _ => true,
    }
}

fn is_word(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Plain | TokenKind::Table)
        && token
            .text
            .starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
}

/// Runs of adjacent comparison characters that do not form an allowed operator.
pub fn operator_errors(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| {
            matches!(t.kind, TokenKind::Operator | TokenKind::Plain)
                && t.text.chars().all(|c| "=<>!".contains(c))
        })
        .map(|t| (t.start, t.end, t.text.clone()))
        .coalesce(|a, b| {
            if a.1 == b.0 {
                Ok((a.0, b.1, a.2 + &b.2))
            } else {
                Err((a, b))
            }
        })
        .filter(|(_, _, op)| !COMPARISONS.contains(&op.as_str()))
        .map(|(_, _, op)| format!("invalid operator '{op}'"))
        .unique()
        .collect()
}
