//! Validators producing a `ValidationReport` for a whole query.
use super::*;
use crate::{Result, debug};
use sqlparser::{ast::Statement, dialect::PostgreSqlDialect, parser::Parser};
use sqlx::{AssertSqlSafe, Executor as _, PgPool, SqlSafeStr as _};
use std::future::{Future, ready};

static POSTGRES: PostgreSqlDialect = PostgreSqlDialect {};

/// The validation collaborator.
///
/// A query that fails validation is an `Ok` report with `valid == false`;
/// `Err` is reserved for the validator itself being unable to run.
pub trait QueryValidator {
    fn validate(
        &self,
        sql: &str,
        schema: &SchemaMap,
    ) -> impl Future<Output = Result<ValidationReport>> + Send;
}

/// Local syntax check with `sqlparser`'s PostgreSQL dialect, followed by the
/// schema and operator checks of `ValidationReport::new`.
///
/// The normalized query is the parser's own rendering of the statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxValidator;

impl SyntaxValidator {
    pub fn parse(&self, sql: &str) -> Result<Vec<Statement>> {
        Ok(Parser::parse_sql(&POSTGRES, sql)?)
    }

    pub fn check(&self, sql: &str, schema: &SchemaMap) -> ValidationReport {
        match self.parse(sql) {
            Ok(statements) if statements.is_empty() => ValidationReport::empty(sql),
            Ok(statements) => {
                let query = statements.iter().join("; ");
                ValidationReport::new(sql, schema, query, vec![])
            }
            Err(e) => {
                debug!("Parse failed: {e}");
                ValidationReport::new(sql, schema, normalize_whitespace(sql), vec![e.to_string()])
            }
        }
    }
}

impl QueryValidator for SyntaxValidator {
    fn validate(
        &self,
        sql: &str,
        schema: &SchemaMap,
    ) -> impl Future<Output = Result<ValidationReport>> + Send {
        ready(Ok(self.check(sql, schema)))
    }
}

/// Validation by a live Postgres: the server prepares the statement, which
/// checks both syntax and that referenced relations and columns exist.
pub struct PgValidator {
    pool: PgPool,
}

impl PgValidator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl QueryValidator for PgValidator {
    fn validate(
        &self,
        sql: &str,
        schema: &SchemaMap,
    ) -> impl Future<Output = Result<ValidationReport>> + Send {
        async move {
            let query = normalize_whitespace(sql);
            if query.is_empty() {
                return Ok(ValidationReport::empty(sql));
            }
            let errors = match self
                .pool
                .prepare(AssertSqlSafe(sql.to_owned()).into_sql_str())
                .await
            {
                Ok(_) => vec![],
                Err(sqlx::Error::Database(e)) => vec![e.to_string()],
                Err(e) => return Err(e.into()),
            };
            Ok(ValidationReport::new(sql, schema, query, errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    fn schema() -> SchemaMap {
        SchemaMap::from_iter([("orders", ["id", "total"])])
    }

    fn model() -> SchemaMap {
        SchemaMap::from_iter([("Cliente", ["idCliente", "Nome"])])
    }

    #[rstest]
    #[case("select  id\nfrom orders", "SELECT id FROM orders")]
    #[case("SELECT 1; SELECT 2", "SELECT 1; SELECT 2")]
    #[case("select orders.total\n  from orders where orders.total >= 10", "SELECT orders.total FROM orders WHERE orders.total >= 10")]
    fn syntax_valid(#[case] sql: &str, #[case] normalized: &str) {
        let report = SyntaxValidator.check(sql, &schema());
        assert!(report.valid, "{report:?}");
        assert!(report.errors.is_empty());
        assert_eq!(report.query, normalized);
    }

    #[rstest]
    #[case("SELECT (1")]
    #[case("SELECT 'abc")]
    #[case("SELECT * FROM orders WHERE")]
    fn syntax_invalid(#[case] sql: &str) {
        let report = SyntaxValidator.check(sql, &schema());
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.query, normalize_whitespace(sql));
    }

    #[rstest]
    #[case("")]
    #[case("  \n ")]
    #[case("-- only a comment")]
    fn syntax_empty(#[case] sql: &str) {
        let report = SyntaxValidator.check(sql, &schema());
        assert!(!report.valid);
        assert_eq!(report.errors, [EMPTY_QUERY]);
    }

    #[test]
    fn parse_failure_is_invalid_query() {
        let err = SyntaxValidator.parse("SELECT (1").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidQuery(_)), "{err:?}");
        assert!(err.to_string().starts_with("Invalid query: "));
        assert_eq!(SyntaxValidator.parse("SELECT 1").unwrap().len(), 1);
    }

    #[test]
    fn unknown_column_is_invalid() {
        let report = SyntaxValidator.check("SELECT Cliente.Bogus FROM Cliente", &model());
        assert!(!report.valid);
        assert_eq!(
            report.errors,
            ["column 'Bogus' does not exist in table 'Cliente'"]
        );
        assert_eq!(report.attributes_found, ["Cliente.Bogus"]);
    }

    #[test]
    fn unknown_table_is_invalid_and_listed() {
        let report = SyntaxValidator.check("SELECT x FROM Missing", &model());
        assert!(!report.valid);
        assert_eq!(report.tables_found, ["Missing"]);
        assert_eq!(report.errors, ["table 'Missing' does not exist in the schema"]);
    }

    #[test]
    fn alias_resolves_to_its_table() {
        let report = SyntaxValidator.check("SELECT c.Nome FROM Cliente c", &model());
        assert!(report.valid, "{report:?}");
        assert_eq!(report.tables_found, ["Cliente"]);
        assert_eq!(report.aliases, [("c".to_string(), "Cliente".to_string())]);
        assert_eq!(report.attributes_found, ["c.Nome"]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn without_schema_only_warns() {
        let report = SyntaxValidator.check("SELECT x FROM Missing", &SchemaMap::new());
        assert!(report.valid);
        assert_eq!(report.warnings, [NO_SCHEMA]);
    }

    #[tokio::test]
    async fn syntax_report_carries_references() {
        let report = SyntaxValidator
            .validate("SELECT orders.total FROM orders", &schema())
            .await
            .unwrap();
        assert!(report.valid);
        assert_eq!(report.tables_found, ["orders"]);
        assert_eq!(report.attributes_found, ["orders.total"]);
    }

    #[test_context(IsolatedIntegrationTest)]
    #[rstest]
    #[case("SELECT 1")]
    #[case("SELECT 1 as one")]
    #[case("SELECT table_name FROM information_schema.tables")]
    #[tokio::test]
    #[ignore = "needs a Docker daemon for the Postgres container"]
    async fn when_server_accepts_then_valid(
        ctx: &mut IsolatedIntegrationTest,
        #[case] sql: &'static str,
    ) {
        let validator = PgValidator::new(ctx.pool.clone());
        let report = validator.validate(sql, &SchemaMap::new()).await;
        let report = report.expect("validator should run");
        assert!(report.valid, "{report:?}");
        assert_eq!(report.query, sql);
    }

    #[test_context(IsolatedIntegrationTest)]
    #[rstest]
    #[case("SELECT 1!", "syntax error at end of input")]
    #[case("!SELECT 1", r#"syntax error at or near "!""#)]
    #[case("SELECT col1, col2 FROM orders", r#"relation "orders" does not exist"#)]
    #[tokio::test]
    #[ignore = "needs a Docker daemon for the Postgres container"]
    async fn when_server_rejects_then_invalid(
        ctx: &mut IsolatedIntegrationTest,
        #[case] sql: &'static str,
        #[case] message: &'static str,
    ) {
        let validator = PgValidator::new(ctx.pool.clone());
        let report = validator
            .validate(sql, &schema())
            .await
            .expect("validator should run");
        assert!(!report.valid);
        assert_eq!(report.errors, [message]);
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "needs a Docker daemon for the Postgres container"]
    async fn when_blank_then_empty_without_server(ctx: &mut IsolatedIntegrationTest) {
        let validator = PgValidator::new(ctx.pool.clone());
        let report = validator.validate(" \n", &schema()).await.unwrap();
        assert_eq!(report, ValidationReport::empty(" \n"));
    }
}
