use super::*;
use crate::{Result, debug};
use sqlx::PgPool;

/// Producer of schema metadata.
///
/// Implementations report failures as `Err`; turning a failure into an empty
/// schema is the registry's job.
pub trait SchemaSource {
    fn load(&self) -> impl Future<Output = Result<SchemaMap>> + Send;
}

/// A fixed, in-memory schema.
#[derive(Debug, Clone, Default)]
pub struct StaticSchema(SchemaMap);

impl StaticSchema {
    pub fn new(schema: SchemaMap) -> Self {
        Self(schema)
    }
}

impl SchemaSource for StaticSchema {
    fn load(&self) -> impl Future<Output = Result<SchemaMap>> + Send {
        let schema = self.0.clone();
        async move { Ok(schema) }
    }
}

/// Reads tables and columns of one Postgres schema from `information_schema`.
pub struct PgSchemaSource {
    pool: PgPool,
    schema: String,
}

impl PgSchemaSource {
    const COLUMNS_SQL: &'static str = "SELECT table_name::text, column_name::text \
        FROM information_schema.columns \
        WHERE table_schema = $1 \
        ORDER BY table_name, ordinal_position";

    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }
}

impl SchemaSource for PgSchemaSource {
    fn load(&self) -> impl Future<Output = Result<SchemaMap>> + Send {
        async move {
            let rows: Vec<(String, String)> = sqlx::query_as(Self::COLUMNS_SQL)
                .bind(self.schema.clone())
                .fetch_all(&self.pool)
                .await?;

            let mut map = SchemaMap::new();
            for (table, column) in rows {
                map.push_field(table, column);
            }
            debug!(
                "Loaded {} tables from Postgres schema {:?}",
                map.len(),
                self.schema
            );
            Ok(map)
        }
    }
}
