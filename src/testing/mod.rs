#![cfg(test)]
crate::reexport!(container);
crate::reexport!(context);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

mod isolated_integration_tests {
    use super::{super::*, *};

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "needs a Docker daemon for the Postgres container"]
    async fn lands_in_own_database(ctx: &mut IsolatedIntegrationTest) -> Result {
        let database: String = sqlx::query_scalar("SELECT current_database();")
            .fetch_one(&ctx.pool)
            .await?;
        assert_eq!(ctx.database, database);
        Ok(())
    }

    #[test_context(IsolatedIntegrationTest)]
    #[tokio::test]
    #[ignore = "needs a Docker daemon for the Postgres container"]
    async fn starts_without_user_tables(ctx: &mut IsolatedIntegrationTest) -> Result {
        let count: i64 = sqlx::query_scalar(
            "SELECT count(*) FROM information_schema.tables WHERE table_schema = 'public'",
        )
        .fetch_one(&ctx.pool)
        .await?;
        assert_eq!(count, 0);
        Ok(())
    }
}
