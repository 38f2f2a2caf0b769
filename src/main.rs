use itertools::Itertools as _;
use querylens::{Editor, PgSchemaSource, QueryValidator as _, SyntaxValidator, load_config};
use sqlx::postgres::PgPoolOptions;
use std::io::IsTerminal as _;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> querylens::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;
    let sql = sql_input()?;
    let mut editor = Editor::new();

    if let Some(url) = &config.database_url {
        match PgPoolOptions::new().max_connections(1).connect(url).await {
            Ok(pool) => {
                let source = PgSchemaSource::new(pool, config.schema.clone());
                editor.registry_mut().reload(&source).await;
            }
            Err(e) => warn!("Schema database unreachable, highlighting without schema: {e}"),
        }
    }

    editor.on_input(&sql);
    println!("{}", editor.overlay().content());

    let schema = editor.registry().snapshot();
    let report = SyntaxValidator.validate(&sql, &schema).await?;
    info!(
        valid = report.valid,
        tables = %report.tables_found.iter().join(", "),
        attributes = %report.attributes_found.iter().join(", "),
        "Validated query: {}",
        report.query
    );
    for warning in &report.warnings {
        info!("{warning}");
    }
    for error in &report.errors {
        warn!("{error}");
    }
    Ok(())
}

/// SQL from the command line arguments, or stdin when none are given.
fn sql_input() -> querylens::Result<String> {
    let args = std::env::args().skip(1).join(" ");
    if !args.is_empty() || std::io::stdin().is_terminal() {
        return Ok(args);
    }
    Ok(std::io::read_to_string(std::io::stdin())?)
}
