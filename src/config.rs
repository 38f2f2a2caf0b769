use crate::{Error, Result};
use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Postgres to read schema metadata from; highlighting runs without a schema when unset.
    #[config(env = "QUERYLENS_DATABASE_URL")]
    pub database_url: Option<String>,
    /// Postgres schema whose tables are offered to the lexer.
    #[config(
        env = "QUERYLENS_SCHEMA",
        default = "public",
        validate(!schema.trim().is_empty(), "schema name must not be blank")
    )]
    pub schema: String,
    #[cfg(test)]
    #[config(env = "QUERYLENS_CONTAINER_RAMDISKED", default = true)]
    pub container_ramdisked: bool,
    #[cfg(test)]
    #[config(env = "QUERYLENS_CONTAINER_LOGS", default = false)]
    pub container_logs: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load the configuration from the environment once, reporting bad values.
pub fn load_config() -> Result<&'static Config> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = build(Config::builder().env())?;
    Ok(CONFIG.get_or_init(|| loaded))
}

pub fn config() -> &'static Config {
    load_config()
        .expect("Failed to load one or more value configuration from the current environment")
}

fn build(builder: confique::Builder<Config>) -> Result<Config> {
    builder.load().map_err(|e| Error::Config(e.to_string()))
}
