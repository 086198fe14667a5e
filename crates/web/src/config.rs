use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CORS_MAX_AGE_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Participant catalog JSON. The bundled demo catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub cors_max_age_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            cors_max_age_secs: match std::env::var("CORS_MAX_AGE_SECS") {
                Ok(value) => value
                    .parse()
                    .context("CORS_MAX_AGE_SECS must be a number of seconds")?,
                Err(_) => DEFAULT_CORS_MAX_AGE_SECS,
            },
        })
    }
}
