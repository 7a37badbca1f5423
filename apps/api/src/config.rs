use anyhow::{bail, Context, Result};

/// Which clue-store backend to run. Memory is the default; Redis is the
/// multi-process option, carrying its connection URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueStoreBackend {
    Memory,
    Redis(String),
}

impl ClueStoreBackend {
    /// Resolves the `CLUE_STORE` selector against the (optional) `REDIS_URL`.
    pub fn parse(kind: &str, redis_url: Option<String>) -> Result<Self> {
        match kind {
            "memory" => Ok(ClueStoreBackend::Memory),
            "redis" => {
                let url = redis_url.context("CLUE_STORE=redis requires REDIS_URL to be set")?;
                Ok(ClueStoreBackend::Redis(url))
            }
            other => bail!("CLUE_STORE must be 'memory' or 'redis', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Only `CLUE_STORE=redis` introduces a required variable; everything else
/// has a default, and a missing `ANTHROPIC_API_KEY` just means the word
/// source runs offline.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub clue_store: ClueStoreBackend,
    pub clue_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let clue_store = ClueStoreBackend::parse(
            &std::env::var("CLUE_STORE").unwrap_or_else(|_| "memory".to_string()),
            std::env::var("REDIS_URL").ok(),
        )?;

        Ok(Config {
            port: parse_port(&std::env::var("PORT").unwrap_or_else(|_| "8080".to_string()))?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            clue_store,
            clue_ttl_minutes: parse_ttl_minutes(
                &std::env::var("CLUE_TTL_MINUTES").unwrap_or_else(|_| "60".to_string()),
            )?,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.parse::<u16>().context("PORT must be a valid port number")
}

fn parse_ttl_minutes(raw: &str) -> Result<i64> {
    let minutes = raw
        .parse::<i64>()
        .context("CLUE_TTL_MINUTES must be an integer")?;
    if minutes <= 0 {
        bail!("CLUE_TTL_MINUTES must be positive");
    }
    Ok(minutes)
}
