use anyhow::{bail, Context, Result};

use crate::ats::aggregate::{DEFAULT_MAX_SUGGESTIONS, MIN_MAX_SUGGESTIONS};
use crate::ats::ScoringOptions;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_suggestions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let max_suggestions = match lookup("ATS_MAX_SUGGESTIONS") {
            Some(raw) => raw
                .parse::<usize>()
                .context("ATS_MAX_SUGGESTIONS must be a positive integer")?,
            None => DEFAULT_MAX_SUGGESTIONS,
        };
        if !(MIN_MAX_SUGGESTIONS..=DEFAULT_MAX_SUGGESTIONS).contains(&max_suggestions) {
            bail!(
                "ATS_MAX_SUGGESTIONS must be between {MIN_MAX_SUGGESTIONS} and {DEFAULT_MAX_SUGGESTIONS}"
            );
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_suggestions,
        })
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            max_suggestions: self.max_suggestions,
        }
    }
}
