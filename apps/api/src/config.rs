use anyhow::{Context, Result};

use crate::scoring::ScoringWeights;

/// Application configuration loaded from environment variables.
/// Every variable has a default; the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Sub-score weights, applied verbatim by the engine. Expected to sum
    /// to 1.0; not validated here.
    pub weights: ScoringWeights,
    /// Skill matcher backend: "overlap" (default) or "lexicon".
    pub skill_matcher: String,
    /// Comma-separated override for the lexicon backend's skill terms.
    pub skill_lexicon: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = ScoringWeights::default();

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            weights: ScoringWeights {
                keyword: parse_weight("SCORING_WEIGHT_KEYWORD", defaults.keyword)?,
                skill: parse_weight("SCORING_WEIGHT_SKILL", defaults.skill)?,
                formatting: parse_weight("SCORING_WEIGHT_FORMATTING", defaults.formatting)?,
            },
            skill_matcher: env_or("SKILL_MATCHER", "overlap"),
            skill_lexicon: std::env::var("SKILL_LEXICON").ok().map(|raw| {
                raw.split(',')
                    .map(|term| term.trim().to_lowercase())
                    .filter(|term| !term.is_empty())
                    .collect()
            }),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_weight(key: &str, default: f64) -> Result<f64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{key} must be a valid float")),
        Err(_) => Ok(default),
    }
}
