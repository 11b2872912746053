use anyhow::{Context, Result};
use chrono::NaiveDate;

pub const DEFAULT_LLM_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_EMBEDDING_API_URL: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_TENURE_REFERENCE_DATE: &str = "2025-03-01";
pub const DEFAULT_SESSION_TTL_MINUTES: &str = "60";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm_api_url: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub embedding_api_url: String,
    pub embedding_api_key: String,
    pub embedding_model: String,
    /// Tenure is counted up to this date when a resume states no total.
    pub tenure_reference_date: NaiveDate,
    /// Sessions untouched for this long are evicted.
    pub session_ttl_minutes: i64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_api_key = require_env("LLM_API_KEY")?;
        let embedding_api_key =
            std::env::var("EMBEDDING_API_KEY").unwrap_or_else(|_| llm_api_key.clone());

        Ok(Config {
            llm_api_url: env_or("LLM_API_URL", DEFAULT_LLM_API_URL),
            llm_api_key,
            llm_model: env_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            embedding_api_url: env_or("EMBEDDING_API_URL", DEFAULT_EMBEDDING_API_URL),
            embedding_api_key,
            embedding_model: env_or("EMBEDDING_MODEL", DEFAULT_EMBEDDING_MODEL),
            tenure_reference_date: parse_tenure_reference(&env_or(
                "TENURE_REFERENCE_DATE",
                DEFAULT_TENURE_REFERENCE_DATE,
            ))?,
            session_ttl_minutes: parse_session_ttl(&env_or(
                "SESSION_TTL_MINUTES",
                DEFAULT_SESSION_TTL_MINUTES,
            ))?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_tenure_reference(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("TENURE_REFERENCE_DATE must be YYYY-MM-DD, got '{value}'"))
}

fn parse_session_ttl(value: &str) -> Result<i64> {
    match value.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => anyhow::bail!("SESSION_TTL_MINUTES must be a positive integer, got '{value}'"),
    }
}
