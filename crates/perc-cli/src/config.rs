//! CLI configuration management.
//!
//! Values come from CLI flags first, then environment variables (a `.env`
//! file is honored), then defaults.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use perc_api::DEFAULT_ALLOWED_ORIGIN;
use perc_explain::LlmConfig;

/// Load `.env` into the process environment if one exists.
pub fn load_dotenv() {
    // Silently ignore a missing file
    let _ = dotenvy::dotenv();
}

/// Settings for `perc serve`.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub addr: SocketAddr,
    pub allowed_origin: HeaderValue,
    pub llm: LlmConfig,
}

impl ServeConfig {
    /// Resolve server settings. Fails when the API key is missing or the origin is invalid.
    pub fn resolve(host: IpAddr, port: u16, origin: Option<&str>) -> Result<Self> {
        let origin = origin.unwrap_or(DEFAULT_ALLOWED_ORIGIN);
        let allowed_origin = HeaderValue::from_str(origin)
            .with_context(|| format!("Invalid allowed origin: {origin}"))?;
        let llm = LlmConfig::from_env().context("Failed to load LLM configuration")?;

        Ok(Self {
            addr: SocketAddr::new(host, port),
            allowed_origin,
            llm,
        })
    }
}
