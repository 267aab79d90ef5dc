//! Connection settings for the text-generation service.

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const API_KEY_VAR: &str = "NVIDIA_API_KEY";
pub const BASE_URL_VAR: &str = "PERC_LLM_BASE_URL";
pub const MODEL_VAR: &str = "PERC_LLM_MODEL";
pub const TIMEOUT_VAR: &str = "PERC_LLM_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
pub const DEFAULT_MODEL: &str = "qwen/qwen3-next-80b-a3b-instruct";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fixed sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.6,
            top_p: 0.7,
            max_tokens: 600,
        }
    }
}

/// Process-wide configuration of the completion endpoint.
#[derive(Clone)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API, without the `/chat/completions` suffix.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
    pub sampling: SamplingParams,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("sampling", &self.sampling)
            .finish()
    }
}

impl LlmConfig {
    /// Config with default endpoint and model for the given credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            sampling: SamplingParams::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the configuration from the process environment.
    ///
    /// The API key is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_key = read(API_KEY_VAR).ok_or_else(|| anyhow!("{API_KEY_VAR} is not set"))?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = read(BASE_URL_VAR) {
            config.base_url = base_url;
        }
        if let Some(model) = read(MODEL_VAR) {
            config.model = model;
        }
        if let Some(raw) = read(TIMEOUT_VAR) {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("{TIMEOUT_VAR} must be a number of seconds, got {raw:?}"))?;
            if secs == 0 {
                return Err(anyhow!("{TIMEOUT_VAR} must be at least 1 second, got 0"));
            }
            config.timeout_secs = secs;
        }

        Ok(config)
    }
}
