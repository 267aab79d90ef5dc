//! Natural-language explanations for PerC selection problems.
//!
//! A prompt is rendered from a solved problem in one of two registers and
//! sent once to an OpenAI-compatible chat-completions endpoint. Failures never
//! propagate: the caller receives a fallback text starting with
//! [`FALLBACK_PREFIX`] instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use perc_core::{compute, ExplanationStyle, SelectionMode};
//! use perc_explain::{Explainer, LlmConfig, ProblemContext};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let explainer = Explainer::from_config(&LlmConfig::from_env()?)?;
//! let items = vec!["A".to_string(), "B".to_string()];
//! let computation = compute(&items, 2, SelectionMode::Ordered);
//! let text = explainer
//!     .explain(ExplanationStyle::Tutor, &ProblemContext::new(&items, &computation))
//!     .await;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod backend;
mod config;
mod error;
mod explainer;
mod prompt;

pub use backend::{ChatCompletionsBackend, CompletionBackend};
pub use config::{
    LlmConfig, SamplingParams, API_KEY_VAR, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS, MODEL_VAR, TIMEOUT_VAR,
};
pub use error::{ExplainError, ExplainResult};
pub use explainer::{Explainer, FALLBACK_PREFIX};
pub use prompt::{render_prompt, ProblemContext};
