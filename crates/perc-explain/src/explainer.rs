//! Explanation requests with a fallback in place of failure.

use std::sync::Arc;

use perc_core::ExplanationStyle;
use tracing::{info, warn};

use crate::backend::{ChatCompletionsBackend, CompletionBackend};
use crate::config::LlmConfig;
use crate::error::ExplainResult;
use crate::prompt::{render_prompt, ProblemContext};

/// Prefix of every explanation produced when the backend fails.
pub const FALLBACK_PREFIX: &str = "AI explanation unavailable:";

/// Requests explanations from a completion backend.
///
/// Cheap to clone; the backend is shared.
#[derive(Clone)]
pub struct Explainer {
    backend: Arc<dyn CompletionBackend>,
}

impl Explainer {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Build an explainer backed by the configured chat-completions endpoint.
    pub fn from_config(config: &LlmConfig) -> ExplainResult<Self> {
        let backend = ChatCompletionsBackend::new(config)?;
        info!(
            target: "perc::explain",
            endpoint = backend.endpoint(),
            model = %config.model,
            "explanation backend ready"
        );
        Ok(Self::new(Arc::new(backend)))
    }

    /// Explain a solved problem. Never fails: backend errors become a fallback text.
    pub async fn explain(&self, style: ExplanationStyle, ctx: &ProblemContext<'_>) -> String {
        let prompt = render_prompt(style, ctx);
        match self.backend.complete(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    target: "perc::explain",
                    mode = %ctx.mode,
                    %style,
                    "explanation request failed: {err}"
                );
                fallback(err)
            }
        }
    }
}

fn fallback(detail: impl std::fmt::Display) -> String {
    format!("{FALLBACK_PREFIX} {detail}")
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use perc_core::{compute, SelectionMode};

    use super::*;
    use crate::error::ExplainError;

    #[derive(Default)]
    struct Recording {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionBackend for Recording {
        async fn complete(&self, prompt: &str) -> ExplainResult<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("generated".to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl CompletionBackend for Failing {
        async fn complete(&self, _prompt: &str) -> ExplainResult<String> {
            Err(ExplainError::Status {
                status: 401,
                body: "unauthorized".to_string(),
            })
        }
    }

    fn labels() -> Vec<String> {
        ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn passes_generated_text_through() {
        let backend = Arc::new(Recording::default());
        let explainer = Explainer::new(backend.clone());
        let items = labels();
        let computation = compute(&items, 2, SelectionMode::Unordered);

        let text = explainer
            .explain(
                ExplanationStyle::Expert,
                &ProblemContext::new(&items, &computation),
            )
            .await;

        assert_eq!(text, "generated");
        let prompts = backend.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("university mathematics professor"));
    }

    #[tokio::test]
    async fn failure_becomes_fallback() {
        let explainer = Explainer::new(Arc::new(Failing));
        let items = labels();
        let computation = compute(&items, 2, SelectionMode::Ordered);

        let text = explainer
            .explain(
                ExplanationStyle::Tutor,
                &ProblemContext::new(&items, &computation),
            )
            .await;

        assert_eq!(
            text,
            "AI explanation unavailable: service returned 401: unauthorized"
        );
    }
}
