//! Text-generation backends.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{LlmConfig, SamplingParams};
use crate::error::{ExplainError, ExplainResult};

/// A service that turns a single user prompt into generated text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Generate a completion for `prompt`. Exactly one attempt is made.
    async fn complete(&self, prompt: &str) -> ExplainResult<String>;
}

/// Backend speaking the OpenAI chat-completions protocol.
pub struct ChatCompletionsBackend {
    client: Client,
    endpoint: String,
    model: String,
    sampling: SamplingParams,
}

impl ChatCompletionsBackend {
    /// Build the HTTP client once; it is reused for every request.
    pub fn new(config: &LlmConfig) -> ExplainResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !config.api_key.is_empty() {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| ExplainError::InvalidApiKey)?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            sampling: config.sampling,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionBackend for ChatCompletionsBackend {
    async fn complete(&self, prompt: &str) -> ExplainResult<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            sampling: self.sampling,
            stream: false,
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExplainError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.bytes().await?;
        let completion: ChatCompletionResponse = serde_json::from_slice(&raw)
            .map_err(|err| ExplainError::Malformed(err.to_string()))?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or(ExplainError::NoChoices)?
            .message
            .content
            .ok_or_else(|| ExplainError::Malformed("choice has no message content".into()))?;

        debug!(
            target: "perc::explain",
            model = %self.model,
            chars = content.len(),
            "completion received"
        );
        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    #[serde(flatten)]
    sampling: SamplingParams,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    #[serde(default)]
    content: Option<String>,
}
