/// LLM Client — the single point of entry for chat-completion calls.
///
/// Callers depend on the [`CompletionService`] trait, never on [`GroqClient`]
/// directly, so the upstream can be swapped (or faked in tests) at startup.
///
/// Model and sampling parameters are fixed constants: every resume goes
/// through the same request shape.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all completion calls.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f32 = 1.0;
const MAX_TOKENS: u32 = 1024;
const TOP_P: f32 = 1.0;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Anything that can turn a system + user prompt into one completion.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
    stop: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Text of the first choice, if the model produced any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Groq's OpenAI-compatible chat-completions API.
///
/// Non-streaming, single attempt. No request timeout is set here; the
/// reqwest default applies.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GroqClient {
    pub fn new(api_key: String, endpoint: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            endpoint,
        })
    }

    fn request_body<'a>(system_prompt: &'a str, user_prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: MODEL,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            stream: false,
            stop: None,
        }
    }
}

#[async_trait]
impl CompletionService for GroqClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError> {
        let request_body = Self::request_body(system_prompt, user_prompt);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response.json().await?;
        if let Some(usage) = &chat.usage {
            debug!(
                "Completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat.text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}
