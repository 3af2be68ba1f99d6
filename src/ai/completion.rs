use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::ai::config::AiConfig;
use crate::ai::prompts::Prompt;
use crate::error::AdvisoryError;

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 500;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [&'a Prompt; 1],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Single-turn client for an OpenAI-compatible chat completions endpoint.
///
/// Holds no per-request state; clones share the underlying connection pool.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl CompletionClient {
    pub fn new(config: &AiConfig) -> Result<Self, AdvisoryError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(AdvisoryError::ClientSetup)?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.gpt_model.clone(),
            url: config
                .openai_chat_url
                .clone()
                .unwrap_or_else(|| OPENAI_CHAT_URL.to_string()),
        })
    }

    /// Send `prompt` as the only message and return the first choice's text.
    #[instrument(level = "trace", skip(self, prompt), fields(url = %self.url, model = %self.model))]
    pub async fn complete(&self, prompt: &Prompt) -> Result<String, AdvisoryError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [prompt],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!("sending chat completion request");

        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let err_text = resp.text().await.unwrap_or_default();
            warn!(%status, "completion API error");
            return Err(classify_status(status, err_text));
        }

        let raw = resp.text().await?;
        let snippet: String = raw.chars().take(200).collect();
        debug!(snippet = %snippet, "chat response body");
        trace!(raw = %raw, "chat response");

        parse_chat_content(status, &raw)
    }
}

fn classify_status(status: StatusCode, message: String) -> AdvisoryError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AdvisoryError::Auth {
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => AdvisoryError::RateLimited { message },
        _ => AdvisoryError::Upstream {
            status: status.as_u16(),
            message,
        },
    }
}

fn parse_chat_content(status: StatusCode, raw: &str) -> Result<String, AdvisoryError> {
    let malformed = |message: String| AdvisoryError::Upstream {
        status: status.as_u16(),
        message,
    };
    let chat: ChatResponse = serde_json::from_str(raw)
        .map_err(|e| malformed(format!("unexpected completion payload: {e}")))?;
    let choice = chat
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| malformed("missing chat choice".to_string()))?;
    Ok(choice.message.content.unwrap_or_default())
}
