use std::env;
use std::time::Duration;

pub const DEFAULT_GPT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Completion-service settings. The API key only ever comes from the
/// environment.
#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub gpt_model: String,
    pub openai_chat_url: Option<String>,
    pub request_timeout: Duration,
}

impl AiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return None,
        };
        let timeout_secs = env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Some(Self {
            api_key,
            gpt_model: env::var("OPENAI_GPT_MODEL")
                .unwrap_or_else(|_| DEFAULT_GPT_MODEL.to_string()),
            openai_chat_url: env::var("OPENAI_CHAT_URL").ok(),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"<redacted>")
            .field("gpt_model", &self.gpt_model)
            .field("openai_chat_url", &self.openai_chat_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
