use tracing::{debug, instrument};

use crate::advice::CategorizedAdvice;
use crate::ai::completion::CompletionClient;
use crate::ai::config::AiConfig;
use crate::ai::parse::{parse_outcome, ParseOutcome};
use crate::ai::prompts::build_prompt;
use crate::error::AdvisoryError;
use crate::farm::{FarmProfile, WeatherObservation};

/// Prompt, complete, parse.
///
/// Stateless apart from the injected client, so one pipeline can serve
/// concurrent requests. Nothing is retried here; see
/// [`AdvisoryError::is_retryable`].
#[derive(Clone)]
pub struct AdvisoryPipeline {
    client: CompletionClient,
}

impl AdvisoryPipeline {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, AdvisoryError> {
        Ok(Self::new(CompletionClient::new(config)?))
    }

    pub async fn generate(
        &self,
        profile: &FarmProfile,
        weather: &WeatherObservation,
    ) -> Result<CategorizedAdvice, AdvisoryError> {
        Ok(self.generate_outcome(profile, weather).await?.into_advice())
    }

    /// Like [`generate`](Self::generate) but reports which parse stage was used.
    #[instrument(level = "debug", skip_all, fields(crops = profile.crops.len()))]
    pub async fn generate_outcome(
        &self,
        profile: &FarmProfile,
        weather: &WeatherObservation,
    ) -> Result<ParseOutcome, AdvisoryError> {
        let prompt = build_prompt(profile, weather)?;
        let raw = self.client.complete(&prompt).await?;
        let outcome = parse_outcome(&raw);
        debug!(
            strict = outcome.is_strict(),
            total = outcome.advice().total(),
            "advice generated"
        );
        Ok(outcome)
    }
}
