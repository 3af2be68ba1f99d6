use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

pub mod advice;
pub mod ai;
mod cli;
mod config;
pub mod error;
pub mod farm;
mod pipeline;
mod system_info;
pub mod tips;

pub use advice::{
    categorize_sentences, classify_sentence, AdviceCategory, CategorizedAdvice, SentenceAdvice,
    SentenceCategory,
};
pub use ai::parse::{parse_response, ParseOutcome};
pub use ai::prompts::{build_prompt, Prompt, Role};
pub use config::Config;
pub use error::AdvisoryError;
pub use farm::{FarmProfile, Location, SoilType, WeatherObservation};
pub use pipeline::AdvisoryPipeline;
pub use system_info::get_system_info;
pub use tips::quick_tips;

use cli::{Cli, Command};

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_weather(path: &Path) -> Result<WeatherObservation> {
    let doc = read_file(path)?;
    WeatherObservation::from_provider_payload(&doc)
        .with_context(|| format!("{} is not a weather document", path.display()))
}

// ──────────────────────────────────────────────────────────────
// Command-line entry point
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    let config = Config::from_env();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "starting");

    match cli.command {
        Command::Advise {
            profile,
            weather,
            json,
        } => {
            let ai = config
                .ai
                .context("OPENAI_API_KEY is not set; advice generation needs a completion service")?;
            let doc = read_file(&profile)?;
            let profile = FarmProfile::from_document(&doc)
                .with_context(|| format!("{} is not a farm profile", profile.display()))?;
            let weather = load_weather(&weather)?;

            let pipeline = AdvisoryPipeline::from_config(&ai)?;
            let advice = pipeline.generate(&profile, &weather).await?;
            tracing::info!(total = advice.total(), "advice ready");

            if json {
                println!("{}", serde_json::to_string_pretty(&advice)?);
            } else if advice.is_empty() {
                println!("No advice could be extracted from the model response.");
            } else {
                print!("{}", advice.render_text());
            }
        }
        Command::Tips { weather } => {
            let weather = load_weather(&weather)?;
            let tips = quick_tips(&weather);
            if tips.is_empty() {
                println!("No weather alerts.");
            }
            for tip in tips {
                println!("- {tip}");
            }
        }
        Command::Classify { text } => {
            let text = read_file(&text)?;
            let buckets = categorize_sentences(&text);
            for (title, category) in [
                ("Crop care", SentenceCategory::CropCare),
                ("Pest management", SentenceCategory::PestManagement),
                ("Irrigation", SentenceCategory::Irrigation),
                ("General", SentenceCategory::General),
            ] {
                let items = buckets.get(category);
                if items.is_empty() {
                    continue;
                }
                println!("{title}:");
                for item in items {
                    println!("- {item}");
                }
            }
        }
        Command::Info => println!("{}", get_system_info()),
    }

    Ok(())
}
