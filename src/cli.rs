use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "agroadvisor", about = "Weather-aware farming advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ask the completion model for categorized advice.
    Advise {
        /// Farm profile document (JSON).
        #[arg(long)]
        profile: PathBuf,
        /// Current-weather document from the weather provider (JSON).
        #[arg(long)]
        weather: PathBuf,
        /// Print the advice as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show weather-only quick tips.
    Tips {
        #[arg(long)]
        weather: PathBuf,
    },
    /// Sort free-form advice text into coarse buckets by sentence.
    Classify {
        #[arg(long)]
        text: PathBuf,
    },
    /// Show build information.
    Info,
}
