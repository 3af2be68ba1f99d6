//! Everything that talks to, or interprets, the completion model.

pub mod completion;
pub mod config;
pub mod parse;
pub mod prompts;
