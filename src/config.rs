use crate::ai::config::AiConfig;

#[derive(Clone, Debug)]
pub struct Config {
    pub ai: Option<AiConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let ai = AiConfig::from_env();
        Self { ai }
    }
}
