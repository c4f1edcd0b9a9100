use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    #[serde(default = "default_offer_ttl_days")]
    pub offer_ttl_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    #[serde(default = "default_feed_buffer")]
    pub buffer: usize,
}

fn default_offer_ttl_days() -> i64 {
    7
}

fn default_feed_buffer() -> usize {
    100
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            offer_ttl_days: default_offer_ttl_days(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            buffer: default_feed_buffer(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::Environment::with_prefix("PROSPECT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
