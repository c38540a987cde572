use std::env;

use serde::{Deserialize, Serialize};

use self::content::ContentConfig;

pub mod content;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub content: ContentConfig,

    /// Emit logs as JSON lines instead of human-readable output
    pub log_json: bool,
}

impl Config {
    pub fn new() -> Self {
        let log_json = env::var("WORTSCHATZ_LOG_JSON")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Config {
            content: ContentConfig::new(),
            log_json,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
