use std::env;

use serde::{Deserialize, Serialize};

fn default_levels() -> Vec<String> {
    vec!["a1".to_string()]
}

/// Which levels load at startup and where extra content comes from
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ContentConfig {
    /// Enabled level ids, in display order
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
    /// Supplement files merged into their level's content at load
    #[serde(default)]
    pub supplement_paths: Vec<String>,
}

impl ContentConfig {
    pub fn new() -> Self {
        let levels = env::var("WORTSCHATZ_LEVELS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_levels());

        let supplement_paths = env::var("WORTSCHATZ_SUPPLEMENTS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            levels,
            supplement_paths,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            levels: default_levels(),
            supplement_paths: vec![],
        }
    }
}
