use std::path::Path;

use wortschatz_config::content::ContentConfig;
use wortschatz_core::catalog::Catalog;
use wortschatz_types::LevelData;

use crate::cefr::CefrLevel;
use crate::merge;
use crate::normalize;

const EMBEDDED_A1: &str = include_str!("../data/a1.json");

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("No content shipped for level: {0}")]
    NoContent(String),

    #[error("Invalid content: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct ContentLoader;

impl ContentLoader {
    /// Load a level's embedded content document
    pub fn load_embedded(level: CefrLevel) -> Result<LevelData, LoadError> {
        let json = match level {
            CefrLevel::A1 => EMBEDDED_A1,
            other => return Err(LoadError::NoContent(other.as_str().to_string())),
        };
        tracing::info!("Loading embedded content for {}", level.as_str());
        let data = Self::parse(json)?;
        tracing::info!(
            "Loaded {} words, {} grammar topics",
            data.words.len(),
            data.grammar.len()
        );
        Ok(data)
    }

    /// Load a level content document from a file
    pub fn load_from_file(path: &Path) -> Result<LevelData, LoadError> {
        tracing::info!("Loading level content from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::parse(&json)
    }

    fn parse(json: &str) -> Result<LevelData, LoadError> {
        let mut data: LevelData = serde_json::from_str(json)?;
        if data.level.trim().is_empty() {
            return Err(LoadError::InvalidFormat("empty level label".to_string()));
        }
        normalize::normalize_level(&mut data);
        Ok(data)
    }

    /// Build the catalog for every enabled level.
    ///
    /// Unknown level ids and broken supplements are skipped with a warning;
    /// the catalog still comes up with whatever loaded cleanly.
    pub fn load_catalog(config: &ContentConfig) -> Catalog {
        let mut levels: Vec<LevelData> = Vec::new();
        for id in &config.levels {
            let Some(level) = CefrLevel::from_str(id) else {
                tracing::warn!("Skipping unknown level id: {id}");
                continue;
            };
            match Self::load_embedded(level) {
                Ok(data) => levels.push(data),
                Err(e) => tracing::warn!("Skipping level {}: {e}", level.as_str()),
            }
        }

        for path in &config.supplement_paths {
            match Self::load_from_file(Path::new(path)) {
                Ok(supplement) => {
                    let target = levels
                        .iter_mut()
                        .find(|l| l.level.eq_ignore_ascii_case(&supplement.level));
                    let Some(base) = target else {
                        tracing::warn!(
                            "Supplement {} targets unloaded level {}",
                            path,
                            supplement.level
                        );
                        continue;
                    };
                    let report = merge::merge_supplement(base, supplement);
                    tracing::info!(
                        "Merged supplement {}: {} updated, {} added, {} kept",
                        path,
                        report.updated,
                        report.added,
                        report.kept
                    );
                }
                Err(e) => tracing::warn!("Failed to load supplement {}: {e}", path),
            }
        }

        Catalog::new(levels)
    }
}
