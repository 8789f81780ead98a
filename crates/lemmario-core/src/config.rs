//! Konfiguracja potoku lematyzacji.
//!
//! Wszystkie pola mają wartości domyślne równe stałym używanym przez moduły,
//! więc pusty plik YAML daje dokładnie zachowanie domyślne.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LemmaError, Result};
use crate::stages::Stages;

pub const DEFAULT_MODEL: &str = "it_core_news_sm";
pub const DEFAULT_MODEL_PATH: &str = "models";
pub const DEFAULT_BATCH_SIZE: usize = 32;
pub const DEFAULT_WORKERS: usize = 3;
pub const DEFAULT_DISABLED_STAGES: [&str; 3] = ["tagger", "parser", "ner"];

/// Co zrobić, gdy jeden token wejściowy da zero lub kilka pod-tokenów.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubTokenPolicy {
    /// Lemat pierwszego pod-tokenu; brak pod-tokenów daje pusty lemat.
    #[default]
    First,
    /// Lematy wszystkich pod-tokenów złączone spacją.
    Join,
    /// Wszystko poza dokładnie jednym pod-tokenem jest błędem `ShapeMismatch`.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub model: String,
    pub model_paths: Vec<PathBuf>,
    pub disable: Vec<String>,
    pub batch_size: usize,
    pub workers: usize,
    pub sub_token_policy: SubTokenPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            model: DEFAULT_MODEL.to_string(),
            model_paths: vec![PathBuf::from(DEFAULT_MODEL_PATH)],
            disable: DEFAULT_DISABLED_STAGES.iter().map(|s| s.to_string()).collect(),
            batch_size: DEFAULT_BATCH_SIZE,
            workers: DEFAULT_WORKERS,
            sub_token_policy: SubTokenPolicy::default(),
        }
    }
}

impl PipelineConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // Pusty dokument YAML to `null`, a nie pusta mapa.
        if yaml.trim().is_empty() {
            return Ok(PipelineConfig::default());
        }
        let config: PipelineConfig = serde_yaml::from_str(yaml)
            .map_err(|e| LemmaError::Config(format!("Invalid YAML configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = fs::read_to_string(path.as_ref()).map_err(|e| {
            LemmaError::Io(format!(
                "Failed to read configuration '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(LemmaError::Config("model name must not be empty".to_string()));
        }
        if self.batch_size == 0 {
            return Err(LemmaError::Config("batch_size must be greater than zero".to_string()));
        }
        if self.workers == 0 {
            return Err(LemmaError::Config("workers must be greater than zero".to_string()));
        }
        self.disabled_stages()?;
        Ok(())
    }

    pub fn disabled_stages(&self) -> Result<Stages> {
        Stages::from_names(&self.disable)
    }
}
