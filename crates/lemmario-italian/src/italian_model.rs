// Definicja struktury ItalianModel i jej implementacje

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use lemmario_core::config::PipelineConfig;
use lemmario_core::error::{LemmaError, Result};
use lemmario_core::lexicon::Lexicon;
use lemmario_core::lexicon_lookup::LexiconLookup;
use lemmario_core::lexicon_metadata::{LexiconAttribute, LexiconMetadata};
use lemmario_core::model_trait::LemmaModel;
use lemmario_core::stages::Stages;
use lemmario_core::word_data::WordData;

pub const DEFAULT_MODEL_NAME: &str = "it_core_news_sm";

const EXPECTED_LANGUAGE: &str = "it";

const EMBEDDED_IT_DICT_BYTES: &[u8] =
    include_bytes!("../resources/it_core_news_sm/it_core_news_sm.dict");
const EMBEDDED_IT_INFO_BYTES: &[u8] =
    include_bytes!("../resources/it_core_news_sm/it_core_news_sm.info");

/// Model języka włoskiego oparty na leksykonie form.
#[derive(Debug, Clone)]
pub struct ItalianModel {
    lookup: LexiconLookup,
}

impl ItalianModel {
    /// Niewielki leksykon wkompilowany w crate.
    pub fn embedded() -> Result<Self> {
        let lexicon = Lexicon::from_embedded(EMBEDDED_IT_DICT_BYTES, EMBEDDED_IT_INFO_BYTES)
            .map_err(|e| unavailable(DEFAULT_MODEL_NAME, e.to_string()))?;
        info!(
            "Wczytano osadzony model '{}' ({} form)",
            DEFAULT_MODEL_NAME,
            lexicon.len()
        );
        Self::from_lexicon(DEFAULT_MODEL_NAME, lexicon)
    }

    /// Wczytuje model z konkretnego pliku `.dict` (obok musi leżeć `.info`).
    pub fn from_path<P: AsRef<Path>>(name: &str, lexicon_path: P) -> Result<Self> {
        let path_ref = lexicon_path.as_ref();
        if !path_ref.exists() {
            return Err(unavailable(
                name,
                format!("lexicon file not found: {}", path_ref.display()),
            ));
        }

        let lexicon = Lexicon::from_file(path_ref).map_err(|e| unavailable(name, e.to_string()))?;
        Self::from_lexicon(name, lexicon)
    }

    /// Szuka modelu `name` w kolejnych katalogach: `<dir>/<name>/<name>.dict`,
    /// potem `<dir>/<name>.dict`. Pierwsze trafienie wygrywa.
    pub fn load<P: AsRef<Path>>(name: &str, search_paths: &[P]) -> Result<Self> {
        match Self::locate(name, search_paths) {
            Some(path) => {
                debug!("Model '{}' znaleziony w {}", name, path.display());
                Self::from_path(name, path)
            }
            None => {
                let searched: Vec<String> = search_paths
                    .iter()
                    .map(|p| p.as_ref().display().to_string())
                    .collect();
                Err(unavailable(
                    name,
                    format!("not found in search paths [{}]", searched.join(", ")),
                ))
            }
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        Self::load(&config.model, config.model_paths.as_slice())
    }

    pub fn locate<P: AsRef<Path>>(name: &str, search_paths: &[P]) -> Option<PathBuf> {
        let file_name = format!("{}.dict", name);
        search_paths
            .iter()
            .flat_map(|dir| {
                let dir = dir.as_ref();
                [dir.join(name).join(&file_name), dir.join(&file_name)]
            })
            .find(|candidate| candidate.is_file())
    }

    fn from_lexicon(name: &str, lexicon: Lexicon) -> Result<Self> {
        let language = lexicon.metadata().get_language();
        if language != EXPECTED_LANGUAGE {
            return Err(unavailable(
                name,
                format!("lexicon language is '{}', expected '{}'", language, EXPECTED_LANGUAGE),
            ));
        }
        let metadata = lexicon.metadata();
        debug!(
            "Leksykon '{}' dla modelu '{}', licencja: {}",
            metadata.get_string(LexiconAttribute::Name).unwrap_or(name),
            name,
            metadata.get_string(LexiconAttribute::License).unwrap_or("brak")
        );
        let lookup =
            LexiconLookup::new(name, Arc::new(lexicon)).map_err(|e| unavailable(name, e.to_string()))?;
        Ok(ItalianModel { lookup })
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lookup.lexicon()
    }
}

fn unavailable(name: &str, reason: String) -> LemmaError {
    LemmaError::ModelUnavailable {
        name: name.to_string(),
        reason,
    }
}

impl LemmaModel for ItalianModel {
    fn name(&self) -> &str {
        self.lookup.name()
    }

    fn lookup(&self, form: &str) -> Result<Vec<WordData>> {
        self.lookup.lookup(form)
    }

    fn components(&self) -> Stages {
        self.lookup.components()
    }

    fn metadata(&self) -> &LexiconMetadata {
        self.lookup.metadata()
    }
}
