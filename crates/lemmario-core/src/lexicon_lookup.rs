// Plik dla struktury LexiconLookup

use std::sync::Arc;

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::lexicon_metadata::LexiconMetadata;
use crate::model_trait::LemmaModel;
use crate::stages::Stages;
use crate::word_data::WordData;

/// Wyszukiwanie analiz w leksykonie, z opcjonalnym powrotem do małych liter.
#[derive(Debug, Clone)]
pub struct LexiconLookup {
    name: String,
    lexicon: Arc<Lexicon>,
    case_fallback: bool,
}

impl LexiconLookup {
    pub fn new(name: impl Into<String>, lexicon: Arc<Lexicon>) -> Result<Self> {
        let case_fallback = lexicon.metadata().get_case_fallback()?;
        Ok(LexiconLookup {
            name: name.into(),
            lexicon,
            case_fallback,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

impl LemmaModel for LexiconLookup {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, form: &str) -> Result<Vec<WordData>> {
        if let Some(analyses) = self.lexicon.get(form) {
            return Ok(analyses.to_vec());
        }

        if !self.case_fallback {
            return Ok(Vec::new());
        }

        let lowered = form.to_lowercase();
        if lowered == form {
            return Ok(Vec::new());
        }

        Ok(self
            .lexicon
            .get(&lowered)
            .map(|analyses| {
                analyses
                    .iter()
                    .map(|wd| WordData::new(form, wd.lemma(), wd.tag().map(str::to_string)))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn components(&self) -> Stages {
        Stages::TAGGER | Stages::LEMMATIZER
    }

    fn metadata(&self) -> &LexiconMetadata {
        self.lexicon.metadata()
    }
}
