use std::fmt::Debug;

use crate::error::Result;
use crate::lexicon_metadata::LexiconMetadata;
use crate::stages::Stages;
use crate::word_data::WordData;

/// Wstrzykiwany model językowy, który potrafi podać lematy dla form.
///
/// Model wczytuje się jawnie przy starcie (zob. `lemmario_italian::ItalianModel`),
/// a moduły dostają go jako `Arc<dyn LemmaModel>`, więc w testach można
/// podstawić prosty model na mapie.
pub trait LemmaModel: Debug + Send + Sync {
    /// Nazwa modelu, np. `it_core_news_sm`.
    fn name(&self) -> &str;

    /// Wszystkie analizy formy w ustalonej kolejności.
    /// Pusty wektor, gdy forma jest nieznana.
    fn lookup(&self, form: &str) -> Result<Vec<WordData>>;

    /// Etapy anotacji, które model potrafi wykonać.
    fn components(&self) -> Stages;

    fn metadata(&self) -> &LexiconMetadata;

    /// Jeden lemat na token: pierwsza analiza, a dla nieznanych form sam token.
    fn lemmatize(&self, tokens: &[String]) -> Result<Vec<String>> {
        tokens
            .iter()
            .map(|token| -> Result<String> {
                Ok(self
                    .lookup(token)?
                    .first()
                    .map(|wd| wd.lemma().to_string())
                    .unwrap_or_else(|| token.clone()))
            })
            .collect()
    }
}
