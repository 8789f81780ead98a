// Lematyzacja pojedynczej listy tokenów

use std::sync::Arc;

use log::{debug, info};

use lemmario_core::config::{PipelineConfig, SubTokenPolicy};
use lemmario_core::doc::Doc;
use lemmario_core::error::{LemmaError, Result};
use lemmario_core::language::Language;
use lemmario_core::model_trait::LemmaModel;
use lemmario_core::tokenizer::{DocInput, TokenizerKind};
use lemmario_italian::ItalianModel;

use crate::module_trait::{LemmatizeModule, ValueSchema, ValueType, FIELD_TOKENS_ARRAY};

/// Każdy token przechodzi osobno przez pełny potok z tokenizatorem tekstu.
/// Dla dużych danych szybszy jest [`crate::LemmatizeTokensArrayModule`].
#[derive(Debug, Clone)]
pub struct LemmatizeTokensModule {
    nlp: Language,
    policy: SubTokenPolicy,
}

impl LemmatizeTokensModule {
    pub fn new(model: Arc<dyn LemmaModel>, config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        let nlp = Language::new(model, TokenizerKind::RawText, config.disabled_stages()?);
        info!(
            "Moduł '{}': model '{}', etapy {:?}, polityka {:?}",
            Self::MODULE_TYPE_NAME,
            nlp.model().name(),
            nlp.pipe_names(),
            config.sub_token_policy
        );
        Ok(LemmatizeTokensModule {
            nlp,
            policy: config.sub_token_policy,
        })
    }

    /// Wczytuje model włoski wskazany w konfiguracji.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let model = ItalianModel::from_config(config)?;
        Self::new(Arc::new(model), config)
    }

    pub fn language(&self) -> &Language {
        &self.nlp
    }

    fn select_lemma(&self, doc: Doc, position: usize, token: &str) -> Result<String> {
        match (self.policy, doc.len()) {
            (SubTokenPolicy::Strict, 1) | (SubTokenPolicy::First, _) | (SubTokenPolicy::Join, 1) => {
                Ok(doc.into_lemmas().into_iter().next().unwrap_or_default())
            }
            (SubTokenPolicy::Strict, found) => Err(LemmaError::ShapeMismatch {
                position,
                token: token.to_string(),
                found,
            }),
            (SubTokenPolicy::Join, _) => Ok(doc.into_lemmas().join(" ")),
        }
    }
}

impl LemmatizeModule for LemmatizeTokensModule {
    type Input = Vec<String>;
    type Output = Vec<String>;

    const MODULE_TYPE_NAME: &'static str = "tokens";
    const DOC: &'static str = "Lemmatize a single token list.";

    fn input_schema(&self) -> ValueSchema {
        ValueSchema {
            name: FIELD_TOKENS_ARRAY,
            value_type: ValueType::List,
            doc: "A list of tokens.",
        }
    }

    fn output_schema(&self) -> ValueSchema {
        ValueSchema {
            name: FIELD_TOKENS_ARRAY,
            value_type: ValueType::List,
            doc: "A list of lemmatized tokens.",
        }
    }

    fn process(&self, tokens: Vec<String>) -> Result<Vec<String>> {
        debug!("Lematyzacja {} tokenów", tokens.len());
        tokens
            .iter()
            .enumerate()
            .map(|(position, token)| {
                let doc = self.nlp.process(&DocInput::Text(token.clone()))?;
                self.select_lemma(doc, position, token)
            })
            .collect()
    }
}
