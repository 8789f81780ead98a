// Lematyzacja kolumnowej tablicy list tokenów

use std::sync::Arc;

use log::{debug, info};

use lemmario_core::config::PipelineConfig;
use lemmario_core::doc::Doc;
use lemmario_core::error::Result;
use lemmario_core::executor::{BatchExecutor, RayonExecutor};
use lemmario_core::language::{Language, PipeOptions};
use lemmario_core::model_trait::LemmaModel;
use lemmario_core::token_array::TokenArray;
use lemmario_core::tokenizer::{DocInput, TokenizerKind};
use lemmario_italian::ItalianModel;

use crate::module_trait::{LemmatizeModule, ValueSchema, ValueType, FIELD_TOKENS_ARRAY};

/// Lematyzuje tablicę list tokenów wsadowo.
///
/// W porównaniu z wywoływaniem modułu `tokens` dla każdego wiersza jest
/// znacznie szybszy: tokeny są traktowane jako gotowe (bez ponownego dzielenia),
/// a wiersze idą przez `Language::pipe` partiami na puli wątków.
#[derive(Debug)]
pub struct LemmatizeTokensArrayModule {
    nlp: Language,
    options: PipeOptions,
    executor: RayonExecutor,
}

impl LemmatizeTokensArrayModule {
    pub fn new(model: Arc<dyn LemmaModel>, config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        let disable = config.disabled_stages()?;
        let nlp = Language::new(model, TokenizerKind::RawText, disable)
            .with_tokenizer(TokenizerKind::PreTokenized);
        let executor = RayonExecutor::new(config.workers)?;
        info!(
            "Moduł '{}': model '{}', batch_size={}, workers={}",
            Self::MODULE_TYPE_NAME,
            nlp.model().name(),
            config.batch_size,
            executor.workers()
        );
        Ok(LemmatizeTokensArrayModule {
            nlp,
            options: PipeOptions {
                batch_size: config.batch_size,
                disable,
            },
            executor,
        })
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let model = ItalianModel::from_config(config)?;
        Self::new(Arc::new(model), config)
    }

    pub fn language(&self) -> &Language {
        &self.nlp
    }

    pub fn options(&self) -> &PipeOptions {
        &self.options
    }
}

impl LemmatizeModule for LemmatizeTokensArrayModule {
    type Input = TokenArray;
    type Output = TokenArray;

    const MODULE_TYPE_NAME: &'static str = "tokens_array";
    const DOC: &'static str = "Lemmatize an array of token lists. Much faster than running the \
        `tokens` module per row: tokens are taken as final and rows are batched through a pipe \
        on a worker pool.";

    fn input_schema(&self) -> ValueSchema {
        ValueSchema {
            name: FIELD_TOKENS_ARRAY,
            value_type: ValueType::Array,
            doc: "An array of lists of tokens.",
        }
    }

    fn output_schema(&self) -> ValueSchema {
        ValueSchema {
            name: FIELD_TOKENS_ARRAY,
            value_type: ValueType::Array,
            doc: "An array of lists of lemmatized tokens.",
        }
    }

    fn process(&self, tokens: TokenArray) -> Result<TokenArray> {
        debug!(
            "Lematyzacja {} wierszy ({} tokenów)",
            tokens.len(),
            tokens.total_tokens()
        );
        let inputs: Vec<DocInput> = tokens.to_rows().into_iter().map(DocInput::Words).collect();
        let docs = self.nlp.pipe(inputs, &self.options, &self.executor)?;
        Ok(docs.into_iter().map(Doc::into_lemmas).collect())
    }
}
