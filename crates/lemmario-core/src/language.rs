//! Potok językowy: tokenizator + model + włączone etapy anotacji.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::doc::{Doc, Token};
use crate::error::{LemmaError, Result};
use crate::executor::BatchExecutor;
use crate::model_trait::LemmaModel;
use crate::stages::Stages;
use crate::tokenizer::{DocInput, Tokenizer, TokenizerKind};

/// Opcje przetwarzania wsadowego.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipeOptions {
    pub batch_size: usize,
    /// Etapy wyłączone dodatkowo na czas tego wywołania.
    pub disable: Stages,
}

impl Default for PipeOptions {
    fn default() -> Self {
        PipeOptions {
            batch_size: 32,
            disable: Stages::empty(),
        }
    }
}

#[derive(Clone)]
pub struct Language {
    model: Arc<dyn LemmaModel>,
    tokenizer: Arc<dyn Tokenizer>,
    stages: Stages,
}

impl Language {
    /// Włączone są etapy, które model udostępnia, minus `disable`.
    pub fn new(model: Arc<dyn LemmaModel>, tokenizer: TokenizerKind, disable: Stages) -> Self {
        let stages = model.components() - disable;
        let absent = disable - model.components();
        if !absent.is_empty() {
            debug!(
                "Model '{}' nie ma etapów {:?}, wyłączenie ich nic nie zmienia",
                model.name(),
                absent.names()
            );
        }
        debug!(
            "Potok dla modelu '{}': tokenizator {:?}, etapy {:?}",
            model.name(),
            tokenizer,
            stages.names()
        );
        Language {
            model,
            tokenizer: tokenizer.build(),
            stages,
        }
    }

    /// Ten sam model i etapy, inny tokenizator.
    pub fn with_tokenizer(&self, tokenizer: TokenizerKind) -> Self {
        Language {
            model: Arc::clone(&self.model),
            tokenizer: tokenizer.build(),
            stages: self.stages,
        }
    }

    pub fn model(&self) -> &Arc<dyn LemmaModel> {
        &self.model
    }

    pub fn stages(&self) -> Stages {
        self.stages
    }

    pub fn pipe_names(&self) -> Vec<&'static str> {
        self.stages.names()
    }

    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }

    pub fn process(&self, input: &DocInput) -> Result<Doc> {
        self.process_with(input, self.stages)
    }

    /// Przetwarza wiele dokumentów partiami po `batch_size`, zachowując kolejność.
    /// Błąd w którejkolwiek partii przerywa całość (`BatchFailure`).
    pub fn pipe<E: BatchExecutor>(
        &self,
        inputs: Vec<DocInput>,
        options: &PipeOptions,
        executor: &E,
    ) -> Result<Vec<Doc>> {
        if options.batch_size == 0 {
            return Err(LemmaError::Config(
                "batch size must be greater than zero".to_string(),
            ));
        }
        let stages = self.stages - options.disable;

        let total = inputs.len();
        let mut batches: Vec<Vec<DocInput>> = Vec::with_capacity(total.div_ceil(options.batch_size));
        let mut iter = inputs.into_iter().peekable();
        while iter.peek().is_some() {
            batches.push(iter.by_ref().take(options.batch_size).collect());
        }
        debug!(
            "pipe: {} dokumentów w {} partiach (batch_size={}, workers={})",
            total,
            batches.len(),
            options.batch_size,
            executor.workers()
        );

        let per_batch = executor.execute(batches, |idx, batch| {
            batch
                .iter()
                .map(|input| self.process_with(input, stages))
                .collect::<Result<Vec<Doc>>>()
                .map_err(|e| LemmaError::BatchFailure {
                    batch: idx,
                    source: Box::new(e),
                })
        })?;

        Ok(per_batch.into_iter().flatten().collect())
    }

    fn process_with(&self, input: &DocInput, stages: Stages) -> Result<Doc> {
        let words = self.tokenizer.tokenize(input)?;
        let needs_lookup = stages.intersects(Stages::TAGGER | Stages::LEMMATIZER);

        let tokens = words
            .into_iter()
            .map(|text| -> Result<Token> {
                let analyses = if needs_lookup {
                    self.model.lookup(&text)?
                } else {
                    Vec::new()
                };
                let first = analyses.first();

                let tag = if stages.contains(Stages::TAGGER) {
                    first.and_then(|wd| wd.tag()).map(str::to_string)
                } else {
                    None
                };
                let lemma = if stages.contains(Stages::LEMMATIZER) {
                    first.map_or_else(|| text.clone(), |wd| wd.lemma().to_string())
                } else {
                    String::new()
                };

                Ok(Token { text, lemma, tag })
            })
            .collect::<Result<Vec<Token>>>()?;

        Ok(Doc::new(tokens))
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("model", &self.model.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("stages", &self.stages.names())
            .finish()
    }
}
