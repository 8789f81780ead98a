// Główny plik biblioteki lemmario-core
pub mod config;
pub mod doc;
pub mod encoders;
pub mod error;
pub mod executor;
pub mod language;
pub mod lexicon;
pub mod lexicon_lookup;
pub mod lexicon_metadata;
pub mod model_trait;
pub mod sequence_encoder_trait;
pub mod stages;
pub mod token_array;
pub mod tokenizer;
pub mod word_data;

pub use config::{PipelineConfig, SubTokenPolicy};
pub use doc::{Doc, Token};
pub use error::{LemmaError, Result};
pub use executor::{BatchExecutor, RayonExecutor, SequentialExecutor};
pub use language::{Language, PipeOptions};
pub use lexicon::Lexicon;
pub use lexicon_lookup::LexiconLookup;
pub use model_trait::LemmaModel;
pub use stages::Stages;
pub use token_array::TokenArray;
pub use tokenizer::{DocInput, TokenizerKind};
pub use word_data::WordData;
