// Moduł grupujący implementacje enkoderów lematów.

pub mod no_encoder;
pub mod trim_prefix_suffix_encoder;
pub mod trim_suffix_encoder;

pub use no_encoder::NoEncoder;
pub use trim_prefix_suffix_encoder::TrimPrefixAndSuffixEncoder;
pub use trim_suffix_encoder::TrimSuffixEncoder;

use crate::lexicon_metadata::EncoderType;
use crate::sequence_encoder_trait::SequenceEncoder;

/// Tworzy enkoder odpowiadający typowi z metadanych.
pub fn for_type(encoder_type: EncoderType) -> Box<dyn SequenceEncoder> {
    match encoder_type {
        EncoderType::None => Box::new(NoEncoder::new()),
        EncoderType::Suffix => Box::new(TrimSuffixEncoder::new()),
        EncoderType::Prefix => Box::new(TrimPrefixAndSuffixEncoder::new()),
    }
}
