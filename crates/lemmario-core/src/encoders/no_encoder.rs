// Implementacja NoEncoder

use crate::error::Result;
use crate::lexicon_metadata::EncoderType;
use crate::sequence_encoder_trait::SequenceEncoder;

/// Lemat zapisany w leksykonie wprost.
#[derive(Debug, Default, Clone)]
pub struct NoEncoder;

impl NoEncoder {
    pub fn new() -> Self {
        NoEncoder
    }
}

impl SequenceEncoder for NoEncoder {
    fn encode(&self, _form: &str, lemma: &str) -> Result<String> {
        Ok(lemma.to_string())
    }

    fn decode(&self, _form: &str, encoded: &str) -> Result<String> {
        Ok(encoded.to_string())
    }

    fn get_encoder_type(&self) -> EncoderType {
        EncoderType::None
    }
}
