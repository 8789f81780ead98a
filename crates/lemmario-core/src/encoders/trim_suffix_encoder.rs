// Implementacja TrimSuffixEncoder

use crate::error::{LemmaError, Result};
use crate::lexicon_metadata::EncoderType;
use crate::sequence_encoder_trait::{common_prefix_chars, trim_code, trim_count, SequenceEncoder};

/// Kod postaci `K` + reszta: `K` = `'A' + n` oznacza obcięcie `n` końcowych
/// znaków formy, po czym dokleja się resztę kodu.
#[derive(Debug, Default, Clone)]
pub struct TrimSuffixEncoder;

impl TrimSuffixEncoder {
    pub fn new() -> Self {
        TrimSuffixEncoder
    }
}

impl SequenceEncoder for TrimSuffixEncoder {
    fn encode(&self, form: &str, lemma: &str) -> Result<String> {
        let prefix_len = common_prefix_chars(form, lemma);
        let to_remove = form.chars().count() - prefix_len;

        let mut result = String::with_capacity(1 + lemma.len());
        result.push(trim_code(to_remove)?);
        result.extend(lemma.chars().skip(prefix_len));
        Ok(result)
    }

    fn decode(&self, form: &str, encoded: &str) -> Result<String> {
        let mut chars = encoded.chars();
        let code = chars.next().ok_or_else(|| {
            LemmaError::SequenceDecodingError(
                "TrimSuffixEncoder: Encoded data is empty, cannot decode.".to_string(),
            )
        })?;
        let to_remove = trim_count(code)?;

        let form_len = form.chars().count();
        if to_remove > form_len {
            return Err(LemmaError::SequenceDecodingError(format!(
                "TrimSuffixEncoder: Cannot remove {} chars from form of length {} ('{}')",
                to_remove, form_len, form
            )));
        }

        let mut result: String = form.chars().take(form_len - to_remove).collect();
        result.extend(chars);
        Ok(result)
    }

    fn get_encoder_type(&self) -> EncoderType {
        EncoderType::Suffix
    }
}
