// Implementacja TrimPrefixAndSuffixEncoder

use crate::error::{LemmaError, Result};
use crate::lexicon_metadata::EncoderType;
use crate::sequence_encoder_trait::{common_prefix_chars, trim_code, trim_count, SequenceEncoder, MAX_TRIM};

/// Kod postaci `P` `K` + reszta: obcina `P` początkowych i `K` końcowych
/// znaków formy, po czym dokleja resztę. Przydaje się dla form z przedrostkiem,
/// którego lemat nie ma.
#[derive(Debug, Default, Clone)]
pub struct TrimPrefixAndSuffixEncoder;

impl TrimPrefixAndSuffixEncoder {
    pub fn new() -> Self {
        TrimPrefixAndSuffixEncoder
    }
}

impl SequenceEncoder for TrimPrefixAndSuffixEncoder {
    fn encode(&self, form: &str, lemma: &str) -> Result<String> {
        let form_chars: Vec<char> = form.chars().collect();

        // Najdłuższy wspólny fragment, od którego zaczyna się lemat.
        let mut best_prefix = 0;
        let mut best_common = 0;
        for start in 0..=form_chars.len().min(MAX_TRIM) {
            let rest: String = form_chars[start..].iter().collect();
            let common = common_prefix_chars(&rest, lemma);
            if common > best_common {
                best_prefix = start;
                best_common = common;
            }
        }

        let to_remove = form_chars.len() - best_prefix - best_common;
        let mut result = String::with_capacity(2 + lemma.len());
        result.push(trim_code(best_prefix)?);
        result.push(trim_code(to_remove)?);
        result.extend(lemma.chars().skip(best_common));
        Ok(result)
    }

    fn decode(&self, form: &str, encoded: &str) -> Result<String> {
        let mut chars = encoded.chars();
        let (prefix_code, suffix_code) = match (chars.next(), chars.next()) {
            (Some(p), Some(k)) => (p, k),
            _ => {
                return Err(LemmaError::SequenceDecodingError(format!(
                    "TrimPrefixAndSuffixEncoder: Encoded data too short: '{}'",
                    encoded
                )))
            }
        };
        let prefix = trim_count(prefix_code)?;
        let suffix = trim_count(suffix_code)?;

        let form_len = form.chars().count();
        if prefix + suffix > form_len {
            return Err(LemmaError::SequenceDecodingError(format!(
                "TrimPrefixAndSuffixEncoder: Cannot remove {}+{} chars from form of length {} ('{}')",
                prefix, suffix, form_len, form
            )));
        }

        let mut result: String = form
            .chars()
            .skip(prefix)
            .take(form_len - prefix - suffix)
            .collect();
        result.extend(chars);
        Ok(result)
    }

    fn get_encoder_type(&self) -> EncoderType {
        EncoderType::Prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_trim_prefix_and_suffix_strips_leading_chars() {
        let encoder = TrimPrefixAndSuffixEncoder::new();
        let encoded = encoder.encode("xcasa", "casa").unwrap();
        assert_eq!(encoded, "BA");
        assert_eq!(encoder.decode("xcasa", &encoded).unwrap(), "casa");
    }

    #[test]
    fn test_trim_prefix_and_suffix_behaves_like_suffix_without_prefix() {
        let encoder = TrimPrefixAndSuffixEncoder::new();
        let encoded = encoder.encode("belle", "bello").unwrap();
        assert_eq!(encoded, "ABo");
        assert_eq!(encoder.decode("belle", &encoded).unwrap(), "bello");
    }

    #[test]
    fn test_trim_prefix_and_suffix_nothing_in_common() {
        let encoder = TrimPrefixAndSuffixEncoder::new();
        let encoded = encoder.encode("è", "essere").unwrap();
        assert_eq!(encoded, "ABessere");
        assert_eq!(encoder.decode("è", &encoded).unwrap(), "essere");
    }

    #[test]
    fn test_trim_prefix_and_suffix_decode_errors() {
        let encoder = TrimPrefixAndSuffixEncoder::new();
        assert_matches!(encoder.decode("casa", "A"), Err(LemmaError::SequenceDecodingError(_)));
        assert_matches!(encoder.decode("casa", "CDx"), Err(LemmaError::SequenceDecodingError(_)));
    }
}
