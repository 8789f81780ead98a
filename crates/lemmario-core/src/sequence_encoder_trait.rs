// Plik dla traita SequenceEncoder

use crate::error::Result;
use crate::lexicon_metadata::EncoderType;
use std::fmt::Debug;

/// Koduje lemat względem formy fleksyjnej, żeby kolumna leksykonu była krótka
/// i dobrze się kompresowała (np. `case` -> `casa` zapisane jako `Ba`).
///
/// Kod zawsze liczy znaki, nie bajty, więc działa dla akcentów (`città`).
pub trait SequenceEncoder: Debug + Send + Sync {
    fn encode(&self, form: &str, lemma: &str) -> Result<String>;
    fn decode(&self, form: &str, encoded: &str) -> Result<String>;
    fn get_encoder_type(&self) -> EncoderType;
}

/// Maksymalna liczba znaków do obcięcia, jaką da się zapisać jednym znakiem kodu.
pub const MAX_TRIM: usize = 25;

pub(crate) fn trim_code(n: usize) -> Result<char> {
    if n > MAX_TRIM {
        return Err(crate::error::LemmaError::SequenceDecodingError(format!(
            "Too many characters to trim: {} (max {})",
            n, MAX_TRIM
        )));
    }
    Ok((b'A' + n as u8) as char)
}

pub(crate) fn trim_count(code: char) -> Result<usize> {
    match code {
        'A'..='Z' => Ok(code as usize - 'A' as usize),
        _ => Err(crate::error::LemmaError::SequenceDecodingError(format!(
            "Invalid trim code: '{}'",
            code
        ))),
    }
}

pub(crate) fn common_prefix_chars(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_code_round_trip_bounds() {
        assert_eq!(trim_code(0).unwrap(), 'A');
        assert_eq!(trim_code(25).unwrap(), 'Z');
        assert!(trim_code(26).is_err());
        assert_eq!(trim_count('C').unwrap(), 2);
        assert!(trim_count('a').is_err());
    }

    #[test]
    fn test_common_prefix_counts_chars() {
        assert_eq!(common_prefix_chars("città", "città"), 5);
        assert_eq!(common_prefix_chars("case", "casa"), 3);
        assert_eq!(common_prefix_chars("", "casa"), 0);
    }
}
