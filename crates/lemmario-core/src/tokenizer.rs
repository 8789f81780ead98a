//! Tokenizacja wejścia potoku.
//!
//! Są dwa warianty, wybierane jawnie przez [`TokenizerKind`]:
//! [`RawTextTokenizer`] dzieli surowy tekst, a [`PreTokenizedTokenizer`]
//! przyjmuje gotowe tokeny bez żadnego dalszego dzielenia.

use std::fmt::Debug;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{LemmaError, Result};

/// Wejście jednego dokumentu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocInput {
    /// Surowy tekst do podziału.
    Text(String),
    /// Tokeny już podzielone wcześniej.
    Words(Vec<String>),
}

impl From<&str> for DocInput {
    fn from(text: &str) -> Self {
        DocInput::Text(text.to_string())
    }
}

impl From<Vec<String>> for DocInput {
    fn from(words: Vec<String>) -> Self {
        DocInput::Words(words)
    }
}

pub trait Tokenizer: Debug + Send + Sync {
    fn name(&self) -> &'static str;
    fn tokenize(&self, input: &DocInput) -> Result<Vec<String>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenizerKind {
    #[default]
    RawText,
    PreTokenized,
}

impl TokenizerKind {
    pub fn build(self) -> Arc<dyn Tokenizer> {
        match self {
            TokenizerKind::RawText => Arc::new(RawTextTokenizer),
            TokenizerKind::PreTokenized => Arc::new(PreTokenizedTokenizer),
        }
    }
}

/// Podział według granic słów Unicode (UAX #29) z rozdzielaniem elizji:
/// `dell'acqua` -> `dell'`, `acqua`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawTextTokenizer;

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

impl RawTextTokenizer {
    fn split_into(text: &str, out: &mut Vec<String>) {
        let mut adjacent = false;
        for segment in text.split_word_bounds() {
            if segment.chars().all(char::is_whitespace) {
                adjacent = false;
                continue;
            }

            // Samotny apostrof doklejamy do poprzedniego słowa (l ' -> l').
            if adjacent && segment.chars().all(is_apostrophe) {
                if let Some(last) = out.last_mut() {
                    if last.chars().last().is_some_and(char::is_alphabetic) {
                        last.push_str(segment);
                        continue;
                    }
                }
            }

            Self::split_elision(segment, out);
            adjacent = true;
        }
    }

    fn split_elision(segment: &str, out: &mut Vec<String>) {
        let mut start = 0;
        for (idx, ch) in segment.char_indices() {
            if !is_apostrophe(ch) {
                continue;
            }
            let end = idx + ch.len_utf8();
            if idx > start && end < segment.len() {
                out.push(segment[start..end].to_string());
                start = end;
            }
        }
        if start < segment.len() {
            out.push(segment[start..].to_string());
        }
    }
}

impl Tokenizer for RawTextTokenizer {
    fn name(&self) -> &'static str {
        "raw_text"
    }

    fn tokenize(&self, input: &DocInput) -> Result<Vec<String>> {
        let mut out = Vec::new();
        match input {
            DocInput::Text(text) => Self::split_into(text, &mut out),
            DocInput::Words(words) => {
                for word in words {
                    Self::split_into(word, &mut out);
                }
            }
        }
        Ok(out)
    }
}

/// Traktuje podane tokeny jako ostateczne granice, także puste napisy.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreTokenizedTokenizer;

impl Tokenizer for PreTokenizedTokenizer {
    fn name(&self) -> &'static str {
        "pre_tokenized"
    }

    fn tokenize(&self, input: &DocInput) -> Result<Vec<String>> {
        match input {
            DocInput::Words(words) => Ok(words.clone()),
            DocInput::Text(_) => Err(LemmaError::TokenizerInput {
                tokenizer: self.name().to_string(),
                reason: "expected a list of tokens, got raw text".to_string(),
            }),
        }
    }
}
