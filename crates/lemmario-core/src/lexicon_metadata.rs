// Metadane leksykonu (plik `.info`)

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;

use log::warn;

use crate::error::{LemmaError, Result};

/// Sposób zapisu lematu w kolumnie leksykonu względem formy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncoderType {
    /// Lemat zapisany wprost.
    None,
    /// Obcięcie prefiksu i sufiksu formy.
    Prefix,
    /// Obcięcie sufiksu formy.
    Suffix,
}

impl FromStr for EncoderType {
    type Err = LemmaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "NONE" => Ok(EncoderType::None),
            "PREFIX" => Ok(EncoderType::Prefix),
            "SUFFIX" => Ok(EncoderType::Suffix),
            _ => Err(LemmaError::InvalidMetadataValue(format!(
                "Unknown EncoderType: {}",
                s
            ))),
        }
    }
}

impl EncoderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncoderType::None => "NONE",
            EncoderType::Prefix => "PREFIX",
            EncoderType::Suffix => "SUFFIX",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconAttribute {
    Separator,
    Encoding,
    Encoder,
    Language,
    CaseFallback,
    Name,
    Author,
    License,
}

impl LexiconAttribute {
    pub fn key_name(&self) -> &'static str {
        match self {
            LexiconAttribute::Separator => "lexicon.separator",
            LexiconAttribute::Encoding => "lexicon.encoding",
            LexiconAttribute::Encoder => "lexicon.encoder",
            LexiconAttribute::Language => "lexicon.language",
            LexiconAttribute::CaseFallback => "lexicon.case-fallback",
            LexiconAttribute::Name => "lexicon.name",
            LexiconAttribute::Author => "lexicon.author",
            LexiconAttribute::License => "lexicon.license",
        }
    }

    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "lexicon.separator" => Some(LexiconAttribute::Separator),
            "lexicon.encoding" => Some(LexiconAttribute::Encoding),
            "lexicon.encoder" => Some(LexiconAttribute::Encoder),
            "lexicon.language" => Some(LexiconAttribute::Language),
            "lexicon.case-fallback" => Some(LexiconAttribute::CaseFallback),
            "lexicon.name" => Some(LexiconAttribute::Name),
            "lexicon.author" => Some(LexiconAttribute::Author),
            "lexicon.license" => Some(LexiconAttribute::License),
            _ => None,
        }
    }
}

/// Atrybuty z pliku `.info` towarzyszącego leksykonowi.
#[derive(Debug, Clone, Default)]
pub struct LexiconMetadata {
    attributes: HashMap<String, String>,
}

impl LexiconMetadata {
    pub const DEFAULT_SEPARATOR: char = '\t';
    pub const DEFAULT_ENCODING: &'static str = "UTF-8";
    pub const DEFAULT_ENCODER: EncoderType = EncoderType::Suffix;
    pub const DEFAULT_LANGUAGE: &'static str = "it";

    pub fn new() -> Self {
        LexiconMetadata::default()
    }

    /// Wczytuje metadane z pliku `.info` leżącego obok `lexicon_path`.
    pub fn from_lexicon_path<P: AsRef<Path>>(lexicon_path: P) -> Result<Self> {
        let info_path = lexicon_path.as_ref().with_extension("info");

        if !info_path.exists() {
            return Err(LemmaError::MetadataNotFound(
                info_path.to_string_lossy().into_owned(),
            ));
        }
        Self::from_info_file(&info_path)
    }

    pub fn from_info_file<P: AsRef<Path>>(info_file_path: P) -> Result<Self> {
        let file = File::open(info_file_path.as_ref()).map_err(|e| {
            LemmaError::Io(format!(
                "Failed to open metadata file '{}': {}",
                info_file_path.as_ref().display(),
                e
            ))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut attributes = HashMap::new();
        for (idx, line_res) in reader.lines().enumerate() {
            let line = line_res
                .map_err(|e| LemmaError::Io(format!("Error reading metadata line: {}", e)))?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.find('=') {
                Some(eq_index) => {
                    let key = line[..eq_index].trim().to_string();
                    // Tabulator jako wartość trzeba zapisać jako `\t`.
                    let value = line[eq_index + 1..].trim().to_string();
                    if LexiconAttribute::from_key_name(&key).is_none() {
                        warn!("Nieznany atrybut metadanych '{}' (linia {})", key, idx + 1);
                    }
                    attributes.insert(key, value);
                }
                None => warn!("Pominięto linię metadanych bez '=' (linia {}): {}", idx + 1, line),
            }
        }
        Ok(LexiconMetadata { attributes })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(BufReader::new(Cursor::new(bytes)))
    }

    /// Surowa wartość atrybutu, np. `lexicon.license`.
    pub fn get_string(&self, attribute: LexiconAttribute) -> Option<&str> {
        self.attributes.get(attribute.key_name()).map(String::as_str)
    }

    fn get_string_or_default<'s>(&'s self, attribute: LexiconAttribute, default_value: &'s str) -> &'s str {
        self.attributes
            .get(attribute.key_name())
            .map_or(default_value, |s| s.as_str())
    }

    pub fn get_separator(&self) -> Result<char> {
        match self.attributes.get(LexiconAttribute::Separator.key_name()) {
            None => Ok(Self::DEFAULT_SEPARATOR),
            Some(s) if s == "\\t" => Ok('\t'),
            Some(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(LemmaError::InvalidMetadataValue(format!(
                        "Invalid separator value: '{}'. Expected a single character.",
                        s
                    ))),
                }
            }
        }
    }

    /// Kodowanie znaków. Obsługiwane jest wyłącznie UTF-8.
    pub fn get_encoding(&self) -> Result<&str> {
        let encoding = self.get_string_or_default(LexiconAttribute::Encoding, Self::DEFAULT_ENCODING);
        match encoding.to_uppercase().replace('_', "-").as_str() {
            "UTF-8" | "UTF8" => Ok(encoding),
            _ => Err(LemmaError::InvalidMetadataValue(format!(
                "Unsupported encoding: '{}'. Only UTF-8 lexicons are supported.",
                encoding
            ))),
        }
    }

    pub fn get_encoder(&self) -> Result<EncoderType> {
        self.attributes
            .get(LexiconAttribute::Encoder.key_name())
            .map_or(Ok(Self::DEFAULT_ENCODER), |s| EncoderType::from_str(s))
    }

    pub fn get_language(&self) -> &str {
        self.get_string_or_default(LexiconAttribute::Language, Self::DEFAULT_LANGUAGE)
    }

    /// Czy przy braku formy próbować jeszcze wersji małymi literami.
    pub fn get_case_fallback(&self) -> Result<bool> {
        match self.attributes.get(LexiconAttribute::CaseFallback.key_name()) {
            None => Ok(true),
            Some(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(true),
                "false" | "no" | "0" => Ok(false),
                _ => Err(LemmaError::InvalidMetadataValue(format!(
                    "Invalid boolean for {}: '{}'",
                    LexiconAttribute::CaseFallback.key_name(),
                    s
                ))),
            },
        }
    }
}
