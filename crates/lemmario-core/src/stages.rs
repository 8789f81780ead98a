// Etapy anotacji potoku językowego

use bitflags::bitflags;

use crate::error::{LemmaError, Result};

bitflags! {
    /// Zbiór etapów anotacji. Kolejność bitów odpowiada kolejności w potoku.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Stages: u8 {
        const TAGGER = 0b0001;
        const PARSER = 0b0010;
        const NER = 0b0100;
        const LEMMATIZER = 0b1000;

        /// Etapy wyłączane domyślnie, bo do lematyzacji nie są potrzebne.
        const ANNOTATION = Self::TAGGER.bits() | Self::PARSER.bits() | Self::NER.bits();
    }
}

const STAGE_NAMES: [(Stages, &str); 4] = [
    (Stages::TAGGER, "tagger"),
    (Stages::PARSER, "parser"),
    (Stages::NER, "ner"),
    (Stages::LEMMATIZER, "lemmatizer"),
];

impl Stages {
    /// Etap o podanej nazwie (bez względu na wielkość liter i białe znaki).
    pub fn parse_name(name: &str) -> Result<Stages> {
        let wanted = name.trim().to_lowercase();
        STAGE_NAMES
            .iter()
            .find(|(_, n)| *n == wanted)
            .map(|(stage, _)| *stage)
            .ok_or_else(|| LemmaError::UnknownStage(name.to_string()))
    }

    pub fn from_names<I, S>(names: I) -> Result<Stages>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Stages::empty(), |acc, n| -> Result<Stages> {
                Ok(acc | Stages::parse_name(n.as_ref())?)
            })
    }

    /// Nazwy etapów w kolejności wykonywania.
    pub fn names(&self) -> Vec<&'static str> {
        STAGE_NAMES
            .iter()
            .filter(|(stage, _)| self.contains(*stage))
            .map(|(_, n)| *n)
            .collect()
    }
}
