// Plik dla struktury WordData

use std::fmt;

/// Jedna analiza formy z leksykonu: forma fleksyjna, lemat i tag.
///
/// W odróżnieniu od słowników bajtowych leksykon jest zawsze w UTF-8,
/// więc pola przechowują od razu `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordData {
    word: String,
    lemma: String,
    /// Tag morfologiczny, np. `NOUN-F:p`. Może go nie być.
    tag: Option<String>,
}

impl WordData {
    pub fn new(word: impl Into<String>, lemma: impl Into<String>, tag: Option<String>) -> Self {
        WordData {
            word: word.into(),
            lemma: lemma.into(),
            tag,
        }
    }

    /// Forma fleksyjna.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Forma podstawowa (lemat).
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

impl fmt::Display for WordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WordData[{}, {}, {}]",
            self.word,
            self.lemma,
            self.tag.as_deref().unwrap_or("null")
        )
    }
}
