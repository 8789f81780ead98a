// Błędy crate lemmario-core

use thiserror::Error;

/// Typ Result używany w tym crate.
pub type Result<T> = std::result::Result<T, LemmaError>;

/// Błędy, które mogą wystąpić podczas wczytywania modelu i lematyzacji.
#[derive(Debug, Error)]
pub enum LemmaError {
    /// Błąd wejścia/wyjścia, najczęściej przy odczycie plików leksykonu.
    #[error("Błąd I/O: {0}")]
    Io(String),

    /// Nie znaleziono pliku metadanych (`.info`).
    #[error("Nie znaleziono pliku metadanych: {0}")]
    MetadataNotFound(String),

    /// Nieprawidłowa wartość w pliku metadanych.
    #[error("Nieprawidłowa wartość w metadanych: {0}")]
    InvalidMetadataValue(String),

    /// Nieznana nazwa etapu anotacji (np. w liście `disable`).
    #[error("Nieznany etap anotacji: '{0}'")]
    UnknownStage(String),

    /// Wiersz leksykonu nie pasuje do formatu `forma SEP lemat SEP tag`.
    #[error("Nieprawidłowy wpis leksykonu w linii {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    /// Błąd podczas kodowania lub dekodowania lematu względem formy.
    #[error("Błąd dekodowania sekwencji: {0}")]
    SequenceDecodingError(String),

    /// Tokenizator dostał wejście, którego nie obsługuje.
    #[error("Tokenizator '{tokenizer}' nie obsługuje wejścia: {reason}")]
    TokenizerInput { tokenizer: String, reason: String },

    /// Nie można zlokalizować ani wczytać modelu językowego.
    #[error("Model '{name}' jest niedostępny: {reason}")]
    ModelUnavailable { name: String, reason: String },

    /// Token dał inną liczbę pod-tokenów niż dokładnie jeden.
    #[error("Token '{token}' na pozycji {position} dał {found} pod-tokenów (oczekiwano 1)")]
    ShapeMismatch {
        position: usize,
        token: String,
        found: usize,
    },

    /// Przetwarzanie jednej z partii się nie powiodło; całe wywołanie jest przerwane.
    #[error("Partia {batch} nie została przetworzona: {source}")]
    BatchFailure {
        batch: usize,
        #[source]
        source: Box<LemmaError>,
    },

    /// Nieprawidłowa konfiguracja potoku.
    #[error("Błąd konfiguracji: {0}")]
    Config(String),

    /// Nie udało się uruchomić puli wątków roboczych.
    #[error("Nie udało się utworzyć puli wątków: {0}")]
    ExecutorSetup(String),
}

impl From<std::io::Error> for LemmaError {
    fn from(err: std::io::Error) -> Self {
        LemmaError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_lemma_error_display() {
        let io_std_err = io::Error::new(io::ErrorKind::NotFound, "Plik nie istnieje");
        let err: LemmaError = io_std_err.into();
        assert_eq!(format!("{}", err), "Błąd I/O: Plik nie istnieje");

        let err = LemmaError::MetadataNotFound("it.info".to_string());
        assert_eq!(format!("{}", err), "Nie znaleziono pliku metadanych: it.info");

        let err = LemmaError::UnknownStage("morph".to_string());
        assert_eq!(format!("{}", err), "Nieznany etap anotacji: 'morph'");
    }

    #[test]
    fn test_batch_failure_keeps_source() {
        let inner = LemmaError::ShapeMismatch {
            position: 2,
            token: "dell'acqua".to_string(),
            found: 2,
        };
        let err = LemmaError::BatchFailure {
            batch: 1,
            source: Box::new(inner),
        };
        let msg = format!("{}", err);
        assert!(msg.starts_with("Partia 1 nie została przetworzona"));
        assert!(msg.contains("dell'acqua"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_model_unavailable_display() {
        let err = LemmaError::ModelUnavailable {
            name: "it_core_news_sm".to_string(),
            reason: "brak w ścieżkach: models".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Model 'it_core_news_sm' jest niedostępny: brak w ścieżkach: models"
        );
    }
}
