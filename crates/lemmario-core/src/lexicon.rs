// Plik dla struktury Lexicon

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};

use crate::encoders;
use crate::error::{LemmaError, Result};
use crate::lexicon_metadata::{EncoderType, LexiconMetadata};
use crate::word_data::WordData;

/// Leksykon morfologiczny: forma -> lista analiz w kolejności z pliku.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Arc<HashMap<String, Vec<WordData>>>,
    metadata: Arc<LexiconMetadata>,
}

impl Lexicon {
    /// Wczytuje `<nazwa>.dict` wraz z sąsiednim `<nazwa>.info`.
    pub fn from_file<P: AsRef<Path>>(lexicon_file_path: P) -> Result<Self> {
        let path_ref = lexicon_file_path.as_ref();

        let metadata = LexiconMetadata::from_lexicon_path(path_ref)?;

        let file = File::open(path_ref).map_err(|e| {
            LemmaError::Io(format!(
                "Failed to open lexicon file '{}': {}",
                path_ref.display(),
                e
            ))
        })?;

        let lexicon = Self::from_reader(BufReader::new(file), metadata)?;
        info!(
            "Wczytano leksykon {} ({} form)",
            path_ref.display(),
            lexicon.len()
        );
        Ok(lexicon)
    }

    pub fn from_embedded(dict_bytes: &[u8], info_bytes: &[u8]) -> Result<Self> {
        let metadata = LexiconMetadata::from_bytes(info_bytes)?;
        Self::from_reader(Cursor::new(dict_bytes), metadata)
    }

    pub fn from_reader<R: BufRead>(reader: R, metadata: LexiconMetadata) -> Result<Self> {
        metadata.get_encoding()?;
        let separator = metadata.get_separator()?;
        let encoder_type = metadata.get_encoder()?;
        let encoder = encoders::for_type(encoder_type);
        debug!(
            "Parsowanie leksykonu: separator {:?}, enkoder {}",
            separator,
            encoder_type.as_str()
        );

        let mut entries: HashMap<String, Vec<WordData>> = HashMap::new();
        for (idx, line_res) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line_res.map_err(|e| {
                LemmaError::Io(format!("Error reading lexicon line {}: {}", line_no, e))
            })?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.splitn(3, separator);
            let form = parts.next().unwrap_or_default();
            let encoded_lemma = parts.next().ok_or_else(|| LemmaError::MalformedEntry {
                line: line_no,
                reason: format!("missing lemma column (separator {:?})", separator),
            })?;
            let tag = parts.next().filter(|t| !t.is_empty()).map(str::to_string);

            if form.is_empty() {
                return Err(LemmaError::MalformedEntry {
                    line: line_no,
                    reason: "empty form".to_string(),
                });
            }

            let lemma = encoder.decode(form, encoded_lemma).map_err(|e| LemmaError::MalformedEntry {
                line: line_no,
                reason: e.to_string(),
            })?;

            entries
                .entry(form.to_string())
                .or_default()
                .push(WordData::new(form, lemma, tag));
        }

        Ok(Lexicon {
            entries: Arc::new(entries),
            metadata: Arc::new(metadata),
        })
    }

    /// Analizy dla dokładnie tej formy (bez zmiany wielkości liter).
    pub fn get(&self, form: &str) -> Option<&[WordData]> {
        self.entries.get(form).map(Vec::as_slice)
    }

    /// Liczba różnych form w leksykonie.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metadata(&self) -> &LexiconMetadata {
        &self.metadata
    }

    pub fn encoder_type(&self) -> Result<EncoderType> {
        self.metadata.get_encoder()
    }

    pub fn get_info_file_path<P: AsRef<Path>>(lexicon_file_path: P) -> PathBuf {
        lexicon_file_path.as_ref().with_extension("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    const INFO_NONE: &str = "lexicon.separator = ;\n\
                             lexicon.encoder = NONE\n";

    const INFO_SUFFIX: &str = "lexicon.separator = \\t\n\
                               lexicon.encoder = SUFFIX\n";

    const INFO_PREFIX: &str = "lexicon.separator = ;\n\
                               lexicon.encoder = PREFIX\n";

    fn write_lexicon(dir: &Path, name: &str, dict: &str, info: &str) -> PathBuf {
        let dict_path = dir.join(format!("{}.dict", name));
        let mut dict_file = File::create(&dict_path).unwrap();
        dict_file.write_all(dict.as_bytes()).unwrap();
        let mut info_file = File::create(Lexicon::get_info_file_path(&dict_path)).unwrap();
        info_file.write_all(info.as_bytes()).unwrap();
        dict_path
    }

    #[test]
    fn test_lexicon_from_embedded_no_encoder() -> Result<()> {
        let dict = "case;casa;NOUN-F:p\nbelle;bello;ADJ:pos+f+p\n";
        let lexicon = Lexicon::from_embedded(dict.as_bytes(), INFO_NONE.as_bytes())?;

        assert_eq!(lexicon.len(), 2);
        let analyses = lexicon.get("case").unwrap();
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].lemma(), "casa");
        assert_eq!(analyses[0].tag(), Some("NOUN-F:p"));
        assert_eq!(lexicon.encoder_type()?, EncoderType::None);
        Ok(())
    }

    #[test]
    fn test_lexicon_from_embedded_suffix_encoder() -> Result<()> {
        let dict = "case\tBa\tNOUN-F:p\nè\tBessere\tVER:ind+pres+3+s\n";
        let lexicon = Lexicon::from_embedded(dict.as_bytes(), INFO_SUFFIX.as_bytes())?;

        assert_eq!(lexicon.get("case").unwrap()[0].lemma(), "casa");
        assert_eq!(lexicon.get("è").unwrap()[0].lemma(), "essere");
        Ok(())
    }

    #[test]
    fn test_lexicon_from_embedded_prefix_encoder() -> Result<()> {
        let dict = "inutili;CBe;ADJ:pos+m+p\nbelle;ABo;ADJ:pos+f+p\n";
        let lexicon = Lexicon::from_embedded(dict.as_bytes(), INFO_PREFIX.as_bytes())?;

        assert_eq!(lexicon.encoder_type()?, EncoderType::Prefix);
        assert_eq!(lexicon.get("inutili").unwrap()[0].lemma(), "utile");
        assert_eq!(lexicon.get("belle").unwrap()[0].lemma(), "bello");

        let res = Lexicon::from_embedded(b"case;C\n", INFO_PREFIX.as_bytes());
        assert_matches!(res, Err(LemmaError::MalformedEntry { line: 1, .. }));
        Ok(())
    }

    #[test]
    fn test_homographs_keep_file_order() -> Result<()> {
        let dict = "# komentarz\nporta;porta;NOUN-F:s\nporta;portare;VER:ind+pres+3+s\n\n";
        let lexicon = Lexicon::from_embedded(dict.as_bytes(), INFO_NONE.as_bytes())?;

        let lemmas: Vec<&str> = lexicon.get("porta").unwrap().iter().map(|w| w.lemma()).collect();
        assert_eq!(lemmas, vec!["porta", "portare"]);
        Ok(())
    }

    #[test]
    fn test_entry_without_tag() -> Result<()> {
        let lexicon = Lexicon::from_embedded(b"e;e\n", INFO_NONE.as_bytes())?;
        assert_eq!(lexicon.get("e").unwrap()[0].tag(), None);
        Ok(())
    }

    #[test]
    fn test_malformed_entries() {
        let res = Lexicon::from_embedded(b"case;casa\nbelle\n", INFO_NONE.as_bytes());
        assert_matches!(res, Err(LemmaError::MalformedEntry { line: 2, .. }));

        let res = Lexicon::from_embedded(b";casa\n", INFO_NONE.as_bytes());
        assert_matches!(res, Err(LemmaError::MalformedEntry { line: 1, .. }));

        let res = Lexicon::from_embedded(b"case\tZZ\n", INFO_SUFFIX.as_bytes());
        assert_matches!(res, Err(LemmaError::MalformedEntry { line: 1, .. }));
    }

    #[test]
    fn test_lexicon_from_file() -> Result<()> {
        let temp_dir = tempfile::tempdir().unwrap();
        let dict_path = write_lexicon(temp_dir.path(), "it", "gatti;gatto;NOUN-M:p\n", INFO_NONE);

        let lexicon = Lexicon::from_file(&dict_path)?;
        assert_eq!(lexicon.get("gatti").unwrap()[0].lemma(), "gatto");
        assert_eq!(lexicon.metadata().get_separator()?, ';');
        Ok(())
    }

    #[test]
    fn test_lexicon_from_file_missing_info() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dict_path = temp_dir.path().join("it.dict");
        File::create(&dict_path).unwrap();

        let result = Lexicon::from_file(&dict_path);
        assert_matches!(result, Err(LemmaError::MetadataNotFound(_)));
    }

    #[test]
    fn test_lexicon_from_file_missing_dict() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dict_path = write_lexicon(temp_dir.path(), "it", "", INFO_NONE);
        std::fs::remove_file(&dict_path).unwrap();

        let result = Lexicon::from_file(&dict_path);
        assert_matches!(result, Err(LemmaError::Io(_)));
    }

    #[test]
    fn test_lexicon_rejects_non_utf8_encoding() {
        let info = "lexicon.encoding = ISO-8859-2\n";
        let result = Lexicon::from_embedded(b"", info.as_bytes());
        assert_matches!(result, Err(LemmaError::InvalidMetadataValue(_)));
    }
}
