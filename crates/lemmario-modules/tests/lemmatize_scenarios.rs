use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use assert_matches::assert_matches;
use tempfile::tempdir;

use lemmario_core::config::PipelineConfig;
use lemmario_core::error::{LemmaError, Result};
use lemmario_core::lexicon_metadata::LexiconMetadata;
use lemmario_core::model_trait::LemmaModel;
use lemmario_core::stages::Stages;
use lemmario_core::token_array::TokenArray;
use lemmario_core::word_data::WordData;
use lemmario_italian::ItalianModel;
use lemmario_modules::{LemmatizeModule, LemmatizeTokensArrayModule, LemmatizeTokensModule};

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn embedded() -> Arc<dyn LemmaModel> {
    Arc::new(ItalianModel::embedded().expect("embedded model"))
}

/// Model, który zawodzi dla jednej formy.
#[derive(Debug)]
struct FailingModel {
    inner: ItalianModel,
    poisoned: String,
}

impl LemmaModel for FailingModel {
    fn name(&self) -> &str {
        "failing"
    }

    fn lookup(&self, form: &str) -> Result<Vec<WordData>> {
        if form == self.poisoned {
            return Err(LemmaError::SequenceDecodingError(format!("cannot decode '{}'", form)));
        }
        self.inner.lookup(form)
    }

    fn components(&self) -> Stages {
        self.inner.components()
    }

    fn metadata(&self) -> &LexiconMetadata {
        self.inner.metadata()
    }
}

#[test]
fn single_sequence_scenario() {
    let module = LemmatizeTokensModule::new(embedded(), &PipelineConfig::default()).unwrap();
    let lemmas = module.process(tokens(&["case", "belle"])).unwrap();
    assert_eq!(lemmas, tokens(&["casa", "bello"]));
}

#[test]
fn array_scenario() {
    let module = LemmatizeTokensArrayModule::new(embedded(), &PipelineConfig::default()).unwrap();
    let input = TokenArray::from_rows(vec![vec!["case"], vec!["belle", "case"]]);

    let output = module.process(input).unwrap();
    assert_eq!(output.len(), 2);
    assert_eq!(
        output.to_rows(),
        vec![tokens(&["casa"]), tokens(&["bello", "casa"])]
    );
}

#[test]
fn single_sequence_preserves_length_and_is_deterministic() {
    let module = LemmatizeTokensModule::new(embedded(), &PipelineConfig::default()).unwrap();
    let input = tokens(&["Le", "case", "sono", "belle", ",", "città", "dell'acqua", ""]);

    let first = module.process(input.clone()).unwrap();
    let second = module.process(input.clone()).unwrap();
    assert_eq!(first.len(), input.len());
    assert_eq!(first, second);
    assert_eq!(first, tokens(&["il", "casa", "essere", "bello", ",", "città", "di", ""]));
}

#[test]
fn array_preserves_row_shape_over_many_batches() {
    let module = LemmatizeTokensArrayModule::new(embedded(), &PipelineConfig::default()).unwrap();
    let vocab = ["case", "belle", "gatti", "sono", "xyz", "libri", "donne"];
    let rows: Vec<Vec<String>> = (0..200)
        .map(|i| (0..(i % 5)).map(|j| vocab[(i + j) % vocab.len()].to_string()).collect())
        .collect();
    let input = TokenArray::from_rows(rows.clone());

    let output = module.process(input.clone()).unwrap();
    assert_eq!(output.len(), rows.len());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(output.row(i).unwrap().len(), row.len(), "row {}", i);
    }

    let again = module.process(input).unwrap();
    assert_eq!(output, again);
}

#[test]
fn array_matches_single_sequence_for_atomic_tokens() {
    let config = PipelineConfig::default();
    let single = LemmatizeTokensModule::new(embedded(), &config).unwrap();
    let batched = LemmatizeTokensArrayModule::new(embedded(), &config).unwrap();

    let row = tokens(&["Sono", "piccole", "ragazze", "è", "andarono"]);
    let from_single = single.process(row.clone()).unwrap();
    let from_array = batched.process(TokenArray::from_rows(vec![row])).unwrap();
    assert_eq!(from_array.row(0).unwrap(), from_single.as_slice());
}

#[test]
fn missing_model_surfaces_model_unavailable() {
    let empty = tempdir().unwrap();
    let config = PipelineConfig {
        model_paths: vec![empty.path().to_path_buf()],
        ..PipelineConfig::default()
    };

    assert_matches!(
        LemmatizeTokensModule::from_config(&config),
        Err(LemmaError::ModelUnavailable { .. })
    );
    assert_matches!(
        LemmatizeTokensArrayModule::from_config(&config),
        Err(LemmaError::ModelUnavailable { .. })
    );
}

fn write_model(dir: &Path, name: &str) {
    fs::create_dir_all(dir.join(name)).unwrap();
    File::create(dir.join(name).join(format!("{}.dict", name)))
        .unwrap()
        .write_all("case;casa;NOUN-F:p\nbelle;bello;ADJ:pos+f+p\n".as_bytes())
        .unwrap();
    File::create(dir.join(name).join(format!("{}.info", name)))
        .unwrap()
        .write_all(b"lexicon.separator = ;\nlexicon.encoder = NONE\n")
        .unwrap();
}

#[test]
fn modules_load_model_from_config_paths() {
    let models = tempdir().unwrap();
    write_model(models.path(), "it_core_news_sm");
    let config = PipelineConfig {
        model_paths: vec![models.path().to_path_buf()],
        ..PipelineConfig::default()
    };

    let single = LemmatizeTokensModule::from_config(&config).unwrap();
    assert_eq!(single.process(tokens(&["belle"])).unwrap(), tokens(&["bello"]));

    let batched = LemmatizeTokensArrayModule::from_config(&config).unwrap();
    let out = batched.process(TokenArray::from_rows(vec![vec!["case"]])).unwrap();
    assert_eq!(out.to_rows(), vec![tokens(&["casa"])]);
}

#[test]
fn failing_row_aborts_whole_array() {
    let model = FailingModel {
        inner: ItalianModel::embedded().unwrap(),
        poisoned: "rotto".to_string(),
    };
    let config = PipelineConfig {
        batch_size: 2,
        ..PipelineConfig::default()
    };
    let module = LemmatizeTokensArrayModule::new(Arc::new(model), &config).unwrap();

    let input = TokenArray::from_rows(vec![
        vec!["case"],
        vec!["belle"],
        vec!["gatti"],
        vec!["libri", "rotto"],
        vec!["donne"],
    ]);
    assert_matches!(
        module.process(input),
        Err(LemmaError::BatchFailure { batch: 1, .. })
    );
}

#[test]
fn small_config_runs_sequentially_sized_pool() {
    let config = PipelineConfig::from_yaml_str("batch_size: 1\nworkers: 1\n").unwrap();
    let module = LemmatizeTokensArrayModule::new(embedded(), &config).unwrap();
    let out = module
        .process(TokenArray::from_rows(vec![vec!["uomini"], vec!["hanno"], vec!["parlato"]]))
        .unwrap();
    assert_eq!(
        out.to_rows(),
        vec![tokens(&["uomo"]), tokens(&["avere"]), tokens(&["parlare"])]
    );
}
