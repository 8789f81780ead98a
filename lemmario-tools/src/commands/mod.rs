// Moduły dla poszczególnych komend
pub mod array;
pub mod tokens;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use lemmario_core::config::PipelineConfig;
use lemmario_core::model_trait::LemmaModel;
use lemmario_italian::ItalianModel;

use crate::CommonArgs;

/// Konfiguracja z pliku (jeśli podano) nadpisana flagami z linii poleceń.
pub fn build_config(args: &CommonArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_yaml_file(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if !args.model_paths.is_empty() {
        config.model_paths = args.model_paths.clone();
    }
    config.validate()?;
    Ok(config)
}

pub fn load_model(args: &CommonArgs, config: &PipelineConfig) -> Result<Arc<dyn LemmaModel>> {
    let model = if args.embedded {
        ItalianModel::embedded()?
    } else {
        ItalianModel::from_config(config)?
    };
    Ok(Arc::new(model))
}

pub fn read_payload<T: DeserializeOwned>(args: &CommonArgs) -> Result<T> {
    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening input {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    serde_json::from_reader(reader).context("parsing input JSON")
}

pub fn write_payload<T: Serialize>(payload: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    serde_json::to_writer(&mut writer, payload)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
