use anyhow::Result;
use serde::{Deserialize, Serialize};

use lemmario_modules::{LemmatizeModule, LemmatizeTokensModule};

use super::{build_config, load_model, read_payload, write_payload};
use crate::CommonArgs;

#[derive(Debug, Serialize, Deserialize)]
pub struct TokensPayload {
    pub tokens_array: Vec<String>,
}

pub fn run(args: &CommonArgs) -> Result<()> {
    let config = build_config(args)?;
    let model = load_model(args, &config)?;
    let module = LemmatizeTokensModule::new(model, &config)?;

    let input: TokensPayload = read_payload(args)?;
    let lemmas = module.process(input.tokens_array)?;
    write_payload(&TokensPayload { tokens_array: lemmas })
}
