use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};

use lemmario_core::token_array::TokenArray;
use lemmario_modules::{LemmatizeModule, LemmatizeTokensArrayModule};

use super::{build_config, load_model, read_payload, write_payload};
use crate::CommonArgs;

#[derive(Debug, Serialize, Deserialize)]
pub struct ArrayPayload {
    pub tokens_array: TokenArray,
}

pub fn run(args: &CommonArgs) -> Result<()> {
    let config = build_config(args)?;
    let model = load_model(args, &config)?;
    let module = LemmatizeTokensArrayModule::new(model, &config)?;

    let input: ArrayPayload = read_payload(args)?;
    let rows = input.tokens_array.len();
    let lemmas = module.process(input.tokens_array)?;
    info!("Zlematyzowano {} wierszy", rows);
    write_payload(&ArrayPayload { tokens_array: lemmas })
}
