// Główny punkt wejścia dla narzędzi CLI
mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::error;

use lemmario_modules::{LemmatizeModule, LemmatizeTokensArrayModule, LemmatizeTokensModule};

#[derive(Parser, Debug)]
#[command(name = "lemmario-cli")]
#[command(about = "Lemmatize pre-tokenized Italian text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = LemmatizeTokensModule::DOC)]
    #[command(after_help = r#"Input: {"tokens_array": ["case", "belle"]}"#)]
    Tokens,
    #[command(about = LemmatizeTokensArrayModule::DOC)]
    #[command(after_help = r#"Input: {"tokens_array": [["case"], ["belle", "case"]]}"#)]
    Array,
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Input JSON file (default: stdin)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// YAML pipeline configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Model name to look up in the model paths
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Directory searched for the model (repeatable, overrides the configuration)
    #[arg(long = "model-path", global = true)]
    model_paths: Vec<PathBuf>,

    /// Use the small lexicon compiled into the binary
    #[arg(long, global = true)]
    embedded: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.common.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tokens => commands::tokens::run(&cli.common),
        Command::Array => commands::array::run(&cli.common),
    }
}
