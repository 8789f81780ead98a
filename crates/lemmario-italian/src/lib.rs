// Główny plik dla crate lemmario-italian

pub mod italian_model;
pub use italian_model::{ItalianModel, DEFAULT_MODEL_NAME};
