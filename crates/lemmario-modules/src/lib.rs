//! Moduły lematyzujące dla potoku danych: lista tokenów (`tokens`)
//! oraz kolumnowa tablica list tokenów (`tokens_array`).

pub mod module_trait;
pub mod tokens;
pub mod tokens_array;

pub use module_trait::{LemmatizeModule, ValueSchema, ValueType, FIELD_TOKENS_ARRAY};
pub use tokens::LemmatizeTokensModule;
pub use tokens_array::LemmatizeTokensArrayModule;
