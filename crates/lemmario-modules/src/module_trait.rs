use lemmario_core::error::Result;

/// Nazwa pola wejściowego i wyjściowego obu modułów.
pub const FIELD_TOKENS_ARRAY: &str = "tokens_array";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Zwykła lista tokenów.
    List,
    /// Kolumnowa tablica list tokenów.
    Array,
}

/// Opis nazwanego wejścia lub wyjścia modułu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSchema {
    pub name: &'static str,
    pub value_type: ValueType,
    pub doc: &'static str,
}

pub trait LemmatizeModule {
    type Input;
    type Output;

    const MODULE_TYPE_NAME: &'static str;
    const DOC: &'static str;

    fn input_schema(&self) -> ValueSchema;
    fn output_schema(&self) -> ValueSchema;

    /// Kształt wyjścia zawsze odpowiada kształtowi wejścia.
    fn process(&self, input: Self::Input) -> Result<Self::Output>;
}
