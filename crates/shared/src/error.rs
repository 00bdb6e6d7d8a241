use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must have 3, 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct VariantParseError {
    pub kind: &'static str,
    pub value: String,
}

impl VariantParseError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
