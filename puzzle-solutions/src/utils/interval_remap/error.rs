use super::TranslationRule;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemapError {
    /// Negative length, arithmetic overflow or a malformed seed list
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Two rules of one stage share source values
    #[error("rules `{first}` and `{second}` overlap in source space")]
    MalformedRule {
        first: TranslationRule,
        second: TranslationRule,
    },
}
