//! Error types for rule handling.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The operation has no agreed behavior yet.
    #[error("Not yet specified: {0}")]
    NotYetSpecified(&'static str),

    /// The rule does not conform to the rule language.
    #[error("Syntax error at offset {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

impl RuleError {
    /// Create a syntax error.
    pub fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }
}
