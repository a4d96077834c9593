// File: src/error.rs
// Purpose: Errors for malformed rule declarations

use thiserror::Error;

/// A rule token that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("rule `{rule}` requires a size parameter, e.g. {rule}(6)")]
    MissingParameter { rule: String },

    #[error("rule `{rule}` has invalid size parameter `{value}`")]
    InvalidParameter { rule: String, value: String },

    #[error("rule `{rule}` does not take a parameter")]
    UnexpectedParameter { rule: String },

    #[error("unterminated parameter list in `{token}`")]
    Unterminated { token: String },
}
