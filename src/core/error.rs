//! Errors raised while turning adapter strings into typed values.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown field '{name}'")]
    UnknownField { name: String },

    #[error("Unknown guest choice '{value}', expected \"Yes\" or \"No\"")]
    UnknownGuestChoice { value: String },
}
