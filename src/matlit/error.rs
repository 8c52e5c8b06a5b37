//! Conversion errors

use std::fmt;

/// Errors raised while converting input into a matrix literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A non-empty token that is not a finite decimal number.
    /// `position` is 1-based and counts tokens, not characters.
    MalformedNumber { token: String, position: usize },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MalformedNumber { token, position } => {
                write!(f, "Malformed number '{}' at token {}", token, position)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
