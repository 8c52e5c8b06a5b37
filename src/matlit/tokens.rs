//! Tokenizing and number parsing

use super::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;

/// A single pipe with any surrounding whitespace, newlines included
static PIPE_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\|\s*").unwrap());

/// Split a payload into trimmed, non-empty tokens.
///
/// Leading/trailing table borders and doubled pipes produce empty pieces,
/// which are dropped rather than read as zero.
pub fn split_tokens(payload: &str) -> Vec<&str> {
    PIPE_SEPARATOR_REGEX
        .split(payload)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parse every token as `f64`, stopping at the first malformed one.
pub fn parse_numbers(tokens: &[&str]) -> Result<Vec<f64>, ConvertError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| parse_number(token, index + 1))
        .collect()
}

fn parse_number(token: &str, position: usize) -> Result<f64, ConvertError> {
    match token.parse::<f64>() {
        // `inf`, `NaN` and overflowing exponents parse, but have no literal form
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConvertError::MalformedNumber {
            token: token.to_string(),
            position,
        }),
    }
}
