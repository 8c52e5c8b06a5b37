//! Conversion pipeline
//!
//! The stages run strictly in order, each one a pure function over the
//! previous stage's output:
//!
//! 1. [`payload`]: pick the curly-quoted region (or the whole input) and drop
//!    every non-ASCII character
//! 2. [`tokens`]: split on pipes, trim, discard empties, parse as `f64`
//! 3. [`matrix`]: derive the dimension from the value count
//! 4. [`render`]: print the constructor call

pub mod error;
pub mod matrix;
pub mod payload;
pub mod render;
pub mod tokens;

use error::ConvertError;
use matrix::SquareMatrix;
use render::RenderOptions;

/// Run every stage except rendering.
pub fn parse_matrix(input: &str) -> Result<SquareMatrix, ConvertError> {
    let payload = payload::extract_payload(input);
    let tokens = tokens::split_tokens(&payload);
    log::debug!("split payload into {} tokens", tokens.len());

    let values = tokens::parse_numbers(&tokens)?;
    let matrix = SquareMatrix::from_values(values);

    if !matrix.is_perfect_square() {
        log::warn!(
            "{} values do not form a square matrix, using dimension {}",
            matrix.len(),
            matrix.dimension()
        );
    }

    Ok(matrix)
}

/// Convert raw input text into a constructor literal.
///
/// Nothing is rendered if any token fails to parse.
pub fn convert(input: &str, options: &RenderOptions) -> Result<String, ConvertError> {
    let matrix = parse_matrix(input)?;
    Ok(render::render_literal(&matrix, options))
}
