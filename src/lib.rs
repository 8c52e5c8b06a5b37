//! # matlit
//!
//! Turns a matrix table pasted from a book or PDF into a `Matrix` constructor
//! literal.
//!
//! The input is typically a curly-quoted, pipe-delimited table:
//!
//! ```text
//! “| 1 | 2 |
//!  | 3 | 4 |”
//! ```
//!
//! which becomes
//!
//! ```text
//! Matrix::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! See [`matlit::convert`] for the full pipeline.

pub mod matlit;

pub use matlit::error::ConvertError;
pub use matlit::matrix::SquareMatrix;
pub use matlit::render::{RenderOptions, SequenceStyle};
pub use matlit::{convert, parse_matrix};
