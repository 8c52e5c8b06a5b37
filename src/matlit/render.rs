//! Literal rendering
//!
//! Produces a single line of Rust source of the form
//! `<constructor>(<dimension>, <dimension>, <sequence>)<terminator>`.
//! Values are printed with `f64`'s `Debug` formatting, which always yields
//! a valid float literal (`1.0`, `-0.5`, `1e-7`) rather than the integer
//! looking `1` that `Display` gives.

use super::matrix::SquareMatrix;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CONSTRUCTOR: &str = "Matrix::from_values";
pub const DEFAULT_TERMINATOR: &str = ";";

/// How the flattened values are wrapped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceStyle {
    /// `vec![..]`, for constructors taking `Vec<f64>`
    #[default]
    Vec,
    /// `[..]`
    Array,
    /// `&[..]`
    Slice,
}

impl SequenceStyle {
    pub const ALL: [SequenceStyle; 3] =
        [SequenceStyle::Vec, SequenceStyle::Array, SequenceStyle::Slice];

    pub fn name(self) -> &'static str {
        match self {
            SequenceStyle::Vec => "vec",
            SequenceStyle::Array => "array",
            SequenceStyle::Slice => "slice",
        }
    }

    fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            SequenceStyle::Vec => ("vec![", "]"),
            SequenceStyle::Array => ("[", "]"),
            SequenceStyle::Slice => ("&[", "]"),
        }
    }
}

impl fmt::Display for SequenceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SequenceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SequenceStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown sequence style '{}' (expected one of: vec, array, slice)",
                    s
                )
            })
    }
}

/// Knobs for the emitted literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub constructor: String,
    pub sequence: SequenceStyle,
    pub terminator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            constructor: DEFAULT_CONSTRUCTOR.to_string(),
            sequence: SequenceStyle::default(),
            terminator: DEFAULT_TERMINATOR.to_string(),
        }
    }
}

/// Render the constructor call for `matrix`.
pub fn render_literal(matrix: &SquareMatrix, options: &RenderOptions) -> String {
    let (open, close) = options.sequence.delimiters();
    let values = matrix
        .values()
        .iter()
        .map(|value| format!("{:?}", value))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}({}, {}, {}{}{}){}",
        options.constructor,
        matrix.dimension(),
        matrix.dimension(),
        open,
        values,
        close,
        options.terminator
    )
}
