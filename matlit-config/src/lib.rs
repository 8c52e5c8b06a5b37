//! Output settings for matlit.
//!
//! The shape of the emitted literal is resolved from three layers, later ones
//! winning key by key:
//!
//! 1. `defaults/matlit.default.toml`, compiled into the binary
//! 2. a user TOML file (`--config`)
//! 3. single-setting flags (`--constructor`, `--sequence`)
//!
//! Validation happens once, in [`OutputLoader::build`], so a bad sequence
//! style is reported the same way whichever layer it came from.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use matlit::{RenderOptions, SequenceStyle};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/matlit.default.toml");

#[derive(Debug, Deserialize)]
struct Settings {
    output: OutputSection,
}

/// The `[output]` table
#[derive(Debug, Deserialize)]
struct OutputSection {
    constructor: String,
    sequence: SequenceStyle,
    terminator: String,
}

impl From<OutputSection> for RenderOptions {
    fn from(section: OutputSection) -> Self {
        RenderOptions {
            constructor: section.constructor,
            sequence: section.sequence,
            terminator: section.terminator,
        }
    }
}

/// Resolves [`RenderOptions`] from the layered output settings.
#[derive(Debug, Clone)]
pub struct OutputLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl OutputLoader {
    /// Seeded with the compiled-in `[output]` defaults.
    pub fn with_defaults() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a user TOML file. The file has to exist; it only needs the keys it
    /// changes.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn constructor(mut self, name: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.constructor", name)?;
        Ok(self)
    }

    /// Taken as text; an unknown style fails in [`build`](Self::build).
    pub fn sequence(mut self, style: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.sequence", style)?;
        Ok(self)
    }

    pub fn build(self) -> Result<RenderOptions, ConfigError> {
        let settings: Settings = self.builder.build()?.try_deserialize()?;
        Ok(settings.output.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn user_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        write!(file, "{}", contents).expect("write");
        file
    }

    #[test]
    fn defaults_match_library_defaults() {
        let options = OutputLoader::with_defaults().build().expect("defaults to build");
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn flags_override_defaults() {
        let options = OutputLoader::with_defaults()
            .constructor("Matrix4::new")
            .expect("override to apply")
            .sequence("slice")
            .expect("override to apply")
            .build()
            .expect("options to build");
        assert_eq!(options.constructor, "Matrix4::new");
        assert_eq!(options.sequence, SequenceStyle::Slice);
        assert_eq!(options.terminator, ";");
    }

    #[test]
    fn unknown_sequence_style_fails_at_build() {
        let loader = OutputLoader::with_defaults()
            .sequence("list")
            .expect("override is stored unchecked");
        assert!(loader.build().is_err());
    }

    #[test]
    fn user_file_changes_only_its_keys() {
        let file = user_file("[output]\nconstructor = \"Matrix4::from_row_slice\"\nterminator = \"\"\n");

        let options = OutputLoader::with_defaults()
            .with_file(file.path())
            .build()
            .expect("options to build");
        assert_eq!(options.constructor, "Matrix4::from_row_slice");
        assert_eq!(options.terminator, "");
        assert_eq!(options.sequence, SequenceStyle::Vec);
    }

    #[test]
    fn flags_win_over_user_file() {
        let file = user_file("[output]\nsequence = \"array\"\n");

        let options = OutputLoader::with_defaults()
            .with_file(file.path())
            .sequence("vec")
            .expect("override to apply")
            .build()
            .expect("options to build");
        assert_eq!(options.sequence, SequenceStyle::Vec);
    }

    #[test]
    fn bad_style_in_user_file_fails() {
        let file = user_file("[output]\nsequence = \"tuple\"\n");

        let result = OutputLoader::with_defaults().with_file(file.path()).build();
        assert!(result.is_err());
    }

    #[test]
    fn missing_user_file_is_an_error() {
        let result = OutputLoader::with_defaults()
            .with_file("/nonexistent/matlit.toml")
            .build();
        assert!(result.is_err());
    }
}
