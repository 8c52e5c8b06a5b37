//! Command-line interface for matlit
//! Reads a pasted matrix table from stdin and prints the constructor literal.
//!
//! Usage:
//!   matlit < table.txt                                  - Convert with the built-in defaults
//!   matlit --config `<file>` < table.txt                - Layer a TOML config over the defaults
//!   matlit --constructor `<name>` --sequence `<style>`  - Override single output settings
//!
//! Every failure, including a bad flag, exits with status 1 and leaves stdout
//! empty. Only `--help` and `--version` print to stdout without converting.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use matlit::RenderOptions;
use matlit_config::OutputLoader;
use std::io::{self, Read, Write};

fn command() -> Command {
    Command::new("matlit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a pasted pipe-delimited matrix table (stdin) into a Matrix constructor literal")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("constructor")
                .long("constructor")
                .value_name("NAME")
                .help("Constructor to call (default: Matrix::from_values)"),
        )
        .arg(
            Arg::new("sequence")
                .long("sequence")
                .value_name("STYLE")
                .help("How values are wrapped: vec, array or slice (default: vec)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output on stderr (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = command().try_get_matches().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    });

    init_logging(matches.get_count("verbose"));

    let options = load_render_options(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let input = read_stdin().unwrap_or_else(|e| {
        eprintln!("Error reading stdin: {}", e);
        std::process::exit(1);
    });

    let literal = matlit::convert(&input, &options).unwrap_or_else(|e| {
        eprintln!("Conversion error: {}", e);
        std::process::exit(1);
    });

    write_literal(&mut io::stdout().lock(), &literal).unwrap_or_else(|e| {
        eprintln!("Error writing stdout: {}", e);
        std::process::exit(1);
    });
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // Level comes from the flags only, RUST_LOG is not read
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Defaults, then `--config`, then the single-setting flags.
fn load_render_options(matches: &ArgMatches) -> Result<RenderOptions, matlit_config::ConfigError> {
    let mut loader = OutputLoader::with_defaults();

    if let Some(path) = matches.get_one::<String>("config") {
        log::info!("loading configuration from {}", path);
        loader = loader.with_file(path);
    }
    if let Some(constructor) = matches.get_one::<String>("constructor") {
        loader = loader.constructor(constructor)?;
    }
    if let Some(sequence) = matches.get_one::<String>("sequence") {
        loader = loader.sequence(sequence)?;
    }

    loader.build()
}

/// Read all of stdin. Invalid UTF-8 is replaced rather than rejected; the
/// replacement characters are non-ASCII and get stripped with the rest.
fn read_stdin() -> io::Result<String> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    log::debug!("read {} bytes from stdin", bytes.len());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A closed stdout surfaces as an error here instead of a panic.
fn write_literal<W: Write>(out: &mut W, literal: &str) -> io::Result<()> {
    writeln!(out, "{}", literal)?;
    out.flush()
}
