// Command-line argument parsing for the quarkit binary.

use clap::Parser;
use std::path::PathBuf;

/// Quarkit: render a QR module matrix as a styled SVG document.
#[derive(Parser, Debug)]
#[command(name = "quarkit")]
#[command(
    author,
    about,
    long_about = None,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")")
)]
pub struct Cli {
    /// Text matrix file (`#`/`X`/`1` dark, `.`/`0`/space light), or `-` for stdin
    pub matrix: String,

    /// Style config file (.toml or .json); defaults to the user config
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Override a config value, e.g. `--set module.style=vertigo`
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub overrides: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.trim().is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    Ok((key.trim().to_string(), value.to_string()))
}
