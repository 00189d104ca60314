//! Command-line interface definitions.
//!
//! Favgen is a one-shot tool: running it with no arguments performs the
//! entire generation. The size list and file layout are fixed, so the only
//! flags are presentational.

use clap::{ColorChoice, Parser};

/// Favgen favicon generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}
