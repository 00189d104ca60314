//! Favgen - generates the favicon set for a site from a single SVG source.

mod cli;
mod error;
mod favicon;
mod logger;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use error::FaviconError;
use favicon::Generator;

/// Exit code for a missing rendering stack, distinguishable from
/// ordinary failures (1) and from a clean run (0).
const EXIT_MISSING_DEPENDENCY: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<FaviconError>() {
            // Soft failure: favicon regeneration is optional in a build
            // pipeline, so a missing source is reported but not fatal.
            Some(FaviconError::MissingInput(path)) => {
                log!("error"; "source SVG not found at {}", path.display());
                ExitCode::SUCCESS
            }
            Some(FaviconError::MissingDependency { reason, hint }) => {
                log!("error"; "rendering stack unavailable: {reason}");
                log!("error"; "{hint}");
                ExitCode::from(EXIT_MISSING_DEPENDENCY)
            }
            None => {
                log!("error"; "{err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

/// Preflight the renderer, then generate the full favicon set.
///
/// The preflight runs before any filesystem access so that a broken
/// rendering stack aborts without touching the output directory.
fn run() -> Result<()> {
    favicon::render::preflight()?;

    let generator = Generator::new(public_dir()?);
    generator.generate()
}

/// Resolve the public assets directory: `public/` under the current
/// working directory.
fn public_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join("public"))
}
