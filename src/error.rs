//! Favicon generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures with a dedicated exit path.
///
/// Everything else propagates as a plain [`anyhow::Error`] and maps to the
/// generic failure exit code.
#[derive(Debug, Error)]
pub enum FaviconError {
    /// The rendering stack cannot produce output. Checked before any file
    /// I/O; fatal with a distinguished exit code.
    #[error("missing rendering dependency: {reason}")]
    MissingDependency { reason: String, hint: String },

    /// The source SVG does not exist. Reported, not fatal: the run produces
    /// no output but the process still exits zero.
    #[error("source SVG not found at `{0}`")]
    MissingInput(PathBuf),
}
