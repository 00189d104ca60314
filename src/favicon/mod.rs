//! Favicon set generation.
//!
//! # Modules
//!
//! - [`sizes`]: the fixed size/filename table
//! - [`render`]: SVG parsing and rasterization (usvg + resvg)
//! - [`ico`]: multi-resolution ICO composition
//!
//! # Architecture
//!
//! ```text
//! public/favicon.svg
//!         │
//!         ▼
//!    ┌────────┐
//!    │ render │ ──► one PNG per SIZES entry (16..512)
//!    └───┬────┘
//!        │
//!        ▼
//!    ┌────────┐
//!    │  ico   │ ──► favicon.ico (16 + 32 + 48, reusing PNGs on disk)
//!    └────────┘
//! ```

pub mod ico;
pub mod render;
pub mod sizes;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::error::FaviconError;
use crate::{debug, log};
use render::SvgRenderer;
use sizes::{ICO_NAME, ICO_SIZES, SIZES, SOURCE_NAME, ico_png_name};

/// One-shot favicon generator bound to a public assets directory.
pub struct Generator {
    public_dir: PathBuf,
}

impl Generator {
    pub fn new(public_dir: PathBuf) -> Self {
        Self { public_dir }
    }

    /// Generate every PNG variant plus the ICO bundle.
    ///
    /// Outputs are overwritten in place; a rerun regenerates everything.
    /// A missing source SVG aborts before any write with
    /// [`FaviconError::MissingInput`].
    pub fn generate(&self) -> Result<()> {
        let source = self.public_dir.join(SOURCE_NAME);
        if !source.exists() {
            return Err(FaviconError::MissingInput(source).into());
        }

        let svg_data =
            fs::read(&source).with_context(|| format!("Failed to read `{}`", source.display()))?;
        let renderer = SvgRenderer::from_data(&svg_data)?;

        log!("render"; "generating favicons from {}", source.display());

        for entry in &SIZES {
            let output = self.public_dir.join(entry.filename);
            let png = renderer.rasterize(entry.size)?;
            fs::write(&output, &png)
                .with_context(|| format!("Failed to write `{}`", output.display()))?;
            log!("render"; "{} ({}x{})", entry.filename, entry.size, entry.size);
        }

        self.compose_ico(&renderer)?;

        log!("done"; "all favicons generated");
        Ok(())
    }

    /// Ensure a PNG exists on disk for each ICO size, then bundle them.
    ///
    /// 16 and 32 are reused from the main pass; 48 is never in the main
    /// size list and is rasterized here (and left on disk, like the rest).
    fn compose_ico(&self, renderer: &SvgRenderer) -> Result<()> {
        let mut pngs = Vec::with_capacity(ICO_SIZES.len());
        for &size in &ICO_SIZES {
            let path = self.public_dir.join(ico_png_name(size));
            if !path.exists() {
                let png = renderer.rasterize(size)?;
                fs::write(&path, &png)
                    .with_context(|| format!("Failed to write `{}`", path.display()))?;
                debug!("ico"; "rendered intermediate {}x{} variant", size, size);
            }
            pngs.push(path);
        }

        let output = self.public_dir.join(ICO_NAME);
        ico::compose_ico(&output, &pngs)?;
        log!("ico"; "{} (16, 32, 48)", ICO_NAME);
        Ok(())
    }
}
