//! ICO composition.
//!
//! Bundles already-produced PNG variants into one multi-resolution ICO
//! container. Consumes raster bytes only; rasterization happens upstream.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};

/// Compose `sources` (PNG files on disk) into a single ICO at `output`.
///
/// Each source is loaded as an in-memory image and embedded as one frame,
/// in the given order. The container stores PNG-compressed entries.
pub fn compose_ico(output: &Path, sources: &[PathBuf]) -> Result<()> {
    let mut images = Vec::with_capacity(sources.len());
    for path in sources {
        let img = image::open(path)
            .with_context(|| format!("Failed to load `{}`", path.display()))?
            .to_rgba8();
        images.push(img);
    }

    let mut frames = Vec::with_capacity(images.len());
    for (img, path) in images.iter().zip(sources) {
        let frame = IcoFrame::as_png(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
            .with_context(|| format!("Failed to encode ICO frame from `{}`", path.display()))?;
        frames.push(frame);
    }

    let file = BufWriter::new(
        File::create(output)
            .with_context(|| format!("Failed to create `{}`", output.display()))?,
    );
    IcoEncoder::new(file)
        .encode_images(&frames)
        .with_context(|| format!("Failed to write `{}`", output.display()))
}
