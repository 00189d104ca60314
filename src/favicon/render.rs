//! SVG rasterization.
//!
//! Parses the source SVG once with usvg and renders it at each requested
//! square size with resvg into a tiny-skia pixmap, encoded as PNG bytes.

use anyhow::{Context, Result};

use crate::error::FaviconError;

/// Minimal SVG pushed through the full parse/render/decode path by
/// [`preflight`].
const PROBE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"><rect width="1" height="1" fill="#000"/></svg>"##;

/// Verify the rendering stack end to end before any file I/O.
///
/// Renders a 1x1 probe SVG and decodes the resulting PNG. Any failure is
/// surfaced as [`FaviconError::MissingDependency`], so a broken stack
/// aborts the process without touching the output directory.
pub fn preflight() -> Result<()> {
    let probe = || -> Result<()> {
        let renderer = SvgRenderer::from_data(PROBE_SVG)?;
        let png = renderer.rasterize(1)?;
        image::load_from_memory_with_format(&png, image::ImageFormat::Png)
            .context("Failed to decode probe PNG")?;
        Ok(())
    };

    probe().map_err(|err| {
        anyhow::Error::from(FaviconError::MissingDependency {
            reason: format!("{err:#}"),
            hint: "reinstall favgen; the built-in usvg/resvg/image stack failed its probe render"
                .to_string(),
        })
    })
}

/// Renderer holding the parsed SVG tree, reused across all sizes.
pub struct SvgRenderer {
    tree: usvg::Tree,
}

impl SvgRenderer {
    /// Parse SVG bytes into a render tree.
    pub fn from_data(svg_data: &[u8]) -> Result<Self> {
        let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
            .context("Failed to parse SVG")?;
        Ok(Self { tree })
    }

    /// Rasterize at `size` x `size` pixels and encode as PNG.
    ///
    /// The x and y axes are scaled independently, so a non-square viewbox
    /// is stretched to fill the square output (matching how browsers fit
    /// `favicon.svg` into a square slot).
    pub fn rasterize(&self, size: u32) -> Result<Vec<u8>> {
        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .with_context(|| format!("Failed to allocate {size}x{size} pixmap"))?;

        // usvg guarantees a non-zero tree size after parsing
        let tree_size = self.tree.size();
        let sx = size as f32 / tree_size.width();
        let sy = size as f32 / tree_size.height();

        resvg::render(
            &self.tree,
            tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .with_context(|| format!("Failed to encode {size}x{size} PNG"))
    }
}
