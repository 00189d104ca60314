//! The fixed favicon size table.
//!
//! Browsers and OS shells each probe for their own well-known filenames, so
//! both the dimensions and the names are part of the contract and are not
//! configurable.

/// One target resolution and its output filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEntry {
    /// Square pixel dimension (width = height).
    pub size: u32,
    /// Output filename within the public directory.
    pub filename: &'static str,
}

/// PNG variants emitted on every run, ascending by size.
///
/// Ascending order is not semantically required (entries are independent)
/// but keeps the progress log reproducible.
pub const SIZES: [SizeEntry; 5] = [
    SizeEntry { size: 16, filename: "favicon-16x16.png" },
    SizeEntry { size: 32, filename: "favicon-32x32.png" },
    SizeEntry { size: 180, filename: "apple-touch-icon.png" },
    SizeEntry { size: 192, filename: "android-chrome-192x192.png" },
    SizeEntry { size: 512, filename: "android-chrome-512x512.png" },
];

/// Raster sizes embedded in the ICO container.
///
/// 16 and 32 reuse PNGs from [`SIZES`]; 48 is rasterized on demand.
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Source SVG filename within the public directory.
pub const SOURCE_NAME: &str = "favicon.svg";

/// ICO output filename within the public directory.
pub const ICO_NAME: &str = "favicon.ico";

/// Filename of the intermediate PNG for an ICO size.
///
/// Matches the [`SIZES`] naming for 16 and 32, so already-generated
/// variants are picked up instead of re-rendered.
pub fn ico_png_name(size: u32) -> String {
    format!("favicon-{size}x{size}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_ascending_and_positive() {
        for pair in SIZES.windows(2) {
            assert!(pair[0].size < pair[1].size);
        }
        assert!(SIZES.iter().all(|e| e.size > 0));
    }

    #[test]
    fn filenames_are_unique() {
        for (i, a) in SIZES.iter().enumerate() {
            for b in &SIZES[i + 1..] {
                assert_ne!(a.filename, b.filename);
            }
        }
    }

    #[test]
    fn ico_sizes_reuse_main_variant_names() {
        assert_eq!(ico_png_name(16), "favicon-16x16.png");
        assert_eq!(ico_png_name(32), "favicon-32x32.png");
        assert_eq!(ico_png_name(48), "favicon-48x48.png");
    }
}
