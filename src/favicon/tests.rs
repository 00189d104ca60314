use std::fs;
use std::path::Path;

use image::GenericImageView;
use tempfile::TempDir;

use super::Generator;
use super::sizes::{ICO_NAME, SIZES, SOURCE_NAME};
use crate::error::FaviconError;

const TEST_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64" width="64" height="64">
  <rect width="64" height="64" fill="#1e66f5"/>
  <circle cx="32" cy="32" r="20" fill="#ffffff"/>
</svg>"##;

fn make_public_dir(svg: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    if let Some(svg) = svg {
        fs::write(temp.path().join(SOURCE_NAME), svg).unwrap();
    }
    temp
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

/// Decode the ICONDIR header: entry count plus per-entry dimensions
/// (a stored 0 means 256).
fn ico_entry_sizes(data: &[u8]) -> Vec<(u32, u32)> {
    let count = u16::from_le_bytes([data[4], data[5]]) as usize;
    (0..count)
        .map(|i| {
            let off = 6 + i * 16;
            let dim = |b: u8| if b == 0 { 256 } else { u32::from(b) };
            (dim(data[off]), dim(data[off + 1]))
        })
        .collect()
}

#[test]
fn full_run_produces_all_variants() {
    let temp = make_public_dir(Some(TEST_SVG));
    Generator::new(temp.path().to_path_buf()).generate().unwrap();

    for entry in &SIZES {
        let path = temp.path().join(entry.filename);
        assert!(path.exists(), "missing {}", entry.filename);
        assert_eq!(png_dimensions(&path), (entry.size, entry.size));
    }

    // The 48px intermediate for the ICO bundle also lands on disk
    let png48 = temp.path().join("favicon-48x48.png");
    assert_eq!(png_dimensions(&png48), (48, 48));

    assert!(temp.path().join(ICO_NAME).exists());
}

#[test]
fn ico_embeds_exactly_three_sizes() {
    let temp = make_public_dir(Some(TEST_SVG));
    Generator::new(temp.path().to_path_buf()).generate().unwrap();

    let data = fs::read(temp.path().join(ICO_NAME)).unwrap();
    let mut entries = ico_entry_sizes(&data);
    entries.sort_unstable();
    assert_eq!(entries, vec![(16, 16), (32, 32), (48, 48)]);
}

#[test]
fn rerun_is_idempotent_and_overwrites() {
    let temp = make_public_dir(Some(TEST_SVG));
    let generator = Generator::new(temp.path().to_path_buf());

    generator.generate().unwrap();
    let first: Vec<Vec<u8>> = SIZES
        .iter()
        .map(|e| fs::read(temp.path().join(e.filename)).unwrap())
        .collect();

    // Second run must succeed despite existing outputs and reproduce them
    generator.generate().unwrap();
    for (entry, bytes) in SIZES.iter().zip(&first) {
        let again = fs::read(temp.path().join(entry.filename)).unwrap();
        assert_eq!(&again, bytes, "{} changed across reruns", entry.filename);
    }
}

#[test]
fn existing_ico_intermediate_is_reused() {
    let temp = make_public_dir(Some(TEST_SVG));
    let generator = Generator::new(temp.path().to_path_buf());
    generator.generate().unwrap();

    // Replace the 48px intermediate with a decodable stand-in; a rerun
    // must pick it up as-is instead of re-rendering
    let png48 = temp.path().join("favicon-48x48.png");
    let stand_in = {
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::new_rgba8(48, 48)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    };
    fs::write(&png48, &stand_in).unwrap();

    generator.generate().unwrap();
    assert_eq!(fs::read(&png48).unwrap(), stand_in);
}

#[test]
fn missing_source_writes_nothing() {
    let temp = make_public_dir(None);
    let err = Generator::new(temp.path().to_path_buf())
        .generate()
        .unwrap_err();

    match err.downcast_ref::<FaviconError>() {
        Some(FaviconError::MissingInput(path)) => {
            assert!(path.ends_with(SOURCE_NAME));
        }
        other => panic!("expected MissingInput, got {other:?}"),
    }

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn unparseable_source_fails_before_any_write() {
    let temp = make_public_dir(Some("<svg"));
    assert!(
        Generator::new(temp.path().to_path_buf())
            .generate()
            .is_err()
    );
    // Only the source file itself is present
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
}
