//! Assertion helpers for tests.

use std::path::Path;

use image::RgbImage;
use pretty_assertions::assert_eq;

/// Assert every entry is a lowercase `#rrggbb` string and the list is bounded.
pub fn assert_hex_palette(colors: &[String], max_colors: usize) {
    assert!(
        colors.len() <= max_colors,
        "Expected at most {max_colors} colors, got {colors:?}"
    );
    for color in colors {
        assert_eq!(color.len(), 7, "Bad palette entry {color:?}");
        assert!(color.starts_with('#'), "Bad palette entry {color:?}");
        assert!(
            color[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "Bad palette entry {color:?}"
        );
    }
}

/// Assert the file is a JPEG and return it decoded as RGB.
pub fn assert_jpeg(path: &Path) -> RgbImage {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Expected artifact at {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
        "Expected JPEG, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(&bytes)
        .expect("Artifact should decode")
        .to_rgb8()
}

/// Sum of channel distances from `pixel` to `target`.
pub fn distance_to(pixel: [u8; 3], target: [u8; 3]) -> u32 {
    pixel
        .iter()
        .zip(target.iter())
        .map(|(&a, &b)| a.abs_diff(b) as u32)
        .sum()
}

/// Assert all four corners sit closer to the vignette background than the center.
pub fn assert_vignetted(image: &RgbImage) {
    const BACKGROUND: [u8; 3] = [8, 8, 10];
    let (w, h) = image.dimensions();
    let center = distance_to(image.get_pixel(w / 2, h / 2).0, BACKGROUND);
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        let corner = distance_to(image.get_pixel(x, y).0, BACKGROUND);
        assert!(
            corner < center,
            "Corner ({x},{y}) distance {corner} should be below center distance {center}"
        );
    }
}
