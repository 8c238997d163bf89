//! Image resampling.
//!
//! Thin wrappers over `image::imageops::resize` that keep the crate's
//! owned-buffer convention: a resize to the current dimensions hands the
//! input back without touching it.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resize with a Lanczos3 filter (high quality, for photographic output).
pub fn resize_lanczos(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    resize_with(image, width, height, FilterType::Lanczos3)
}

/// Resize with a Catmull-Rom bicubic filter (for analysis thumbnails).
pub fn resize_bicubic(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    resize_with(image, width, height, FilterType::CatmullRom)
}

/// Scale both dimensions by `factor` (truncated, at least 1 pixel) with Lanczos3.
///
/// # Example
/// ```
/// use decor_fx::resize::scale_lanczos;
/// use image::RgbaImage;
///
/// let out = scale_lanczos(RgbaImage::new(2000, 1000), 0.6);
/// assert_eq!(out.dimensions(), (1200, 600));
/// ```
pub fn scale_lanczos(image: RgbaImage, factor: f64) -> RgbaImage {
    let (width, height) = image.dimensions();
    let scaled = |v: u32| ((v as f64 * factor) as u32).max(1);
    resize_lanczos(image, scaled(width), scaled(height))
}

fn resize_with(image: RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image;
    }
    imageops::resize(&image, width, height, filter)
}
