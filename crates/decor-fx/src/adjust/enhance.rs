//! Saturation and contrast enhancement.
//!
//! Both adjustments interpolate between the image and a "degenerate"
//! reference: the pixel's own gray level for saturation, the mean gray
//! level of the whole image for contrast. A factor of 1.0 is the identity,
//! 0.0 yields the reference, and values above 1.0 push away from it.

use image::RgbaImage;

use crate::color::luma;

/// `reference + factor * (value - reference)`, rounded and clamped to 0..=255.
#[inline]
fn extrapolate(reference: f32, value: u8, factor: f32) -> u8 {
    (reference + factor * (value as f32 - reference))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Scale color saturation by `factor`.
///
/// # Example
/// ```
/// use decor_fx::adjust::saturation;
/// use image::{Rgba, RgbaImage};
///
/// let gray = RgbaImage::from_pixel(1, 1, Rgba([90, 90, 90, 255]));
/// // Grays carry no saturation, so they are unaffected
/// assert_eq!(saturation(gray, 2.0).get_pixel(0, 0).0, [90, 90, 90, 255]);
/// ```
pub fn saturation(mut image: RgbaImage, factor: f32) -> RgbaImage {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let gray = luma(r, g, b) as f32;
        pixel.0 = [
            extrapolate(gray, r, factor),
            extrapolate(gray, g, factor),
            extrapolate(gray, b, factor),
            a,
        ];
    }
    image
}

/// Scale contrast by `factor` around the image's mean gray level.
pub fn contrast(mut image: RgbaImage, factor: f32) -> RgbaImage {
    let pixel_count = image.width() as u64 * image.height() as u64;
    if pixel_count == 0 {
        return image;
    }

    let luma_sum: u64 = image
        .pixels()
        .map(|p| luma(p.0[0], p.0[1], p.0[2]) as u64)
        .sum();
    // The reference is a whole gray level
    let mean = (luma_sum as f64 / pixel_count as f64 + 0.5).floor() as f32;

    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        pixel.0 = [
            extrapolate(mean, r, factor),
            extrapolate(mean, g, factor),
            extrapolate(mean, b, factor),
            a,
        ];
    }
    image
}
