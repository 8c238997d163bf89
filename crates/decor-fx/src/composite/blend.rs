//! Alpha and mask blending.

use image::{GrayImage, Rgba, RgbaImage};

/// Composite a uniform `color` layer over `image` (Porter-Duff "over").
///
/// The layer's alpha sets its coverage. Output alpha is the union of both
/// coverages, so an opaque image stays opaque.
///
/// # Example
/// ```
/// use decor_fx::composite::overlay;
/// use image::{Rgba, RgbaImage};
///
/// let image = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
/// let out = overlay(image, Rgba([255, 255, 255, 51]));
/// assert_eq!(out.get_pixel(0, 0).0, [51, 51, 51, 255]);
/// ```
pub fn overlay(mut image: RgbaImage, color: Rgba<u8>) -> RgbaImage {
    let src_alpha = color.0[3] as f32 / 255.0;
    for pixel in image.pixels_mut() {
        let dst_alpha = pixel.0[3] as f32 / 255.0;
        let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
        if out_alpha <= 0.0 {
            pixel.0 = [0, 0, 0, 0];
            continue;
        }
        for channel in 0..3 {
            let src = color.0[channel] as f32 * src_alpha;
            let dst = pixel.0[channel] as f32 * dst_alpha * (1.0 - src_alpha);
            pixel.0[channel] = ((src + dst) / out_alpha).round().clamp(0.0, 255.0) as u8;
        }
        pixel.0[3] = (out_alpha * 255.0).round() as u8;
    }
    image
}

/// Blend `foreground` with a flat `background` color through `mask`.
///
/// A mask value of 255 keeps the foreground pixel, 0 yields the
/// background, values in between interpolate all four channels.
///
/// # Panics
///
/// Panics if `mask` and `foreground` differ in size.
pub fn composite_masked(mut foreground: RgbaImage, background: Rgba<u8>, mask: &GrayImage) -> RgbaImage {
    assert_eq!(
        foreground.dimensions(),
        mask.dimensions(),
        "composite mask must match the image size"
    );

    for (pixel, weight) in foreground.pixels_mut().zip(mask.pixels()) {
        let m = weight.0[0] as f32 / 255.0;
        for channel in 0..4 {
            let fg = pixel.0[channel] as f32;
            let bg = background.0[channel] as f32;
            pixel.0[channel] = (bg + (fg - bg) * m).round().clamp(0.0, 255.0) as u8;
        }
    }
    foreground
}
