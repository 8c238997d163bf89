//! Soft elliptical vignette.
//!
//! The mask is an ellipse that overshoots the frame by `extent` on every
//! side, blurred with a radius tied to the frame's shorter side. Because
//! the ellipse is larger than the frame, it only dips below full weight
//! after blurring: the blur pulls in the zero region outside the ellipse,
//! which lies beyond the frame near the corners and edges. The mask is
//! therefore rendered on a padded canvas that holds the whole blur
//! support, then cropped back to the frame.

use image::{GrayImage, Luma, Rgba, RgbaImage};

use super::blend::composite_masked;
use crate::filter::blur_plane;

/// Vignette parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vignette {
    /// Color the edges fade toward
    pub background: Rgba<u8>,
    /// How far the ellipse's bounding box reaches past each frame edge,
    /// as a fraction of that dimension
    pub extent: f32,
    /// Blur radius is `min(width, height) / blur_divisor`
    pub blur_divisor: u32,
}

impl Default for Vignette {
    fn default() -> Self {
        Self {
            background: Rgba([8, 8, 10, 255]),
            extent: 0.3,
            blur_divisor: 4,
        }
    }
}

/// Render the blurred elliptical weight mask for a `width` x `height` frame.
///
/// 255 keeps the image pixel, lower values fade toward the background.
pub fn vignette_mask(width: u32, height: u32, params: &Vignette) -> GrayImage {
    if width == 0 || height == 0 {
        return GrayImage::new(width, height);
    }

    // Bounding box in frame coordinates, truncated toward zero
    let extent = params.extent as f64;
    let x0 = -((width as f64 * extent) as i64) as f32;
    let y0 = -((height as f64 * extent) as i64) as f32;
    let x1 = (width as f64 * (1.0 + extent)) as i64 as f32;
    let y1 = (height as f64 * (1.0 + extent)) as i64 as f32;
    let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    let (ax, ay) = ((x1 - x0) / 2.0, (y1 - y0) / 2.0);

    let radius = (width.min(height) / params.blur_divisor.max(1)) as f32;
    // Three box passes reach at most about 3 * radius + 3 pixels
    let pad = (3.0 * radius).ceil() as usize + 4;

    let canvas_w = width as usize + 2 * pad;
    let canvas_h = height as usize + 2 * pad;
    let mut plane = vec![0.0f32; canvas_w * canvas_h];
    for cy_px in 0..canvas_h {
        let fy = cy_px as f32 - pad as f32 + 0.5;
        let dy = (fy - cy) / ay;
        let row = &mut plane[cy_px * canvas_w..(cy_px + 1) * canvas_w];
        for (cx_px, value) in row.iter_mut().enumerate() {
            let fx = cx_px as f32 - pad as f32 + 0.5;
            let dx = (fx - cx) / ax;
            if dx * dx + dy * dy <= 1.0 {
                *value = 255.0;
            }
        }
    }

    let blurred = blur_plane(&plane, canvas_w, canvas_h, radius);

    let mut mask = GrayImage::new(width, height);
    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let v = blurred[(y as usize + pad) * canvas_w + x as usize + pad];
        *pixel = Luma([v.round().clamp(0.0, 255.0) as u8]);
    }
    mask
}

/// Darken the edges of `image` toward `params.background`.
///
/// The inverse of [`vignette_mask`] is the darkening weight: pixels where
/// the mask is full keep their color, pixels where it falls off take on
/// the background.
pub fn vignette(image: RgbaImage, params: &Vignette) -> RgbaImage {
    let mask = vignette_mask(image.width(), image.height(), params);
    composite_masked(image, params.background, &mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance(a: [u8; 4], b: [u8; 4]) -> u32 {
        a.iter().zip(b.iter()).take(3).map(|(&x, &y)| x.abs_diff(y) as u32).sum()
    }

    #[test]
    fn test_mask_full_at_center_lower_at_corners() {
        for (w, h) in [(100, 100), (160, 90), (60, 140)] {
            let mask = vignette_mask(w, h, &Vignette::default());
            let center = mask.get_pixel(w / 2, h / 2).0[0];
            assert!(center >= 250, "{w}x{h}: center {center}");
            for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
                let corner = mask.get_pixel(x, y).0[0];
                assert!(corner + 20 < center, "{w}x{h}: corner {corner} vs center {center}");
            }
        }
    }

    #[test]
    fn test_mask_is_symmetric() {
        let mask = vignette_mask(80, 50, &Vignette::default());
        for y in 0..50 {
            for x in 0..80 {
                let a = mask.get_pixel(x, y).0[0];
                let b = mask.get_pixel(79 - x, 49 - y).0[0];
                assert!(a.abs_diff(b) <= 1, "({x},{y}): {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_vignette_pulls_corners_to_background() {
        let params = Vignette::default();
        let image = RgbaImage::from_pixel(120, 80, Rgba([230, 220, 200, 255]));
        let out = vignette(image, &params);

        let center = out.get_pixel(60, 40).0;
        let corner = out.get_pixel(0, 0).0;
        assert!(distance(corner, params.background.0) < distance(center, params.background.0));
        assert_eq!(corner[3], 255);
    }

    #[test]
    fn test_tiny_frame() {
        let mask = vignette_mask(1, 1, &Vignette::default());
        assert_eq!(mask.dimensions(), (1, 1));
    }

    #[test]
    fn test_short_side_below_divisor_leaves_image_unchanged() {
        // min(w, h) / 4 == 0: no blur, and the oversized ellipse covers every pixel
        for (w, h) in [(2, 2), (3, 3), (100, 3), (3, 100)] {
            let mask = vignette_mask(w, h, &Vignette::default());
            assert!(mask.pixels().all(|p| p.0[0] == 255), "{w}x{h}");

            let image = RgbaImage::from_pixel(w, h, Rgba([200, 150, 100, 255]));
            assert_eq!(vignette(image.clone(), &Vignette::default()), image, "{w}x{h}");
        }
    }
}
