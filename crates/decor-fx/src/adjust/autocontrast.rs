//! Automatic contrast normalization.

use image::RgbaImage;

/// Stretch each RGB channel to the full 0..=255 range.
///
/// For every channel, `cutoff_percent` of the pixels are discarded from
/// each end of the histogram before the darkest and lightest remaining
/// levels are located. Those levels are mapped linearly onto 0 and 255;
/// values outside them clip. A channel whose remaining levels collapse to a
/// single value is left unchanged.
///
/// # Example
/// ```
/// use decor_fx::adjust::autocontrast;
/// use image::{Rgba, RgbaImage};
///
/// let mut image = RgbaImage::new(2, 1);
/// image.put_pixel(0, 0, Rgba([50, 50, 50, 255]));
/// image.put_pixel(1, 0, Rgba([150, 150, 150, 255]));
///
/// let out = autocontrast(image, 0.0);
/// assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
/// assert_eq!(out.get_pixel(1, 0).0, [255, 255, 255, 255]);
/// ```
pub fn autocontrast(mut image: RgbaImage, cutoff_percent: f32) -> RgbaImage {
    let mut luts = [[0u8; 256]; 3];
    for (channel, lut) in luts.iter_mut().enumerate() {
        let mut histogram = [0u64; 256];
        for pixel in image.pixels() {
            histogram[pixel.0[channel] as usize] += 1;
        }
        *lut = stretch_lut(&histogram, cutoff_percent);
    }

    for pixel in image.pixels_mut() {
        for (channel, lut) in luts.iter().enumerate() {
            pixel.0[channel] = lut[pixel.0[channel] as usize];
        }
    }
    image
}

/// Build the level mapping for one channel histogram.
fn stretch_lut(histogram: &[u64; 256], cutoff_percent: f32) -> [u8; 256] {
    let mut identity = [0u8; 256];
    for (i, v) in identity.iter_mut().enumerate() {
        *v = i as u8;
    }

    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return identity;
    }

    let cut = (total as f64 * cutoff_percent.clamp(0.0, 50.0) as f64 / 100.0).floor() as u64;
    let mut trimmed = *histogram;

    // Remove `cut` pixels from the dark end, then from the light end
    let mut remaining = cut;
    for bin in trimmed.iter_mut() {
        let take = remaining.min(*bin);
        *bin -= take;
        remaining -= take;
        if remaining == 0 {
            break;
        }
    }
    let mut remaining = cut;
    for bin in trimmed.iter_mut().rev() {
        let take = remaining.min(*bin);
        *bin -= take;
        remaining -= take;
        if remaining == 0 {
            break;
        }
    }

    let lo = trimmed.iter().position(|&n| n > 0);
    let hi = trimmed.iter().rposition(|&n| n > 0);
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => (lo as f32, hi as f32),
        _ => return identity,
    };

    let scale = 255.0 / (hi - lo);
    let mut lut = [0u8; 256];
    for (i, v) in lut.iter_mut().enumerate() {
        *v = ((i as f32 - lo) * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_flat_image_unchanged() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([120, 30, 200, 255]));
        assert_eq!(autocontrast(image.clone(), 0.5), image);
    }

    #[test]
    fn test_channels_stretch_independently() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([100, 10, 40, 255]));
        image.put_pixel(1, 0, Rgba([200, 20, 40, 77]));

        let out = autocontrast(image, 0.0);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 40, 255]);
        assert_eq!(out.get_pixel(1, 0).0, [255, 255, 40, 77]);
    }

    #[test]
    fn test_cutoff_ignores_outliers() {
        // 98 mid-gray pixels framed by one black and one white outlier
        let mut image = RgbaImage::from_pixel(100, 1, Rgba([100, 100, 100, 255]));
        image.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        image.put_pixel(99, 0, Rgba([255, 255, 255, 255]));
        for x in 50..99 {
            image.put_pixel(x, 0, Rgba([150, 150, 150, 255]));
        }

        let out = autocontrast(image, 1.0);
        assert_eq!(out.get_pixel(1, 0).0[0], 0);
        assert_eq!(out.get_pixel(60, 0).0[0], 255);
    }

    #[test]
    fn test_lut_is_monotonic() {
        let mut histogram = [0u64; 256];
        histogram[30] = 5;
        histogram[90] = 3;
        histogram[180] = 7;
        let lut = stretch_lut(&histogram, 0.0);
        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lut[30], 0);
        assert_eq!(lut[180], 255);
    }
}
