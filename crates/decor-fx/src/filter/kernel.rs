//! Integer convolution kernels.

use image::RgbaImage;

/// A square convolution kernel with an integer divisor.
///
/// The result of each tap sum is `sum / scale`, rounded and clamped.
/// Only the color channels are filtered; alpha is copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: &'static [i32],
    scale: i32,
}

/// Heavy 5x5 smoothing kernel.
#[rustfmt::skip]
pub const SMOOTH_MORE: Kernel = Kernel {
    size: 5,
    weights: &[
        1, 1,  1, 1, 1,
        1, 5,  5, 5, 1,
        1, 5, 44, 5, 1,
        1, 5,  5, 5, 1,
        1, 1,  1, 1, 1,
    ],
    scale: 100,
};

/// 3x3 sharpening kernel.
#[rustfmt::skip]
pub const SHARPEN: Kernel = Kernel {
    size: 3,
    weights: &[
        -2, -2, -2,
        -2, 32, -2,
        -2, -2, -2,
    ],
    scale: 16,
};

impl Kernel {
    /// Convolve the color channels of `image` with this kernel.
    pub fn apply(&self, image: RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return image;
        }

        let half = (self.size / 2) as i64;
        let max_x = width as i64 - 1;
        let max_y = height as i64 - 1;
        let scale = self.scale as f32;

        let mut out = image.clone();
        for y in 0..height {
            for x in 0..width {
                let mut sums = [0i32; 3];
                for ky in 0..self.size {
                    let sy = (y as i64 + ky as i64 - half).clamp(0, max_y) as u32;
                    for kx in 0..self.size {
                        let sx = (x as i64 + kx as i64 - half).clamp(0, max_x) as u32;
                        let weight = self.weights[ky * self.size + kx];
                        let src = image.get_pixel(sx, sy).0;
                        for channel in 0..3 {
                            sums[channel] += weight * src[channel] as i32;
                        }
                    }
                }

                let dst = out.get_pixel_mut(x, y);
                for channel in 0..3 {
                    dst.0[channel] = (sums[channel] as f32 / scale).round().clamp(0.0, 255.0) as u8;
                }
            }
        }
        out
    }
}
