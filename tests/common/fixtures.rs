//! Synthetic room photos.

use image::{Rgba, RgbaImage};

/// Warm living-room tones, arranged in horizontal bands.
pub mod colors {
    pub const WALL: [u8; 4] = [226, 214, 196, 255];
    pub const SOFA: [u8; 4] = [92, 118, 140, 255];
    pub const FLOOR: [u8; 4] = [150, 104, 70, 255];
    pub const RUG: [u8; 4] = [180, 60, 50, 255];
}

/// A "room" in bands: wall 50%, sofa 25%, floor 15%, rug 10% of the rows.
pub fn banded_room(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for (_, y, pixel) in image.enumerate_pixels_mut() {
        let t = y as f32 / height as f32;
        let color = if t < 0.5 {
            colors::WALL
        } else if t < 0.75 {
            colors::SOFA
        } else if t < 0.9 {
            colors::FLOOR
        } else {
            colors::RUG
        };
        *pixel = Rgba(color);
    }
    image
}

/// Smooth two-axis gradient with a little texture.
pub fn gradient_room(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let fx = x as f32 / width.max(1) as f32;
        let fy = y as f32 / height.max(1) as f32;
        let texture = ((x / 7 + y / 5) % 3) as f32 * 6.0;
        *pixel = Rgba([
            (90.0 + 120.0 * fx + texture) as u8,
            (80.0 + 100.0 * fy + texture) as u8,
            (120.0 + 60.0 * (1.0 - fx) * fy) as u8,
            255,
        ]);
    }
    image
}

/// Uniform color photo.
pub fn flat_room(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}
