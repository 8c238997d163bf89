//! Duotone toning.

use image::RgbaImage;

use crate::color::{luma, HexColor};

/// Convert to grayscale and remap gray levels onto a two-color ramp.
///
/// Black maps to `dark`, white maps to `light`, intermediate levels
/// interpolate linearly per channel.
pub fn duotone(mut image: RgbaImage, dark: HexColor, light: HexColor) -> RgbaImage {
    let lut = ramp(dark, light);
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let [tr, tg, tb] = lut[luma(r, g, b) as usize];
        pixel.0 = [tr, tg, tb, a];
    }
    image
}

fn ramp(dark: HexColor, light: HexColor) -> [[u8; 3]; 256] {
    let dark = dark.to_bytes();
    let light = light.to_bytes();
    let mut lut = [[0u8; 3]; 256];
    for (level, entry) in lut.iter_mut().enumerate() {
        let t = level as f32 / 255.0;
        for channel in 0..3 {
            let from = dark[channel] as f32;
            let to = light[channel] as f32;
            entry[channel] = (from + (to - from) * t).round() as u8;
        }
    }
    lut
}
