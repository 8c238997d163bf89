//! Post-effects a style can request.

use image::RgbaImage;

use crate::adjust::{autocontrast, duotone};
use crate::color::HexColor;
use crate::filter::{gaussian_blur, SHARPEN, SMOOTH_MORE};

/// A single post-processing step.
///
/// Styles carry an ordered list of these; each one consumes the buffer
/// and returns the processed result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Heavy 5x5 smoothing
    SmoothMore,
    /// Per-channel histogram stretch, clipping `cutoff` percent per tail
    AutoContrast { cutoff: f32 },
    /// 3x3 sharpening
    Sharpen,
    /// Gaussian blur with standard deviation `radius`
    GaussianBlur { radius: f32 },
    /// Grayscale remapped onto a `dark` → `light` ramp
    Duotone { dark: HexColor, light: HexColor },
}

impl Effect {
    /// Apply the effect.
    pub fn apply(self, image: RgbaImage) -> RgbaImage {
        match self {
            Effect::SmoothMore => SMOOTH_MORE.apply(image),
            Effect::AutoContrast { cutoff } => autocontrast(image, cutoff),
            Effect::Sharpen => SHARPEN.apply(image),
            Effect::GaussianBlur { radius } => gaussian_blur(image, radius),
            Effect::Duotone { dark, light } => duotone(image, dark, light),
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::SmoothMore => "smooth-more",
            Effect::AutoContrast { .. } => "autocontrast",
            Effect::Sharpen => "sharpen",
            Effect::GaussianBlur { .. } => "gaussian-blur",
            Effect::Duotone { .. } => "duotone",
        }
    }
}
