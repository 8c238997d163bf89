//! decor-fx: pixel effects and palette reduction for interior photo styling
//!
//! This crate holds the codec-free half of the styling pipeline. Every
//! operation takes an owned [`image::RgbaImage`] and returns a new buffer,
//! so a pipeline reads as a chain of moves with no aliasing between stages.
//! Decoding, encoding and file access belong to the caller.
//!
//! # Quick Start
//!
//! ```
//! use decor_fx::{adjust, composite, Effect, HexColor, Vignette};
//! use image::{Rgba, RgbaImage};
//!
//! let photo = RgbaImage::from_pixel(64, 48, Rgba([180, 150, 120, 255]));
//!
//! let styled = adjust::saturation(photo, 1.05);
//! let styled = adjust::contrast(styled, 1.07);
//! let styled = composite::overlay(styled, Rgba([210, 150, 120, 80]));
//! let styled = Effect::GaussianBlur { radius: 0.8 }.apply(styled);
//! let styled = composite::vignette(styled, &Vignette::default());
//!
//! assert_eq!(styled.dimensions(), (64, 48));
//! ```
//!
//! # Palette Reduction
//!
//! [`palette::quantize`] runs median cut over the RGB histogram and counts
//! the pixels nearest to each representative:
//!
//! ```
//! use decor_fx::palette::quantize;
//! use image::{Rgba, RgbaImage};
//!
//! let mut image = RgbaImage::from_pixel(10, 10, Rgba([240, 240, 235, 255]));
//! image.put_pixel(0, 0, Rgba([30, 60, 90, 255]));
//!
//! let ranked = quantize(&image, 5).unwrap().ranked();
//! assert_eq!(ranked[0].color.to_hex(), "#f0f0eb");
//! assert_eq!(ranked[0].count, 99);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`color`] | `#rrggbb` colors and ITU-R 601 luma |
//! | [`palette`] | Median-cut palette reduction with pixel counts |
//! | [`adjust`] | Saturation, contrast, auto-contrast, duotone |
//! | [`filter`] | Convolution kernels and Gaussian blur |
//! | [`composite`] | Color overlays, masked blends, vignette |
//! | [`resize`] | Lanczos3 and bicubic resampling |
//!
//! Determinism: no operation uses randomness or global state, so the same
//! input always produces byte-identical output, and independent images can
//! be processed on separate threads freely.

pub mod adjust;
pub mod color;
pub mod composite;
pub mod effect;
pub mod filter;
pub mod palette;
pub mod resize;

pub use color::{luma, HexColor};
pub use composite::Vignette;
pub use effect::Effect;
pub use palette::{PaletteError, ParseColorError, Quantized};
