//! Color types and conversion utilities
//!
//! Pixels live in `image::Rgba<u8>` buffers throughout the crate. This
//! module adds the two color notions the effects need on top of that:
//!
//! - [`HexColor`]: an opaque RGB triple with `#rrggbb` formatting and parsing
//! - [`luma`]: the ITU-R 601 grayscale value shared by every effect that
//!   needs a brightness reading (saturation, contrast, duotone)
//!
//! # Example
//!
//! ```
//! use decor_fx::HexColor;
//!
//! let cream: HexColor = "#e7d8c8".parse().unwrap();
//! assert_eq!(cream.to_hex(), "#e7d8c8");
//! ```

mod hex;

pub use self::hex::{luma, HexColor};
