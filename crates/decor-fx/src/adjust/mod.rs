//! Tone and color adjustments.
//!
//! Every function here takes an owned [`image::RgbaImage`] and returns the
//! adjusted buffer. Alpha passes through untouched.
//!
//! - [`saturation`] / [`contrast`]: blend away from a gray reference
//! - [`autocontrast`]: per-channel histogram stretch with tail clipping
//! - [`duotone`]: grayscale remapped onto a dark→light color ramp

mod autocontrast;
mod enhance;
mod tone;

pub use autocontrast::autocontrast;
pub use enhance::{contrast, saturation};
pub use tone::duotone;
