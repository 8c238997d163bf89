//! Adaptive palette reduction.
//!
//! [`quantize`] reduces an image to at most N representative colors with
//! median cut and reports how many pixels land on each one. The result is
//! what a "dominant colors" readout is built from.

mod error;
mod median_cut;

pub use error::{PaletteError, ParseColorError};
pub use median_cut::{quantize, Bucket, Quantized, MAX_PALETTE_COLORS};
