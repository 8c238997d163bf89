//! Layer compositing.
//!
//! - [`overlay`]: Porter-Duff "over" of a uniform color layer
//! - [`composite_masked`]: mask-weighted blend of an image and a flat color
//! - [`vignette`] / [`vignette_mask`]: soft elliptical edge darkening

mod blend;
mod vignette;

pub use blend::{composite_masked, overlay};
pub use vignette::{vignette, vignette_mask, Vignette};
