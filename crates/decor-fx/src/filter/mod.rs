//! Spatial filters.
//!
//! - [`Kernel`]: small fixed integer convolution kernels ([`SMOOTH_MORE`], [`SHARPEN`])
//! - [`gaussian_blur`] / [`blur_plane`]: Gaussian blur approximated by three
//!   extended box passes, so cost does not grow with the radius
//!
//! All filters sample outside the frame by clamping to the nearest edge pixel.

mod blur;
mod kernel;

pub use blur::{blur_plane, gaussian_blur};
pub use kernel::{Kernel, SHARPEN, SMOOTH_MORE};
