//! Roomstyle - palette analysis and style rendering for interior photos.
//!
//! The upload layer hands a photo and a style name to [`services`]; the
//! pixel work itself lives in the `decor-fx` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
