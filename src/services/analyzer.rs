use std::path::Path;

use decor_fx::palette::quantize;
use decor_fx::resize::resize_bicubic;
use image::DynamicImage;

use crate::error::StyleError;
use crate::imaging;
use crate::models::{Analysis, SceneTag};

/// Edge length of the square thumbnail palettes are computed on.
pub const ANALYSIS_SIZE: u32 = 200;

/// Palette size when the caller does not pick one.
pub const DEFAULT_MAX_COLORS: usize = 5;

/// Extracts dominant colors and a coarse scene tag from a photo.
///
/// The photo is squashed to a fixed square thumbnail first, so cost is
/// bounded and palettes do not depend on the source resolution.
#[derive(Debug, Clone)]
pub struct PaletteAnalyzer {
    thumbnail_size: u32,
}

impl Default for PaletteAnalyzer {
    fn default() -> Self {
        Self {
            thumbnail_size: ANALYSIS_SIZE,
        }
    }
}

impl PaletteAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze a decoded image.
    ///
    /// Returns at most `max_colors` colors, most frequent first; equally
    /// frequent colors keep palette order.
    pub fn analyze(&self, image: &DynamicImage, max_colors: usize) -> Result<Analysis, StyleError> {
        if max_colors == 0 {
            return Err(StyleError::InvalidArgument(
                "max_colors must be a positive integer".to_string(),
            ));
        }

        let thumbnail = resize_bicubic(image.to_rgba8(), self.thumbnail_size, self.thumbnail_size);
        let palette = quantize(&thumbnail, max_colors)?;

        let colors: Vec<String> = palette
            .ranked()
            .into_iter()
            .take(max_colors)
            .map(|bucket| bucket.color.to_hex())
            .collect();

        // Placeholder heuristic: aspect ratio of the original, not a detector
        let scene = SceneTag::from_dimensions(image.width(), image.height());

        tracing::info!(
            width = image.width(),
            height = image.height(),
            colors = colors.len(),
            scene = ?scene,
            "Analyzed image"
        );

        Ok(Analysis::new(colors, scene))
    }

    /// Decode and analyze an image file.
    pub fn analyze_path(&self, path: &Path, max_colors: usize) -> Result<Analysis, StyleError> {
        let image = imaging::decode_path(path)?;
        self.analyze(&image, max_colors)
    }
}
