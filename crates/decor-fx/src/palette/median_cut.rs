//! Median-cut palette reduction with pixel counts.
//!
//! The RGB histogram of the image is split into boxes until the requested
//! number of colors exists. Box order is stable: a split box keeps its slot
//! and the new half is appended, so bucket indices follow definition order
//! and ranking ties can be resolved by index.

use std::collections::BTreeMap;

use image::RgbaImage;

use super::error::PaletteError;
use crate::color::HexColor;

/// Largest palette an indexed image can carry.
pub const MAX_PALETTE_COLORS: usize = 256;

/// One palette entry and the number of pixels mapped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Position of the entry in definition order
    pub index: usize,
    /// Representative color of the entry
    pub color: HexColor,
    /// Number of pixels whose nearest entry is this one
    pub count: u64,
}

/// Result of [`quantize`]: the palette in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantized {
    buckets: Vec<Bucket>,
}

impl Quantized {
    /// All palette entries in definition order, including entries that
    /// ended up with no pixels.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Entries that received at least one pixel, most frequent first.
    ///
    /// Equal counts keep definition order (lower index first).
    pub fn ranked(&self) -> Vec<Bucket> {
        let mut ranked: Vec<Bucket> = self.buckets.iter().copied().filter(|b| b.count > 0).collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.index.cmp(&b.index)));
        ranked
    }
}

/// A box of distinct colors with their pixel counts.
#[derive(Debug, Clone)]
struct ColorBox {
    entries: Vec<([u8; 3], u64)>,
    pixels: u64,
}

impl ColorBox {
    fn new(entries: Vec<([u8; 3], u64)>) -> Self {
        let pixels = entries.iter().map(|(_, n)| n).sum();
        Self { entries, pixels }
    }

    fn is_splittable(&self) -> bool {
        self.entries.len() > 1
    }

    /// Channel with the largest value range; ties go to the lower channel.
    fn widest_channel(&self) -> usize {
        let mut best = 0;
        let mut best_range = 0u8;
        for channel in 0..3 {
            let (min, max) = self
                .entries
                .iter()
                .fold((u8::MAX, u8::MIN), |(lo, hi), (c, _)| {
                    (lo.min(c[channel]), hi.max(c[channel]))
                });
            let range = max - min;
            if range > best_range {
                best = channel;
                best_range = range;
            }
        }
        best
    }

    /// Split at the pixel-weighted median of the widest channel.
    fn split(mut self) -> (ColorBox, ColorBox) {
        let channel = self.widest_channel();
        self.entries
            .sort_by(|(a, _), (b, _)| a[channel].cmp(&b[channel]).then(a.cmp(b)));

        let half = self.pixels.div_ceil(2);
        let mut acc = 0u64;
        let mut cut = 1;
        for (i, (_, n)) in self.entries.iter().enumerate() {
            acc += n;
            if acc >= half {
                cut = i + 1;
                break;
            }
        }
        // Both halves must keep at least one color
        let cut = cut.clamp(1, self.entries.len() - 1);

        let upper = self.entries.split_off(cut);
        (ColorBox::new(self.entries), ColorBox::new(upper))
    }

    /// Pixel-weighted mean color, rounded per channel.
    fn mean(&self) -> HexColor {
        let mut sums = [0u64; 3];
        for (color, n) in &self.entries {
            for channel in 0..3 {
                sums[channel] += color[channel] as u64 * n;
            }
        }
        let total = self.pixels.max(1);
        let avg = |sum: u64| ((sum + total / 2) / total) as u8;
        HexColor::new(avg(sums[0]), avg(sums[1]), avg(sums[2]))
    }
}

/// Reduce `image` to at most `max_colors` representative colors.
///
/// Alpha is ignored when choosing colors; every pixel counts once.
///
/// # Errors
///
/// - [`PaletteError::ZeroColors`] if `max_colors` is 0
/// - [`PaletteError::TooManyColors`] if `max_colors` exceeds [`MAX_PALETTE_COLORS`]
/// - [`PaletteError::EmptyImage`] if the image has no pixels
///
/// # Example
///
/// ```
/// use decor_fx::palette::quantize;
/// use image::{Rgba, RgbaImage};
///
/// let image = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
/// let palette = quantize(&image, 5).unwrap();
///
/// let ranked = palette.ranked();
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].color.to_hex(), "#0a141e");
/// assert_eq!(ranked[0].count, 16);
/// ```
pub fn quantize(image: &RgbaImage, max_colors: usize) -> Result<Quantized, PaletteError> {
    if max_colors == 0 {
        return Err(PaletteError::ZeroColors);
    }
    if max_colors > MAX_PALETTE_COLORS {
        return Err(PaletteError::TooManyColors {
            requested: max_colors,
            max: MAX_PALETTE_COLORS,
        });
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(PaletteError::EmptyImage);
    }

    let mut histogram: BTreeMap<[u8; 3], u64> = BTreeMap::new();
    for pixel in image.pixels() {
        let [r, g, b, _] = pixel.0;
        *histogram.entry([r, g, b]).or_insert(0) += 1;
    }
    let entries: Vec<([u8; 3], u64)> = histogram.into_iter().collect();

    let mut boxes = vec![ColorBox::new(entries.clone())];
    while boxes.len() < max_colors {
        let mut candidate: Option<usize> = None;
        for (i, color_box) in boxes.iter().enumerate() {
            if !color_box.is_splittable() {
                continue;
            }
            match candidate {
                Some(best) if boxes[best].pixels >= color_box.pixels => {}
                _ => candidate = Some(i),
            }
        }
        let Some(index) = candidate else {
            break;
        };

        let (lower, upper) = boxes.remove(index).split();
        boxes.insert(index, lower);
        boxes.push(upper);
    }

    let colors: Vec<HexColor> = boxes.iter().map(ColorBox::mean).collect();
    let mut counts = vec![0u64; colors.len()];
    for (color, n) in &entries {
        counts[nearest(&colors, *color)] += n;
    }

    let buckets = colors
        .into_iter()
        .zip(counts)
        .enumerate()
        .map(|(index, (color, count))| Bucket {
            index,
            color,
            count,
        })
        .collect();

    Ok(Quantized { buckets })
}

/// Index of the palette color closest to `color` (squared RGB distance).
///
/// Equal distances resolve to the lower index.
fn nearest(palette: &[HexColor], color: [u8; 3]) -> usize {
    let mut best = 0;
    let mut best_dist = u32::MAX;
    for (i, entry) in palette.iter().enumerate() {
        let dist = entry
            .to_bytes()
            .iter()
            .zip(color.iter())
            .map(|(&a, &b)| {
                let d = a as i32 - b as i32;
                (d * d) as u32
            })
            .sum::<u32>();
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}
