use decor_fx::{Effect, HexColor};
use image::Rgba;
use serde::{Serialize, Serializer};

/// Overlay used for style names that are not in the table.
pub const DEFAULT_OVERLAY: [u8; 4] = [200, 160, 120, 48];

const VINTAGE_DARK: HexColor = HexColor::new(0x2b, 0x1b, 0x12);
const VINTAGE_LIGHT: HexColor = HexColor::new(0xe7, 0xd8, 0xc8);

/// A named rendering style.
///
/// Lookup is by exact, case-sensitive name. Any name outside the table is
/// kept as [`Style::Other`] and renders with the default profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Style {
    Aesthetic,
    Modern,
    Cozy,
    Vintage,
    Minimalist,
    Other(String),
}

/// Static rendering configuration for a style.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    /// Uniform layer composited over the enhanced photo (R, G, B, alpha)
    pub overlay: [u8; 4],
    /// Post-effects applied in order after the overlay
    pub effects: Vec<Effect>,
}

impl StyleProfile {
    pub fn overlay_pixel(&self) -> Rgba<u8> {
        Rgba(self.overlay)
    }
}

impl Style {
    /// Resolve a style name. Never fails: unknown names become [`Style::Other`].
    pub fn parse(name: &str) -> Self {
        match name {
            "Aesthetic" => Style::Aesthetic,
            "Modern" => Style::Modern,
            "Cozy" => Style::Cozy,
            "Vintage" => Style::Vintage,
            "Minimalist" => Style::Minimalist,
            other => Style::Other(other.to_string()),
        }
    }

    /// The table styles, in table order.
    pub fn catalog() -> [Style; 5] {
        [
            Style::Aesthetic,
            Style::Modern,
            Style::Cozy,
            Style::Vintage,
            Style::Minimalist,
        ]
    }

    /// The style name as requested.
    pub fn name(&self) -> &str {
        match self {
            Style::Aesthetic => "Aesthetic",
            Style::Modern => "Modern",
            Style::Cozy => "Cozy",
            Style::Vintage => "Vintage",
            Style::Minimalist => "Minimalist",
            Style::Other(name) => name,
        }
    }

    /// Lowercased name, used in artifact file names.
    pub fn file_suffix(&self) -> String {
        self.name().to_lowercase()
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Style::Other(_))
    }

    pub fn profile(&self) -> StyleProfile {
        let (overlay, effects) = match self {
            Style::Aesthetic => ([236, 200, 160, 48], vec![Effect::SmoothMore]),
            Style::Modern => (
                [64, 160, 185, 48],
                vec![Effect::AutoContrast { cutoff: 0.5 }, Effect::Sharpen],
            ),
            Style::Cozy => (
                [210, 150, 120, 80],
                vec![Effect::GaussianBlur { radius: 0.8 }],
            ),
            Style::Vintage => (
                [120, 90, 60, 70],
                vec![Effect::Duotone {
                    dark: VINTAGE_DARK,
                    light: VINTAGE_LIGHT,
                }],
            ),
            Style::Minimalist => ([240, 240, 240, 40], Vec::new()),
            Style::Other(_) => (DEFAULT_OVERLAY, Vec::new()),
        };
        StyleProfile { overlay, effects }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
