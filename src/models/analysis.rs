use serde::Serialize;

/// Coarse scene category.
///
/// This is a placeholder heuristic driven only by the photo's aspect ratio;
/// no detection model is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneTag {
    /// Wider than tall: a living-room framing
    Landscape,
    /// Square or taller than wide: a bedroom framing
    Portrait,
}

impl SceneTag {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            SceneTag::Landscape
        } else {
            SceneTag::Portrait
        }
    }

    /// Fixed object labels reported for this scene.
    pub fn objects(&self) -> [&'static str; 3] {
        match self {
            SceneTag::Landscape => ["sofa", "table", "lamp"],
            SceneTag::Portrait => ["bed", "wardrobe", "lamp"],
        }
    }
}

/// Palette analysis of one photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Dominant colors as `#rrggbb`, most frequent first
    pub colors: Vec<String>,
    /// Placeholder object labels from the scene tag
    pub objects: Vec<String>,
    #[serde(skip)]
    pub scene: SceneTag,
}

impl Analysis {
    pub fn new(colors: Vec<String>, scene: SceneTag) -> Self {
        Self {
            colors,
            objects: scene.objects().iter().map(|s| s.to_string()).collect(),
            scene,
        }
    }
}
