use std::path::PathBuf;

use serde::Serialize;

use super::{Analysis, Style};

/// A stylized image written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedArtifact {
    /// `{output_dir}/{base}_{style_lowercase}.jpg`
    pub path: PathBuf,
    pub style: Style,
    pub width: u32,
    pub height: u32,
}

/// Everything the upload layer returns for one design request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    pub source: PathBuf,
    pub style: Style,
    pub generated: GeneratedArtifact,
    pub analysis: Analysis,
}
