use std::path::{Path, PathBuf};

use crate::error::StyleError;
use crate::models::Style;

/// Upload extensions accepted by the web layer.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Whether the file name carries an accepted image extension (case-insensitive).
pub fn is_supported_upload(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// File name of `path` without its extension.
pub fn source_base_name(path: &Path) -> Result<String, StyleError> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            StyleError::InvalidArgument(format!("no file name in {}", path.display()))
        })
}

/// `{output_dir}/{base}_{style_lowercase}.jpg`
pub fn artifact_path(output_dir: &Path, base: &str, style: &Style) -> PathBuf {
    output_dir.join(format!("{base}_{}.jpg", style.file_suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_uploads() {
        assert!(is_supported_upload(Path::new("room.png")));
        assert!(is_supported_upload(Path::new("uploads/Room.JPG")));
        assert!(is_supported_upload(Path::new("a.b.jpeg")));
        assert!(!is_supported_upload(Path::new("room.gif")));
        assert!(!is_supported_upload(Path::new("room")));
        assert!(!is_supported_upload(Path::new("png")));
    }

    #[test]
    fn test_source_base_name() {
        assert_eq!(source_base_name(Path::new("/up/20240101_living.jpg")).unwrap(), "20240101_living");
        assert_eq!(source_base_name(Path::new("archive.tar.png")).unwrap(), "archive.tar");
        assert!(source_base_name(Path::new("/")).is_err());
    }

    #[test]
    fn test_artifact_path_lowercases_style() {
        let dir = Path::new("static/generated");
        assert_eq!(
            artifact_path(dir, "living", &Style::Modern),
            PathBuf::from("static/generated/living_modern.jpg")
        );
        assert_eq!(
            artifact_path(dir, "living", &Style::parse("Foo")),
            PathBuf::from("static/generated/living_foo.jpg")
        );
    }
}
