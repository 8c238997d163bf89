use std::path::{Path, PathBuf};

use crate::error::StyleError;
use crate::imaging::{self, is_supported_upload, source_base_name};
use crate::models::{Analysis, AppConfig, DesignReport, GeneratedArtifact, Style};
use crate::services::{PaletteAnalyzer, StyleSynthesizer};

/// Async entry point for the upload layer.
///
/// Analysis and rendering are CPU-bound, so every request runs on
/// tokio's blocking pool instead of the async worker threads.
#[derive(Debug, Clone)]
pub struct DesignService {
    config: AppConfig,
    analyzer: PaletteAnalyzer,
    synthesizer: StyleSynthesizer,
}

impl DesignService {
    pub fn new(config: AppConfig) -> Self {
        let synthesizer = StyleSynthesizer::new().atomic_writes(config.atomic_writes);
        Self {
            config,
            analyzer: PaletteAnalyzer::new(),
            synthesizer,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Dominant colors and scene labels of an uploaded photo.
    pub async fn analyze(
        &self,
        upload: impl AsRef<Path>,
        max_colors: Option<usize>,
    ) -> Result<Analysis, StyleError> {
        let upload = checked_upload(upload.as_ref())?;
        let max_colors = max_colors.unwrap_or(self.config.max_colors);
        let analyzer = self.analyzer.clone();

        run_blocking(move || analyzer.analyze_path(&upload, max_colors)).await
    }

    /// Render an uploaded photo in `style` (or the configured default).
    pub async fn generate(
        &self,
        upload: impl AsRef<Path>,
        style: Option<Style>,
    ) -> Result<GeneratedArtifact, StyleError> {
        let upload = checked_upload(upload.as_ref())?;
        let style = style.unwrap_or_else(|| self.config.default_style());
        let output_dir = self.config.output_dir.clone();
        let synthesizer = self.synthesizer.clone();

        run_blocking(move || synthesizer.synthesize(&upload, &style, &output_dir)).await
    }

    /// Render and analyze one upload, decoding it only once.
    pub async fn design(
        &self,
        upload: impl AsRef<Path>,
        style: Option<Style>,
    ) -> Result<DesignReport, StyleError> {
        let upload = checked_upload(upload.as_ref())?;
        let style = style.unwrap_or_else(|| self.config.default_style());
        let output_dir = self.config.output_dir.clone();
        let max_colors = self.config.max_colors;
        let analyzer = self.analyzer.clone();
        let synthesizer = self.synthesizer.clone();

        run_blocking(move || {
            std::fs::create_dir_all(&output_dir).map_err(|e| StyleError::write(&output_dir, e))?;
            let base_name = source_base_name(&upload)?;
            let image = imaging::decode_path(&upload)?;

            let analysis = analyzer.analyze(&image, max_colors)?;
            let generated = synthesizer.synthesize_image(image, &base_name, &style, &output_dir)?;

            Ok(DesignReport {
                source: upload,
                style,
                generated,
                analysis,
            })
        })
        .await
    }
}

fn checked_upload(upload: &Path) -> Result<PathBuf, StyleError> {
    if !is_supported_upload(upload) {
        return Err(StyleError::InvalidArgument(format!(
            "unsupported file type: {} (use JPG, JPEG, or PNG)",
            upload.display()
        )));
    }
    Ok(upload.to_path_buf())
}

/// Execute CPU-intensive work in a blocking context
async fn run_blocking<T, F>(work: F) -> Result<T, StyleError>
where
    F: FnOnce() -> Result<T, StyleError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| StyleError::Task(format!("Worker task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_unsupported_extension() {
        let service = DesignService::new(AppConfig::default());
        let err = service.analyze("room.gif", None).await.unwrap_err();
        assert!(matches!(err, StyleError::InvalidArgument(_)));

        let err = service.generate("room", Some(Style::Modern)).await.unwrap_err();
        assert!(matches!(err, StyleError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_missing_upload_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            output_dir: dir.path().join("out"),
            ..AppConfig::default()
        };
        let service = DesignService::new(config);

        let err = service
            .analyze(dir.path().join("missing.png"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StyleError::Decode(_)));
    }
}
