//! Temporary upload/output directories for a test.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use roomstyle::models::AppConfig;
use roomstyle::services::DesignService;
use tempfile::TempDir;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn uploads(&self) -> PathBuf {
        self.dir.path().join("uploads")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("generated")
    }

    /// Save `image` under uploads/ as PNG.
    pub fn save_png(&self, name: &str, image: &RgbaImage) -> PathBuf {
        self.save(name, image, ImageFormat::Png)
    }

    /// Save `image` under uploads/ as JPEG (alpha dropped).
    pub fn save_jpeg(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let rgb = image::DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        let path = self.uploads().join(name);
        std::fs::create_dir_all(self.uploads()).expect("Failed to create uploads dir");
        rgb.save_with_format(&path, ImageFormat::Jpeg)
            .expect("Failed to write JPEG fixture");
        path
    }

    /// Write arbitrary bytes under uploads/.
    pub fn save_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.uploads().join(name);
        std::fs::create_dir_all(self.uploads()).expect("Failed to create uploads dir");
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            output_dir: self.output_dir(),
            ..AppConfig::default()
        }
    }

    pub fn service(&self) -> DesignService {
        DesignService::new(self.config())
    }

    fn save(&self, name: &str, image: &RgbaImage, format: ImageFormat) -> PathBuf {
        let path = self.uploads().join(name);
        std::fs::create_dir_all(self.uploads()).expect("Failed to create uploads dir");
        image
            .save_with_format(&path, format)
            .expect("Failed to write fixture");
        path
    }
}
