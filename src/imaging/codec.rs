use std::io::Write;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, RgbImage, RgbaImage};

use crate::error::StyleError;

/// Quality of every written artifact.
pub const JPEG_QUALITY: u8 = 90;

/// Decode an image file, sniffing the format from its content.
pub fn decode_path(path: &Path) -> Result<DynamicImage, StyleError> {
    let reader = ImageReader::open(path)
        .map_err(|e| StyleError::Decode(format!("{}: {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| StyleError::Decode(format!("{}: {e}", path.display())))?;

    let image = reader
        .decode()
        .map_err(|e| StyleError::Decode(format!("{}: {e}", path.display())))?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}

/// Decode an in-memory image (PNG or JPEG).
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, StyleError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Drop the alpha channel.
pub fn flatten(image: RgbaImage) -> RgbImage {
    DynamicImage::ImageRgba8(image).to_rgb8()
}

/// Encode `image` as JPEG and write it to `path`, replacing any existing file.
///
/// The parent directory is created if needed. With `atomic`, the bytes are
/// written to a uniquely named temporary file in the same directory and
/// renamed into place, so readers never observe a partially written
/// artifact and the last writer wins.
pub fn write_jpeg(image: &RgbImage, path: &Path, quality: u8, atomic: bool) -> Result<(), StyleError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StyleError::write(parent, e))?;
    }

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality)
        .encode_image(image)
        .map_err(|e| StyleError::write(path, e))?;

    if atomic {
        // Each writer gets its own temp file, so concurrent writes of the
        // same artifact never rename each other's data
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StyleError::write(dir, e))?;
        tmp.write_all(&bytes)
            .map_err(|e| StyleError::write(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| StyleError::write(path, e.error))?;
    } else {
        std::fs::write(path, &bytes).map_err(|e| StyleError::write(path, e))?;
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), atomic, "Wrote JPEG");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, Rgba};
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_bytes_png() {
        let source = RgbaImage::from_pixel(7, 3, Rgba([1, 2, 3, 255]));
        let decoded = decode_bytes(&png_bytes(&source)).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (7, 3));
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let err = decode_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, StyleError::Decode(_)));
    }

    #[test]
    fn test_decode_missing_file_is_decode_error() {
        let err = decode_path(Path::new("/nonexistent/room.png")).unwrap_err();
        assert!(matches!(err, StyleError::Decode(_)));
    }

    #[test]
    fn test_flatten_drops_alpha() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0]));
        let flat = flatten(image);
        assert_eq!(flat.get_pixel(1, 1), &Rgb([10, 20, 30]));
    }

    #[test]
    fn test_write_jpeg_creates_directories_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/room_cozy.jpg");
        let image = RgbImage::from_pixel(16, 8, Rgb([200, 100, 50]));

        write_jpeg(&image, &path, JPEG_QUALITY, false).unwrap();
        write_jpeg(&image, &path, JPEG_QUALITY, false).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8], "JPEG SOI marker");
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room_modern.jpg");
        let image = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));

        write_jpeg(&image, &path, JPEG_QUALITY, true).unwrap();
        write_jpeg(&image, &path, JPEG_QUALITY, true).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("room_modern.jpg")]);
    }

    #[test]
    fn test_concurrent_atomic_writes_of_one_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room_modern.jpg");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8u8)
                .map(|i| {
                    let path = &path;
                    scope.spawn(move || {
                        let image = RgbImage::from_pixel(32, 32, Rgb([i * 30, 100, 50]));
                        write_jpeg(&image, path, JPEG_QUALITY, true)
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap().unwrap();
            }
        });

        let written = image::open(&path).unwrap();
        assert_eq!((written.width(), written.height()), (32, 32));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_into_file_as_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();

        let image = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let err = write_jpeg(&image, &blocker.join("out.jpg"), JPEG_QUALITY, false).unwrap_err();
        assert!(matches!(err, StyleError::Write { .. }));
    }
}
