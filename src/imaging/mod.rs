//! Image I/O boundary: decoding uploads, naming and writing artifacts.

pub mod codec;
pub mod paths;

pub use codec::{decode_bytes, decode_path, flatten, write_jpeg, JPEG_QUALITY};
pub use paths::{artifact_path, is_supported_upload, source_base_name, SUPPORTED_EXTENSIONS};
