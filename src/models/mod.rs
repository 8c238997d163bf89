pub mod analysis;
pub mod artifact;
pub mod config;
pub mod style;

pub use analysis::{Analysis, SceneTag};
pub use artifact::{DesignReport, GeneratedArtifact};
pub use config::AppConfig;
pub use style::{Style, StyleProfile, DEFAULT_OVERLAY};
