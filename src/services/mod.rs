pub mod analyzer;
pub mod design_service;
pub mod synthesizer;

pub use analyzer::{PaletteAnalyzer, ANALYSIS_SIZE, DEFAULT_MAX_COLORS};
pub use design_service::DesignService;
pub use synthesizer::StyleSynthesizer;
