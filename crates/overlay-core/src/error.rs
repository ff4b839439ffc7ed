use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlayError {
    #[error("Page index {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },

    #[error("Page {0} has no usable geometry")]
    MissingPageGeometry(usize),

    #[error("Overlay already exists: {0}")]
    DuplicateOverlay(String),

    #[error("Invalid overlay color: {0}")]
    InvalidColor(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Tap threshold must be finite and non-negative, got {0}")]
    TapThreshold(f64),

    #[error("Scale bounds must satisfy 0 < min <= 1 <= max, got [{min}, {max}]")]
    ScaleBounds { min: f64, max: f64 },

    #[error("Rubberband constant must be in [0, 1], got {0}")]
    Rubberband(f64),

    #[error("{kind} bounds: {reason}")]
    KindBounds { kind: String, reason: String },

    #[error("Failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
