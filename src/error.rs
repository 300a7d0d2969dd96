use thiserror::Error;

/// Reasons a world cannot be assembled.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("sphere #{index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("plane #{index} normal is not unit length (|n| = {length})")]
    NonUnitNormal { index: usize, length: f64 },

    #[error("point light #{index} has negative intensity {intensity}")]
    NegativeIntensity { index: usize, intensity: f64 },

    #[error("ambient light has negative intensity {0}")]
    NegativeAmbient(f64),

    #[error("malformed scene document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("canvas dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}
