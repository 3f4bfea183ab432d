use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("model file unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid model artifact: {0}")]
    InvalidModel(String),
    #[error("model input shape {actual:?} does not match expected {expected:?}")]
    IncompatibleShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed image bytes: {0}")]
    Image(#[from] image::ImageError),
    #[error("frame buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("input tensor length mismatch: expected {expected}, got {actual}")]
    InputLength { expected: usize, actual: usize },
    #[error("output shape mismatch: expected {expected} scores, got {actual}")]
    OutputShape { expected: usize, actual: usize },
    #[error("inference backend failure: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("empty output vector")]
    EmptyOutput,
    #[error("output vector has {scores} scores but {labels} labels")]
    LabelMismatch { scores: usize, labels: usize },
    #[error("confidence threshold {0} outside [0.0, 1.0]")]
    ThresholdOutOfRange(f32),
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
    #[error(transparent)]
    Decision(#[from] DecisionError),
}
