use crate::image_classifier::error::InferenceError;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationResult {
    Labeled(Classification),
    Unclassified,
}

/// Capability seam over the opaque pre-trained model: a loaded handle that
/// turns an input tensor into a vector of class scores. Implementations must
/// be stateless across calls; the handle is shared read-only for a session.
pub trait InferenceBackend: Send + Sync {
    fn run(&self, input: &[f32]) -> Result<Vec<f32>, InferenceError>;
}
