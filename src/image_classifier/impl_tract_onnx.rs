use crate::image_classifier::error::{InferenceError, ModelLoadError};
use crate::image_classifier::interface::InferenceBackend;
use crate::image_classifier::model_config::ModelConfig;
use std::io::Cursor;
use tract_onnx::prelude::*;

/// The loaded model handle. The optimized plan is pinned for the lifetime of
/// this value and released exactly once when it is dropped.
pub struct InferenceTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
}

impl InferenceTractOnnx {
    pub fn load(model_bytes: &[u8], config: ModelConfig) -> Result<Self, ModelLoadError> {
        let model = tract_onnx::onnx()
            .model_for_read(&mut Cursor::new(model_bytes))
            .map_err(|e| ModelLoadError::InvalidModel(e.to_string()))?
            .into_optimized()
            .map_err(|e| ModelLoadError::InvalidModel(e.to_string()))?;

        // Models with symbolic dims are accepted here and caught by the
        // length checks in `run`.
        let side = config.input_size as usize;
        if let Ok(fact) = model.input_fact(0) {
            if let Some(shape) = fact.shape.as_concrete() {
                let expected = [1, side, side, 3];
                if shape != &expected[..] {
                    return Err(ModelLoadError::IncompatibleShape {
                        expected: expected.to_vec(),
                        actual: shape.to_vec(),
                    });
                }
            }
        }

        let model = model
            .into_runnable()
            .map_err(|e| ModelLoadError::InvalidModel(e.to_string()))?;

        Ok(Self { model, config })
    }

    pub fn load_file(config: ModelConfig) -> Result<Self, ModelLoadError> {
        let model_bytes = std::fs::read(&config.model_path)?;
        Self::load(&model_bytes, config)
    }
}

impl InferenceBackend for InferenceTractOnnx {
    fn run(&self, input: &[f32]) -> Result<Vec<f32>, InferenceError> {
        let side = self.config.input_size as usize;
        let expected_len = 3 * side * side;
        if input.len() != expected_len {
            return Err(InferenceError::InputLength {
                expected: expected_len,
                actual: input.len(),
            });
        }

        let mut tensor = Tensor::zero::<f32>(&[1, side, side, 3])
            .map_err(|e| InferenceError::Backend(e.to_string()))?;
        tensor
            .as_slice_mut::<f32>()
            .map_err(|e| InferenceError::Backend(e.to_string()))?
            .copy_from_slice(input);

        let outputs = self
            .model
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| InferenceError::Backend(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::Backend("model produced no outputs".to_string()))?;

        let scores: Vec<f32> = output
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::Backend(e.to_string()))?
            .iter()
            .copied()
            .collect();

        if scores.len() != self.config.num_classes {
            return Err(InferenceError::OutputShape {
                expected: self.config.num_classes,
                actual: scores.len(),
            });
        }

        Ok(scores)
    }
}
