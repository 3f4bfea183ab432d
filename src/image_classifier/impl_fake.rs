use crate::image_classifier::error::InferenceError;
use crate::image_classifier::interface::InferenceBackend;
use rand::distr::{Distribution, Uniform};

pub struct InferenceFake {
    scores: Option<Vec<f32>>,
    num_classes: usize,
}

impl InferenceFake {
    pub fn new(num_classes: usize) -> Self {
        Self {
            scores: None,
            num_classes,
        }
    }

    pub fn with_scores(scores: Vec<f32>) -> Self {
        Self {
            num_classes: scores.len(),
            scores: Some(scores),
        }
    }
}

impl InferenceBackend for InferenceFake {
    fn run(&self, _input: &[f32]) -> Result<Vec<f32>, InferenceError> {
        match &self.scores {
            Some(scores) => Ok(scores.clone()),
            None => {
                let mut rng = rand::rng();

                let score_dist = Uniform::new(0.0f32, 1.0)
                    .map_err(|e| InferenceError::Backend(e.to_string()))?;

                Ok((0..self.num_classes)
                    .map(|_| score_dist.sample(&mut rng))
                    .collect())
            }
        }
    }
}
