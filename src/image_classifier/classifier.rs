use crate::config::Config;
use crate::device_camera::interface::CameraFrame;
use crate::image_classifier::decision;
use crate::image_classifier::encode::encode;
use crate::image_classifier::error::ClassifyError;
use crate::image_classifier::interface::{Classification, ClassificationResult, InferenceBackend};
use image::DynamicImage;
use std::sync::Arc;

/// Composes the tensor encoder, the inference backend and the decision
/// policies into the two classification paths.
pub struct Classifier {
    backend: Arc<dyn InferenceBackend>,
    input_size: u32,
    class_labels: Vec<String>,
    confidence_threshold: f32,
}

impl Classifier {
    pub fn new(backend: Arc<dyn InferenceBackend>, config: &Config) -> Self {
        Self {
            backend,
            input_size: config.input_size,
            class_labels: config.class_labels.clone(),
            confidence_threshold: config.confidence_threshold,
        }
    }

    /// Single-image path: the user picked this image, so always commit to
    /// the best class.
    pub fn classify_image(&self, image: &DynamicImage) -> Result<Classification, ClassifyError> {
        let input = encode(image, self.input_size);
        let output = self.backend.run(&input)?;
        Ok(decision::decide_top1(&output, &self.class_labels)?)
    }

    /// Real-time path: decodes the raw frame and gates the result by the
    /// configured confidence threshold.
    pub fn classify_frame(
        &self,
        frame: &CameraFrame,
    ) -> Result<ClassificationResult, ClassifyError> {
        let image = frame.decode()?;
        let input = encode(&image, self.input_size);
        let output = self.backend.run(&input)?;
        Ok(decision::decide_thresholded(
            &output,
            &self.class_labels,
            self.confidence_threshold,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device_camera::interface::FrameFormat;
    use crate::image_classifier::error::InferenceError;
    use crate::image_classifier::impl_fake::InferenceFake;
    use image::{ImageBuffer, Rgb};

    /// Stub backend that echoes the sum of the input tensor as its only
    /// score.
    struct EchoSum;

    impl InferenceBackend for EchoSum {
        fn run(&self, input: &[f32]) -> Result<Vec<f32>, InferenceError> {
            Ok(vec![input.iter().sum()])
        }
    }

    fn solid_image(color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(60, 40);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    fn jpeg_frame(color: [u8; 3]) -> CameraFrame {
        let mut bytes = Vec::new();
        solid_image(color)
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
            .unwrap();
        CameraFrame {
            bytes,
            format: FrameFormat::Jpeg,
            width: 60,
            height: 40,
        }
    }

    #[test]
    fn test_encode_and_stub_inference_is_deterministic() {
        let img = ImageBuffer::from_fn(80, 60, |x, y| Rgb([x as u8, y as u8, 100]));
        let image = DynamicImage::ImageRgb8(img);
        let config = Config {
            class_labels: vec!["Micorriza".to_string()],
            ..Config::default()
        };
        let classifier = Classifier::new(Arc::new(EchoSum), &config);

        let first = classifier.classify_image(&image).unwrap();
        let second = classifier.classify_image(&image).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_classify_image_commits_to_top_class() {
        let backend = InferenceFake::with_scores(vec![0.05, 0.1, 0.6, 0.05, 0.1, 0.05, 0.05]);
        let classifier = Classifier::new(Arc::new(backend), &Config::default());

        let result = classifier.classify_image(&solid_image([120, 90, 60])).unwrap();

        assert_eq!(result.label, "Endomicorrizas");
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_classify_frame_below_threshold_is_unclassified() {
        let backend = InferenceFake::with_scores(vec![0.65, 0.1, 0.05, 0.05, 0.05, 0.05, 0.05]);
        let classifier = Classifier::new(Arc::new(backend), &Config::default());

        let result = classifier.classify_frame(&jpeg_frame([120, 90, 60])).unwrap();

        assert_eq!(result, ClassificationResult::Unclassified);
    }

    #[test]
    fn test_classify_frame_above_threshold_is_labeled() {
        let backend = InferenceFake::with_scores(vec![0.75, 0.1, 0.05, 0.02, 0.03, 0.03, 0.02]);
        let classifier = Classifier::new(Arc::new(backend), &Config::default());

        let result = classifier.classify_frame(&jpeg_frame([120, 90, 60])).unwrap();

        match result {
            ClassificationResult::Labeled(classification) => {
                assert_eq!(classification.label, "Ectendomicorriza");
                assert_eq!(classification.confidence, 0.75);
            }
            ClassificationResult::Unclassified => panic!("expected a labeled result"),
        }
    }

    #[test]
    fn test_classify_frame_bad_bytes_is_decode_error() {
        let backend = InferenceFake::with_scores(vec![0.75, 0.1, 0.05, 0.02, 0.03, 0.03, 0.02]);
        let classifier = Classifier::new(Arc::new(backend), &Config::default());
        let frame = CameraFrame {
            bytes: vec![1, 2, 3, 4],
            format: FrameFormat::Jpeg,
            width: 10,
            height: 10,
        };

        let result = classifier.classify_frame(&frame);

        assert!(matches!(result, Err(ClassifyError::Decode(_))));
    }
}
