use crate::image_classifier::error::DecisionError;
use crate::image_classifier::interface::{Classification, ClassificationResult};

/// Single-image policy: always commits to the highest-scoring class.
/// Ties break toward the lowest index.
pub fn decide_top1(output: &[f32], labels: &[String]) -> Result<Classification, DecisionError> {
    if output.is_empty() {
        return Err(DecisionError::EmptyOutput);
    }
    if output.len() != labels.len() {
        return Err(DecisionError::LabelMismatch {
            scores: output.len(),
            labels: labels.len(),
        });
    }

    let mut max_index = 0;
    let mut max_score = output[0];
    for (index, score) in output.iter().enumerate().skip(1) {
        if *score > max_score {
            max_index = index;
            max_score = *score;
        }
    }

    Ok(Classification {
        label: labels[max_index].clone(),
        confidence: max_score,
    })
}

/// Streaming policy: same selection, but low-confidence results are
/// suppressed so the overlay does not flicker on noise.
pub fn decide_thresholded(
    output: &[f32],
    labels: &[String],
    threshold: f32,
) -> Result<ClassificationResult, DecisionError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(DecisionError::ThresholdOutOfRange(threshold));
    }

    let top = decide_top1(output, labels)?;

    if top.confidence >= threshold {
        Ok(ClassificationResult::Labeled(top))
    } else {
        Ok(ClassificationResult::Unclassified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec![
            "Ectendomicorriza".to_string(),
            "Ectomicorriza".to_string(),
            "Endomicorrizas".to_string(),
            "Infect General".to_string(),
            "Infect General 2".to_string(),
            "Sin Micorrizas".to_string(),
            "Sin Micorrizas 2".to_string(),
        ]
    }

    #[test]
    fn test_top1_picks_max_index() {
        let output = [0.1, 0.9, 0.2, 0.0, 0.0, 0.0, 0.0];

        let result = decide_top1(&output, &labels()).unwrap();

        assert_eq!(result.label, "Ectomicorriza");
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_top1_tie_breaks_to_lowest_index() {
        let output = [0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0];

        let result = decide_top1(&output, &labels()).unwrap();

        assert_eq!(result.label, "Ectendomicorriza");
    }

    #[test]
    fn test_top1_empty_output_fails() {
        let result = decide_top1(&[], &labels());

        assert!(matches!(result, Err(DecisionError::EmptyOutput)));
    }

    #[test]
    fn test_top1_label_count_mismatch_fails() {
        let output = [0.1, 0.9];

        let result = decide_top1(&output, &labels());

        assert!(matches!(result, Err(DecisionError::LabelMismatch { .. })));
    }

    #[test]
    fn test_thresholded_below_threshold_is_unclassified() {
        let output = [0.65, 0.1, 0.05, 0.05, 0.05, 0.05, 0.05];

        let result = decide_thresholded(&output, &labels(), 0.7).unwrap();

        assert_eq!(result, ClassificationResult::Unclassified);
    }

    #[test]
    fn test_thresholded_above_threshold_is_labeled() {
        let output = [0.75, 0.1, 0.05, 0.02, 0.03, 0.03, 0.02];

        let result = decide_thresholded(&output, &labels(), 0.7).unwrap();

        assert_eq!(
            result,
            ClassificationResult::Labeled(Classification {
                label: "Ectendomicorriza".to_string(),
                confidence: 0.75,
            })
        );
    }

    #[test]
    fn test_thresholded_exact_threshold_is_labeled() {
        let output = [0.7, 0.1, 0.05, 0.05, 0.05, 0.03, 0.02];

        let result = decide_thresholded(&output, &labels(), 0.7).unwrap();

        assert!(matches!(result, ClassificationResult::Labeled(_)));
    }

    #[test]
    fn test_thresholded_rejects_out_of_range_threshold() {
        let output = [0.75, 0.1, 0.05, 0.02, 0.03, 0.03, 0.02];

        let result = decide_thresholded(&output, &labels(), 1.5);

        assert!(matches!(
            result,
            Err(DecisionError::ThresholdOutOfRange(_))
        ));
    }
}
