use crate::image_classifier::interface::Classification;
use std::error::Error;

/// Fixed annotation region drawn over the preview when a detection is
/// accepted. A static framing guide, not an object-localized bounding box —
/// there is no localization model behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl OverlayRect {
    /// Rectangle inset from the borders of a `side x side` frame.
    pub fn framing_guide(side: u32, inset: u32) -> Self {
        let inset = inset.min(side / 2);
        Self {
            left: inset,
            top: inset,
            right: side - inset,
            bottom: side - inset,
        }
    }
}

/// Result sink for classification output. Rendering is the implementation's
/// concern; the pipeline only reports what was decided.
pub trait DeviceDisplay: Send + Sync {
    /// Show a free-form status message (connection progress, session faults).
    fn show_message(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show an accepted detection together with the framing guide.
    fn show_detection(
        &mut self,
        classification: &Classification,
        region: OverlayRect,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Show the no-detection state (top score below the threshold).
    fn show_no_detection(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing_guide_insets_borders() {
        let rect = OverlayRect::framing_guide(150, 50);

        assert_eq!(
            rect,
            OverlayRect {
                left: 50,
                top: 50,
                right: 100,
                bottom: 100,
            }
        );
    }

    #[test]
    fn test_framing_guide_clamps_oversized_inset() {
        let rect = OverlayRect::framing_guide(40, 50);

        assert!(rect.left <= rect.right);
        assert!(rect.top <= rect.bottom);
        assert!(rect.right <= 40);
    }
}
