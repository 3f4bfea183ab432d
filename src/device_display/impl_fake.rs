use crate::device_display::interface::{DeviceDisplay, OverlayRect};
use crate::image_classifier::interface::Classification;
use std::error::Error;

#[derive(Default)]
pub struct DeviceDisplayFake {
    pub messages: Vec<String>,
    pub detections: Vec<(Classification, OverlayRect)>,
    pub no_detection_count: usize,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show_message(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.messages.push(text.to_string());
        Ok(())
    }

    fn show_detection(
        &mut self,
        classification: &Classification,
        region: OverlayRect,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.detections.push((classification.clone(), region));
        Ok(())
    }

    fn show_no_detection(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.no_detection_count += 1;
        Ok(())
    }
}
