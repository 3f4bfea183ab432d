use crate::device_display::interface::{DeviceDisplay, OverlayRect};
use crate::image_classifier::interface::Classification;
use std::error::Error;

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show_message(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("{}", text);
        Ok(())
    }

    fn show_detection(
        &mut self,
        classification: &Classification,
        region: OverlayRect,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("┌────────────────────────────────┐");
        println!(
            "│ {} ({:.2})",
            classification.label, classification.confidence
        );
        println!(
            "│ marco: ({}, {}) - ({}, {})",
            region.left, region.top, region.right, region.bottom
        );
        println!("└────────────────────────────────┘");
        Ok(())
    }

    fn show_no_detection(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("No es micorriza");
        Ok(())
    }
}
