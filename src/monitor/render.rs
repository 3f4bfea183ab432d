use crate::device_display::interface::OverlayRect;
use crate::monitor::core::{CameraState, Detection, State};
use crate::monitor::main::Monitor;
use std::sync::Arc;
use std::time::Duration;

impl Monitor {
    pub fn render(&self, state: &State) -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().unwrap();

        match state {
            State::CameraInitializing { camera_state } => match camera_state {
                CameraState::Disconnected => {
                    device_display.show_message("Camera connecting...")?;
                }
                CameraState::Connected(time) => {
                    if time.elapsed() > Duration::from_secs(2) {
                        device_display.show_message("Camera connected")?;
                    } else {
                        device_display.show_message("Camera connecting...")?;
                    }
                }
                CameraState::Started => {
                    device_display.show_message("Camera connected")?;
                }
            },
            State::WaitingForFrame { last } | State::Classifying { last } => match last {
                Detection::Scanning => {
                    device_display.show_message("Analizando...")?;
                }
                Detection::Sighted(classification) => {
                    let region = OverlayRect::framing_guide(
                        self.config.input_size,
                        self.config.overlay_inset,
                    );
                    device_display.show_detection(classification, region)?;
                }
                Detection::NotDetected => {
                    device_display.show_no_detection()?;
                }
            },
            State::Faulted { message } => {
                device_display.show_message(&format!("Error: {}", message))?;
            }
        }

        Ok(())
    }
}
