use crate::monitor::core::{Effect, Event};
use crate::monitor::main::Monitor;
use std::sync::mpsc::Sender;

impl Monitor {
    pub fn run_effect(&self, effect: Effect, event_queue: Sender<Event>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::SubscribeToCameraEvents => {
                let events = self.device_camera.events();
                while let Ok(event) = events.recv() {
                    if event_queue.send(Event::CameraEvent(event)).is_err() {
                        break;
                    }
                }
            }
            Effect::SubscribeToFrames => {
                let frames = self.device_camera.frames();
                while let Ok(frame) = frames.recv() {
                    if event_queue.send(Event::FrameArrived(frame)).is_err() {
                        break;
                    }
                }
            }
            Effect::StartCamera => {
                let started = self.device_camera.start();
                let _ = event_queue.send(Event::CameraStartDone(started));
            }
            Effect::ClassifyFrame { frame } => {
                let result = self.classifier.classify_frame(&frame);
                if let Err(e) = &result {
                    let _ = self.logger.error(&format!("Frame skipped: {}", e));
                }
                let _ = event_queue.send(Event::FrameClassifyDone(result));
            }
        }
    }
}
