use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::classifier::Classifier;
use crate::library::logger::interface::Logger;
use crate::monitor::core::Event;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Monitor {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub classifier: Arc<Classifier>,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
}

impl Monitor {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        classifier: Arc<Classifier>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        Self {
            config,
            logger: logger.with_namespace("monitor"),
            device_camera,
            device_display,
            classifier,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }
}
