use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::impl_console::DeviceDisplayConsole;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::classifier::Classifier;
use crate::image_classifier::impl_fake::InferenceFake;
use crate::image_classifier::impl_tract_onnx::InferenceTractOnnx;
use crate::image_classifier::interface::InferenceBackend;
use crate::image_classifier::model_config::ModelConfig;
use crate::library::logger::impl_console::LoggerConsole;
use crate::library::logger::interface::Logger;
use crate::monitor::main::Monitor;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod library;
mod monitor;

fn main() -> Result<(), Arc<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera: Arc<dyn DeviceCamera + Send + Sync> =
        Arc::new(DeviceCameraFake::new(logger.clone(), config.frame_rate));

    let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
        Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    let model_config = ModelConfig {
        model_path: config.model_path.clone(),
        input_size: config.input_size,
        num_classes: config.class_labels.len(),
    };

    let backend: Arc<dyn InferenceBackend> = match InferenceTractOnnx::load_file(model_config) {
        Ok(backend) => Arc::new(backend),
        Err(e) => {
            let _ = logger.error(&format!("Modelo no disponible: {}", e));
            Arc::new(InferenceFake::new(config.class_labels.len()))
        }
    };

    let classifier = Arc::new(Classifier::new(backend, &config));

    let monitor = Monitor::new(config, logger, device_camera, device_display, classifier);

    monitor.run()
}
