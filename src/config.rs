use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: String,
    pub input_size: u32,
    pub class_labels: Vec<String>,
    pub confidence_threshold: f32,
    pub overlay_inset: u32,
    pub frame_rate: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: "models/micorrizas_model_final.onnx".to_string(),
            input_size: 150,
            class_labels: vec![
                "Ectendomicorriza".to_string(),
                "Ectomicorriza".to_string(),
                "Endomicorrizas".to_string(),
                "Infect General".to_string(),
                "Infect General 2".to_string(),
                "Sin Micorrizas".to_string(),
                "Sin Micorrizas 2".to_string(),
            ],
            confidence_threshold: 0.7,
            overlay_inset: 50,
            frame_rate: Duration::from_millis(200),
            logger_timezone: central_standard_time(),
        }
    }
}

fn central_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(6 * 3600).unwrap()
}
