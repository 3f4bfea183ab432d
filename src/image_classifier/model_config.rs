#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub model_path: String,
    pub input_size: u32,
    pub num_classes: usize,
}
