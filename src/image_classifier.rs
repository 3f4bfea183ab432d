pub mod classifier;
pub mod decision;
pub mod encode;
pub mod error;
pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod model_config;
