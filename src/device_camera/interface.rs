use crate::image_classifier::error::DecodeError;
use image::{DynamicImage, RgbImage};
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone)]
pub enum DeviceCameraEvent {
    Disconnected,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameFormat {
    /// Compressed frame, as produced by capture stacks that re-encode the
    /// sensor's native colorspace before handing it over.
    Jpeg,
    /// Packed 8-bit RGB, row-major, no padding.
    Rgb8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    pub bytes: Vec<u8>,
    pub format: FrameFormat,
    pub width: u32,
    pub height: u32,
}

impl CameraFrame {
    pub fn decode(&self) -> Result<DynamicImage, DecodeError> {
        match self.format {
            FrameFormat::Jpeg => Ok(image::load_from_memory_with_format(
                &self.bytes,
                image::ImageFormat::Jpeg,
            )?),
            FrameFormat::Rgb8 => {
                let expected = (self.width * self.height * 3) as usize;
                if self.bytes.len() != expected {
                    return Err(DecodeError::BufferSize {
                        expected,
                        actual: self.bytes.len(),
                    });
                }
                let buffer = RgbImage::from_raw(self.width, self.height, self.bytes.clone())
                    .ok_or(DecodeError::BufferSize {
                        expected,
                        actual: self.bytes.len(),
                    })?;
                Ok(DynamicImage::ImageRgb8(buffer))
            }
        }
    }
}

pub trait DeviceCamera: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    #[allow(dead_code)]
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn events(&self) -> Receiver<DeviceCameraEvent>;
    fn frames(&self) -> Receiver<CameraFrame>;
}
