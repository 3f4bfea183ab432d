use crate::device_camera::interface::{CameraFrame, DeviceCamera, DeviceCameraEvent, FrameFormat};
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageBuffer, Rgb};
use rand::distr::{Distribution, Uniform};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    frame_rate: Duration,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, frame_rate: Duration) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            frame_rate,
        }
    }
}

fn fake_frame() -> Result<CameraFrame, Box<dyn std::error::Error + Send + Sync>> {
    let mut rng = rand::rng();
    let channel_dist = Uniform::new_inclusive(0u8, 255)?;
    let color = Rgb([
        channel_dist.sample(&mut rng),
        channel_dist.sample(&mut rng),
        channel_dist.sample(&mut rng),
    ]);

    let (width, height) = (320, 240);
    let mut img = ImageBuffer::new(width, height);
    for pixel in img.pixels_mut() {
        *pixel = color;
    }

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Jpeg)?;

    Ok(CameraFrame {
        bytes,
        format: FrameFormat::Jpeg,
        width,
        height,
    })
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceCameraEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(DeviceCameraEvent::Connected);
        });
        rx
    }

    fn frames(&self) -> Receiver<CameraFrame> {
        let (tx, rx) = std::sync::mpsc::channel();
        let frame_rate = self.frame_rate;
        std::thread::spawn(move || loop {
            std::thread::sleep(frame_rate);
            match fake_frame() {
                Ok(frame) => {
                    if tx.send(frame).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });
        rx
    }
}
