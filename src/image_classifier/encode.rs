use image::{imageops, DynamicImage};

/// Resizes the image to exactly `side x side` (bilinear, aspect distortion
/// preserved, no letterboxing) and lays the pixels out row-major as
/// interleaved R, G, B floats normalized to [0.0, 1.0]. Output length is
/// always `3 * side * side`.
pub fn encode(image: &DynamicImage, side: u32) -> Vec<f32> {
    let resized = image.resize_exact(side, side, imageops::FilterType::Triangle);
    let rgb = resized.to_rgb8();

    let mut tensor = Vec::with_capacity(3 * (side * side) as usize);
    for pixel in rgb.pixels() {
        tensor.push(pixel[0] as f32 / 255.0);
        tensor.push(pixel[1] as f32 / 255.0);
        tensor.push(pixel[2] as f32 / 255.0);
    }

    tensor
}
