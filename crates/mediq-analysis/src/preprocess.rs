use image::imageops::FilterType;
use ndarray::Array3;

use crate::error::{AnalysisError, Result};

/// Square edge length every model input is resized to.
pub const INPUT_SIZE: u32 = 224;

/// Decode raw image bytes into a normalized model input tensor.
///
/// The image is converted to 3-channel RGB if it is not already, resized to
/// exactly `INPUT_SIZE`×`INPUT_SIZE`, and scaled to `f32` values in [0, 1].
/// The result has shape `(3, INPUT_SIZE, INPUT_SIZE)` in channel-first
/// layout. No model-specific normalization is applied.
///
/// # Errors
///
/// Any decode failure is surfaced as `AnalysisError::InvalidImage` carrying
/// the decoder's message.
pub fn preprocess_image(bytes: &[u8]) -> Result<Array3<f32>> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| AnalysisError::invalid_image(e.to_string()))?;

    // Grayscale and RGBA inputs both collapse to RGB here.
    let rgb = decoded.to_rgb8();
    let resized = image::imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    let size = INPUT_SIZE as usize;
    let mut tensor = Array3::<f32>::zeros((3, size, size));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for channel in 0..3 {
            tensor[[channel, y as usize, x as usize]] = f32::from(pixel[channel]) / 255.0;
        }
    }

    Ok(tensor)
}
