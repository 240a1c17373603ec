use image::DynamicImage;

use crate::error::GrainError;

/// The two pixel layouts the grain compositor accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Rgb,
    Rgba,
}

/// Classifies an image as RGB or RGBA, rejecting every other layout.
pub fn mode_of(image: &DynamicImage) -> Result<ImageMode, GrainError> {
    match image {
        DynamicImage::ImageRgb8(_) => Ok(ImageMode::Rgb),
        DynamicImage::ImageRgba8(_) => Ok(ImageMode::Rgba),
        other => Err(GrainError::UnsupportedMode(format!("{:?}", other.color()))),
    }
}
