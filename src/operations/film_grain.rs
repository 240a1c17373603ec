use image::{imageops, DynamicImage, GenericImageView, RgbImage};

use crate::error::GrainError;
use crate::image::{mode_of, ImageMode};
use crate::operations::blend::overlay_in_place;
use crate::operations::noise::noise_field;
use crate::params::NoiseLayerSpec;

/// Adds synthetic film grain to an image.
///
/// Two noise fields are generated from the layer specs, blurred, and
/// overlay-composited onto the source in order. The result is a new image
/// with the same dimensions and mode as the input; the input is never
/// mutated. Output is deterministic when both specs carry explicit seeds.
///
/// An RGBA input is processed as RGB: the alpha channel is dropped up front
/// and the output gets a fully opaque one from the final conversion. This
/// mirrors the original plugin's behavior and is kept intentionally.
pub fn film_grain(
    image: &DynamicImage,
    layer_1: &NoiseLayerSpec,
    layer_2: &NoiseLayerSpec,
) -> Result<DynamicImage, GrainError> {
    let mode = mode_of(image)?;
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(GrainError::EmptyImage { width, height });
    }

    let mut working = image.to_rgb8();
    apply_noise_layer(&mut working, layer_1);
    apply_noise_layer(&mut working, layer_2);

    Ok(match mode {
        ImageMode::Rgb => DynamicImage::ImageRgb8(working),
        ImageMode::Rgba => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(working).into_rgba8()),
    })
}

fn apply_noise_layer(working: &mut RgbImage, layer: &NoiseLayerSpec) {
    let seed = layer.resolve_seed();
    log::trace!(
        "noise layer: amount {}, blur {}, seed {seed}",
        layer.amount(),
        layer.blur_radius()
    );

    let mut noise = noise_field(working.width(), working.height(), layer.amount(), seed);
    // imageops::blur substitutes a default sigma for 0, so radius 0 must
    // skip the call entirely to stay a no-op.
    if layer.blur_radius() > 0.0 {
        noise = imageops::blur(&noise, layer.blur_radius());
    }
    overlay_in_place(working, &noise);
}
