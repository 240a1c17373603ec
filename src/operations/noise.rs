use image::RgbImage;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::params::AMOUNT_MAX;

/// Fills a full-resolution RGB field with seeded Gaussian noise.
///
/// One standard-normal sample is drawn per pixel per channel, row by row with
/// channels innermost, so the field is fully determined by the seed and the
/// dimensions. Samples are scaled by `127.5 * amount / 800` and centered on
/// 127.5: `amount = 0` yields flat mid-gray, `amount = 800` the full swing.
/// Values are clamped to `[0, 255]` and truncated toward zero; out-of-range
/// samples saturate, they never wrap.
pub fn noise_field(width: u32, height: u32, amount: u32, seed: u64) -> RgbImage {
    let scale = 127.5 * (f64::from(amount) / f64::from(AMOUNT_MAX));
    let mut rng = StdRng::seed_from_u64(seed);

    let mut field = RgbImage::new(width, height);
    for pixel in field.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let sample: f64 = rng.sample(StandardNormal);
            *channel = (sample * scale + 127.5).clamp(0.0, 255.0) as u8;
        }
    }
    field
}
