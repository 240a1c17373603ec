use image::RgbImage;

/// Classical per-channel overlay blend on the 0-255 range.
///
/// Dark base pixels are darkened multiplicatively by dark blend values, light
/// base pixels are lightened complementarily, and a mid-gray blend value
/// leaves the base unchanged to within integer truncation. Integer math with
/// truncating division, matching the reference compositing behavior.
pub fn overlay_channel(base: u8, blend: u8) -> u8 {
    let base = u32::from(base);
    let blend = u32::from(blend);
    let out = if base < 128 {
        2 * base * blend / 255
    } else {
        255 - 2 * (255 - base) * (255 - blend) / 255
    };
    out as u8
}

/// Overlay-composites `blend` onto `base` in place. Both images must have
/// the same dimensions; the compositor guarantees this by constructing the
/// noise field from the base image's dimensions.
pub fn overlay_in_place(base: &mut RgbImage, blend: &RgbImage) {
    debug_assert_eq!(base.dimensions(), blend.dimensions());
    for (base_pixel, blend_pixel) in base.pixels_mut().zip(blend.pixels()) {
        for (b, l) in base_pixel.0.iter_mut().zip(blend_pixel.0) {
            *b = overlay_channel(*b, l);
        }
    }
}
