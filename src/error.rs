/// Everything that can go wrong while synthesizing film grain.
///
/// There is no catch-and-retry anywhere in this crate: errors propagate
/// straight to the host, which owns the user-visible diagnostics. Either a
/// complete result image is produced or one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum GrainError {
    /// A numeric parameter is outside its declared range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input image is neither 8-bit RGB nor 8-bit RGBA.
    #[error("unsupported image mode {0}, expected RGB8 or RGBA8")]
    UnsupportedMode(String),

    /// The input image has zero width or height.
    #[error("image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}
