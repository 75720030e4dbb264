//! Shared numeric constants.
//!
//! Everything the pixel operations agree on lives here as a compile-time
//! constant: the channel range, the grayscale weights, the contrast pivot,
//! the blur neighbourhood and the recognised image extensions.

/// Smallest settled channel value.
pub const MIN_CHANNEL_VALUE: u8 = 0;

/// Largest settled channel value.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Channel count of decoded images (RGB).
pub const NUM_CHANNELS: usize = 3;

/// Grayscale weight for the red channel.
pub const LUMA_R: f64 = 0.21;

/// Grayscale weight for the green channel.
pub const LUMA_G: f64 = 0.72;

/// Grayscale weight for the blue channel.
pub const LUMA_B: f64 = 0.11;

/// Grayscale weights as `[R, G, B]`.
///
/// These approximate perceived brightness and intentionally sum to 1.04,
/// not 1.0, so a bright pixel can overshoot the channel range.
pub const LUMA_WEIGHTS: [f64; 3] = [LUMA_R, LUMA_G, LUMA_B];

/// Mid-gray value contrast scaling pivots around.
pub const CONTRAST_PIVOT: f64 = 128.0;

/// Contrast level at which the factor derivation divides by zero.
pub const CONTRAST_SINGULARITY: f64 = 259.0;

/// Lowest contrast level accepted from the user.
pub const CONTRAST_LEVEL_MIN: i32 = -255;

/// Highest contrast level accepted from the user.
pub const CONTRAST_LEVEL_MAX: i32 = 255;

/// Lowest brightness delta accepted from the user.
pub const BRIGHTNESS_DELTA_MIN: i32 = -255;

/// Highest brightness delta accepted from the user.
pub const BRIGHTNESS_DELTA_MAX: i32 = 255;

/// Box blur neighbourhood as `(row, col)` offsets, centre included.
pub const BOX_BLUR_OFFSETS: [(isize, isize); 9] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 0), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// Number of samples averaged by the box blur.
pub const BOX_BLUR_AREA: u32 = BOX_BLUR_OFFSETS.len() as u32;

/// Width of the border the box blur leaves untouched.
pub const BOX_BLUR_BORDER: usize = 1;

/// File extensions (lowercase, without the dot) recognised as images.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "tiff", "bmp", "gif"];
