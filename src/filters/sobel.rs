//! Sobel line sketch.
//!
//! - Convolves the 3×3 Sobel pair with the grayscale plane at interior
//!   pixels only (`1 <= x <= w-2`, `1 <= y <= h-2`).
//! - Maps `g = sqrt(gx² + gy²)` to `255 - clamp(g · intensity · 0.5, 0, 255)`
//!   so strong edges become dark strokes on white.
//! - The one-pixel border ring is forced to white rather than computed with
//!   clamped neighbors. Images narrower or shorter than 3 pixels have no
//!   interior and come out entirely white.
//! - Output alpha is the original alpha at each pixel.
use crate::error::{Result, SketchError};
use crate::image::{GrayscaleBuffer, ImageView, ImageViewMut, PixelBuffer, CHANNELS};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Scale applied to `g · intensity` before clamping.
pub const EDGE_GAIN: f32 = 0.5;

/// Sobel response `(gx, gy)` at interior pixel `(x, y)`.
///
/// Callers must keep `(x, y)` at least one pixel away from every border.
pub fn sobel_at(gray: &GrayscaleBuffer, x: usize, y: usize) -> (i32, i32) {
    let rows = [gray.row(y - 1), gray.row(y), gray.row(y + 1)];
    let mut sum_x = 0i32;
    let mut sum_y = 0i32;
    for (ky, row) in rows.iter().enumerate() {
        let kx_row = &SOBEL_KERNEL_X[ky];
        let ky_row = &SOBEL_KERNEL_Y[ky];
        for k in 0..3 {
            let v = row[x + k - 1] as i32;
            sum_x += v * kx_row[k];
            sum_y += v * ky_row[k];
        }
    }
    (sum_x, sum_y)
}

/// Stroke tone for a gradient magnitude: white for no edge, darker as the
/// scaled magnitude grows.
#[inline]
pub fn edge_tone(magnitude: f32, intensity: u8) -> u8 {
    let v = (magnitude * intensity as f32 * EDGE_GAIN).clamp(0.0, 255.0);
    (255.0 - v).round() as u8
}

/// Allocating form of [`sobel_sketch_into`].
pub fn sobel_sketch(
    original: &PixelBuffer,
    gray: &GrayscaleBuffer,
    intensity: u8,
) -> Result<PixelBuffer> {
    let mut out = PixelBuffer::default();
    sobel_sketch_into(original, gray, intensity, &mut out)?;
    Ok(out)
}

/// Render the line sketch of `gray` into `dst`, taking alpha from `original`.
///
/// `gray` must be the grayscale reduction of `original`; differing
/// dimensions are rejected with `SizeMismatch`.
pub fn sobel_sketch_into(
    original: &PixelBuffer,
    gray: &GrayscaleBuffer,
    intensity: u8,
    dst: &mut PixelBuffer,
) -> Result<()> {
    if original.dimensions() != gray.dimensions() {
        return Err(SketchError::SizeMismatch {
            expected: original.dimensions(),
            actual: gray.dimensions(),
        });
    }
    sketch_layer(original, gray, intensity, dst);
    Ok(())
}

/// Unchecked core of [`sobel_sketch_into`] for callers that reduced `gray`
/// from `original` themselves.
pub(crate) fn sketch_layer(
    original: &PixelBuffer,
    gray: &GrayscaleBuffer,
    intensity: u8,
    dst: &mut PixelBuffer,
) {
    debug_assert_eq!(original.dimensions(), gray.dimensions());
    dst.copy_from(original);
    for px in dst.pixels_mut() {
        px[..3].fill(255);
    }

    let (w, h) = gray.dimensions();
    if w < 3 || h < 3 {
        return;
    }

    for y in 1..h - 1 {
        let out_row = dst.row_mut(y);
        for x in 1..w - 1 {
            let (gx, gy) = sobel_at(gray, x, y);
            let magnitude = ((gx * gx + gy * gy) as f32).sqrt();
            let tone = edge_tone(magnitude, intensity);
            let i = x * CHANNELS;
            out_row[i..i + 3].fill(tone);
        }
    }
}
