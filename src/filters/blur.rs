//! Separable box blur over all four RGBA channels.
//!
//! Horizontal pass first into a temporary buffer, then a vertical pass into
//! the output. Samples outside the image clamp to the nearest edge pixel
//! (replicate), and each output is the integer mean of `2r + 1` samples
//! rounded half up: `(sum + n / 2) / n`. Radius 0 is the identity.
//!
//! Two strategies produce bit-identical output:
//! - `Direct` sums the whole window per pixel, O(W·H·r) per pass.
//! - `RunningSum` slides the window, O(W·H) per pass regardless of radius.
use crate::image::{ImageView, ImageViewMut, PixelBuffer, CHANNELS};
use serde::{Deserialize, Serialize};

/// Radius from which `Auto` switches to the sliding-window sum.
pub const RUNNING_SUM_MIN_RADIUS: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurStrategy {
    #[default]
    Auto,
    Direct,
    RunningSum,
}

impl BlurStrategy {
    fn resolve(self, radius: usize) -> BlurStrategy {
        match self {
            BlurStrategy::Auto if radius >= RUNNING_SUM_MIN_RADIUS => BlurStrategy::RunningSum,
            BlurStrategy::Auto => BlurStrategy::Direct,
            other => other,
        }
    }
}

/// Blur `src` with the given radius, allocating the result.
pub fn box_blur(src: &PixelBuffer, radius: usize) -> PixelBuffer {
    let mut temp = Vec::new();
    let mut dst = PixelBuffer::default();
    box_blur_into(src, radius, BlurStrategy::Auto, &mut temp, &mut dst);
    dst
}

/// Blur `src` into `dst`, using `temp` for the horizontal pass. Both
/// scratch buffers are resized as needed and keep their capacity.
pub fn box_blur_into(
    src: &PixelBuffer,
    radius: usize,
    strategy: BlurStrategy,
    temp: &mut Vec<u8>,
    dst: &mut PixelBuffer,
) {
    dst.copy_from(src);
    let (w, h) = src.dimensions();
    if radius == 0 || w == 0 || h == 0 {
        return;
    }
    let strategy = strategy.resolve(radius);
    let row_len = src.row_len();

    temp.clear();
    temp.resize(src.as_slice().len(), 0);

    // Horizontal: each row, each channel is a line of `w` samples at step 4.
    for (src_row, tmp_row) in src
        .as_slice()
        .chunks_exact(row_len)
        .zip(temp.chunks_exact_mut(row_len))
    {
        for c in 0..CHANNELS {
            blur_line(&src_row[c..], &mut tmp_row[c..], w, CHANNELS, radius, strategy);
        }
    }

    // Vertical: each column, each channel is a line of `h` samples at step row_len.
    let out = dst.as_mut_slice();
    for x in 0..w {
        for c in 0..CHANNELS {
            let offset = x * CHANNELS + c;
            blur_line(&temp[offset..], &mut out[offset..], h, row_len, radius, strategy);
        }
    }
}

/// Average one strided line of `len` samples into `dst` (same stride).
fn blur_line(
    src: &[u8],
    dst: &mut [u8],
    len: usize,
    step: usize,
    radius: usize,
    strategy: BlurStrategy,
) {
    let last = len - 1;
    let n = (2 * radius + 1) as u64;
    let sample = |i: isize| -> u64 { src[clamp_index(i, last) * step] as u64 };
    let r = radius as isize;

    match strategy {
        BlurStrategy::RunningSum => {
            let mut sum: u64 = (-r..=r).map(sample).sum();
            for i in 0..len {
                dst[i * step] = mean(sum, n);
                let next = i as isize + 1;
                sum = sum + sample(next + r) - sample(next - r - 1);
            }
        }
        _ => {
            for i in 0..len {
                let center = i as isize;
                let sum: u64 = (center - r..=center + r).map(sample).sum();
                dst[i * step] = mean(sum, n);
            }
        }
    }
}

#[inline]
fn mean(sum: u64, n: u64) -> u8 {
    ((sum + n / 2) / n) as u8
}

#[inline]
fn clamp_index(idx: isize, last: usize) -> usize {
    if idx < 0 {
        0
    } else {
        (idx as usize).min(last)
    }
}
