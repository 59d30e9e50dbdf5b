//! Grayscale reduction with fixed perceptual weights.
//!
//! Two presets exist and both are kept on purpose: the dodge pipeline uses
//! the legacy `0.30/0.59/0.11` split, the Sobel pipeline the ITU-R BT.601
//! `0.299/0.587/0.114` split. They give visibly different tonal balance, so
//! each pipeline documents its default and callers may override it.
use crate::image::{GrayscaleBuffer, ImageView, ImageViewMut, PixelBuffer};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LumaWeights {
    /// `0.30 R + 0.59 G + 0.11 B`
    Legacy,
    /// `0.299 R + 0.587 G + 0.114 B` (ITU-R BT.601)
    Rec601,
}

impl LumaWeights {
    #[inline]
    pub const fn coefficients(self) -> [f32; 3] {
        match self {
            LumaWeights::Legacy => [0.30, 0.59, 0.11],
            LumaWeights::Rec601 => [0.299, 0.587, 0.114],
        }
    }

    /// Weighted sum rounded to nearest and clamped to `[0, 255]`.
    #[inline]
    pub fn luma(self, r: u8, g: u8, b: u8) -> u8 {
        let [wr, wg, wb] = self.coefficients();
        let v = wr * r as f32 + wg * g as f32 + wb * b as f32;
        v.round().clamp(0.0, 255.0) as u8
    }
}

/// Reduce an RGBA buffer to a single luminance plane. Alpha is ignored.
pub fn to_grayscale(src: &PixelBuffer, weights: LumaWeights) -> GrayscaleBuffer {
    let mut out = GrayscaleBuffer::new(src.width(), src.height());
    to_grayscale_into(src, weights, &mut out);
    out
}

/// As [`to_grayscale`], reusing `dst`'s allocation.
pub fn to_grayscale_into(src: &PixelBuffer, weights: LumaWeights, dst: &mut GrayscaleBuffer) {
    dst.reshape(src.width(), src.height());
    for (px, out) in src.pixels().zip(dst.as_mut_slice().iter_mut()) {
        *out = weights.luma(px[0], px[1], px[2]);
    }
}

/// Broadcast the luminance back into R, G and B in place; alpha unchanged.
pub fn desaturate(buf: &mut PixelBuffer, weights: LumaWeights) {
    for px in buf.pixels_mut() {
        let gray = weights.luma(px[0], px[1], px[2]);
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_on_saturated_colors() {
        // Pure green: 0.59*255 = 150.45, 0.587*255 = 149.685
        assert_eq!(LumaWeights::Legacy.luma(0, 255, 0), 150);
        assert_eq!(LumaWeights::Rec601.luma(0, 255, 0), 150);
        // Pure blue: 0.11*255 = 28.05, 0.114*255 = 29.07
        assert_eq!(LumaWeights::Legacy.luma(0, 0, 255), 28);
        assert_eq!(LumaWeights::Rec601.luma(0, 0, 255), 29);
    }

    #[test]
    fn white_stays_white() {
        for w in [LumaWeights::Legacy, LumaWeights::Rec601] {
            assert_eq!(w.luma(255, 255, 255), 255);
            assert_eq!(w.luma(0, 0, 0), 0);
        }
    }

    #[test]
    fn desaturate_keeps_alpha() {
        let mut buf = PixelBuffer::from_raw(2, 1, vec![200, 10, 40, 7, 0, 0, 0, 255]).unwrap();
        desaturate(&mut buf, LumaWeights::Legacy);
        let expected = LumaWeights::Legacy.luma(200, 10, 40);
        assert_eq!(buf.pixel(0, 0), [expected, expected, expected, 7]);
        assert_eq!(buf.pixel(1, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn grayscale_plane_matches_dimensions() {
        let buf = PixelBuffer::filled(5, 3, [10, 20, 30, 0]).unwrap();
        let gray = to_grayscale(&buf, LumaWeights::Rec601);
        assert_eq!(gray.dimensions(), (5, 3));
        assert!(gray.as_slice().iter().all(|&v| v == LumaWeights::Rec601.luma(10, 20, 30)));
    }
}
