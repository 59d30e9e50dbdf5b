//! Color-dodge composite producing a gray sketch.
//!
//! The red channels drive the blend, with `base = original.r / 255` and
//! `blend = layer.r / 255`, and the result is written to R, G and B alike:
//!
//! ```text
//! blend <  1  ->  min(base / (1 - blend), 1) * 255
//! blend == 1  ->  255
//! ```
//!
//! `blend == 1` is tested on the integer channel (`layer == 255`), so the
//! zero denominator is never evaluated. The clamp to 1 keeps near-zero
//! denominators from overflowing the channel range.
use crate::error::{Result, SketchError};
use crate::image::{ImageView, PixelBuffer};

#[inline]
pub fn dodge_channel(base: u8, layer: u8) -> u8 {
    if layer == u8::MAX {
        return u8::MAX;
    }
    let base = base as f32 / 255.0;
    let denom = 1.0 - layer as f32 / 255.0;
    ((base / denom).min(1.0) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Dodge `original` over `layer` and return a new gray buffer. Alpha comes
/// from `layer`.
pub fn dodge_blend(original: &PixelBuffer, layer: &PixelBuffer) -> Result<PixelBuffer> {
    let mut out = layer.clone();
    dodge_blend_in_place(original, &mut out)?;
    Ok(out)
}

/// Dodge `original` over `layer`, overwriting R, G and B of `layer` with the
/// red-channel result and keeping its alpha.
pub fn dodge_blend_in_place(original: &PixelBuffer, layer: &mut PixelBuffer) -> Result<()> {
    if original.dimensions() != layer.dimensions() {
        return Err(SketchError::SizeMismatch {
            expected: original.dimensions(),
            actual: layer.dimensions(),
        });
    }
    blend_layer(original, layer);
    Ok(())
}

/// Unchecked core of [`dodge_blend_in_place`] for callers that derived
/// `layer` from `original`.
pub(crate) fn blend_layer(original: &PixelBuffer, layer: &mut PixelBuffer) {
    debug_assert_eq!(original.dimensions(), layer.dimensions());
    for (base, px) in original.pixels().zip(layer.pixels_mut()) {
        let tone = dodge_channel(base[0], px[0]);
        px[..3].fill(tone);
    }
}
