//! Owned RGBA8 buffer in row-major layout.
//!
//! The length invariant `data.len() == width * height * 4` is checked at
//! construction and preserved by every method, so filters can index rows
//! without re-validating.
use super::traits::{ImageView, ImageViewMut};
use crate::error::{Result, SketchError};

/// Interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-initialised (transparent black) buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap raw RGBA bytes, rejecting buffers whose length disagrees with
    /// the dimensions.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(SketchError::InvalidDimensions {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Buffer with every pixel set to `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self> {
        let mut buf = Self::new(width, height)?;
        for px in buf.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgba);
        }
        Ok(buf)
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * CHANNELS
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = self.idx(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        let i = self.idx(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(CHANNELS)
    }

    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Overwrite `self` with the contents of `src`, reusing the allocation.
    pub(crate) fn copy_from(&mut self, src: &PixelBuffer) {
        self.width = src.width;
        self.height = src.height;
        self.data.clear();
        self.data.extend_from_slice(&src.data);
    }
}

impl ImageView for PixelBuffer {
    const CHANNELS: usize = CHANNELS;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl ImageViewMut for PixelBuffer {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn byte_len(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(SketchError::DimensionOverflow { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            SketchError::InvalidDimensions {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = PixelBuffer::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, SketchError::DimensionOverflow { .. }));
    }

    #[test]
    fn rows_cover_whole_buffer() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        buf.set_pixel(2, 1, [1, 2, 3, 4]);
        assert_eq!(buf.row(0), &[0u8; 12]);
        assert_eq!(buf.row(1).len(), 12);
        assert_eq!(&buf.row(1)[8..], &[1, 2, 3, 4]);
        assert_eq!(buf.pixel(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn zero_sized_buffer_is_valid() {
        let buf = PixelBuffer::from_raw(0, 5, Vec::new()).unwrap();
        assert_eq!(buf.pixel_count(), 0);
        assert_eq!(buf.pixels().count(), 0);
    }
}
