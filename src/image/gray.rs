//! Owned single-channel 8-bit buffer produced by the grayscale reducer.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GrayscaleBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayscaleBuffer {
    /// Zero-initialised plane. Only built from the dimensions of a
    /// `PixelBuffer`, whose constructors already rejected overflowing sizes.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub(crate) fn reshape(&mut self, width: usize, height: usize) {
        self.data.resize(width * height, 0);
        self.width = width;
        self.height = height;
    }
}

impl ImageView for GrayscaleBuffer {
    const CHANNELS: usize = 1;

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

impl ImageViewMut for GrayscaleBuffer {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
