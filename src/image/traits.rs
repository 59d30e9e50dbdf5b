//! Row access shared by the RGBA and grayscale buffers.
//!
//! Both buffers are tightly packed (no stride padding), so a row is always
//! `width * CHANNELS` consecutive samples and the whole image is one slice.

pub trait ImageView {
    /// Interleaved samples per pixel.
    const CHANNELS: usize;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    fn as_slice(&self) -> &[u8];

    #[inline]
    fn row_len(&self) -> usize {
        self.width() * Self::CHANNELS
    }

    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let len = self.row_len();
        &self.as_slice()[y * len..(y + 1) * len]
    }

    #[inline]
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }
}

pub trait ImageViewMut: ImageView {
    fn as_mut_slice(&mut self) -> &mut [u8];

    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let len = self.row_len();
        &mut self.as_mut_slice()[y * len..(y + 1) * len]
    }
}
