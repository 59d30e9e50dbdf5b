//! Scratch buffers reused across pipeline invocations.
//!
//! Slider-driven re-rendering runs the pipeline many times on the same image,
//! so the intermediate planes are kept here and only resized when the input
//! dimensions change.
use crate::image::{GrayscaleBuffer, PixelBuffer};

#[derive(Debug, Default)]
pub(crate) struct SketchWorkspace {
    /// Luminance plane for the Sobel pipeline.
    pub(crate) gray: GrayscaleBuffer,
    /// Desaturated, inverted copy for the dodge pipeline.
    pub(crate) work: PixelBuffer,
    /// Horizontal blur pass output.
    pub(crate) blur_temp: Vec<u8>,
}

impl SketchWorkspace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Bytes currently reserved by the scratch buffers.
    pub(crate) fn reserved_bytes(&self) -> usize {
        use crate::image::ImageView;
        self.gray.as_slice().len() + self.work.as_slice().len() + self.blur_temp.capacity()
    }
}
