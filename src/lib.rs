#![doc = include_str!("../README.md")]

// Core pipeline surface.
pub mod error;
pub mod filters;
pub mod image;
pub mod sketch;

// Boundary helpers for interactive front ends and the demos.
pub mod config;
pub mod debounce;
pub mod diagnostics;
pub mod session;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::SketchError;
pub use crate::image::{GrayscaleBuffer, PixelBuffer};
pub use crate::session::{SessionOptions, SketchSession};
pub use crate::sketch::{render_raw, FilterMode, Intensity, SketchParams, SketchPipeline};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pencil_sketch::prelude::*;
///
/// let original = PixelBuffer::filled(64, 48, [120, 90, 60, 255]).unwrap();
/// let mut pipeline = SketchPipeline::new();
/// let params = SketchParams::new(FilterMode::Sobel, Intensity::clamped(10));
/// let sketch = pipeline.process(&original, &params);
/// assert_eq!(sketch.dimensions(), original.dimensions());
/// ```
pub mod prelude {
    pub use crate::image::{ImageView, PixelBuffer};
    pub use crate::{FilterMode, Intensity, SketchParams, SketchPipeline};
}
