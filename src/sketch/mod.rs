//! Sketch pipelines composing the leaf filters.
//!
//! Overview
//! - `FilterMode::Dodge` ("soft sketch"): desaturate → invert → box blur →
//!   color-dodge the original over the blurred layer.
//! - `FilterMode::Sobel` ("line sketch"): grayscale → Sobel magnitude scaled
//!   by intensity → inverted strokes, white border ring, original alpha.
//!
//! Modules
//! - [`params`] – intensity, mode and the serializable parameter bundle.
//! - `pipeline` – the [`SketchPipeline`] runner and the raw-buffer entry point.
//! - `workspace` – scratch buffers reused across invocations.
//!
//! A pipeline keeps only scratch memory between calls. Output depends on the
//! input buffer and the parameters alone, so repeated calls are bit-identical.

pub mod params;
mod pipeline;
mod workspace;

pub use params::{FilterMode, Intensity, SketchParams};
pub use pipeline::{render_raw, SketchOutcome, SketchPipeline};
