//! Serializable run reports.
//!
//! [`SketchReport`] is returned by `SketchPipeline::process_with_diagnostics`
//! and written as JSON by the demo binary.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, SketchReport};
pub use timing::{StageTiming, TimingBreakdown};
