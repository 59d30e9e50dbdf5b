use super::timing::TimingBreakdown;
use crate::filters::LumaWeights;
use crate::sketch::FilterMode;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// What a sketch invocation did and how long each stage took.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchReport {
    pub input: InputDescriptor,
    pub mode: FilterMode,
    /// Intensity after boundary clamping.
    pub intensity: u8,
    pub luma_weights: LumaWeights,
    /// Only the dodge pipeline blurs.
    pub blur_radius: Option<usize>,
    pub timings: TimingBreakdown,
}
