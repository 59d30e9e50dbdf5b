//! Parameter types configuring a sketch invocation.
use crate::error::{Result, SketchError};
use crate::filters::{BlurStrategy, LumaWeights};
use serde::{Deserialize, Serialize};

/// Strength knob in `[1, 20]`. Drives the blur radius of the dodge pipeline
/// and the gradient gain of the Sobel pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Strict constructor: values outside `[MIN, MAX]` are rejected.
    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SketchError::IntensityOutOfRange { value })
        }
    }

    /// Lenient constructor used at the pipeline boundary.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Dodge blur radius: `intensity / 10`, truncated. Intensities below 10
    /// give radius 0 (no blur); 10-19 give 1; 20 gives 2.
    #[inline]
    pub fn blur_radius(self) -> usize {
        self.0 as usize / 10
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<i64> for Intensity {
    type Error = SketchError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        value.0
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Blur-and-invert color dodge ("soft sketch").
    #[default]
    Dodge,
    /// Sobel gradient strokes ("line sketch").
    Sobel,
}

impl FilterMode {
    /// Grayscale preset each pipeline uses unless overridden.
    pub const fn default_weights(self) -> LumaWeights {
        match self {
            FilterMode::Dodge => LumaWeights::Legacy,
            FilterMode::Sobel => LumaWeights::Rec601,
        }
    }
}

/// Everything one invocation needs besides the input buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchParams {
    pub mode: FilterMode,
    pub intensity: Intensity,
    /// Overrides the mode's grayscale preset when set.
    pub luma_weights: Option<LumaWeights>,
    pub blur_strategy: BlurStrategy,
}

impl SketchParams {
    pub fn new(mode: FilterMode, intensity: Intensity) -> Self {
        Self {
            mode,
            intensity,
            ..Default::default()
        }
    }

    pub fn with_luma_weights(mut self, weights: LumaWeights) -> Self {
        self.luma_weights = Some(weights);
        self
    }

    pub fn with_blur_strategy(mut self, strategy: BlurStrategy) -> Self {
        self.blur_strategy = strategy;
        self
    }

    #[inline]
    pub fn weights(&self) -> LumaWeights {
        self.luma_weights
            .unwrap_or_else(|| self.mode.default_weights())
    }
}
