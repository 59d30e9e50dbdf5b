//! Error type for the sketch core.
//!
//! Only precondition violations surface as errors. Numeric edge cases inside
//! the filters (dodge denominator, channel overflow) are clamped instead.

use crate::sketch::Intensity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SketchError {
    #[error("invalid dimensions {width}x{height}: expected {expected} bytes, got {actual}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    #[error("image dimensions {width}x{height} overflow the addressable buffer size")]
    DimensionOverflow { width: usize, height: usize },

    #[error("intensity {value} outside supported range [{min}, {max}]", min = Intensity::MIN, max = Intensity::MAX)]
    IntensityOutOfRange { value: i64 },

    #[error("buffer size mismatch: {expected:?} vs {actual:?}")]
    SizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl From<SketchError> for String {
    fn from(error: SketchError) -> Self {
        error.to_string()
    }
}

pub type Result<T> = std::result::Result<T, SketchError>;
