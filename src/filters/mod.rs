//! Leaf filters composed by the sketch pipelines.
//!
//! Every filter is a pure function over packed 8-bit buffers:
//!
//! - [`grayscale`]: RGB → luminance with a selectable weight preset.
//! - [`blur`]: separable box blur with edge replication.
//! - [`invert`]: `255 - v` on the color channels.
//! - [`dodge`]: color-dodge composite of an original over a blurred layer.
//! - [`sobel`]: 3×3 Sobel gradient magnitude turned into ink-on-white strokes.
//!
//! The `_into` variants write into caller-owned buffers so the pipeline can
//! reuse its workspace between invocations; the plain variants allocate.

pub mod blur;
pub mod dodge;
pub mod grayscale;
pub mod invert;
pub mod sobel;

pub use blur::{box_blur, box_blur_into, BlurStrategy};
pub use dodge::{dodge_blend, dodge_blend_in_place, dodge_channel};
pub use grayscale::{desaturate, to_grayscale, to_grayscale_into, LumaWeights};
pub use invert::{invert, invert_in_place};
pub use sobel::{edge_tone, sobel_at, sobel_sketch, sobel_sketch_into};
