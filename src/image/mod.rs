pub mod gray;
pub mod io;
pub mod rgba;
pub mod traits;

pub use self::gray::GrayscaleBuffer;
pub use self::rgba::{PixelBuffer, CHANNELS};
pub use self::traits::{ImageView, ImageViewMut};
