//! Tone inversion: `v' = 255 - v` on R, G, B. Alpha is untouched.
use crate::image::PixelBuffer;

pub fn invert_in_place(buf: &mut PixelBuffer) {
    for px in buf.pixels_mut() {
        px[0] = 255 - px[0];
        px[1] = 255 - px[1];
        px[2] = 255 - px[2];
    }
}

pub fn invert(src: &PixelBuffer) -> PixelBuffer {
    let mut out = src.clone();
    invert_in_place(&mut out);
    out
}
