use pencil_sketch::PixelBuffer;

/// Generates a simple high-contrast checkerboard as gray RGBA pixels.
pub fn checkerboard_rgba(width: usize, height: usize, cell: usize, alpha: u8) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32u8 } else { 220u8 };
            data.extend_from_slice(&[val, val, val, alpha]);
        }
    }
    PixelBuffer::from_raw(width, height, data).expect("checkerboard dimensions")
}

/// Deterministic pseudo-random colors with varying alpha.
pub fn noise_rgba(width: usize, height: usize, seed: u32) -> PixelBuffer {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut data = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height * 4 {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.push((state >> 24) as u8);
    }
    PixelBuffer::from_raw(width, height, data).expect("noise dimensions")
}
